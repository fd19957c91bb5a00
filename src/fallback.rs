//! What to do with characters a codepage cannot represent.

use alloc::vec::Vec;

use log::trace;

use crate::codepage::CodePage;
use crate::error::EncodingError;
use crate::sink::ByteSink;

/// Policy applied when a character has no byte in the target codepage.
///
/// The fallback fires once per unmappable unit. A well-formed surrogate
/// pair counts as one unit.
///
/// # Example
///
/// ```
/// use bytepage::{EncoderFallback, CP1256};
///
/// let hiragana_a = [0x3042u16];
/// assert!(CP1256.encode(&hiragana_a, &EncoderFallback::Exception).is_err());
///
/// let fallback = EncoderFallback::replacement_byte(0x3F);
/// assert_eq!(CP1256.encode(&hiragana_a, &fallback).unwrap(), [0x3F]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EncoderFallback {
    /// Fail with [`EncodingError::UnmappableCharacter`].
    #[default]
    Exception,
    /// Emit these bytes in place of the character. An empty replacement
    /// drops the character.
    Replacement(Vec<u8>),
}

impl EncoderFallback {
    /// Substitutes a single byte.
    pub fn replacement_byte(byte: u8) -> Self {
        Self::Replacement(alloc::vec![byte])
    }

    /// Substitutes `?`.
    pub fn question_mark() -> Self {
        Self::replacement_byte(b'?')
    }

    /// Drops unmappable characters.
    pub fn discard() -> Self {
        Self::Replacement(Vec::new())
    }

    /// Substitutes `replacement`, encoded with `page`.
    ///
    /// The replacement must itself be fully representable in `page`;
    /// otherwise this returns [`EncodingError::InvalidArgument`].
    pub fn replacement_str(page: &CodePage, replacement: &str) -> Result<Self, EncodingError> {
        let units: Vec<u16> = replacement.encode_utf16().collect();
        match page.encode(&units, &Self::Exception) {
            Ok(bytes) => Ok(Self::Replacement(bytes)),
            Err(EncodingError::UnmappableCharacter { code_point, .. }) => {
                Err(EncodingError::invalid_argument(
                    "replacement",
                    alloc::format!(
                        "U+{:04X} cannot be encoded in {}",
                        code_point,
                        page.web_name()
                    ),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Maximum number of bytes one fallback invocation produces.
    pub fn max_len(&self) -> usize {
        match self {
            Self::Exception => 0,
            Self::Replacement(bytes) => bytes.len(),
        }
    }

    /// Applies the policy for the unmappable `code_point` found at UTF-16
    /// index `index`, returning the number of bytes emitted.
    pub(crate) fn substitute<S: ByteSink>(
        &self,
        page: &CodePage,
        code_point: u32,
        index: usize,
        sink: &mut S,
    ) -> Result<usize, EncodingError> {
        match self {
            Self::Exception => Err(EncodingError::unmappable(code_point, index, page.web_name())),
            Self::Replacement(bytes) => {
                trace!(
                    "{}: substituting {} byte(s) for U+{:04X} at {}",
                    page.web_name(),
                    bytes.len(),
                    code_point,
                    index
                );
                sink.extend_from_slice(bytes);
                Ok(bytes.len())
            }
        }
    }
}
