//! Type-level codepage markers.
//!
//! Each codepage has a zero-sized marker type implementing [`Encoding`], so
//! code can be generic over the codepage it speaks:
//!
//! ```
//! use bytepage::{Encoding, EncoderFallback};
//! use bytepage::codepages::{Cp1254, Cp1256};
//!
//! fn shout<E: Encoding>(text: &str) -> Vec<u8> {
//!     let units: Vec<u16> = text.to_uppercase().encode_utf16().collect();
//!     E::encode(&units, &EncoderFallback::question_mark()).unwrap()
//! }
//!
//! assert_eq!(Cp1254::NAME, "windows-1254");
//! assert_eq!(shout::<Cp1254>("ğ"), [0xD0]);
//! assert_eq!(shout::<Cp1256>("ğ"), [b'?']);
//! ```

use alloc::vec::Vec;

use crate::codepage::CodePage;
use crate::error::EncodingError;
use crate::fallback::EncoderFallback;

/// A single-byte codepage known at compile time.
///
/// Implementors are zero-sized markers. All operations are static and
/// forward to the codepage's [`CodePage`] descriptor.
pub trait Encoding: Sized + 'static {
    /// The web name of this codepage (e.g. "windows-1254").
    const NAME: &'static str;

    /// The numeric codepage identifier.
    const CODE_PAGE: u16;

    /// The codepage's tables and metadata.
    fn page() -> &'static CodePage;

    /// Decodes one byte to its UTF-16 unit.
    #[inline]
    fn decode_byte(byte: u8) -> u16 {
        Self::page().decode_byte(byte)
    }

    /// Decodes one byte to a `char`.
    #[inline]
    fn decode_char(byte: u8) -> char {
        char::from_u32(u32::from(Self::decode_byte(byte))).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Decodes `bytes` into `out`. See [`CodePage::decode_into`].
    fn decode_into(bytes: &[u8], out: &mut [u16]) -> Result<usize, EncodingError> {
        Self::page().decode_into(bytes, out)
    }

    /// Encodes `chars` into `out`. See [`CodePage::encode_into`].
    fn encode_into(
        chars: &[u16],
        out: &mut [u8],
        fallback: &EncoderFallback,
    ) -> Result<usize, EncodingError> {
        Self::page().encode_into(chars, out, fallback)
    }

    /// Encodes `chars` into a new vector. See [`CodePage::encode`].
    fn encode(chars: &[u16], fallback: &EncoderFallback) -> Result<Vec<u8>, EncodingError> {
        Self::page().encode(chars, fallback)
    }

    /// Exact output size for `chars`. See [`CodePage::byte_count`].
    fn byte_count(chars: &[u16], fallback: &EncoderFallback) -> Result<usize, EncodingError> {
        Self::page().byte_count(chars, fallback)
    }

    /// Encodes a single character, or returns `None` if it has no byte.
    fn try_encode_char(c: char) -> Option<u8> {
        Self::page().try_encode_char(c)
    }

    /// Returns `true` if this codepage can represent `c`.
    fn can_encode(c: char) -> bool {
        Self::page().can_encode(c)
    }
}
