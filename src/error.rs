use alloc::string::String;

use thiserror::Error;

/// Errors produced by codepage conversions and lookups.
///
/// Decoding never fails on data; every variant here comes from encoding,
/// from a caller passing an unusable argument, or from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A character has no byte in the target codepage and the fallback in
    /// effect does not substitute one.
    #[error("character U+{code_point:04X} at index {index} cannot be encoded in {encoding}")]
    UnmappableCharacter {
        /// The unmappable code point. A surrogate pair is reported as the
        /// supplementary code point it forms.
        code_point: u32,
        /// Index of the offending UTF-16 unit in the input.
        index: usize,
        /// Web name of the target codepage.
        encoding: &'static str,
    },

    /// An argument was rejected before any conversion work was done.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected argument.
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// No registered codepage answers to the given name or number.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}

impl EncodingError {
    /// Creates an unmappable-character error.
    #[inline]
    pub const fn unmappable(code_point: u32, index: usize, encoding: &'static str) -> Self {
        Self::UnmappableCharacter {
            code_point,
            index,
            encoding,
        }
    }

    /// Creates an invalid-argument error.
    #[inline]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Returns the unmappable code point, if this is an unmappable-character
    /// error.
    pub fn code_point(&self) -> Option<u32> {
        match self {
            Self::UnmappableCharacter { code_point, .. } => Some(*code_point),
            _ => None,
        }
    }

    /// Returns the UTF-16 index of the unmappable character, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::UnmappableCharacter { index, .. } => Some(*index),
            _ => None,
        }
    }
}
