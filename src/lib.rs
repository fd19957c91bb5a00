//! Single-byte codepage transcoding.
//!
//! This crate converts between legacy single-byte codepages (Windows-1254,
//! Windows-1256, ISO-8859-6, ...) and UTF-16. Decoding is a lookup in a
//! fixed 256-entry table. Encoding walks an ordered set of declarative
//! rules and hands anything unmappable to an [`EncoderFallback`].
//!
//! # Example
//!
//! ```
//! use bytepage::{CP1254, EncoderFallback};
//!
//! let text: Vec<u16> = "AĞİ".encode_utf16().collect();
//!
//! // Size the buffer first, then convert.
//! let fallback = EncoderFallback::Exception;
//! let mut bytes = vec![0u8; CP1254.byte_count(&text, &fallback).unwrap()];
//! CP1254.encode_into(&text, &mut bytes, &fallback).unwrap();
//! assert_eq!(bytes, [0x41, 0xD0, 0xDD]);
//!
//! let mut decoded = vec![0u16; CP1254.char_count(&bytes)];
//! CP1254.decode_into(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, text);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

/// The codepage descriptor and conversion routines.
pub mod codepage;
/// The bundled codepages and their marker types.
pub mod codepages;
/// Stateful encoder for chunked input.
pub mod encoder;
/// Encoding trait for codepage marker types.
pub mod encoding;
/// Error types for conversions and lookups.
pub mod error;
/// Policies for unmappable characters.
pub mod fallback;
/// Encode rule tables.
pub mod rules;

mod sink;

/// Runtime registry for looking up codepages by name or number.
#[cfg(feature = "registry")]
pub mod registry;


// Re-export main types
pub use codepage::{CodePage, Flags};
pub use codepages::{CP1254, CP1255, CP1256, CP28596, CP28598, CP28599, CP38598};
pub use encoder::Encoder;
pub use encoding::Encoding;
pub use error::EncodingError;
pub use fallback::EncoderFallback;
pub use rules::{EncodeRange, EncodeRules};

/// Result type for codepage operations.
pub type Result<T> = core::result::Result<T, EncodingError>;
