//! Runtime codepage registry.
//!
//! This module looks up codepages by number or by name at runtime, which
//! is what tools like `cpconv` need when the codepage comes from user
//! input.
//!
//! # Example
//!
//! ```
//! use bytepage::{registry, EncoderFallback};
//!
//! let page = registry::find_encoding("Windows-1254").unwrap();
//! assert_eq!(page.code_page(), 1254);
//! assert_eq!(registry::by_code_page(28596).unwrap().web_name(), "iso-8859-6");
//!
//! // ISO-8859-9 and Windows-1254 agree on the Turkish letters.
//! let out = registry::transcode(&[0xD0, 0xDD], "iso-8859-9", "cp1254", &EncoderFallback::Exception);
//! assert_eq!(out.unwrap(), [0xD0, 0xDD]);
//! ```

use alloc::string::ToString;
use alloc::vec::Vec;

use log::debug;

use crate::codepage::CodePage;
use crate::error::EncodingError;
use crate::fallback::EncoderFallback;

/// A registered codepage.
///
/// Each codepage registers one of these via `inventory::submit!`.
pub struct EncodingEntry {
    page: &'static CodePage,
}

impl EncodingEntry {
    /// Wraps a codepage for registration.
    pub const fn new(page: &'static CodePage) -> Self {
        Self { page }
    }

    /// The registered codepage.
    pub fn page(&self) -> &'static CodePage {
        self.page
    }
}

inventory::collect!(EncodingEntry);

/// Returns an iterator over all registered codepages, in no particular
/// order.
pub fn encodings() -> impl Iterator<Item = &'static CodePage> {
    inventory::iter::<EncodingEntry>().map(EncodingEntry::page)
}

/// Finds a codepage by its numeric identifier.
pub fn by_code_page(code_page: u16) -> Result<&'static CodePage, EncodingError> {
    encodings()
        .find(|p| p.code_page() == code_page)
        .ok_or_else(|| {
            debug!("no codepage registered under {}", code_page);
            EncodingError::UnknownEncoding(code_page.to_string())
        })
}

/// Finds a codepage by name (ASCII case-insensitive).
///
/// Accepts the web name, the encoding name, any alias, or the bare
/// codepage number (`"1256"`).
pub fn find_encoding(name: &str) -> Result<&'static CodePage, EncodingError> {
    let name = name.trim();
    if let Ok(id) = name.parse::<u16>() {
        return by_code_page(id);
    }

    encodings().find(|p| p.matches(name)).ok_or_else(|| {
        debug!("no codepage answers to {:?}", name);
        EncodingError::UnknownEncoding(name.to_string())
    })
}

/// Transcodes bytes from one codepage to another.
///
/// # Arguments
///
/// * `input` - The input bytes in the source codepage
/// * `from` - The name of the source codepage
/// * `to` - The name of the target codepage
/// * `fallback` - What to emit for characters the target lacks
pub fn transcode(
    input: &[u8],
    from: &str,
    to: &str,
    fallback: &EncoderFallback,
) -> Result<Vec<u8>, EncodingError> {
    let from_page = find_encoding(from)?;
    let to_page = find_encoding(to)?;

    let units = from_page.decode(input);
    to_page.encode(&units, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepages::ALL;

    #[test]
    fn test_all_pages_registered() {
        let mut ids: Vec<u16> = encodings().map(CodePage::code_page).collect();
        ids.sort_unstable();
        let expected: Vec<u16> = ALL.iter().map(|p| p.code_page()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_find_by_names() {
        assert_eq!(find_encoding("windows-1256").unwrap().code_page(), 1256);
        assert_eq!(find_encoding("CP1255").unwrap().code_page(), 1255);
        assert_eq!(find_encoding("latin5").unwrap().code_page(), 28599);
        assert_eq!(find_encoding("ISO-8859-8-I").unwrap().code_page(), 38598);
        assert_eq!(find_encoding("Arabic (ISO)").unwrap().code_page(), 28596);
        assert_eq!(find_encoding(" 28598 ").unwrap().code_page(), 28598);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            find_encoding("ebcdic-klingon"),
            Err(EncodingError::UnknownEncoding("ebcdic-klingon".to_string()))
        );
        assert!(by_code_page(437).is_err());
        assert!(find_encoding("65001").is_err());
    }

    #[test]
    fn test_transcode_reports_target_gaps() {
        // Hebrew alef has no place in Windows-1254.
        let err = transcode(
            &[0xE0],
            "iso-8859-8",
            "windows-1254",
            &EncoderFallback::Exception,
        )
        .unwrap_err();
        assert_eq!(err.code_point(), Some(0x05D0));

        let out = transcode(
            &[0xE0],
            "iso-8859-8",
            "windows-1254",
            &EncoderFallback::question_mark(),
        )
        .unwrap();
        assert_eq!(out, b"?");
    }

    #[test]
    fn test_transcode_between_arabic_pages() {
        // Windows-1256 lam-alef-meem to ISO-8859-6.
        let out = transcode(
            &[0xE1, 0xC7, 0xE3],
            "windows-1256",
            "iso-8859-6",
            &EncoderFallback::Exception,
        )
        .unwrap();
        assert_eq!(out, [0xE4, 0xC7, 0xE5]);
    }
}
