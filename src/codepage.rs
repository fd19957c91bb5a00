//! The codepage descriptor and its conversion routines.
//!
//! A [`CodePage`] is immutable `static` data: identity and naming, a
//! 256-entry decode table and an [`EncodeRules`] set. Decoding is a table
//! lookup. Encoding, byte counting and vector building share a single loop
//! that differs only in where the bytes go.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::EncodingError;
use crate::fallback::EncoderFallback;
use crate::rules::EncodeRules;
use crate::sink::{ByteSink, CountOnly, SliceSink};

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

#[inline]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    let hi = u32::from(high - HIGH_SURROGATE_START);
    let lo = u32::from(low - LOW_SURROGATE_START);
    0x10000 + ((hi << 10) | lo)
}

/// Where a codepage is advertised for use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags {
    /// Usable by browser clients for displaying content.
    pub browser_display: bool,
    /// Usable by browser clients for saving content.
    pub browser_save: bool,
    /// Usable by mail and news clients for displaying content.
    pub mail_news_display: bool,
    /// Usable by mail and news clients for saving content.
    pub mail_news_save: bool,
}

/// A single-byte codepage.
pub struct CodePage {
    pub(crate) code_page: u16,
    pub(crate) encoding_name: &'static str,
    pub(crate) web_name: &'static str,
    pub(crate) header_name: &'static str,
    pub(crate) body_name: &'static str,
    pub(crate) windows_code_page: u16,
    pub(crate) aliases: &'static [&'static str],
    pub(crate) flags: Flags,
    pub(crate) decode: &'static [u16; 256],
    pub(crate) rules: EncodeRules,
}

impl CodePage {
    /// Numeric codepage identifier (e.g. 1254).
    #[inline]
    pub const fn code_page(&self) -> u16 {
        self.code_page
    }

    /// Human-readable name, e.g. "Turkish (Windows)".
    #[inline]
    pub const fn encoding_name(&self) -> &'static str {
        self.encoding_name
    }

    /// IANA-style name, e.g. "windows-1254".
    #[inline]
    pub const fn web_name(&self) -> &'static str {
        self.web_name
    }

    /// Name for mail agent header tags.
    #[inline]
    pub const fn header_name(&self) -> &'static str {
        self.header_name
    }

    /// Name for mail agent body tags.
    #[inline]
    pub const fn body_name(&self) -> &'static str {
        self.body_name
    }

    /// The Windows codepage closest to this one.
    #[inline]
    pub const fn windows_code_page(&self) -> u16 {
        self.windows_code_page
    }

    /// Alternative names.
    #[inline]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Display and save flags.
    #[inline]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// The byte to UTF-16 table.
    #[inline]
    pub const fn decode_table(&self) -> &'static [u16; 256] {
        self.decode
    }

    /// The explicit encode rules.
    #[inline]
    pub const fn rules(&self) -> &EncodeRules {
        &self.rules
    }

    /// Every name this codepage answers to: web name, encoding name and
    /// aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [self.web_name, self.encoding_name]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    /// Returns `true` if `name` is one of [`names`](Self::names), ignoring
    /// ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        self.names().any(|n| n.eq_ignore_ascii_case(name))
    }

    // ---------------------------------------------------------------------
    // Decoding
    // ---------------------------------------------------------------------

    /// Decodes one byte.
    #[inline]
    pub fn decode_byte(&self, byte: u8) -> u16 {
        self.decode[usize::from(byte)]
    }

    /// Number of UTF-16 units `bytes` decodes to. Always `bytes.len()`.
    #[inline]
    pub fn char_count(&self, bytes: &[u8]) -> usize {
        bytes.len()
    }

    /// Upper bound on the UTF-16 units produced by `byte_count` bytes.
    #[inline]
    pub fn max_char_count(&self, byte_count: usize) -> usize {
        byte_count
    }

    /// Decodes `bytes` into `out`, returning the number of units written.
    ///
    /// Fails with [`EncodingError::InvalidArgument`] if `out` is shorter
    /// than `bytes`; nothing is written in that case.
    pub fn decode_into(&self, bytes: &[u8], out: &mut [u16]) -> Result<usize, EncodingError> {
        if out.len() < bytes.len() {
            return Err(EncodingError::invalid_argument(
                "chars",
                alloc::format!(
                    "output holds {} units but {} are required",
                    out.len(),
                    bytes.len()
                ),
            ));
        }

        for (dst, &b) in out.iter_mut().zip(bytes) {
            *dst = self.decode_byte(b);
        }
        Ok(bytes.len())
    }

    /// Decodes `bytes` into a new vector of UTF-16 units.
    pub fn decode(&self, bytes: &[u8]) -> Vec<u16> {
        bytes.iter().map(|&b| self.decode_byte(b)).collect()
    }

    /// Decodes `bytes` into a Rust string.
    pub fn decode_to_string(&self, bytes: &[u8]) -> String {
        char::decode_utf16(bytes.iter().map(|&b| self.decode_byte(b)))
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Encoding
    // ---------------------------------------------------------------------

    /// Maps a single UTF-16 unit to its byte, or `None` if the unit is
    /// unmappable.
    pub fn map_unit(&self, ch: u16) -> Option<u8> {
        if ch < 0x80 {
            return Some(ch as u8);
        }

        // Unchanged high bytes: the slot decodes back to the scalar itself.
        if let Ok(b) = u8::try_from(ch) {
            if self.decode_byte(b) == ch {
                return Some(b);
            }
        }

        self.rules.lookup(ch)
    }

    /// Returns `true` if `c` has a byte in this codepage.
    pub fn can_encode(&self, c: char) -> bool {
        self.try_encode_char(c).is_some()
    }

    /// Encodes a single character without any fallback.
    pub fn try_encode_char(&self, c: char) -> Option<u8> {
        u16::try_from(u32::from(c))
            .ok()
            .and_then(|unit| self.map_unit(unit))
    }

    /// Exact number of bytes [`encode_into`](Self::encode_into) writes for
    /// `chars` under `fallback`.
    pub fn byte_count(
        &self,
        chars: &[u16],
        fallback: &EncoderFallback,
    ) -> Result<usize, EncodingError> {
        self.encode_with(chars, 0, fallback, &mut CountOnly)
    }

    /// Upper bound on the bytes produced by `char_count` units, without
    /// looking at them.
    pub fn max_byte_count(
        &self,
        char_count: usize,
        fallback: &EncoderFallback,
    ) -> Result<usize, EncodingError> {
        let per_unit = fallback.max_len().max(1);
        char_count.checked_mul(per_unit).ok_or_else(|| {
            EncodingError::invalid_argument("char_count", "byte count overflows usize")
        })
    }

    /// Encodes `chars` into `out`, returning the number of bytes written.
    ///
    /// The required size is computed first; if `out` is too small this
    /// fails with [`EncodingError::InvalidArgument`] and writes nothing.
    pub fn encode_into(
        &self,
        chars: &[u16],
        out: &mut [u8],
        fallback: &EncoderFallback,
    ) -> Result<usize, EncodingError> {
        let needed = self.byte_count(chars, fallback)?;
        if out.len() < needed {
            return Err(EncodingError::invalid_argument(
                "bytes",
                alloc::format!(
                    "output holds {} bytes but {} are required",
                    out.len(),
                    needed
                ),
            ));
        }

        self.encode_with(chars, 0, fallback, &mut SliceSink::new(out))
    }

    /// Encodes `chars` into a new vector.
    pub fn encode(
        &self,
        chars: &[u16],
        fallback: &EncoderFallback,
    ) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::with_capacity(chars.len());
        self.encode_with(chars, 0, fallback, &mut out)?;
        Ok(out)
    }

    /// Encodes a Rust string. Error indices refer to its UTF-16 form.
    pub fn encode_str(
        &self,
        s: &str,
        fallback: &EncoderFallback,
    ) -> Result<Vec<u8>, EncodingError> {
        let units: Vec<u16> = s.encode_utf16().collect();
        self.encode(&units, fallback)
    }

    /// The conversion loop behind every encode entry point.
    ///
    /// `base` is added to indices reported in errors.
    pub(crate) fn encode_with<S: ByteSink>(
        &self,
        chars: &[u16],
        base: usize,
        fallback: &EncoderFallback,
        sink: &mut S,
    ) -> Result<usize, EncodingError> {
        let mut written = 0;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if let Some(b) = self.map_unit(ch) {
                sink.push(b);
                written += 1;
                i += 1;
                continue;
            }

            let (code_point, width) = match chars.get(i + 1) {
                Some(&low) if is_high_surrogate(ch) && is_low_surrogate(low) => {
                    (combine_surrogates(ch, low), 2)
                }
                _ => (u32::from(ch), 1),
            };

            written += fallback.substitute(self, code_point, base + i, sink)?;
            i += width;
        }

        Ok(written)
    }
}

impl fmt::Debug for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePage")
            .field("code_page", &self.code_page)
            .field("web_name", &self.web_name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.web_name)
    }
}

impl PartialEq for CodePage {
    fn eq(&self, other: &Self) -> bool {
        self.code_page == other.code_page
    }
}

impl Eq for CodePage {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepages::{CP1254, CP1255, CP1256, CP28596};

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_turkish_letters() {
        let chars = utf16("AĞİ");
        let bytes = CP1254.encode(&chars, &EncoderFallback::Exception).unwrap();
        assert_eq!(bytes, [0x41, 0xD0, 0xDD]);
        assert_eq!(CP1254.decode(&bytes), chars);
    }

    #[test]
    fn test_unchanged_high_bytes() {
        // é sits at its own Latin-1 position in Windows-1254.
        assert_eq!(CP1254.map_unit(0x00E9), Some(0xE9));
        // Windows-1256 keeps é but gives 0xE1 to lam.
        assert_eq!(CP1256.map_unit(0x00E9), Some(0xE9));
        assert_eq!(CP1256.map_unit(0x00E1), None);
    }

    #[test]
    fn test_hebrew_range() {
        assert_eq!(CP1255.map_unit(0x05D0), Some(0xE0));
        assert_eq!(CP1255.map_unit(0x05EA), Some(0xFA));
        assert_eq!(CP1255.map_unit(0x05F0), Some(0xD4));
    }

    #[test]
    fn test_presentation_forms_collapse() {
        // Isolated, final, initial and medial beh all become 0xC8.
        for ch in 0xFE8Fu16..=0xFE92 {
            assert_eq!(CP1256.map_unit(ch), Some(0xC8));
            assert_eq!(CP28596.map_unit(ch), Some(0xC8));
        }
        assert_eq!(CP1256.decode_byte(0xC8), 0x0628);
    }

    #[test]
    fn test_surrogate_pair_falls_back_once() {
        let chars = utf16("a😀b");
        assert_eq!(chars.len(), 4);

        let fallback = EncoderFallback::question_mark();
        assert_eq!(CP1254.encode(&chars, &fallback).unwrap(), b"a?b");
        assert_eq!(CP1254.byte_count(&chars, &fallback).unwrap(), 3);

        let err = CP1254
            .encode(&chars, &EncoderFallback::Exception)
            .unwrap_err();
        assert_eq!(err, EncodingError::unmappable(0x1F600, 1, "windows-1254"));
    }

    #[test]
    fn test_lone_surrogates_fall_back_individually() {
        let chars = [0xDC00, 0xD800, 0x0041];
        let fallback = EncoderFallback::question_mark();
        assert_eq!(CP1254.encode(&chars, &fallback).unwrap(), b"??A");
    }

    #[test]
    fn test_encode_into_rejects_small_buffer() {
        let chars = utf16("abc");
        let mut out = [0xAAu8; 2];
        let err = CP1254
            .encode_into(&chars, &mut out, &EncoderFallback::Exception)
            .unwrap_err();
        assert!(matches!(
            err,
            EncodingError::InvalidArgument {
                argument: "bytes",
                ..
            }
        ));
        assert_eq!(out, [0xAA, 0xAA]);
    }

    #[test]
    fn test_encode_into_counts_replacement_width() {
        let chars = utf16("a\u{3042}");
        let fallback = EncoderFallback::Replacement(alloc::vec![b'<', b'>']);
        let mut out = [0u8; 3];
        let n = CP1256.encode_into(&chars, &mut out, &fallback).unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, *b"a<>");
    }

    #[test]
    fn test_decode_into_rejects_small_buffer() {
        let mut out = [0u16; 1];
        let err = CP1254.decode_into(&[0x41, 0x42], &mut out).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::InvalidArgument {
                argument: "chars",
                ..
            }
        ));
        assert_eq!(out, [0]);
    }

    #[test]
    fn test_encode_str_indices_are_utf16() {
        let err = CP1254
            .encode_str("a😀中", &EncoderFallback::Exception)
            .unwrap_err();
        assert_eq!(err, EncodingError::unmappable(0x1F600, 1, "windows-1254"));

        let err = CP1254
            .encode_str("ab中", &EncoderFallback::Exception)
            .unwrap_err();
        assert_eq!(err, EncodingError::unmappable(0x4E2D, 2, "windows-1254"));

        let fallback = EncoderFallback::question_mark();
        assert_eq!(CP1254.encode_str("İ😀", &fallback).unwrap(), [0xDD, b'?']);
    }

    #[test]
    fn test_char_counts_are_one_per_byte() {
        for n in [0, 1, 255, 4096] {
            assert_eq!(CP1256.max_char_count(n), n);
        }
        assert_eq!(CP1256.char_count(&[0xC7, 0xE1, 0x20]), 3);
    }

    #[test]
    fn test_decode_to_string() {
        assert_eq!(CP1254.decode_to_string(&[0x41, 0xD0, 0xDD]), "AĞİ");
        assert_eq!(CP1256.decode_to_string(&[0xC7, 0xE1]), "ال");
    }

    #[test]
    fn test_max_byte_count() {
        assert_eq!(
            CP1254
                .max_byte_count(10, &EncoderFallback::Exception)
                .unwrap(),
            10
        );
        let wide = EncoderFallback::Replacement(alloc::vec![0; 3]);
        assert_eq!(CP1254.max_byte_count(10, &wide).unwrap(), 30);
        assert!(CP1254.max_byte_count(usize::MAX, &wide).is_err());
    }

    #[test]
    fn test_matches_names() {
        assert!(CP1254.matches("windows-1254"));
        assert!(CP1254.matches("WINDOWS-1254"));
        assert!(CP1254.matches("cp1254"));
        assert!(CP1254.matches("Turkish (Windows)"));
        assert!(!CP1254.matches("iso-8859-9"));
    }

    #[test]
    fn test_can_encode() {
        assert!(CP1256.can_encode('€'));
        assert!(CP1256.can_encode('ک'));
        assert!(!CP1256.can_encode('中'));
        assert!(!CP1256.can_encode('😀'));
    }
}
