//! Table-wide tests for every bundled codepage.
//!
//! Each codepage gets the same battery through the `Encoding` marker and
//! its `CodePage` descriptor.

use bytepage::{EncoderFallback, Encoding, EncodingError};
use paste::paste;

// =============================================================================
// Test macro
// =============================================================================

/// Tests that apply to every single-byte codepage.
macro_rules! test_single_byte_codepage {
    ($name:ident, $encoding:ty) => {
        paste! {
            mod [<$name _codepage>] {
                use super::*;

                fn units(s: &str) -> Vec<u16> {
                    s.encode_utf16().collect()
                }

                #[test]
                fn name_is_not_empty() {
                    assert!(!<$encoding>::NAME.is_empty());
                    assert!(!<$encoding>::page().encoding_name().is_empty());
                }

                #[test]
                fn ascii_roundtrip() {
                    for c in 0u16..0x80 {
                        let bytes = <$encoding>::encode(&[c], &EncoderFallback::Exception).unwrap();
                        assert_eq!(bytes, [c as u8]);
                        assert_eq!(<$encoding>::decode_byte(bytes[0]), c);
                    }
                }

                #[test]
                fn decode_is_total() {
                    let bytes: Vec<u8> = (0u8..=255).collect();
                    let mut out = [0u16; 256];
                    assert_eq!(<$encoding>::decode_into(&bytes, &mut out).unwrap(), 256);
                    for (b, &u) in bytes.iter().zip(out.iter()) {
                        assert!(
                            char::from_u32(u32::from(u)).is_some(),
                            "byte {:02X} decodes to a surrogate",
                            b
                        );
                    }
                }

                #[test]
                fn decode_char_agrees_with_decode_byte() {
                    for b in 0u8..=255 {
                        assert_eq!(
                            u32::from(<$encoding>::decode_char(b)),
                            u32::from(<$encoding>::decode_byte(b)),
                            "byte {:02X}",
                            b
                        );
                    }
                }

                #[test]
                fn high_bytes_reencode_to_themselves() {
                    let page = <$encoding>::page();
                    for b in 0x80u8..=0xFF {
                        let u = page.decode_byte(b);
                        if u < 0x80 {
                            // Unassigned slot decoding to '?'.
                            continue;
                        }
                        assert_eq!(
                            page.map_unit(u),
                            Some(b),
                            "byte {:02X} (U+{:04X}) does not round-trip",
                            b,
                            u
                        );
                    }
                }

                #[test]
                fn fullwidth_folds_to_ascii() {
                    for ch in 0xFF01u16..=0xFF5E {
                        let bytes = <$encoding>::encode(&[ch], &EncoderFallback::Exception).unwrap();
                        assert_eq!(bytes, [(ch - 0xFEE0) as u8]);
                    }
                }

                #[test]
                fn byte_count_agrees_with_encode() {
                    let text = units("Hello, ＷＯＲＬＤ € 中 😀 \u{FFFF}");
                    for fallback in [
                        EncoderFallback::question_mark(),
                        EncoderFallback::discard(),
                        EncoderFallback::Replacement(b"[?]".to_vec()),
                    ] {
                        let count = <$encoding>::byte_count(&text, &fallback).unwrap();
                        let bytes = <$encoding>::encode(&text, &fallback).unwrap();
                        assert_eq!(count, bytes.len());

                        let mut out = vec![0u8; count];
                        assert_eq!(<$encoding>::encode_into(&text, &mut out, &fallback).unwrap(), count);
                        assert_eq!(out, bytes);
                    }
                }

                #[test]
                fn cjk_is_unmappable() {
                    assert!(!<$encoding>::can_encode('中'));
                    assert_eq!(<$encoding>::try_encode_char('中'), None);

                    let err = <$encoding>::encode(&units("ab中"), &EncoderFallback::Exception)
                        .unwrap_err();
                    assert_eq!(
                        err,
                        EncodingError::UnmappableCharacter {
                            code_point: 0x4E2D,
                            index: 2,
                            encoding: <$encoding>::NAME,
                        }
                    );
                }

                #[test]
                fn undersized_output_is_rejected() {
                    let text = units("abcd");
                    let mut out = [0u8; 3];
                    let err = <$encoding>::encode_into(&text, &mut out, &EncoderFallback::Exception)
                        .unwrap_err();
                    assert!(matches!(err, EncodingError::InvalidArgument { .. }));

                    let mut chars = [0u16; 3];
                    assert!(<$encoding>::decode_into(b"abcd", &mut chars).is_err());
                }
            }
        }
    };
}

// =============================================================================
// Apply to every codepage
// =============================================================================

mod windows {
    use super::*;
    use bytepage::codepages::*;

    test_single_byte_codepage!(cp1254, Cp1254);
    test_single_byte_codepage!(cp1255, Cp1255);
    test_single_byte_codepage!(cp1256, Cp1256);
}

mod iso8859 {
    use super::*;
    use bytepage::codepages::*;

    test_single_byte_codepage!(iso8859_6, Cp28596);
    test_single_byte_codepage!(iso8859_8, Cp28598);
    test_single_byte_codepage!(iso8859_8_i, Cp38598);
    test_single_byte_codepage!(iso8859_9, Cp28599);
}
