//! End-to-end conversions through the public API.

use bytepage::codepages::{Cp1254, Cp1256, CP1255, CP1256, CP28596, CP28598, CP38598};
use bytepage::{Encoder, EncoderFallback, Encoding, EncodingError};

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn turkish_roundtrip() {
    let chars = [0x0041, 0x011E, 0x0130];
    let fallback = EncoderFallback::Exception;

    assert_eq!(Cp1254::byte_count(&chars, &fallback).unwrap(), 3);
    let mut out = [0u8; 3];
    assert_eq!(Cp1254::encode_into(&chars, &mut out, &fallback).unwrap(), 3);
    assert_eq!(out, [0x41, 0xD0, 0xDD]);

    let mut back = [0u16; 3];
    assert_eq!(Cp1254::decode_into(&out, &mut back).unwrap(), 3);
    assert_eq!(back, chars);
    assert_eq!(Cp1254::decode_char(0xD0), 'Ğ');
    assert_eq!(Cp1254::decode_char(0xDD), 'İ');
}

#[test]
fn arabic_unmappable_exception_and_replacement() {
    let chars = utf16("\u{3042}");

    let err = Cp1256::encode(&chars, &EncoderFallback::Exception).unwrap_err();
    assert_eq!(err.code_point(), Some(0x3042));
    assert_eq!(err.index(), Some(0));

    let fallback = EncoderFallback::replacement_byte(0x3F);
    assert_eq!(Cp1256::byte_count(&chars, &fallback).unwrap(), 1);
    assert_eq!(Cp1256::encode(&chars, &fallback).unwrap(), [0x3F]);
}

#[test]
fn error_message_names_the_character() {
    let err = Cp1256::encode(&utf16("ab\u{3042}"), &EncoderFallback::Exception).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("U+3042"), "{}", msg);
    assert!(msg.contains("windows-1256"), "{}", msg);
}

#[test]
fn presentation_forms_encode_to_base_letters() {
    // Every contextual form of seen lands on 0xD3.
    let forms = [0xFEB1u16, 0xFEB2, 0xFEB3, 0xFEB4];
    let bytes = CP1256.encode(&forms, &EncoderFallback::Exception).unwrap();
    assert_eq!(bytes, [0xD3; 4]);
    assert_eq!(
        CP28596.encode(&forms, &EncoderFallback::Exception).unwrap(),
        [0xD3; 4]
    );

    // Decoding gives the base letter, not the presentation form.
    assert_eq!(CP1256.decode(&bytes), [0x0633; 4]);
}

#[test]
fn arabic_indic_digits_fold_to_ascii() {
    let digits = utf16("\u{0660}\u{0665}\u{0669}");
    let fallback = EncoderFallback::Exception;
    assert_eq!(CP1256.encode(&digits, &fallback).unwrap(), b"059");
    assert_eq!(CP28596.encode(&digits, &fallback).unwrap(), b"059");
}

#[test]
fn fullwidth_latin_folds_in_every_page() {
    let text = utf16("ＡＢＣ！");
    for page in bytepage::codepages::ALL {
        assert_eq!(
            page.encode(&text, &EncoderFallback::Exception).unwrap(),
            b"ABC!",
            "{}",
            page
        );
    }
}

#[test]
fn hebrew_visual_and_logical_share_a_table() {
    assert_eq!(CP28598.decode_table(), CP38598.decode_table());
    assert_ne!(CP28598, CP38598);
    assert!(!CP28598.flags().browser_save);
    assert!(CP38598.flags().browser_save);

    let shalom = utf16("שלום");
    let fallback = EncoderFallback::Exception;
    let visual = CP28598.encode(&shalom, &fallback).unwrap();
    let logical = CP38598.encode(&shalom, &fallback).unwrap();
    assert_eq!(visual, logical);
    assert_eq!(visual, [0xF9, 0xEC, 0xE5, 0xED]);
}

#[test]
fn hebrew_points_only_in_windows_page() {
    let patah = [0x05B7u16];
    let fallback = EncoderFallback::Exception;
    assert_eq!(CP1255.encode(&patah, &fallback).unwrap(), [0xC7]);
    assert!(CP28598.encode(&patah, &fallback).is_err());
}

#[test]
fn undersized_buffer_writes_nothing() {
    let chars = utf16("Merhaba");
    let mut out = [0xAAu8; 4];
    let err = Cp1254::encode_into(&chars, &mut out, &EncoderFallback::Exception).unwrap_err();
    assert!(matches!(
        err,
        EncodingError::InvalidArgument {
            argument: "bytes",
            ..
        }
    ));
    assert_eq!(out, [0xAA; 4]);
}

#[test]
fn streaming_encoder_joins_split_surrogates() {
    let chars = utf16("x😀y");
    let mut encoder = Encoder::new(&CP1256, EncoderFallback::question_mark());
    let mut out = [0u8; 8];

    let n = encoder.encode(&chars[..2], &mut out, false).unwrap();
    assert_eq!(n, 1);
    assert!(encoder.has_pending());

    let m = encoder.encode(&chars[2..], &mut out[n..], true).unwrap();
    assert_eq!(&out[..n + m], b"x?y");
    assert!(!encoder.has_pending());
}

#[test]
fn streaming_encoder_flushes_lone_high_surrogate() {
    let mut encoder = Encoder::new(&CP1256, EncoderFallback::Exception);
    let mut out = [0u8; 4];

    assert_eq!(encoder.encode(&[0x41, 0xD83D], &mut out, false).unwrap(), 1);
    let err = encoder.encode(&[], &mut out, true).unwrap_err();
    assert_eq!(err.code_point(), Some(0xD83D));
    // A failed call leaves the held surrogate in place.
    assert!(encoder.has_pending());

    encoder.reset();
    assert_eq!(encoder.encode(&[], &mut out, true).unwrap(), 0);
}

#[cfg(feature = "registry")]
mod registry {
    use bytepage::registry::{by_code_page, encodings, find_encoding, transcode};
    use bytepage::{EncoderFallback, EncodingError};

    #[test]
    fn every_page_is_registered() {
        assert_eq!(encodings().count(), 7);
        for id in [1254, 1255, 1256, 28596, 28598, 28599, 38598] {
            assert_eq!(by_code_page(id).unwrap().code_page(), id);
        }
        assert!(by_code_page(1252).is_err());
    }

    #[test]
    fn lookup_by_alias_and_number() {
        assert_eq!(find_encoding("L5").unwrap().code_page(), 28599);
        assert_eq!(find_encoding("windows-1255").unwrap().code_page(), 1255);
        assert_eq!(find_encoding("1256").unwrap().code_page(), 1256);
        assert_eq!(
            find_encoding("koi8-r"),
            Err(EncodingError::UnknownEncoding("koi8-r".into()))
        );
    }

    #[test]
    fn transcode_hebrew_between_pages() {
        // Alef and tav are at the same positions in both pages.
        let strict = EncoderFallback::Exception;
        let out = transcode(&[0xE0, 0xFA], "windows-1255", "iso-8859-8", &strict);
        assert_eq!(out.unwrap(), [0xE0, 0xFA]);

        // The sheqel sign is in Windows-1255 only.
        let err = transcode(&[0xA4], "windows-1255", "iso-8859-8", &strict);
        assert_eq!(err.unwrap_err().code_point(), Some(0x20AA));
    }
}
