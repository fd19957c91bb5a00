//! ISO-8859-8 and ISO-8859-8-I, Hebrew.
//!
//! Both labels share one table. They differ only in how the text is meant
//! to be laid out (visual versus logical order), which is outside the
//! concern of a transcoder.

use crate::codepage::{CodePage, Flags};
use crate::rules::{EncodeRange, EncodeRules};

#[rustfmt::skip]
static DECODE: [u16; 256] = [
    0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007,
    0x0008, 0x0009, 0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F,
    0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017,
    0x0018, 0x0019, 0x001A, 0x001B, 0x001C, 0x001D, 0x001E, 0x001F,
    0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027,
    0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F,
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037,
    0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F,
    0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F,
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057,
    0x0058, 0x0059, 0x005A, 0x005B, 0x005C, 0x005D, 0x005E, 0x005F,
    0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
    0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
    0x0078, 0x0079, 0x007A, 0x007B, 0x007C, 0x007D, 0x007E, 0x007F,
    0x0080, 0x0081, 0x0082, 0x0083, 0x0084, 0x0085, 0x0086, 0x0087,
    0x0088, 0x0089, 0x008A, 0x008B, 0x008C, 0x008D, 0x008E, 0x008F,
    0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0x0096, 0x0097,
    0x0098, 0x0099, 0x009A, 0x009B, 0x009C, 0x009D, 0x009E, 0x009F,
    0x00A0, 0x003F, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
    0x00A8, 0x00A9, 0x00D7, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
    0x00B8, 0x00B9, 0x00F7, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x2017,
    0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7,
    0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
    0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7,
    0x05E8, 0x05E9, 0x05EA, 0x003F, 0x003F, 0x200E, 0x200F, 0x003F,
];

#[rustfmt::skip]
static SINGLES: [(u16, u8); 5] = [
    (0x00D7, 0xAA), (0x00F7, 0xBA), (0x200E, 0xFD), (0x200F, 0xFE),
    (0x2017, 0xDF),
];

static RANGES: [EncodeRange; 1] = [EncodeRange::new(0x05D0, 0x05EA, 0x04F0)];

/// ISO-8859-8 (Hebrew, visual order).
pub static CP28598: CodePage = CodePage {
    code_page: 28598,
    encoding_name: "Hebrew (ISO-Visual)",
    web_name: "iso-8859-8",
    header_name: "iso-8859-8",
    body_name: "iso-8859-8",
    windows_code_page: 1255,
    aliases: &[
        "csISOLatinHebrew",
        "hebrew",
        "ISO_8859-8",
        "ISO_8859-8:1988",
        "ISO-8859-8 Visual",
        "iso-ir-138",
        "iso8859-8",
        "visual",
    ],
    flags: Flags {
        browser_display: true,
        browser_save: false,
        mail_news_display: true,
        mail_news_save: true,
    },
    decode: &DECODE,
    rules: EncodeRules::new(&SINGLES, &RANGES),
};

/// ISO-8859-8-I (Hebrew, logical order).
///
/// Byte-for-byte identical to [`CP28598`]; only the directionality label
/// differs.
pub static CP38598: CodePage = CodePage {
    code_page: 38598,
    encoding_name: "Hebrew (ISO-Logical)",
    web_name: "iso-8859-8-i",
    header_name: "iso-8859-8-i",
    body_name: "iso-8859-8-i",
    windows_code_page: 1255,
    aliases: &["csISO88598I", "ISO_8859-8-I", "ISO-8859-8 Logical", "logical"],
    flags: Flags {
        browser_display: true,
        browser_save: true,
        mail_news_display: true,
        mail_news_save: true,
    },
    decode: &DECODE,
    rules: EncodeRules::new(&SINGLES, &RANGES),
};
