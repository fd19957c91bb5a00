//! ISO-8859-6, Arabic.
//!
//! Letters and harakat are laid out at a constant offset from the Arabic
//! block. Unassigned slots decode to `?`. Presentation forms collapse onto
//! the nominal letter as in Windows-1256.

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
    0x00A0, 0x003F, 0x003F, 0x003F, 0x00A4, 0x003F, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x060C, 0x00AD, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x061B, 0x003F, 0x003F, 0x003F, 0x061F,
    0x003F, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627,
    0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
    0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x0637,
    0x0638, 0x0639, 0x063A, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x0640, 0x0641, 0x0642, 0x0643, 0x0644, 0x0645, 0x0646, 0x0647,
    0x0648, 0x0649, 0x064A, 0x064B, 0x064C, 0x064D, 0x064E, 0x064F,
    0x0650, 0x0651, 0x0652, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
];

/// Sorted by scalar. Mostly presentation forms.
#[rustfmt::skip]
static SINGLES: [(u16, u8); 133] = [
    (0x060C, 0xAC), (0x061B, 0xBB), (0x061F, 0xBF), (0xFE70, 0xEB),
    (0xFE72, 0xEC), (0xFE74, 0xED), (0xFE76, 0xEE), (0xFE77, 0xEE),
    (0xFE78, 0xEF), (0xFE79, 0xEF), (0xFE7A, 0xF0), (0xFE7B, 0xF0),
    (0xFE7C, 0xF1), (0xFE7D, 0xF1), (0xFE7E, 0xF2), (0xFE7F, 0xF2),
    (0xFE80, 0xC1), (0xFE81, 0xC2), (0xFE82, 0xC2), (0xFE83, 0xC3),
    (0xFE84, 0xC3), (0xFE85, 0xC4), (0xFE86, 0xC4), (0xFE87, 0xC5),
    (0xFE88, 0xC5), (0xFE89, 0xC6), (0xFE8A, 0xC6), (0xFE8B, 0xC6),
    (0xFE8C, 0xC6), (0xFE8D, 0xC7), (0xFE8E, 0xC7), (0xFE8F, 0xC8),
    (0xFE90, 0xC8), (0xFE91, 0xC8), (0xFE92, 0xC8), (0xFE93, 0xC9),
    (0xFE94, 0xC9), (0xFE95, 0xCA), (0xFE96, 0xCA), (0xFE97, 0xCA),
    (0xFE98, 0xCA), (0xFE99, 0xCB), (0xFE9A, 0xCB), (0xFE9B, 0xCB),
    (0xFE9C, 0xCB), (0xFE9D, 0xCC), (0xFE9E, 0xCC), (0xFE9F, 0xCC),
    (0xFEA0, 0xCC), (0xFEA1, 0xCD), (0xFEA2, 0xCD), (0xFEA3, 0xCD),
    (0xFEA4, 0xCD), (0xFEA5, 0xCE), (0xFEA6, 0xCE), (0xFEA7, 0xCE),
    (0xFEA8, 0xCE), (0xFEA9, 0xCF), (0xFEAA, 0xCF), (0xFEAB, 0xD0),
    (0xFEAC, 0xD0), (0xFEAD, 0xD1), (0xFEAE, 0xD1), (0xFEAF, 0xD2),
    (0xFEB0, 0xD2), (0xFEB1, 0xD3), (0xFEB2, 0xD3), (0xFEB3, 0xD3),
    (0xFEB4, 0xD3), (0xFEB5, 0xD4), (0xFEB6, 0xD4), (0xFEB7, 0xD4),
    (0xFEB8, 0xD4), (0xFEB9, 0xD5), (0xFEBA, 0xD5), (0xFEBB, 0xD5),
    (0xFEBC, 0xD5), (0xFEBD, 0xD6), (0xFEBE, 0xD6), (0xFEBF, 0xD6),
    (0xFEC0, 0xD6), (0xFEC1, 0xD7), (0xFEC2, 0xD7), (0xFEC3, 0xD7),
    (0xFEC4, 0xD7), (0xFEC5, 0xD8), (0xFEC6, 0xD8), (0xFEC7, 0xD8),
    (0xFEC8, 0xD8), (0xFEC9, 0xD9), (0xFECA, 0xD9), (0xFECB, 0xD9),
    (0xFECC, 0xD9), (0xFECD, 0xDA), (0xFECE, 0xDA), (0xFECF, 0xDA),
    (0xFED0, 0xDA), (0xFED1, 0xE1), (0xFED2, 0xE1), (0xFED3, 0xE1),
    (0xFED4, 0xE1), (0xFED5, 0xE2), (0xFED6, 0xE2), (0xFED7, 0xE2),
    (0xFED8, 0xE2), (0xFED9, 0xE3), (0xFEDA, 0xE3), (0xFEDB, 0xE3),
    (0xFEDC, 0xE3), (0xFEDD, 0xE4), (0xFEDE, 0xE4), (0xFEDF, 0xE4),
    (0xFEE0, 0xE4), (0xFEE1, 0xE5), (0xFEE2, 0xE5), (0xFEE3, 0xE5),
    (0xFEE4, 0xE5), (0xFEE5, 0xE6), (0xFEE6, 0xE6), (0xFEE7, 0xE6),
    (0xFEE8, 0xE6), (0xFEE9, 0xE7), (0xFEEA, 0xE7), (0xFEEB, 0xE7),
    (0xFEEC, 0xE7), (0xFEED, 0xE8), (0xFEEE, 0xE8), (0xFEEF, 0xE9),
    (0xFEF0, 0xE9), (0xFEF1, 0xEA), (0xFEF2, 0xEA), (0xFEF3, 0xEA),
    (0xFEF4, 0xEA),
];

static RANGES: [EncodeRange; 3] = [
    EncodeRange::new(0x0621, 0x063A, 0x0560),
    EncodeRange::new(0x0640, 0x0652, 0x0560),
    EncodeRange::new(0x0660, 0x0669, 0x0630),
];

/// ISO-8859-6 (Arabic).
pub static CP28596: CodePage = CodePage {
    code_page: 28596,
    encoding_name: "Arabic (ISO)",
    web_name: "iso-8859-6",
    header_name: "iso-8859-6",
    body_name: "iso-8859-6",
    windows_code_page: 1256,
    aliases: &[
        "arabic",
        "csISOLatinArabic",
        "ECMA-114",
        "ISO_8859-6",
        "ISO_8859-6:1987",
        "iso-ir-127",
        "iso8859-6",
    ],
    flags: Flags {
        browser_display: true,
        browser_save: true,
        mail_news_display: true,
        mail_news_save: true,
    },
    decode: &DECODE,
    rules: EncodeRules::new(&SINGLES, &RANGES),
};
