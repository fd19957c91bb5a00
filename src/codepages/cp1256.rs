//! Windows-1256, Arabic.
//!
//! Every byte is assigned. On the encode side the Arabic presentation forms
//! (U+FB50..U+FDFF and U+FE70..U+FEFF) collapse onto the byte of their
//! nominal letter, so several scalars share one byte and do not survive a
//! round trip. Arabic-Indic digits fold to ASCII digits.

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
    0x20AC, 0x067E, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
    0x02C6, 0x2030, 0x0679, 0x2039, 0x0152, 0x0686, 0x0698, 0x0688,
    0x06AF, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
    0x06A9, 0x2122, 0x0691, 0x203A, 0x0153, 0x200C, 0x200D, 0x06BA,
    0x00A0, 0x060C, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
    0x00A8, 0x00A9, 0x06BE, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
    0x00B8, 0x00B9, 0x061B, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x061F,
    0x06C1, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627,
    0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
    0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x00D7,
    0x0637, 0x0638, 0x0639, 0x063A, 0x0640, 0x0641, 0x0642, 0x0643,
    0x00E0, 0x0644, 0x00E2, 0x0645, 0x0646, 0x0647, 0x0648, 0x00E7,
    0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x0649, 0x064A, 0x00EE, 0x00EF,
    0x064B, 0x064C, 0x064D, 0x064E, 0x00F4, 0x064F, 0x0650, 0x00F7,
    0x0651, 0x00F9, 0x0652, 0x00FB, 0x00FC, 0x200E, 0x200F, 0x06D2,
];

/// Sorted by scalar. Includes the presentation-form collapses.
#[rustfmt::skip]
static SINGLES: [(u16, u8); 253] = [
    (0x0152, 0x8C), (0x0153, 0x9C), (0x0192, 0x83), (0x02C6, 0x88),
    (0x060C, 0xA1), (0x061B, 0xBA), (0x061F, 0xBF), (0x0621, 0xC1),
    (0x0622, 0xC2), (0x0623, 0xC3), (0x0624, 0xC4), (0x0625, 0xC5),
    (0x0626, 0xC6), (0x0627, 0xC7), (0x0628, 0xC8), (0x0629, 0xC9),
    (0x062A, 0xCA), (0x062B, 0xCB), (0x062C, 0xCC), (0x062D, 0xCD),
    (0x062E, 0xCE), (0x062F, 0xCF), (0x0630, 0xD0), (0x0631, 0xD1),
    (0x0632, 0xD2), (0x0633, 0xD3), (0x0634, 0xD4), (0x0635, 0xD5),
    (0x0636, 0xD6), (0x0637, 0xD8), (0x0638, 0xD9), (0x0639, 0xDA),
    (0x063A, 0xDB), (0x0640, 0xDC), (0x0641, 0xDD), (0x0642, 0xDE),
    (0x0643, 0xDF), (0x0644, 0xE1), (0x0645, 0xE3), (0x0646, 0xE4),
    (0x0647, 0xE5), (0x0648, 0xE6), (0x0649, 0xEC), (0x064A, 0xED),
    (0x064B, 0xF0), (0x064C, 0xF1), (0x064D, 0xF2), (0x064E, 0xF3),
    (0x064F, 0xF5), (0x0650, 0xF6), (0x0651, 0xF8), (0x0652, 0xFA),
    (0x0679, 0x8A), (0x067E, 0x81), (0x0686, 0x8D), (0x0688, 0x8F),
    (0x0691, 0x9A), (0x0698, 0x8E), (0x06A9, 0x98), (0x06AF, 0x90),
    (0x06BA, 0x9F), (0x06BE, 0xAA), (0x06C1, 0xC0), (0x06D2, 0xFF),
    (0x200C, 0x9D), (0x200D, 0x9E), (0x200E, 0xFD), (0x200F, 0xFE),
    (0x2013, 0x96), (0x2014, 0x97), (0x2018, 0x91), (0x2019, 0x92),
    (0x201A, 0x82), (0x201C, 0x93), (0x201D, 0x94), (0x201E, 0x84),
    (0x2020, 0x86), (0x2021, 0x87), (0x2022, 0x95), (0x2026, 0x85),
    (0x2030, 0x89), (0x2039, 0x8B), (0x203A, 0x9B), (0x20AC, 0x80),
    (0x2122, 0x99), (0xFB56, 0x81), (0xFB57, 0x81), (0xFB58, 0x81),
    (0xFB59, 0x81), (0xFB66, 0x8A), (0xFB67, 0x8A), (0xFB68, 0x8A),
    (0xFB69, 0x8A), (0xFB7A, 0x8D), (0xFB7B, 0x8D), (0xFB7C, 0x8D),
    (0xFB7D, 0x8D), (0xFB88, 0x8F), (0xFB89, 0x8F), (0xFB8A, 0x8E),
    (0xFB8B, 0x8E), (0xFB8C, 0x9A), (0xFB8D, 0x9A), (0xFB8E, 0x98),
    (0xFB8F, 0x98), (0xFB90, 0x98), (0xFB91, 0x98), (0xFB92, 0x90),
    (0xFB93, 0x90), (0xFB94, 0x90), (0xFB95, 0x90), (0xFB9E, 0x9F),
    (0xFB9F, 0x9F), (0xFBA6, 0xC0), (0xFBA7, 0xC0), (0xFBA8, 0xC0),
    (0xFBA9, 0xC0), (0xFBAA, 0xAA), (0xFBAB, 0xAA), (0xFBAC, 0xAA),
    (0xFBAD, 0xAA), (0xFBAE, 0xFF), (0xFBAF, 0xFF), (0xFE70, 0xF0),
    (0xFE72, 0xF1), (0xFE74, 0xF2), (0xFE76, 0xF3), (0xFE77, 0xF3),
    (0xFE78, 0xF5), (0xFE79, 0xF5), (0xFE7A, 0xF6), (0xFE7B, 0xF6),
    (0xFE7C, 0xF8), (0xFE7D, 0xF8), (0xFE7E, 0xFA), (0xFE7F, 0xFA),
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
    (0xFEC0, 0xD6), (0xFEC1, 0xD8), (0xFEC2, 0xD8), (0xFEC3, 0xD8),
    (0xFEC4, 0xD8), (0xFEC5, 0xD9), (0xFEC6, 0xD9), (0xFEC7, 0xD9),
    (0xFEC8, 0xD9), (0xFEC9, 0xDA), (0xFECA, 0xDA), (0xFECB, 0xDA),
    (0xFECC, 0xDA), (0xFECD, 0xDB), (0xFECE, 0xDB), (0xFECF, 0xDB),
    (0xFED0, 0xDB), (0xFED1, 0xDD), (0xFED2, 0xDD), (0xFED3, 0xDD),
    (0xFED4, 0xDD), (0xFED5, 0xDE), (0xFED6, 0xDE), (0xFED7, 0xDE),
    (0xFED8, 0xDE), (0xFED9, 0xDF), (0xFEDA, 0xDF), (0xFEDB, 0xDF),
    (0xFEDC, 0xDF), (0xFEDD, 0xE1), (0xFEDE, 0xE1), (0xFEDF, 0xE1),
    (0xFEE0, 0xE1), (0xFEE1, 0xE3), (0xFEE2, 0xE3), (0xFEE3, 0xE3),
    (0xFEE4, 0xE3), (0xFEE5, 0xE4), (0xFEE6, 0xE4), (0xFEE7, 0xE4),
    (0xFEE8, 0xE4), (0xFEE9, 0xE5), (0xFEEA, 0xE5), (0xFEEB, 0xE5),
    (0xFEEC, 0xE5), (0xFEED, 0xE6), (0xFEEE, 0xE6), (0xFEEF, 0xEC),
    (0xFEF0, 0xEC), (0xFEF1, 0xED), (0xFEF2, 0xED), (0xFEF3, 0xED),
    (0xFEF4, 0xED),
];

// Arabic-Indic digits.
static RANGES: [EncodeRange; 1] = [EncodeRange::new(0x0660, 0x0669, 0x0630)];

/// Windows-1256 (Arabic).
pub static CP1256: CodePage = CodePage {
    code_page: 1256,
    encoding_name: "Arabic (Windows)",
    web_name: "windows-1256",
    header_name: "windows-1256",
    body_name: "windows-1256",
    windows_code_page: 1256,
    aliases: &["cp1256", "x-cp1256"],
    flags: Flags {
        browser_display: true,
        browser_save: true,
        mail_news_display: true,
        mail_news_save: true,
    },
    decode: &DECODE,
    rules: EncodeRules::new(&SINGLES, &RANGES),
};
