//! Windows-1255, Hebrew.
//!
//! Points, letters and the Yiddish ligatures sit at fixed offsets from
//! their Unicode block, so they are encoded through ranges rather than
//! single mappings.

use crate::codepage::{CodePage, Flags};
use crate::rules::{EncodeRange, EncodeRules};

// 0xD9..=0xDF, 0xFB, 0xFC and 0xFF are unassigned.
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
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
    0x02C6, 0x2030, 0x008A, 0x2039, 0x008C, 0x008D, 0x008E, 0x008F,
    0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
    0x02DC, 0x2122, 0x009A, 0x203A, 0x009C, 0x009D, 0x009E, 0x009F,
    0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x20AA, 0x00A5, 0x00A6, 0x00A7,
    0x00A8, 0x00A9, 0x00D7, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
    0x00B8, 0x00B9, 0x00F7, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
    0x05B0, 0x05B1, 0x05B2, 0x05B3, 0x05B4, 0x05B5, 0x05B6, 0x05B7,
    0x05B8, 0x05B9, 0x05BA, 0x05BB, 0x05BC, 0x05BD, 0x05BE, 0x05BF,
    0x05C0, 0x05C1, 0x05C2, 0x05C3, 0x05F0, 0x05F1, 0x05F2, 0x05F3,
    0x05F4, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F,
    0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7,
    0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
    0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7,
    0x05E8, 0x05E9, 0x05EA, 0x003F, 0x003F, 0x200E, 0x200F, 0x003F,
];

#[rustfmt::skip]
static SINGLES: [(u16, u8); 25] = [
    (0x00D7, 0xAA), (0x00F7, 0xBA), (0x0192, 0x83), (0x02C6, 0x88),
    (0x02DC, 0x98), (0x200E, 0xFD), (0x200F, 0xFE), (0x2013, 0x96),
    (0x2014, 0x97), (0x2018, 0x91), (0x2019, 0x92), (0x201A, 0x82),
    (0x201C, 0x93), (0x201D, 0x94), (0x201E, 0x84), (0x2020, 0x86),
    (0x2021, 0x87), (0x2022, 0x95), (0x2026, 0x85), (0x2030, 0x89),
    (0x2039, 0x8B), (0x203A, 0x9B), (0x20AA, 0xA4), (0x20AC, 0x80),
    (0x2122, 0x99),
];

// Points (U+05B0..U+05C3), letters and ligatures.
static RANGES: [EncodeRange; 3] = [
    EncodeRange::new(0x05B0, 0x05C3, 0x04F0),
    EncodeRange::new(0x05D0, 0x05EA, 0x04F0),
    EncodeRange::new(0x05F0, 0x05F4, 0x051C),
];

/// Windows-1255 (Hebrew).
pub static CP1255: CodePage = CodePage {
    code_page: 1255,
    encoding_name: "Hebrew (Windows)",
    web_name: "windows-1255",
    header_name: "windows-1255",
    body_name: "windows-1255",
    windows_code_page: 1255,
    aliases: &["cp1255", "x-cp1255"],
    flags: Flags {
        browser_display: true,
        browser_save: true,
        mail_news_display: true,
        mail_news_save: true,
    },
    decode: &DECODE,
    rules: EncodeRules::new(&SINGLES, &RANGES),
};
