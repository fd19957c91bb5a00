//! Conversion between UTF-8 and registered codepages.

use anyhow::{Context, Result};
use bytepage::{registry, CodePage, EncoderFallback};
use log::debug;

/// One side of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// UTF-8 text.
    Utf8,
    /// A registered single-byte codepage.
    Page(&'static CodePage),
}

impl Endpoint {
    /// Resolves a user-supplied encoding name.
    pub fn resolve(name: &str) -> Result<Self> {
        if ["utf-8", "utf8", "65001"]
            .iter()
            .any(|n| n.eq_ignore_ascii_case(name.trim()))
        {
            return Ok(Self::Utf8);
        }
        let page = registry::find_encoding(name)?;
        debug!("resolved {:?} to codepage {}", name, page.code_page());
        Ok(Self::Page(page))
    }

    /// Display name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Page(page) => page.web_name(),
        }
    }
}

/// How the fallback for the target is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackChoice {
    /// Fail on the first unmappable character.
    #[default]
    Strict,
    /// Drop unmappable characters.
    Discard,
    /// Substitute the given text.
    Replace(String),
}

/// Builds the fallback for `target`.
pub fn build_fallback(target: Endpoint, choice: &FallbackChoice) -> Result<EncoderFallback> {
    let fallback = match (choice, target) {
        (FallbackChoice::Strict, _) => EncoderFallback::Exception,
        (FallbackChoice::Discard, _) => EncoderFallback::discard(),
        (FallbackChoice::Replace(text), Endpoint::Page(page)) => {
            EncoderFallback::replacement_str(page, text)
                .with_context(|| format!("replacement {:?} for {}", text, page.web_name()))?
        }
        // UTF-8 can represent everything; the replacement is never used.
        (FallbackChoice::Replace(text), Endpoint::Utf8) => {
            EncoderFallback::Replacement(text.as_bytes().to_vec())
        }
    };
    Ok(fallback)
}

/// Converts `input` from `from` to `to`.
pub fn convert(
    input: &[u8],
    from: Endpoint,
    to: Endpoint,
    fallback: &EncoderFallback,
) -> Result<Vec<u8>> {
    let units: Vec<u16> = match from {
        Endpoint::Utf8 => std::str::from_utf8(input)
            .context("input is not valid UTF-8")?
            .encode_utf16()
            .collect(),
        Endpoint::Page(page) => page.decode(input),
    };

    let output = match to {
        Endpoint::Utf8 => String::from_utf16_lossy(&units).into_bytes(),
        Endpoint::Page(page) => page
            .encode(&units, fallback)
            .with_context(|| format!("converting {} to {}", from.name(), to.name()))?,
    };
    debug!("converted {} bytes into {}", input.len(), output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_utf8_and_pages() {
        assert_eq!(Endpoint::resolve("UTF-8").unwrap(), Endpoint::Utf8);
        assert_eq!(Endpoint::resolve("cp1256").unwrap().name(), "windows-1256");
        assert!(Endpoint::resolve("no-such-thing").is_err());
    }

    #[test]
    fn utf8_to_codepage_and_back() {
        let page = Endpoint::resolve("windows-1254").unwrap();
        let bytes = convert(
            "AĞİ".as_bytes(),
            Endpoint::Utf8,
            page,
            &EncoderFallback::Exception,
        )
        .unwrap();
        assert_eq!(bytes, [0x41, 0xD0, 0xDD]);

        let text = convert(&bytes, page, Endpoint::Utf8, &EncoderFallback::Exception).unwrap();
        assert_eq!(text, "AĞİ".as_bytes());
    }

    #[test]
    fn strict_fails_and_replace_substitutes() {
        let page = Endpoint::resolve("1256").unwrap();
        let input = "a\u{3042}".as_bytes();
        let utf8 = Endpoint::Utf8;

        let strict = build_fallback(page, &FallbackChoice::Strict).unwrap();
        assert!(convert(input, utf8, page, &strict).is_err());

        let replace = build_fallback(page, &FallbackChoice::Replace("?".into())).unwrap();
        assert_eq!(convert(input, utf8, page, &replace).unwrap(), b"a?");

        let discard = build_fallback(page, &FallbackChoice::Discard).unwrap();
        assert_eq!(convert(input, utf8, page, &discard).unwrap(), b"a");
    }

    #[test]
    fn unencodable_replacement_is_rejected() {
        let page = Endpoint::resolve("iso-8859-8").unwrap();
        assert!(build_fallback(page, &FallbackChoice::Replace("\u{0644}".into())).is_err());
    }

    #[test]
    fn invalid_utf8_input_is_an_error() {
        let page = Endpoint::resolve("iso-8859-9").unwrap();
        assert!(convert(&[0xFF], Endpoint::Utf8, page, &EncoderFallback::Exception).is_err());
    }
}
