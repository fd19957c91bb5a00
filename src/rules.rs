//! Encode rule tables for single-byte codepages.
//!
//! A codepage maps the scalars it knows above ASCII back to bytes through an
//! ordered set of rules:
//!
//! 1. scalars whose decode-table slot holds the scalar itself (checked by
//!    [`CodePage`](crate::CodePage), not stored here)
//! 2. single `(scalar, byte)` pairs, kept sorted and binary searched
//! 3. contiguous ranges encoded as `scalar - offset`
//! 4. the fullwidth ASCII block, folded onto ASCII on every page
//!
//! Anything else is unmappable.

/// First scalar of the fullwidth ASCII variants block.
pub const FULLWIDTH_FIRST: u16 = 0xFF01;
/// Last scalar of the fullwidth ASCII variants block.
pub const FULLWIDTH_LAST: u16 = 0xFF5E;
/// Distance between a fullwidth form and its ASCII counterpart.
pub const FULLWIDTH_OFFSET: u16 = 0xFEE0;

/// A contiguous run of scalars that encode to `scalar - offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeRange {
    first: u16,
    last: u16,
    offset: u16,
}

impl EncodeRange {
    /// Creates a range covering `first..=last`.
    pub const fn new(first: u16, last: u16, offset: u16) -> Self {
        Self {
            first,
            last,
            offset,
        }
    }

    /// First scalar covered by the range.
    #[inline]
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// Last scalar covered by the range.
    #[inline]
    pub const fn last(&self) -> u16 {
        self.last
    }

    /// Value subtracted from a covered scalar to obtain its byte.
    #[inline]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Returns `true` if `ch` falls inside the range.
    #[inline]
    pub fn contains(&self, ch: u16) -> bool {
        (self.first..=self.last).contains(&ch)
    }

    /// Maps `ch` to its byte if the range covers it.
    #[inline]
    pub fn map(&self, ch: u16) -> Option<u8> {
        if !self.contains(ch) {
            return None;
        }
        u8::try_from(ch.wrapping_sub(self.offset)).ok()
    }
}

/// The explicit part of a codepage's encode mapping.
#[derive(Debug, Clone, Copy)]
pub struct EncodeRules {
    singles: &'static [(u16, u8)],
    ranges: &'static [EncodeRange],
}

impl EncodeRules {
    /// Creates a rule set. `singles` must be sorted by scalar.
    pub const fn new(singles: &'static [(u16, u8)], ranges: &'static [EncodeRange]) -> Self {
        Self { singles, ranges }
    }

    /// The single mappings, sorted by scalar.
    pub fn singles(&self) -> &'static [(u16, u8)] {
        self.singles
    }

    /// The range mappings.
    pub fn ranges(&self) -> &'static [EncodeRange] {
        self.ranges
    }

    /// Looks up a scalar against singles, then ranges, then the fullwidth
    /// fold.
    pub fn lookup(&self, ch: u16) -> Option<u8> {
        if let Ok(idx) = self.singles.binary_search_by_key(&ch, |&(c, _)| c) {
            return Some(self.singles[idx].1);
        }

        if let Some(b) = self.ranges.iter().find_map(|r| r.map(ch)) {
            return Some(b);
        }

        fold_fullwidth(ch)
    }
}

/// Folds a fullwidth ASCII variant onto its ASCII byte.
#[inline]
pub fn fold_fullwidth(ch: u16) -> Option<u8> {
    if (FULLWIDTH_FIRST..=FULLWIDTH_LAST).contains(&ch) {
        Some((ch - FULLWIDTH_OFFSET) as u8)
    } else {
        None
    }
}
