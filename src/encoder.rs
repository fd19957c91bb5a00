//! Stateful encoding across buffer boundaries.

use crate::codepage::{combine_surrogates, is_high_surrogate, is_low_surrogate, CodePage};
use crate::error::EncodingError;
use crate::fallback::EncoderFallback;
use crate::sink::{ByteSink, CountOnly, SliceSink};

/// Encodes a stream of UTF-16 chunks into one codepage.
///
/// A chunk may end in the middle of a surrogate pair. Unless the call is
/// flushing, the dangling high surrogate is held back and joined with the
/// first unit of the next chunk, so the fallback sees the pair as one
/// character exactly as a one-shot [`CodePage::encode`] would.
///
/// Error indices count UTF-16 units from the start of the stream (or the
/// last [`reset`](Self::reset)), not from the start of the current chunk.
/// A held surrogate that ends up unmappable is reported at its own
/// position in the previous chunk.
///
/// # Example
///
/// ```
/// use bytepage::{Encoder, EncoderFallback, CP1254};
///
/// let units: Vec<u16> = "a😀".encode_utf16().collect();
/// let mut encoder = Encoder::new(&CP1254, EncoderFallback::question_mark());
/// let mut out = [0u8; 4];
///
/// let n = encoder.encode(&units[..2], &mut out, false).unwrap();
/// assert_eq!(&out[..n], b"a");
/// let m = encoder.encode(&units[2..], &mut out[n..], true).unwrap();
/// assert_eq!(&out[..n + m], b"a?");
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    page: &'static CodePage,
    fallback: EncoderFallback,
    pending: Option<u16>,
    position: usize,
}

impl Encoder {
    /// Creates an encoder for `page`.
    pub fn new(page: &'static CodePage, fallback: EncoderFallback) -> Self {
        Self {
            page,
            fallback,
            pending: None,
            position: 0,
        }
    }

    /// The target codepage.
    pub fn page(&self) -> &'static CodePage {
        self.page
    }

    /// The fallback in effect.
    pub fn fallback(&self) -> &EncoderFallback {
        &self.fallback
    }

    /// Returns `true` if a high surrogate is being held for the next call.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forgets any held surrogate and restarts error indices at zero.
    pub fn reset(&mut self) {
        self.pending = None;
        self.position = 0;
    }

    /// Number of UTF-16 units consumed by successful
    /// [`encode`](Self::encode) calls, including a held surrogate.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes [`encode`](Self::encode) would write for `chars`
    /// with the same `flush`. Does not change the encoder's state.
    pub fn byte_count(&self, chars: &[u16], flush: bool) -> Result<usize, EncodingError> {
        self.run(chars, flush, &mut CountOnly).map(|(n, _)| n)
    }

    /// Encodes `chars` into `out`, returning the number of bytes written.
    ///
    /// With `flush` set, a trailing high surrogate is passed to the
    /// fallback instead of being held. On error nothing is written and the
    /// encoder keeps its previous state.
    pub fn encode(
        &mut self,
        chars: &[u16],
        out: &mut [u8],
        flush: bool,
    ) -> Result<usize, EncodingError> {
        let needed = self.byte_count(chars, flush)?;
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

        let (written, pending) = self.run(chars, flush, &mut SliceSink::new(out))?;
        self.pending = pending;
        self.position += chars.len();
        Ok(written)
    }

    /// Shared by counting and writing. Returns the byte count and the
    /// surrogate to hold after this call.
    fn run<S: ByteSink>(
        &self,
        chars: &[u16],
        flush: bool,
        sink: &mut S,
    ) -> Result<(usize, Option<u16>), EncodingError> {
        let mut written = 0;
        let mut start = 0;

        if let Some(high) = self.pending {
            // The held unit was the last one of the previous chunk.
            let held_at = self.position.saturating_sub(1);
            let code_point = match chars.first() {
                Some(&low) if is_low_surrogate(low) => {
                    start = 1;
                    combine_surrogates(high, low)
                }
                None if !flush => return Ok((0, Some(high))),
                _ => u32::from(high),
            };
            written += self
                .fallback
                .substitute(self.page, code_point, held_at, sink)?;
        }

        let mut end = chars.len();
        let mut hold = None;
        if !flush && end > start && is_high_surrogate(chars[end - 1]) {
            end -= 1;
            hold = Some(chars[end]);
        }

        let base = self.position + start;
        written += self
            .page
            .encode_with(&chars[start..end], base, &self.fallback, sink)?;
        Ok((written, hold))
    }
}
