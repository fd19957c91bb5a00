//! Output sinks for the shared encode routine.
//!
//! Counting, writing into a caller's slice and building a vector all run
//! the same conversion loop; only the sink differs.

use alloc::vec::Vec;

/// Receives encoded bytes.
pub(crate) trait ByteSink {
    fn push(&mut self, byte: u8);

    fn extend_from_slice(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }
}

/// Discards bytes. The routine's return value is the count.
pub(crate) struct CountOnly;

impl ByteSink for CountOnly {
    #[inline]
    fn push(&mut self, _byte: u8) {}

    #[inline]
    fn extend_from_slice(&mut self, _bytes: &[u8]) {}
}

/// Writes into a slice that has already been checked to be large enough.
pub(crate) struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl ByteSink for SliceSink<'_> {
    #[inline]
    fn push(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    fn extend_from_slice(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn push(&mut self, byte: u8) {
        Vec::push(self, byte);
    }

    fn extend_from_slice(&mut self, bytes: &[u8]) {
        Vec::extend_from_slice(self, bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sink_writes_in_order() {
        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        sink.push(1);
        sink.extend_from_slice(&[2, 3]);
        sink.push(4);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_vec_sink_appends() {
        let mut out = Vec::new();
        ByteSink::push(&mut out, b'a');
        ByteSink::extend_from_slice(&mut out, b"bc");
        assert_eq!(out, b"abc");
    }
}
