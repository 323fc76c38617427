//! Bit-level packing of concatenated Huffman codes.
//!
//! [`BitWriter`] accumulates bits MSB-first and emits complete 8-bit
//! groups; whatever does not fill a final byte (0-7 bits) is carried out
//! of [`BitWriter::finish`] as the stream's trailer, never zero-padded
//! into a fake full byte. Reading happens on the [`EncodedStream`] side,
//! which knows the exact bit length.
//!
//! # Example
//! ```
//! use hufftext_core::bitio::BitWriter;
//!
//! let mut writer = BitWriter::new();
//! writer.push_code("101");
//! writer.push_code("11");
//! let stream = writer.finish();
//! assert_eq!(stream.bit_len(), 5);
//! assert_eq!(stream.bits(), "10111");
//! ```

use crate::stream::EncodedStream;

/// Packs bits MSB-first into full bytes plus a leftover fragment.
///
/// # Invariants
/// - `bit_count < 8`; a full accumulator is flushed immediately
/// - the low `bit_count` bits of `bit_buffer` hold the pending fragment
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed 8-bit groups
    bytes: Vec<u8>,
    /// Pending bits, right-aligned
    bit_buffer: u8,
    /// Number of pending bits (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a writer with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.bit_buffer = (self.bit_buffer << 1) | bit as u8;
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append a '0'/'1' code string, first character first.
    pub fn push_code(&mut self, code: &str) {
        for c in code.chars() {
            debug_assert!(c == '0' || c == '1', "non-binary character in code");
            self.push_bit(c == '1');
        }
    }

    /// Total number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Finish writing and hand the bits over as an [`EncodedStream`].
    ///
    /// The leftover fragment travels in the stream's trailer with its bit
    /// count intact; nothing is padded.
    pub fn finish(self) -> EncodedStream {
        EncodedStream::from_parts(self.bytes, self.bit_count, self.bit_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_byte() {
        let mut writer = BitWriter::new();
        writer.push_code("10110011");
        let stream = writer.finish();

        assert_eq!(stream.bit_len(), 8);
        assert_eq!(stream.bits(), "10110011");
    }

    #[test]
    fn test_partial_bits_not_padded() {
        let mut writer = BitWriter::new();
        writer.push_code("101");
        writer.push_code("11");
        let stream = writer.finish();

        assert_eq!(stream.bit_len(), 5);
        assert_eq!(stream.bits(), "10111");
    }

    #[test]
    fn test_bit_by_bit_msb_first() {
        let mut writer = BitWriter::new();
        for bit in [true, false, true, true, false, false, true, false] {
            writer.push_bit(bit);
        }
        let stream = writer.finish();
        assert_eq!(stream.bits(), "10110010");
    }

    #[test]
    fn test_empty() {
        let stream = BitWriter::new().finish();
        assert_eq!(stream.bit_len(), 0);
        assert_eq!(stream.bits(), "");
    }

    #[test]
    fn test_bit_len_tracks_progress() {
        let mut writer = BitWriter::new();
        assert_eq!(writer.bit_len(), 0);
        writer.push_code("110");
        assert_eq!(writer.bit_len(), 3);
        writer.push_code("0011001");
        assert_eq!(writer.bit_len(), 10);
    }

    #[test]
    fn test_multi_byte() {
        let mut writer = BitWriter::new();
        writer.push_code("1010101111110000");
        let stream = writer.finish();
        assert_eq!(stream.bits(), "1010101111110000");
        assert_eq!(stream.bit_len(), 16);
    }
}
