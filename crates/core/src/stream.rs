//! The packed bit stream and its serialized form.
//!
//! An [`EncodedStream`] is the concatenation of per-token Huffman codes:
//! N complete 8-bit groups (MSB-first) plus a leftover fragment of 0-7
//! bits. The serialized form is the full bytes followed by a fixed 2-byte
//! trailer:
//!
//! ```text
//! +----------------+----------------+----------------+
//! | full bytes (N) | count (1 byte) | value (1 byte) |
//! +----------------+----------------+----------------+
//! ```
//!
//! `count` is the number of leftover bits (0-7) and `value` holds those
//! bits right-aligned. Storing the count explicitly makes the format
//! self-describing: a leftover of "001" is distinguishable from "01" or
//! "1", which a value-only trailer cannot express.

use crate::error::StreamError;

/// A packed bit stream: full bytes plus an explicit leftover fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream {
    /// Complete 8-bit groups, MSB-first
    full: Vec<u8>,
    /// Leftover bit count (0-7)
    leftover_count: u8,
    /// Leftover bits, right-aligned; high bits clear
    leftover_value: u8,
}

impl EncodedStream {
    /// Assemble a stream from a writer's output.
    ///
    /// Callers outside the crate go through `BitWriter::finish` or
    /// [`EncodedStream::from_bytes`], which uphold the trailer invariants.
    pub(crate) fn from_parts(full: Vec<u8>, leftover_count: u8, leftover_value: u8) -> Self {
        debug_assert!(leftover_count <= 7);
        debug_assert!(leftover_value >> leftover_count == 0);
        Self {
            full,
            leftover_count,
            leftover_value,
        }
    }

    /// Exact number of bits in the stream.
    pub fn bit_len(&self) -> usize {
        self.full.len() * 8 + self.leftover_count as usize
    }

    /// Length of the serialized form (full bytes + 2 trailer bytes).
    pub fn byte_len(&self) -> usize {
        self.full.len() + 2
    }

    /// Serialize: full bytes, then `[count, value]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        bytes.extend_from_slice(&self.full);
        bytes.push(self.leftover_count);
        bytes.push(self.leftover_value);
        bytes
    }

    /// Parse a serialized stream, validating the trailer.
    ///
    /// # Errors
    /// - `StreamError::MissingTrailer` if fewer than 2 bytes
    /// - `StreamError::InvalidTrailer` if `count > 7` or `value` carries
    ///   bits beyond the declared count
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StreamError> {
        if bytes.len() < 2 {
            return Err(StreamError::MissingTrailer { len: bytes.len() });
        }

        let (full, trailer) = bytes.split_at(bytes.len() - 2);
        let count = trailer[0];
        let value = trailer[1];

        if count > 7 || value >> count != 0 {
            return Err(StreamError::InvalidTrailer { count, value });
        }

        Ok(Self {
            full: full.to_vec(),
            leftover_count: count,
            leftover_value: value,
        })
    }

    /// Iterate over the stream's bits in order.
    pub fn iter_bits(&self) -> StreamBits<'_> {
        StreamBits {
            stream: self,
            pos: 0,
        }
    }

    /// Expand to a '0'/'1' string.
    pub fn bits(&self) -> String {
        self.iter_bits()
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }
}

/// Iterator over the bits of an [`EncodedStream`], MSB-first.
#[derive(Debug, Clone)]
pub struct StreamBits<'a> {
    stream: &'a EncodedStream,
    pos: usize,
}

impl Iterator for StreamBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let full_bits = self.stream.full.len() * 8;
        let bit = if self.pos < full_bits {
            let byte = self.stream.full[self.pos / 8];
            (byte >> (7 - self.pos % 8)) & 1
        } else if self.pos < self.stream.bit_len() {
            let offset = (self.pos - full_bits) as u8;
            (self.stream.leftover_value >> (self.stream.leftover_count - 1 - offset)) & 1
        } else {
            return None;
        };
        self.pos += 1;
        Some(bit == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.bit_len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StreamBits<'_> {}
