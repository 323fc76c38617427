//! Error types for the hufftext compression pipeline.
//!
//! All operations return structured errors rather than panicking.
//! This lets callers decide whether to propagate or swallow a failure
//! (e.g. a sink write error) instead of the library logging and moving on.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Table: the open-addressing hash table (capacity planning)
/// - Huffman: tree construction or code assignment
/// - Stream: bit-stream serialization, framing, or decoding
/// - CRC: data corruption detected in a persisted frame
/// - I/O: reading input or writing to a sink
#[derive(Debug, Error)]
pub enum Error {
    /// Hash table operation failed (e.g. table completely full)
    #[error("hash table error: {0}")]
    Table(#[from] TableError),

    /// Huffman tree or code table error
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Bit stream serialization, framing, or decode error
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// CRC validation failed, indicating a corrupted compressed file
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hash table errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// Every slot is occupied by another key, so the probe sequence has
    /// no terminating empty slot. The table never resizes; capacity must
    /// exceed the eventual distinct-key count.
    #[error("table capacity {capacity} exceeded: no free slot for new key")]
    CapacityExceeded { capacity: usize },
}

/// Huffman tree and code table errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No tokens with non-zero frequency (cannot build a tree)
    #[error("empty message: no tokens to build a tree from")]
    EmptyMessage,

    /// A token in the message has no entry in the code table
    #[error("no code assigned for token {0:?}")]
    MissingCode(String),
}

/// Bit stream and frame errors.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Serialized stream is too short to contain the 2-byte trailer
    #[error("stream too short for trailer: {len} bytes")]
    MissingTrailer { len: usize },

    /// Trailer is internally inconsistent (count > 7, or value has bits
    /// beyond the declared count)
    #[error("invalid trailer: count {count}, value {value:#04x}")]
    InvalidTrailer { count: u8, value: u8 },

    /// Invalid magic number in a frame header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Frame is too short for its header or declared payload length
    #[error("frame too short: need {required} bytes, got {actual}")]
    FrameTooShort { required: usize, actual: usize },

    /// Accumulated prefix exceeded the longest code without matching;
    /// the bit stream is not a concatenation of valid codes
    #[error("invalid huffman code at bit position {position}")]
    InvalidCode { position: usize },

    /// Bit stream ended mid-code, leaving an unmatched trailing fragment
    #[error("truncated stream: {len} trailing bits match no code")]
    TrailingBits { len: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
