//! Persisted frame for a compressed message.
//!
//! Wraps a serialized [`EncodedStream`] with a header so the on-disk file
//! is self-describing and corruption is detectable:
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x54 0x58 0x31 ("HTX1")
//! +------------------+
//! | payload_len (4)  |  u32 little-endian
//! +------------------+
//! | crc32 (4)        |  u32 over payload_len + payload
//! +------------------+
//! | payload          |  serialized stream, trailer included
//! | (variable)       |
//! +------------------+
//! ```

use crate::error::{Error, Result, StreamError};
use crate::stream::EncodedStream;

/// Magic number for compressed files: "HTX1" (Huffman TeXt, format 1)
const MAGIC: [u8; 4] = [0x48, 0x54, 0x58, 0x31];

/// Size of the frame header in bytes
const HEADER_SIZE: usize = 12;

/// Serialize a stream into a framed byte sequence for persistence.
pub fn serialize_frame(stream: &EncodedStream) -> Vec<u8> {
    let payload = stream.to_bytes();
    let payload_len = payload.len() as u32;
    let crc32 = compute_crc(payload_len, &payload);

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&MAGIC);
    frame.extend_from_slice(&payload_len.to_le_bytes());
    frame.extend_from_slice(&crc32.to_le_bytes());
    frame.extend_from_slice(&payload);
    frame
}

/// Parse a framed byte sequence back into an [`EncodedStream`].
///
/// # Errors
/// - `StreamError::FrameTooShort` if the buffer cannot hold the header or
///   the declared payload
/// - `StreamError::InvalidMagic` on a magic mismatch
/// - `Error::Crc` when the checksum does not match
/// - Propagates trailer validation errors from the payload
pub fn parse_frame(bytes: &[u8]) -> Result<EncodedStream> {
    if bytes.len() < HEADER_SIZE {
        return Err(StreamError::FrameTooShort {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&bytes[0..4]);
    if magic != MAGIC {
        return Err(StreamError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&bytes[4..8]);
    let payload_len = u32::from_le_bytes(len_bytes);

    let mut crc_bytes = [0u8; 4];
    crc_bytes.copy_from_slice(&bytes[8..12]);
    let crc32 = u32::from_le_bytes(crc_bytes);

    let expected_size = HEADER_SIZE + payload_len as usize;
    if bytes.len() != expected_size {
        return Err(StreamError::FrameTooShort {
            required: expected_size,
            actual: bytes.len(),
        }
        .into());
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = compute_crc(payload_len, payload);
    if computed != crc32 {
        return Err(Error::Crc {
            expected: crc32,
            actual: computed,
        });
    }

    Ok(EncodedStream::from_bytes(payload)?)
}

/// CRC32 over the length field and payload.
fn compute_crc(payload_len: u32, payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&payload_len.to_le_bytes());
    hasher.update(payload);
    hasher.finalize()
}
