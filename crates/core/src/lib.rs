//! hufftext-core: word-level Huffman text compression
//!
//! This library tokenizes a text message into words and separators,
//! counts token frequencies, builds a prefix-free Huffman code, packs the
//! message into a bit stream, and reverses the whole process. The
//! associative structure behind both the frequency table and the code
//! table is a fixed-capacity open-addressing hash table with linear
//! probing and observable probe statistics.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `table`: open-addressing hash table with probe histogram
//! - `tokenizer`: lossless word/separator splitting
//! - `freq`: token frequency counting with original order preserved
//! - `huffman`: tree construction, deterministic tie-break, code table
//! - `bitio`: MSB-first bit packing
//! - `stream`: packed stream with an explicit-count trailer
//! - `framing`: magic + CRC32 frame for the persisted file
//! - `codec`: the encode/decode pipeline
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured and recoverable,
//!   including a completely full hash table and truncated bit streams
//! - **Fixed capacity**: the hash table never resizes; capacity is an
//!   explicit parameter and every probe loop is bounded
//! - **Deterministic**: hashing, iteration order, and the Huffman
//!   tie-break are reproducible across runs
//! - **Single-threaded**: every structure is owned by one pipeline
//!   invocation and discarded with it

pub mod bitio;
pub mod codec;
pub mod error;
pub mod framing;
pub mod freq;
pub mod huffman;
pub mod stream;
pub mod table;
pub mod tokenizer;

// Re-export commonly used types
pub use error::{Error, Result};
