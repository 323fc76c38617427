//! End-to-end compression pipeline.
//!
//! Encode: tokenize -> count frequencies -> build Huffman tree -> pack
//! code bits in original token order. Decode: invert the code table and
//! greedily match a growing bit prefix, from an in-memory bit string, an
//! [`EncodedStream`], or framed bytes read straight off disk.
//!
//! Every phase is strictly sequential and all state is owned by the call
//! that created it; nothing is retained between invocations.

use crate::bitio::BitWriter;
use crate::error::{HuffmanError, Result, StreamError};
use crate::framing::parse_frame;
use crate::freq::FrequencyTable;
use crate::huffman::CodeTable;
use crate::stream::EncodedStream;
use crate::table::TableStats;
use crate::tokenizer::tokenize;

/// Explicit pipeline configuration.
///
/// There are no compiled-in table sizes in the library; the caller states
/// the capacity and owns the planning.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Slot count for the frequency table. Must exceed the message's
    /// distinct-token count or encoding fails with `CapacityExceeded`.
    pub table_capacity: usize,
}

impl CodecConfig {
    /// Configuration with the given frequency-table capacity.
    pub fn new(table_capacity: usize) -> Self {
        Self { table_capacity }
    }
}

impl Default for CodecConfig {
    /// 32768 slots, the classic default table size.
    fn default() -> Self {
        Self {
            table_capacity: 32768,
        }
    }
}

/// The products of one encode run.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Token -> code mapping (needed to decode)
    pub code_table: CodeTable,
    /// The packed bit stream
    pub stream: EncodedStream,
    /// Probing statistics of the frequency table, for reporting
    pub table_stats: TableStats,
}

/// Compress a message.
///
/// Codes are concatenated strictly in original token order, not in
/// hash-table iteration order.
///
/// # Errors
/// - `HuffmanError::EmptyMessage` for an empty message
/// - `TableError::CapacityExceeded` when the configured capacity cannot
///   hold the distinct tokens
pub fn encode(message: &str, config: &CodecConfig) -> Result<Encoded> {
    let tokens = tokenize(message);
    let freq = FrequencyTable::from_tokens(tokens, config.table_capacity)?;
    let code_table = CodeTable::from_frequencies(&freq)?;

    let mut writer = BitWriter::new();
    for token in freq.tokens_in_order() {
        let code = code_table
            .code(token)
            .ok_or_else(|| HuffmanError::MissingCode(token.clone()))?;
        writer.push_code(code);
    }

    Ok(Encoded {
        table_stats: freq.stats(),
        code_table,
        stream: writer.finish(),
    })
}

/// Decode an in-memory '0'/'1' bit string.
///
/// Characters other than '0' and '1' are rejected as invalid codes.
pub fn decode_bits(bits: &str, code_table: &CodeTable) -> Result<String> {
    let mut checked = Vec::with_capacity(bits.len());
    for (position, c) in bits.chars().enumerate() {
        match c {
            '0' => checked.push(false),
            '1' => checked.push(true),
            _ => return Err(StreamError::InvalidCode { position }.into()),
        }
    }
    decode_iter(checked.into_iter(), code_table)
}

/// Decode a packed bit stream.
pub fn decode_stream(stream: &EncodedStream, code_table: &CodeTable) -> Result<String> {
    decode_iter(stream.iter_bits(), code_table)
}

/// Decode framed bytes directly, e.g. the contents of a compressed file.
pub fn decode_frame(bytes: &[u8], code_table: &CodeTable) -> Result<String> {
    let stream = parse_frame(bytes)?;
    decode_stream(&stream, code_table)
}

/// Greedy growing-prefix decode.
///
/// Correct because the code set is prefix-free: the first prefix that
/// matches an entry is the only code it can be. The accumulator is
/// bounded by the longest code; growing past it means the stream is not
/// a concatenation of valid codes. A non-empty accumulator at end of
/// input is a truncated stream and fails explicitly.
fn decode_iter(bits: impl Iterator<Item = bool>, code_table: &CodeTable) -> Result<String> {
    let inverted = code_table.invert()?;
    let max_code_len = code_table.max_code_len();

    let mut message = String::new();
    let mut prefix = String::new();
    let mut position = 0usize;

    for bit in bits {
        prefix.push(if bit { '1' } else { '0' });
        position += 1;

        if let Some(token) = inverted.get(prefix.as_str()) {
            message.push_str(token);
            prefix.clear();
        } else if prefix.len() >= max_code_len {
            return Err(StreamError::InvalidCode { position }.into());
        }
    }

    if !prefix.is_empty() {
        return Err(StreamError::TrailingBits { len: prefix.len() }.into());
    }

    Ok(message)
}
