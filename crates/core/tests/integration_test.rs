//! Integration tests for the full hufftext pipeline.
//!
//! These tests verify end-to-end behavior: tokenize -> count -> build
//! tree -> pack -> frame -> parse -> decode, with verification that the
//! decoded text matches the input.

use hufftext_core::{
    codec::{decode_bits, decode_frame, decode_stream, encode, CodecConfig},
    framing::serialize_frame,
    freq::FrequencyTable,
    huffman::{build_tree, HuffmanNode},
    tokenizer::tokenize,
};

fn config() -> CodecConfig {
    CodecConfig::new(4096)
}

/// Full round trip through the persisted frame format.
#[test]
fn test_full_pipeline_round_trip() {
    let message = "It's a truth universally acknowledged, that a single man in \
                   possession of a good fortune, must be in want of a wife.\n\
                   However little known the feelings or views of such a man may be...";

    let encoded = encode(message, &config()).expect("encode failed");

    // Persist and re-read, as the app does with the compressed file.
    let frame = serialize_frame(&encoded.stream);
    let decoded = decode_frame(&frame, &encoded.code_table).expect("decode failed");

    assert_eq!(decoded, message, "output doesn't match input");
}

/// Scenario: "ab cd" tokenizes to three tokens with equal frequency.
#[test]
fn test_scenario_ab_cd() {
    let message = "ab cd";
    assert_eq!(tokenize(message), ["ab", " ", "cd"]);

    let freq = FrequencyTable::from_tokens(tokenize(message), 64).unwrap();
    assert_eq!(freq.count("ab"), 1);
    assert_eq!(freq.count(" "), 1);
    assert_eq!(freq.count("cd"), 1);

    let tree = build_tree(&freq).unwrap();
    assert_eq!(tree.leaf_count(), 3);

    let encoded = encode(message, &config()).unwrap();

    // Pairwise prefix-free 1-2 bit codes
    let codes: Vec<String> = encoded.code_table.iter().map(|(_, c)| c.clone()).collect();
    for code in &codes {
        assert!((1..=2).contains(&code.len()));
    }
    for a in &codes {
        for b in &codes {
            if a != b {
                assert!(!b.starts_with(a.as_str()));
            }
        }
    }

    assert_eq!(decode_stream(&encoded.stream, &encoded.code_table).unwrap(), message);
}

/// Scenario: a single distinct token degenerates to a single-leaf tree
/// whose code is still one bit long.
#[test]
fn test_scenario_single_token() {
    let message = "aaaa";
    let encoded = encode(message, &config()).unwrap();

    assert_eq!(encoded.code_table.len(), 1);
    assert_eq!(encoded.code_table.code("aaaa"), Some("0"));
    assert_eq!(encoded.stream.bits(), "0");
    assert_eq!(encoded.stream.bit_len(), 1);

    let frame = serialize_frame(&encoded.stream);
    assert_eq!(decode_frame(&frame, &encoded.code_table).unwrap(), message);
}

/// Compression actually shrinks text with a skewed token distribution.
#[test]
fn test_compression_shrinks_repetitive_text() {
    let message = "the cat sat on the mat and the cat saw the rat ".repeat(50);
    let encoded = encode(&message, &config()).unwrap();

    let frame = serialize_frame(&encoded.stream);
    assert!(
        frame.len() < message.len() / 2,
        "expected <{} bytes, got {}",
        message.len() / 2,
        frame.len()
    );
    assert_eq!(decode_frame(&frame, &encoded.code_table).unwrap(), message);
}

/// The tree weight invariant holds on a realistic message.
#[test]
fn test_tree_invariant_end_to_end() {
    fn check(node: &HuffmanNode) {
        if let HuffmanNode::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            check(left);
            check(right);
        }
    }

    let tokens = tokenize("how much wood would a wood-chuck chuck, if a wood-chuck could chuck wood?");
    let freq = FrequencyTable::from_tokens(tokens, 256).unwrap();
    let tree = build_tree(&freq).unwrap();

    check(&tree);
    assert_eq!(tree.leaf_count(), freq.distinct());
}

/// Decoding bits that are not a concatenation of valid codes fails
/// explicitly rather than silently dropping a fragment.
#[test]
fn test_malformed_stream_rejected() {
    let encoded = encode("ab cd ef gh ij", &config()).unwrap();
    let bits = encoded.stream.bits();

    let truncated = &bits[..bits.len() - 1];
    assert!(decode_bits(truncated, &encoded.code_table).is_err());
}

/// Corrupting the persisted frame is caught by the CRC before decoding.
#[test]
fn test_corrupted_frame_rejected() {
    let encoded = encode("some text worth protecting", &config()).unwrap();
    let mut frame = serialize_frame(&encoded.stream);
    let last = frame.len() - 1;
    frame[last] ^= 0x10;

    assert!(decode_frame(&frame, &encoded.code_table).is_err());
}

/// Frequency-table statistics are coherent after a real encode.
#[test]
fn test_table_stats_after_encode() {
    let message = "one fish two fish red fish blue fish";
    let encoded = encode(message, &config()).unwrap();
    let stats = &encoded.table_stats;

    let freq = FrequencyTable::from_tokens(tokenize(message), 4096).unwrap();
    assert_eq!(stats.entries, freq.distinct());
    assert_eq!(stats.buckets, 4096);

    let total: u64 = stats.histogram.iter().sum();
    assert_eq!(total, stats.entries as u64);
    assert!(stats.fill_percentage() > 0.0);
}

/// Larger mixed-content round trip.
#[test]
fn test_large_mixed_round_trip() {
    let mut message = String::new();
    for i in 0..500 {
        message.push_str("line ");
        message.push_str(&i.to_string());
        message.push_str(": don't panic -- it's only a test!\n");
    }

    let encoded = encode(&message, &CodecConfig::new(8192)).unwrap();
    let frame = serialize_frame(&encoded.stream);
    assert_eq!(decode_frame(&frame, &encoded.code_table).unwrap(), message);
}
