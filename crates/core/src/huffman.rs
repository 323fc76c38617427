//! Huffman tree construction and code assignment.
//!
//! Builds a binary tree by repeatedly merging the two lowest-weight
//! subtrees, then assigns each distinct token the bit path from the root
//! to its leaf ('0' = left, '1' = right). The resulting code set is
//! prefix-free by construction.
//!
//! # Tie-break
//!
//! The priority queue orders entries by `(weight, insertion sequence)`:
//! among equal weights the earliest-inserted tree wins. Leaves are seeded
//! in the frequency table's deterministic iteration order and merged nodes
//! take the next sequence number, so the whole construction is
//! reproducible. Any consistent tie-break preserves Huffman optimality;
//! this one is fixed so test fixtures are stable.

use crate::error::{HuffmanError, Result};
use crate::freq::FrequencyTable;
use crate::table::HashTable;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::io::Write;

/// A node of the Huffman tree.
///
/// # Invariants
/// - every internal node's weight equals the sum of its children's weights
/// - leaves are exactly the distinct tokens of the message
#[derive(Debug, Clone)]
pub enum HuffmanNode {
    /// A distinct token with its occurrence count
    Leaf { token: String, weight: u64 },
    /// A merged pair of subtrees
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Total frequency under this node.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// Number of leaves under this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Min-queue entry: weight first, then insertion sequence.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    seq: u64,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// The merge loop runs exactly `distinct - 1` times; each iteration
/// removes the two minimum trees and reinserts their combination.
///
/// # Errors
/// `HuffmanError::EmptyMessage` when the table has no tokens.
pub fn build_tree(freq: &FrequencyTable) -> Result<HuffmanNode> {
    let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::with_capacity(freq.distinct());
    let mut seq = 0u64;

    for (token, weight) in freq.iter() {
        heap.push(Reverse(QueueEntry {
            weight,
            seq,
            node: HuffmanNode::Leaf {
                token: token.clone(),
                weight,
            },
        }));
        seq += 1;
    }

    loop {
        let first = match heap.pop() {
            Some(Reverse(entry)) => entry,
            None => return Err(HuffmanError::EmptyMessage.into()),
        };
        let second = match heap.pop() {
            Some(Reverse(entry)) => entry,
            None => return Ok(first.node),
        };

        let weight = first.node.weight() + second.node.weight();
        heap.push(Reverse(QueueEntry {
            weight,
            seq,
            node: HuffmanNode::Internal {
                weight,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        }));
        seq += 1;
    }
}

/// Token -> code mapping derived from a Huffman tree.
///
/// Codes are '0'/'1' strings; the set is prefix-free by construction
/// (guaranteed by the tree shape, not re-checked at runtime).
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: HashTable<String, String>,
    max_code_len: usize,
}

impl CodeTable {
    /// Build tree and codes in one step.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        let tree = build_tree(freq)?;
        Self::from_tree(&tree)
    }

    /// Assign codes by walking a tree: '0' descending left, '1' right.
    ///
    /// A single-leaf tree (one distinct token) gets the code "0"; naive
    /// path accumulation would yield the empty string there.
    pub fn from_tree(tree: &HuffmanNode) -> Result<Self> {
        // Load factor <= 0.5 for the code table
        let capacity = (tree.leaf_count() * 2).max(8);
        let mut codes: HashTable<String, String> = HashTable::with_capacity(capacity);
        let mut max_code_len = 0usize;

        match tree {
            HuffmanNode::Leaf { token, .. } => {
                codes.put(token.clone(), "0".to_string())?;
                max_code_len = 1;
            }
            HuffmanNode::Internal { .. } => {
                assign(tree, String::new(), &mut codes, &mut max_code_len)?;
            }
        }

        Ok(Self {
            codes,
            max_code_len,
        })
    }

    /// Code for a token, if it occurred in the message.
    pub fn code(&self, token: &str) -> Option<&str> {
        self.codes.get(token).map(String::as_str)
    }

    /// Number of distinct tokens with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no code has been assigned.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length in bits of the longest code.
    ///
    /// Bounds the decoder's growing-prefix accumulator.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Token/code pairs in the table's deterministic slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.codes.iter()
    }

    /// Invert into a code -> token table for decoding.
    ///
    /// Safe because codes are unique and prefix-free.
    pub fn invert(&self) -> Result<HashTable<String, String>> {
        let mut inverted: HashTable<String, String> =
            HashTable::with_capacity((self.codes.len() * 2).max(8));
        for (token, code) in self.codes.iter() {
            inverted.put(code.clone(), token.clone())?;
        }
        Ok(inverted)
    }

    /// Write one `token=code` line per distinct token to a sink.
    ///
    /// Separator tokens are written raw, so a newline token produces a
    /// line of its own; the format mirrors the classic codes.txt output.
    pub fn write_codes<W: Write>(&self, mut sink: W) -> Result<()> {
        for (token, code) in self.codes.iter() {
            writeln!(sink, "{token}={code}")?;
        }
        Ok(())
    }
}

fn assign(
    node: &HuffmanNode,
    path: String,
    codes: &mut HashTable<String, String>,
    max_code_len: &mut usize,
) -> Result<()> {
    match node {
        HuffmanNode::Leaf { token, .. } => {
            *max_code_len = (*max_code_len).max(path.len());
            codes.put(token.clone(), path)?;
        }
        HuffmanNode::Internal { left, right, .. } => {
            assign(left, format!("{path}0"), codes, max_code_len)?;
            assign(right, format!("{path}1"), codes, max_code_len)?;
        }
    }
    Ok(())
}
