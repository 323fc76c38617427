//! Token frequency counting.
//!
//! Counts live in a [`HashTable<String, u64>`]; alongside the counts the
//! table keeps the full token sequence in input order (duplicates
//! retained), because encoding must replay tokens in original message
//! order, not in hash-table slot order.

use crate::error::TableError;
use crate::table::{HashTable, TableStats};

/// Token counts plus the ordered token list for one message.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: HashTable<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Count a token sequence into a table of `table_capacity` slots.
    ///
    /// # Errors
    /// `TableError::CapacityExceeded` when the message has more distinct
    /// tokens than the table can hold.
    pub fn from_tokens(tokens: Vec<String>, table_capacity: usize) -> Result<Self, TableError> {
        let mut counts: HashTable<String, u64> = HashTable::with_capacity(table_capacity);
        for token in &tokens {
            let next = counts.get(token.as_str()).copied().unwrap_or(0) + 1;
            counts.put(token.clone(), next)?;
        }
        Ok(Self {
            counts,
            order: tokens,
        })
    }

    /// Occurrence count for a token (0 if never seen).
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of tokens, duplicates included.
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// All tokens in original message order.
    pub fn tokens_in_order(&self) -> &[String] {
        &self.order
    }

    /// Distinct tokens with their counts, in the backing table's
    /// deterministic slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, u64)> {
        self.counts.iter().map(|(token, &count)| (token, count))
    }

    /// Probing statistics of the backing table.
    pub fn stats(&self) -> TableStats {
        self.counts.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_counts() {
        let freq = FrequencyTable::from_tokens(tokenize("a b a b a"), 32).unwrap();

        assert_eq!(freq.count("a"), 3);
        assert_eq!(freq.count("b"), 2);
        assert_eq!(freq.count(" "), 4);
        assert_eq!(freq.count("c"), 0);
        assert_eq!(freq.distinct(), 3);
        assert_eq!(freq.total(), 9);
    }

    #[test]
    fn test_order_preserved_with_duplicates() {
        let freq = FrequencyTable::from_tokens(tokenize("ab cd ab"), 32).unwrap();
        assert_eq!(freq.tokens_in_order(), ["ab", " ", "cd", " ", "ab"]);
    }

    #[test]
    fn test_capacity_exceeded() {
        let tokens = tokenize("a b c d e");
        // 6 distinct tokens ("a".."e" plus " ") into 4 slots
        let err = FrequencyTable::from_tokens(tokens, 4).unwrap_err();
        assert!(matches!(err, TableError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_stats_histogram_sums_to_distinct() {
        let freq =
            FrequencyTable::from_tokens(tokenize("the quick brown fox the lazy dog"), 64).unwrap();
        let stats = freq.stats();
        let total: u64 = stats.histogram.iter().sum();
        assert_eq!(total, freq.distinct() as u64);
    }

    #[test]
    fn test_empty_message() {
        let freq = FrequencyTable::from_tokens(Vec::new(), 8).unwrap();
        assert_eq!(freq.distinct(), 0);
        assert_eq!(freq.total(), 0);
    }
}
