//! Precomputed bracket pairing.

use std::collections::BTreeMap;

/// Bidirectional mapping between matching `[` and `]` indices.
///
/// Built once at load time. Every forward index maps to its backward partner
/// and the backward index maps back, so `get(get(i)) == i` for every covered
/// index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JumpTable {
    targets: BTreeMap<usize, usize>,
}

impl JumpTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched pair in both directions.
    pub fn insert_pair(&mut self, forward: usize, backward: usize) {
        self.targets.insert(forward, backward);
        self.targets.insert(backward, forward);
    }

    /// The partner of the bracket at `index`, if `index` holds a paired bracket.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.targets.get(&index).copied()
    }

    /// Number of indices covered (twice the number of pairs).
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of matched pairs.
    pub fn pair_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Matched pairs as `(forward, backward)`, ordered by forward index.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .filter(|(from, to)| from < to)
            .map(|(&from, &to)| (from, to))
    }

    /// Check that looking up any covered index twice returns that index.
    pub fn is_involution(&self) -> bool {
        self.targets
            .iter()
            .all(|(&from, &to)| self.get(to) == Some(from) && from != to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table() {
        let table = JumpTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
        assert_eq!(table.pair_count(), 0);
        assert!(table.is_involution());
    }

    #[test]
    fn insert_pair_records_both_directions() {
        let mut table = JumpTable::new();
        table.insert_pair(2, 7);
        assert_eq!(table.get(2), Some(7));
        assert_eq!(table.get(7), Some(2));
        assert_eq!(table.get(3), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.pair_count(), 1);
    }

    #[test]
    fn pairs_are_ordered_by_forward_index() {
        let mut table = JumpTable::new();
        table.insert_pair(4, 5);
        table.insert_pair(0, 9);
        let pairs: Vec<_> = table.pairs().collect();
        assert_eq!(pairs, vec![(0, 9), (4, 5)]);
        assert!(table.is_involution());
    }
}
