//! Per-group aggregation of document vectors.
use std::collections::HashMap;

use super::LemmaCounts;

/// Group key → aggregated [LemmaCounts] over every contributing document.
///
/// Contributions are summed, never overwritten, and accumulation is
/// associative and commutative: partial indices built independently per
/// partition merge into the same final index regardless of order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    groups: HashMap<String, LemmaCounts>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every entry of `counts` to the accumulator of `group`.
    /// The incoming vector is copied entry by entry on the spot; the
    /// accumulator never aliases it, so one vector can fan out to any
    /// number of groups.
    pub fn add_vector(&mut self, group: &str, counts: &LemmaCounts) {
        let acc = self.groups.entry(group.to_string()).or_default();
        for (lemma, n) in counts.iter() {
            acc.add(lemma, *n);
        }
    }

    /// Merges a partial index into this one, summing shared lemmas.
    pub fn absorb(&mut self, other: GroupIndex) {
        for (group, counts) in other.groups {
            self.groups.entry(group).or_default().absorb(counts);
        }
    }

    pub fn get(&self, group: &str) -> Option<&LemmaCounts> {
        self.groups.get(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LemmaCounts)> {
        self.groups.iter()
    }
}

impl IntoIterator for GroupIndex {
    type Item = (String, LemmaCounts);
    type IntoIter = std::collections::hash_map::IntoIter<String, LemmaCounts>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    use super::{GroupIndex, LemmaCounts};

    fn counts(pairs: &[(&str, u64)]) -> LemmaCounts {
        pairs
            .iter()
            .map(|(lemma, n)| (lemma.to_string(), *n))
            .collect()
    }

    #[test]
    fn fan_out_contributes_full_vector_to_each_group() {
        let v = counts(&[("x", 2)]);
        let mut index = GroupIndex::new();
        for group in ["a", "b"] {
            index.add_vector(group, &v);
        }
        assert_eq!(index.get("a"), Some(&counts(&[("x", 2)])));
        assert_eq!(index.get("b"), Some(&counts(&[("x", 2)])));
    }

    #[test]
    fn duplicate_lemmas_are_summed() {
        let mut index = GroupIndex::new();
        index.add_vector("writer", &counts(&[("cat", 1), ("sat", 1)]));
        index.add_vector("writer", &counts(&[("cat", 3)]));
        assert_eq!(
            index.get("writer"),
            Some(&counts(&[("cat", 4), ("sat", 1)]))
        );
    }

    #[test]
    fn merge_order_does_not_matter() {
        let contributions: Vec<(&str, LemmaCounts)> = vec![
            ("a", counts(&[("x", 1), ("y", 2)])),
            ("b", counts(&[("x", 5)])),
            ("a", counts(&[("y", 3), ("z", 1)])),
            ("a", counts(&[("x", 7)])),
            ("b", counts(&[("z", 2)])),
        ];

        let mut expected = GroupIndex::new();
        for (group, v) in &contributions {
            expected.add_vector(group, v);
        }

        let mut rng = thread_rng();
        for _ in 0..10 {
            let mut shuffled = contributions.clone();
            shuffled.shuffle(&mut rng);
            let mut index = GroupIndex::new();
            for (group, v) in &shuffled {
                index.add_vector(group, v);
            }
            assert_eq!(index, expected);
        }
    }

    #[test]
    fn absorbing_partials_equals_sequential_adds() {
        let mut left = GroupIndex::new();
        left.add_vector("a", &counts(&[("x", 1)]));
        left.add_vector("b", &counts(&[("y", 4)]));

        let mut right = GroupIndex::new();
        right.add_vector("a", &counts(&[("x", 2), ("z", 1)]));

        let mut merged = left.clone();
        merged.absorb(right);

        let mut sequential = GroupIndex::new();
        sequential.add_vector("a", &counts(&[("x", 1)]));
        sequential.add_vector("b", &counts(&[("y", 4)]));
        sequential.add_vector("a", &counts(&[("x", 2), ("z", 1)]));

        assert_eq!(merged, sequential);
    }
}
