//! Integer lemma frequency vectors.
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAIR: Regex = Regex::new(r"<([^>]+),(\d+)>").expect("pair pattern compiles");
}

/// Sparse lemma → occurrence count map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LemmaCounts {
    counts: HashMap<String, u64>,
}

impl LemmaCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts occurrences over a lemma sequence.
    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for lemma in lemmas {
            *counts.entry(lemma.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Adds `n` occurrences of `lemma` to the vector.
    pub fn add(&mut self, lemma: &str, n: u64) {
        *self.counts.entry(lemma.to_string()).or_insert(0) += n;
    }

    /// Sums `other` into `self`. Associative and commutative: any merge
    /// order over a set of vectors yields the same result.
    pub fn absorb(&mut self, other: LemmaCounts) {
        for (lemma, n) in other.counts {
            *self.counts.entry(lemma).or_insert(0) += n;
        }
    }

    pub fn get(&self, lemma: &str) -> Option<u64> {
        self.counts.get(lemma).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Permissive scan for `<lemma,count>` pairs. Well-formed pairs are
    /// picked out of arbitrary surrounding text; everything else is
    /// ignored, so this never fails. A lemma repeated in the input keeps
    /// its last count. Counts too large for the type are treated as junk.
    pub fn decode(encoded: &str) -> Self {
        let mut counts = HashMap::new();
        for cap in PAIR.captures_iter(encoded) {
            if let Ok(n) = cap[2].parse::<u64>() {
                counts.insert(cap[1].to_string(), n);
            }
        }
        Self { counts }
    }
}

impl fmt::Display for LemmaCounts {
    /// Wire form: `<lemma,count>` pairs joined by `,`, ordered by lemma so
    /// output is reproducible. Lemmas containing `<` or `>` cannot be
    /// represented and are dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self
            .counts
            .iter()
            .filter(|(lemma, _)| !lemma.contains('<') && !lemma.contains('>'))
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(lemma, count)| format!("<{},{}>", lemma, count))
            .join(",");
        f.write_str(&encoded)
    }
}

impl FromIterator<(String, u64)> for LemmaCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LemmaCounts {
    type Item = (String, u64);
    type IntoIter = std::collections::hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LemmaCounts;

    fn counts(pairs: &[(&str, u64)]) -> LemmaCounts {
        pairs
            .iter()
            .map(|(lemma, n)| (lemma.to_string(), *n))
            .collect()
    }

    #[test]
    fn from_lemmas_counts_occurrences() {
        let v = LemmaCounts::from_lemmas(["cat", "sat", "cat"]);
        assert_eq!(v.get("cat"), Some(2));
        assert_eq!(v.get("sat"), Some(1));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn encode_is_sorted() {
        let v = counts(&[("sat", 1), ("cat", 2)]);
        assert_eq!(v.to_string(), "<cat,2>,<sat,1>");
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(LemmaCounts::new().to_string(), "");
    }

    #[test]
    fn encode_drops_reserved_lemmas() {
        let v = counts(&[("a<b", 1), ("ok", 2), ("x>y", 3)]);
        assert_eq!(v.to_string(), "<ok,2>");
    }

    #[test]
    fn round_trip() {
        let v = counts(&[("cat", 4), ("sat", 1), ("mat", 7)]);
        assert_eq!(LemmaCounts::decode(&v.to_string()), v);
    }

    #[test]
    fn decode_scans_through_junk() {
        let v = LemmaCounts::decode("garbage <cat,3> more garbage <dog,1> end");
        assert_eq!(v, counts(&[("cat", 3), ("dog", 1)]));
    }

    #[test]
    fn decode_garbage_is_empty() {
        assert!(LemmaCounts::decode("no pairs here <,> <a,> <,1>").is_empty());
    }

    #[test]
    fn decode_duplicate_lemma_last_wins() {
        let v = LemmaCounts::decode("<cat,1>,<cat,5>");
        assert_eq!(v, counts(&[("cat", 5)]));
    }

    #[test]
    fn decode_oversized_count_skipped() {
        let v = LemmaCounts::decode("<cat,99999999999999999999999999>,<dog,2>");
        assert_eq!(v, counts(&[("dog", 2)]));
    }

    #[test]
    fn absorb_sums_shared_lemmas() {
        let mut v = counts(&[("cat", 1), ("sat", 2)]);
        v.absorb(counts(&[("cat", 3), ("mat", 1)]));
        assert_eq!(v, counts(&[("cat", 4), ("sat", 2), ("mat", 1)]));
    }

    #[test]
    fn total_sums_counts() {
        assert_eq!(counts(&[("a", 2), ("b", 3)]).total(), 5);
    }
}
