//! Real-valued lemma vectors.
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use super::LemmaCounts;

lazy_static! {
    static ref PAIR: Regex =
        Regex::new(r"<([^>]+),([0-9]{1,13}(\.[0-9]*)?)>").expect("pair pattern compiles");
}

/// Sparse lemma → weight map, the probability-valued sibling of
/// [LemmaCounts]. Same wire grammar, decimal values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LemmaWeights {
    weights: HashMap<String, f64>,
}

impl LemmaWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, lemma: &str) -> Option<f64> {
        self.weights.get(lemma).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.weights.iter()
    }

    /// Permissive scan for `<lemma,value>` pairs with a decimal value.
    /// Same contract as [LemmaCounts::decode]: ignores junk, keeps the
    /// last value of a repeated lemma, never fails.
    pub fn decode(encoded: &str) -> Self {
        let mut weights = HashMap::new();
        for cap in PAIR.captures_iter(encoded) {
            if let Ok(w) = cap[2].parse::<f64>() {
                weights.insert(cap[1].to_string(), w);
            }
        }
        Self { weights }
    }
}

impl From<&LemmaCounts> for LemmaWeights {
    /// Relative-frequency conversion: each count divided by the vector
    /// total. The empty vector converts to the empty vector.
    fn from(counts: &LemmaCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let weights = counts
            .iter()
            .map(|(lemma, n)| (lemma.clone(), *n as f64 / total as f64))
            .collect();
        Self { weights }
    }
}

impl FromIterator<(String, f64)> for LemmaWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for LemmaWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self
            .weights
            .iter()
            .filter(|(lemma, _)| !lemma.contains('<') && !lemma.contains('>'))
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(lemma, weight)| format!("<{},{}>", lemma, weight))
            .join(",");
        f.write_str(&encoded)
    }
}
