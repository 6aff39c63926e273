//! Default annotation engine: UAX#29 segmentation + Snowball stemming.
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use super::{Lemmatize, TokenLemma};

/// English Snowball stemmer over unicode word boundaries.
///
/// Stateless between calls; the stemmer tables are built once at
/// construction, so workers should reuse one instance.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatize for SnowballLemmatizer {
    fn annotate(&self, text: &str) -> Vec<TokenLemma> {
        text.unicode_words()
            .map(|token| {
                let lemma = self.stemmer.stem(&token.to_lowercase()).into_owned();
                TokenLemma {
                    token: token.to_string(),
                    lemma,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_order_preserved() {
        let engine = SnowballLemmatizer::new();
        let tokens: Vec<String> = engine
            .annotate("Cats chase mice")
            .into_iter()
            .map(|tl| tl.token)
            .collect();
        assert_eq!(tokens, vec!["Cats", "chase", "mice"]);
    }

    #[test]
    fn lemmas_are_lowercased_base_forms() {
        let engine = SnowballLemmatizer::new();
        let lemmas: Vec<String> = engine
            .annotate("Running runs")
            .into_iter()
            .map(|tl| tl.lemma)
            .collect();
        assert_eq!(lemmas, vec!["run", "run"]);
    }

    #[test]
    fn deterministic() {
        let engine = SnowballLemmatizer::new();
        assert_eq!(engine.annotate("same text"), engine.annotate("same text"));
    }
}
