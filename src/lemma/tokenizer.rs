//! Raw markup to filtered lemmas.
use std::collections::HashSet;
use std::path::Path;

use crate::cleaning;
use crate::error::Error;
use crate::tables::stopwords;

use super::{Lemmatize, SnowballLemmatizer};

/// Turns raw article markup into the lemma sequence the indexer counts.
///
/// Composition: noise stripping, engine annotation, lower-casing, then
/// stop-word removal (case-sensitive exact match). Both the engine and
/// the stop-word set are injected at construction and never change.
pub struct Tokenizer {
    engine: Box<dyn Lemmatize + Send + Sync>,
    stop_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new(engine: Box<dyn Lemmatize + Send + Sync>, stop_words: HashSet<String>) -> Self {
        Self { engine, stop_words }
    }

    /// Default engine plus stop words from a newline-delimited file.
    /// An unreadable file is a setup failure for the whole run.
    pub fn from_stopwords_file(path: &Path) -> Result<Self, Error> {
        let stop_words = stopwords::load(path)?;
        Ok(Self::new(Box::new(SnowballLemmatizer::new()), stop_words))
    }

    /// Lemmas of `raw`, in token order, stop words removed.
    pub fn lemmas(&self, raw: &str) -> Vec<String> {
        let clean = cleaning::strip(raw);
        self.engine
            .annotate(&clean)
            .into_iter()
            .map(|tl| tl.lemma.to_lowercase())
            .filter(|lemma| !self.stop_words.contains(lemma))
            .collect()
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lemma::TokenLemma;

    /// Engine that reports each whitespace-separated word as its own lemma.
    struct Verbatim;

    impl Lemmatize for Verbatim {
        fn annotate(&self, text: &str) -> Vec<TokenLemma> {
            text.split_whitespace()
                .map(|w| TokenLemma::new(w, w))
                .collect()
        }
    }

    fn stop_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn no_stop_word_survives() {
        let tokenizer = Tokenizer::new(Box::new(Verbatim), stop_set(&["the", "a"]));
        let lemmas = tokenizer.lemmas("the cat sat on a mat");
        assert!(lemmas.iter().all(|l| !tokenizer.stop_words().contains(l)));
        assert_eq!(lemmas, vec!["cat", "sat", "on", "mat"]);
    }

    #[test]
    fn lemmas_lowercased_before_filtering() {
        let tokenizer = Tokenizer::new(Box::new(Verbatim), stop_set(&["the"]));
        assert_eq!(tokenizer.lemmas("The cat"), vec!["cat"]);
    }

    #[test]
    fn markup_stripped_before_annotation() {
        let tokenizer = Tokenizer::new(Box::new(Verbatim), stop_set(&[]));
        assert_eq!(
            tokenizer.lemmas("'''cat''' <ref>source</ref>sat"),
            vec!["cat", "sat"]
        );
    }

    #[test]
    fn empty_markup_yields_no_lemmas() {
        let tokenizer = Tokenizer::new(Box::new(Verbatim), stop_set(&["the"]));
        assert!(tokenizer.lemmas("{{Infobox x}}").is_empty());
    }

    #[test]
    fn snowball_engine_end_to_end() {
        let tokenizer = Tokenizer::new(Box::new(SnowballLemmatizer::new()), stop_set(&["the"]));
        assert_eq!(tokenizer.lemmas("the cat sat"), vec!["cat", "sat"]);
    }
}
