/*! Lemmatization.

The annotation engine sits behind the [Lemmatize] trait so that the
pipelines never depend on a concrete NLP backend: anything that can turn
text into an ordered sequence of (token, lemma) pairs fits. The default
backend is [SnowballLemmatizer]; tests plug in trivial engines.

[Tokenizer] is the composition the indexing pipeline actually calls:
noise stripping, annotation, lower-casing and stop-word removal.
!*/
mod snowball;
mod tokenizer;

pub use snowball::SnowballLemmatizer;
pub use tokenizer::Tokenizer;

/// A surface token and its base form, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLemma {
    pub token: String,
    pub lemma: String,
}

impl TokenLemma {
    pub fn new(token: &str, lemma: &str) -> Self {
        Self {
            token: token.to_string(),
            lemma: lemma.to_string(),
        }
    }
}

/// Annotation engines. Implementations must be pure: same text in, same
/// pairs out, in token order, no side effects.
pub trait Lemmatize {
    fn annotate(&self, text: &str) -> Vec<TokenLemma>;
}
