//! Wiki markup noise removal.
//!
//! Article bodies come in raw wiki markup. Everything that is not prose
//! (infobox blocks, URLs, file inclusion prefixes, reference spans, entity
//! remnants, quote runs, stray punctuation and digits) is noise for the
//! lemmatizer and is stripped here before tokenization.
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

/// Multi-character noise spans, each entry one alternation branch.
/// Branch order matters: spans must win over their leading character.
const NOISE_SPANS: [&str; 8] = [
    r"\{\{Infobox.*\}\}",
    r"((https?://)|(www\.))\S+\.\S+",
    r"\[\[File:.+px\|",
    r"<ref>.+</ref>",
    "&lt",
    "&gt",
    "&amp",
    "''+",
];

/// Single characters with no lexical value. `-` stays last so the class
/// does not turn it into a range.
const NOISE_CHARS: &str = r#"["`´.,:;!?()\[\]{}<>=/|\\%&#§$_~*°^+\s\d-]"#;

lazy_static! {
    static ref NOISE: Regex = {
        let spans = NOISE_SPANS.iter().map(|p| format!("({})", p)).join("|");
        Regex::new(&format!("(?s)({}|{})+", spans, NOISE_CHARS))
            .expect("noise pattern compiles")
    };
    static ref SPACES: Regex = Regex::new(r"\s+").expect("spaces pattern compiles");
}

/// Replaces every contiguous run of noise with a single space, then
/// collapses whitespace and trims. Idempotent: stripping stripped text
/// changes nothing.
pub fn strip(text: &str) -> String {
    let stripped = NOISE.replace_all(text, " ");
    SPACES.replace_all(stripped.trim(), " ").into_owned()
}
