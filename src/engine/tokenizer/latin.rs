use std::sync::OnceLock;

use regex::Regex;
use rust_stemmers::Algorithm;

use crate::engine::{tokenizer::{TokenError, Tokenizer}, Language};

/// Characters a cleaned Latin text is split on.
pub const SEPARATORS: &[char] = &[
    ' ', '@', '$', '/', '#', '.', '-', ':', '&', '*', '+', '=', '[', ']', '?', '!', '(', ')',
    '{', '}', ',', '\'', '"', '>', '_', '<', ';', '%', '\\', '\t', '\n', '\r',
];

/// (pattern, replacement), applied in this order
const REPLACEMENTS: [(&str, &str); 6] = [
    (r"<[^<>]+>", ""),
    (r"[0-9]+", "number"),
    (r"(http|https)://[^\s]*", "httpaddr"),
    (r"[^\s]+@[^\s]+", "emailaddr"),
    (r"[$]+", "dollar"),
    (r"@[^\s]+", "username"),
];

static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn patterns() -> &'static [(Regex, &'static str)] {
    PATTERNS.get_or_init(|| {
        REPLACEMENTS
            .iter()
            .map(|(pattern, replacement)| {
                (Regex::new(pattern).expect("valid replacement pattern"), *replacement)
            })
            .collect()
    })
}

/// Stemming backend.
/// An `Err` drops the word from the document.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> Result<String, TokenError>;
}

/// Snowball stemmer from rust-stemmers
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    /// An empty stem of a non-empty word counts as a failure.
    fn stem(&self, word: &str) -> Result<String, TokenError> {
        let stemmed = self.stemmer.stem(word);
        if stemmed.is_empty() && !word.is_empty() {
            return Err(TokenError::Stem { word: word.to_string() });
        }
        Ok(stemmed.into_owned())
    }
}

/// Latin-script strategy.
///
/// HTML tags are removed, digit runs, URLs, e-mail addresses, `$` and
/// `@`-mentions become placeholder words, the text is split on
/// [`SEPARATORS`], every part keeps only `[a-zA-Z0-9]` and is lower-cased.
/// Normalization is stemming.
#[derive(Default)]
pub struct LatinTokenizer<S = SnowballStemmer>
where
    S: Stemmer,
{
    stemmer: S,
}

impl<S> LatinTokenizer<S>
where
    S: Stemmer,
{
    pub fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    /// Apply the placeholder replacements.
    pub fn clean(text: &str) -> String {
        patterns()
            .iter()
            .fold(text.to_string(), |acc, (regex, replacement)| {
                regex.replace_all(&acc, *replacement).into_owned()
            })
    }
}

impl<S> Tokenizer for LatinTokenizer<S>
where
    S: Stemmer,
{
    fn language(&self) -> Language {
        Language::English
    }

    fn split(&self, document: &str) -> Vec<String> {
        Self::clean(document)
            .split(SEPARATORS)
            .map(|part| {
                part.chars()
                    .filter(char::is_ascii_alphanumeric)
                    .collect::<String>()
                    .to_lowercase()
            })
            .collect()
    }

    fn normalize(&self, term: &str) -> Result<String, TokenError> {
        self.stemmer.stem(term)
    }
}
