pub mod chinese;
pub mod latin;

use thiserror::Error;
use tracing::debug;

use crate::engine::{stop_words, Language};

pub use chinese::{ChineseTokenizer, JiebaSegmenter, Segmenter};
pub use latin::{LatinTokenizer, SnowballStemmer, Stemmer};

/// Per-token failure.
/// Always recovered locally: the token is dropped and counted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("stemming failed for {word:?}")]
    Stem { word: String },
}

/// Tokens of one document after stop-word filtering and normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedDocument {
    /// surviving tokens, left-to-right, duplicates kept
    pub tokens: Vec<String>,
    /// tokens whose normalization failed
    pub dropped: usize,
}

/// Language strategy turning one document into terms.
///
/// `split` produces surface terms, `normalize` maps one surface term to
/// its vocabulary form (stem, trimmed word). `analyze` folds the two with
/// the stop-word filter of the strategy's language.
pub trait Tokenizer: Send + Sync {
    fn language(&self) -> Language;

    /// Surface terms of the document, in order, duplicates preserved.
    fn split(&self, document: &str) -> Vec<String>;

    fn normalize(&self, term: &str) -> Result<String, TokenError>;

    #[inline]
    fn is_stop_word(&self, term: &str) -> bool {
        stop_words::is_stop_word(term, self.language())
    }

    /// Split, filter and normalize one document.
    ///
    /// Stop words are checked on the surface term and again on the
    /// normalized term, so no returned token is a stop word or empty.
    /// Normalization errors drop the token and are counted in `dropped`.
    fn analyze(&self, document: &str) -> AnalyzedDocument {
        let mut dropped = 0;
        let tokens = self
            .split(document)
            .into_iter()
            .filter(|term| !self.is_stop_word(term))
            .filter_map(|term| match self.normalize(&term) {
                Ok(token) => Some(token),
                Err(err) => {
                    debug!(%err, "token dropped");
                    dropped += 1;
                    None
                }
            })
            .filter(|token| !token.is_empty() && !self.is_stop_word(token))
            .collect();
        AnalyzedDocument { tokens, dropped }
    }
}

impl<T> Tokenizer for Box<T>
where
    T: Tokenizer + ?Sized,
{
    fn language(&self) -> Language {
        (**self).language()
    }

    fn split(&self, document: &str) -> Vec<String> {
        (**self).split(document)
    }

    fn normalize(&self, term: &str) -> Result<String, TokenError> {
        (**self).normalize(term)
    }

    fn is_stop_word(&self, term: &str) -> bool {
        (**self).is_stop_word(term)
    }
}

/// Default strategy for a language, chosen at runtime.
pub fn tokenizer_for(language: Language, hmm: bool) -> Box<dyn Tokenizer> {
    match language {
        Language::Chinese => Box::new(ChineseTokenizer::new(JiebaSegmenter::new(hmm))),
        Language::English => Box::new(LatinTokenizer::new(SnowballStemmer::english())),
    }
}
