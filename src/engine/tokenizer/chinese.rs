use std::sync::OnceLock;

use jieba_rs::Jieba;
use regex::Regex;

use crate::engine::{tokenizer::{TokenError, Tokenizer}, Language};

/// dictionary is loaded once and shared read-only
static JIEBA: OnceLock<Jieba> = OnceLock::new();
static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
static LATIN_LETTERS: OnceLock<Regex> = OnceLock::new();

fn jieba() -> &'static Jieba {
    JIEBA.get_or_init(Jieba::new)
}

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"))
}

fn latin_letters() -> &'static Regex {
    LATIN_LETTERS.get_or_init(|| Regex::new(r"[A-Za-z]").expect("valid latin pattern"))
}

/// Word segmentation backend.
/// Must be deterministic and keep the left-to-right order of the text.
pub trait Segmenter: Send + Sync {
    fn cut(&self, text: &str) -> Vec<String>;
}

/// jieba-rs segmenter, HMM for unknown words on by default
#[derive(Debug, Clone, Copy)]
pub struct JiebaSegmenter {
    hmm: bool,
}

impl JiebaSegmenter {
    pub fn new(hmm: bool) -> Self {
        Self { hmm }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Segmenter for JiebaSegmenter {
    fn cut(&self, text: &str) -> Vec<String> {
        jieba()
            .cut(text, self.hmm)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Chinese strategy.
/// Punctuation and Latin letters are removed before segmentation,
/// segments are trimmed, stop words are matched case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct ChineseTokenizer<S = JiebaSegmenter>
where
    S: Segmenter,
{
    segmenter: S,
}

impl<S> ChineseTokenizer<S>
where
    S: Segmenter,
{
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// Text handed to the segmenter: no punctuation, no `A-Z`/`a-z`.
    pub fn strip(text: &str) -> String {
        let without_punct = punctuation().replace_all(text, "");
        latin_letters().replace_all(&without_punct, "").into_owned()
    }
}

impl<S> Tokenizer for ChineseTokenizer<S>
where
    S: Segmenter,
{
    fn language(&self) -> Language {
        Language::Chinese
    }

    fn split(&self, document: &str) -> Vec<String> {
        self.segmenter.cut(&Self::strip(document))
    }

    fn normalize(&self, term: &str) -> Result<String, TokenError> {
        Ok(term.trim().to_string())
    }
}
