pub mod stop_words;
pub mod tokenizer;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Language of a corpus.
/// Selects the tokenizer strategy and the stop-word table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// jieba segmentation
    #[default]
    #[serde(alias = "zh")]
    Chinese,
    /// regex tokenization + Snowball stemming
    #[serde(alias = "en")]
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" | "chinese" => Ok(Language::Chinese),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Chinese => f.write_str("chinese"),
            Language::English => f.write_str("english"),
        }
    }
}
