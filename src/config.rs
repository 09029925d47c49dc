//! Vectorizer settings, loaded from `config/default.toml`, an optional file
//! and `TFIDF__*` environment variables (later sources override earlier ones).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    engine::Language,
    error::Result,
    vectorizer::{compute::SimilarityAlgorithm, corpus::DEFAULT_MIN_COUNT},
};

/// 設定ファイルの探索候補 (拡張子 .toml 抜き)
const DEFAULT_CONFIG_NAMES: [&str; 2] = ["config/default", "../config/default"];

const ENV_PREFIX: &str = "TFIDF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// corpus language, `zh` / `en` accepted
    pub language: Language,
    /// vocabulary threshold
    pub min_count: u64,
    /// jieba HMM for unknown words
    pub hmm: bool,
    pub algorithm: SimilarityAlgorithm,
    /// IDF table reused by `text_similarity` when the file exists
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_count: DEFAULT_MIN_COUNT,
            hmm: true,
            algorithm: SimilarityAlgorithm::default(),
            vocabulary_path: None,
        }
    }
}

/// Load settings.
///
/// 1. the first `config/default.toml` found, if any
/// 2. `config_path`, if given and present
/// 3. `TFIDF__*` environment variables (`TFIDF__MIN_COUNT=0`)
pub fn load_config(config_path: Option<PathBuf>) -> Result<VectorizerConfig> {
    let mut builder = ::config::Config::builder();

    for name in DEFAULT_CONFIG_NAMES {
        if Path::new(&format!("{name}.toml")).exists() {
            builder = builder.add_source(::config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(path) = config_path {
        if path.exists() {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
    }

    builder = builder.add_source(
        ::config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    Ok(builder.build()?.try_deserialize()?)
}
