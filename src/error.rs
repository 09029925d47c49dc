use thiserror::Error;

/// Errors surfaced to the caller.
/// Tokenization failures are not here: they are recovered per token.
#[derive(Error, Debug)]
pub enum Error {
    #[error("vector dimensions differ: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("input has zero variance, correlation is undefined")]
    ZeroVariance,

    #[error("cannot fit an empty corpus")]
    EmptyCorpus,

    #[error("document index {index} out of range for {len} documents")]
    DocumentIndex { index: usize, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Codec(#[from] serde_cbor::Error),

    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
