/// This crate measures how similar documents are, using TF-IDF vectors and
/// cosine or Pearson scoring, for Chinese and English text.
pub mod config;
pub mod engine;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The top-level struct of this crate.
/// It tokenizes a document collection with a language strategy, selects the
/// vocabulary, fits an IDF table and turns every document into a TF-IDF
/// vector whose columns follow the vocabulary order.
///
/// Internally, it holds:
/// - The tokenizer strategy (`Tokenizer`)
/// - The vocabulary threshold `min_count`
/// - The fitted IDF table cache, shared as `Arc<IdfTable>`
///
/// `TFIDFVectorizer<T, E>` has the following generic parameters:
/// - `T`: Tokenizer strategy (default `Box<dyn Tokenizer>`)
/// - `E`: TF-IDF calculation engine type (default `DefaultTFIDFEngine`)
///
/// `transform` fits the IDF table only while the cache is empty and reuses it
/// afterwards, even for another corpus. `fit`, `fit_transform` and
/// `clear_idf` reset it explicitly.
///
/// # Persistence
/// The IDF table can be saved to and loaded from a CBOR file.
pub use vectorizer::TFIDFVectorizer;

/// TF-IDF Matrix
/// Result of one `transform` call: one dense row per document plus the IDF
/// table the columns refer to. Rows can be L2-normalized and compared pairwise.
pub use vectorizer::TFIDFMatrix;

/// IDF Table
/// Ordered term -> IDF mapping, `ln(N / (1 + df))` for every vocabulary term.
/// Its order is the column order of every vector built from it.
///
/// # Serialization
/// Supported (CBOR via `to_bytes` / `save`).
pub use vectorizer::IdfTable;

/// Similarity of two texts in one call, configured by `VectorizerConfig`.
pub use vectorizer::text_similarity;

/// Term Frequency structure
/// A struct for managing term occurrence counts within a document.
/// It manages:
/// - The count of occurrences of each term
/// - The total number of terms in the document
///
/// Used as base data for TF (Term Frequency) calculation.
pub use vectorizer::token::TermFrequency;

/// Vocabulary and Corpus
/// `build_vocabulary` tokenizes every document, removes stop words and keeps
/// the terms whose global counter reaches `min_count`.
/// The counter starts at 0 on a term's first occurrence, so `min_count = m`
/// keeps terms seen at least `m + 1` times.
pub use vectorizer::corpus::{build_vocabulary, Corpus, Vocabulary};

/// IDF computation and vector assembly with the default engine.
pub use vectorizer::tfidf::{assemble_vectors, compute_idf};

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different TF-IDF calculation strategies
/// into `TFIDFVectorizer<T, E>`.
/// A default implementation, `DefaultTFIDFEngine`, is provided and uses the raw
/// term count as TF and `ln(N / (1 + df))` as IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Vector comparison
/// - Cosine Similarity: 0 when either vector is the zero vector
/// - Pearson Correlation: fails with `Error::ZeroVariance` on constant input
///
/// Both fail with `Error::DimensionMismatch` when the lengths differ.
pub use vectorizer::compute::compare::{cosine_similarity, pearson_correlation, Compare, DefaultCompare};

/// Similarity Algorithm
/// Selects the scoring function (`Cosine` or `Pearson`).
pub use vectorizer::compute::SimilarityAlgorithm;

/// L2 normalization. The zero vector is returned unchanged.
pub use utils::normalizer::l2_normalize;

/// Tokenizer strategies
/// - Chinese: punctuation and Latin letters removed, then jieba segmentation
/// - English: pattern replacements, separator split, Snowball stemming
///
/// Stop words of the language are filtered before and after normalization.
pub use engine::{stop_words::is_stop_word, tokenizer::Tokenizer, Language};

pub use error::{Error, Result};

pub use crate::config::{load_config, VectorizerConfig};
