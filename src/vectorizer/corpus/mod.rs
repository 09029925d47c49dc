use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{engine::tokenizer::{AnalyzedDocument, Tokenizer}, vectorizer::token::TermFrequency};

/// Count recorded for the first occurrence of a term.
///
/// Every later occurrence adds one, so a term seen `k` times has a count
/// of `k - 1`. `min_count = m` therefore admits terms seen at least
/// `m + 1` times, see [`required_occurrences`].
pub const FIRST_OCCURRENCE_COUNT: u64 = 0;

/// Threshold used when the caller gives none.
pub const DEFAULT_MIN_COUNT: u64 = 2;

const PROGRESS_INTERVAL: usize = 100;

/// Occurrences across the corpus a term needs to pass `min_count`.
#[inline]
pub const fn required_occurrences(min_count: u64) -> u64 {
    min_count + 1 - FIRST_OCCURRENCE_COUNT
}

/// Terms selected as vector dimensions, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// selected terms
    terms: IndexSet<String>,
    /// global counter of every observed term
    term_counts: IndexMap<String, u64>,
    min_count: u64,
    dropped_tokens: usize,
}

impl Vocabulary {
    /// Count already-filtered token sequences and select the terms whose
    /// counter reaches `min_count`.
    pub fn from_token_docs<D>(documents: &[D], min_count: u64) -> Self
    where
        D: AsRef<[String]>,
    {
        let total = documents.len();
        let mut term_counts: IndexMap<String, u64> = IndexMap::new();
        for (i, doc) in documents.iter().enumerate() {
            if (i + 1) % PROGRESS_INTERVAL == 0 {
                info!("processing {}/{}", i + 1, total);
            }
            for token in doc.as_ref() {
                term_counts
                    .entry(token.clone())
                    .and_modify(|count| *count += 1)
                    .or_insert(FIRST_OCCURRENCE_COUNT);
            }
        }

        let terms = term_counts
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(term, _)| term.clone())
            .collect();

        Self {
            terms,
            term_counts,
            min_count,
            dropped_tokens: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Column of the term in vectors built from this vocabulary.
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Selected terms, in first-seen order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Every observed term, selected or not, in first-seen order.
    pub fn observed_terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }

    /// Raw counter of an observed term (occurrences minus one).
    #[inline]
    pub fn term_count(&self, term: &str) -> Option<u64> {
        self.term_counts.get(term).copied()
    }

    #[inline]
    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    /// Tokens lost to normalization failures while building.
    #[inline]
    pub fn dropped_tokens(&self) -> usize {
        self.dropped_tokens
    }
}

/// Filtered token sequences of a corpus and the vocabulary selected from them.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub vocabulary: Vocabulary,
    /// one token sequence per document, input order
    pub documents: Vec<Vec<String>>,
}

impl Corpus {
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Per-document term counts, input order.
    pub fn term_frequencies(&self) -> Vec<TermFrequency> {
        self.documents
            .par_iter()
            .map(|tokens| tokens.iter().collect::<TermFrequency>())
            .collect()
    }
}

/// Tokenize every document, drop stop words, and select the vocabulary.
///
/// Documents are analyzed in parallel; counting runs in input order so the
/// vocabulary order only depends on the corpus.
pub fn build_vocabulary<T, S>(documents: &[S], tokenizer: &T, min_count: u64) -> Corpus
where
    T: Tokenizer + ?Sized,
    S: AsRef<str> + Sync,
{
    let analyzed: Vec<AnalyzedDocument> = documents
        .par_iter()
        .map(|doc| tokenizer.analyze(doc.as_ref()))
        .collect();

    let dropped_tokens = analyzed.iter().map(|doc| doc.dropped).sum();
    let documents: Vec<Vec<String>> = analyzed.into_iter().map(|doc| doc.tokens).collect();

    let mut vocabulary = Vocabulary::from_token_docs(&documents, min_count);
    vocabulary.dropped_tokens = dropped_tokens;
    debug!(
        language = %tokenizer.language(),
        docs = documents.len(),
        observed = vocabulary.term_counts.len(),
        selected = vocabulary.len(),
        dropped_tokens,
        "vocabulary built"
    );

    Corpus { vocabulary, documents }
}
