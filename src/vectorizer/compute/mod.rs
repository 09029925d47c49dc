pub mod compare;

use num::Num;
use serde::{Deserialize, Serialize};

use crate::{error::Result, vectorizer::compute::compare::{Compare, DefaultCompare}};

/// Scoring function between two vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityAlgorithm {
    /// angle only, 0 when either side is the zero vector
    #[default]
    Cosine,
    /// linear correlation, fails on constant input
    Pearson,
}

impl SimilarityAlgorithm {
    pub fn score<N>(&self, vec: &[N], other: &[N]) -> Result<f64>
    where
        N: Num + Copy + Into<f64>,
    {
        match self {
            SimilarityAlgorithm::Cosine => <DefaultCompare as Compare<N>>::cosine_similarity(vec, other),
            SimilarityAlgorithm::Pearson => <DefaultCompare as Compare<N>>::pearson_correlation(vec, other),
        }
    }
}
