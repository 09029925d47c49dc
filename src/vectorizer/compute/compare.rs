use num::Num;

use crate::error::{Error, Result};

pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> Result<f64>;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    fn cosine_similarity(vec: &[N], other: &[N]) -> Result<f64>;
    /// ピアソン相関係数
    /// r = Σ((x_i - x̄)(y_i - ȳ)) / sqrt(Σ(x_i - x̄)^2 * Σ(y_i - ȳ)^2)
    fn pearson_correlation(vec: &[N], other: &[N]) -> Result<f64>;
}

#[derive(Debug)]
pub struct DefaultCompare;

#[inline]
fn check_dim<N>(vec: &[N], other: &[N]) -> Result<()> {
    if vec.len() != other.len() {
        return Err(Error::DimensionMismatch {
            left: vec.len(),
            right: other.len(),
        });
    }
    Ok(())
}

impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + Into<f64>,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> Result<f64> {
        check_dim(vec, other)?;
        Ok(vec
            .iter()
            .zip(other)
            .map(|(&a, &b)| Into::<f64>::into(a) * Into::<f64>::into(b))
            .sum())
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> Result<f64> {
        check_dim(vec, other)?;
        let mut dot = 0_f64;
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        for (&a, &b) in vec.iter().zip(other) {
            let (a, b): (f64, f64) = (a.into(), b.into());
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        // ゼロベクトルは0
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }
        Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
    }

    fn pearson_correlation(vec: &[N], other: &[N]) -> Result<f64> {
        check_dim(vec, other)?;
        if vec.is_empty() {
            return Err(Error::ZeroVariance);
        }
        let n = vec.len() as f64;
        let mean_x = vec.iter().map(|&x| Into::<f64>::into(x)).sum::<f64>() / n;
        let mean_y = other.iter().map(|&y| Into::<f64>::into(y)).sum::<f64>() / n;

        let mut sum_product = 0_f64;
        let mut sum_x_sq = 0_f64;
        let mut sum_y_sq = 0_f64;
        for (&x, &y) in vec.iter().zip(other) {
            let (x, y): (f64, f64) = (x.into(), y.into());
            let dx = x - mean_x;
            let dy = y - mean_y;
            sum_product += dx * dy;
            sum_x_sq += dx * dx;
            sum_y_sq += dy * dy;
        }
        if sum_x_sq == 0.0 || sum_y_sq == 0.0 {
            return Err(Error::ZeroVariance);
        }
        Ok(sum_product / (sum_x_sq * sum_y_sq).sqrt())
    }
}

/// Cosine similarity with [`DefaultCompare`].
#[inline]
pub fn cosine_similarity<N>(vec: &[N], other: &[N]) -> Result<f64>
where
    N: Num + Copy + Into<f64>,
{
    <DefaultCompare as Compare<N>>::cosine_similarity(vec, other)
}

/// Pearson correlation with [`DefaultCompare`].
#[inline]
pub fn pearson_correlation<N>(vec: &[N], other: &[N]) -> Result<f64>
where
    N: Num + Copy + Into<f64>,
{
    <DefaultCompare as Compare<N>>::pearson_correlation(vec, other)
}
