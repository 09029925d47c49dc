use num::Float;
use rayon::prelude::*;

/// L2ノルム
/// ||x|| = Sqrt(X0^2 + X1^2 + .. + Xn^2)
#[inline]
pub fn l2_norm<N>(vec: &[N]) -> N
where
    N: Float,
{
    vec.iter().fold(N::zero(), |acc, &v| acc + v * v).sqrt()
}

/// L2正規化
/// Xi = Xi / Sqrt(X0^2 + X1^2 + .. + Xn^2)
///
/// ゼロベクトルは割らずにそのまま返す (NaNにしない)
#[inline]
pub fn l2_normalize<N>(vec: &[N]) -> Vec<N>
where
    N: Float,
{
    let norm = l2_norm(vec);
    if norm == N::zero() {
        return vec.to_vec();
    }
    vec.iter().map(|&v| v / norm).collect()
}

/// 複数ベクトルのL2正規化 (並列)
pub fn l2_normalize_all<N>(vectors: &[Vec<N>]) -> Vec<Vec<N>>
where
    N: Float + Send + Sync,
{
    vectors.par_iter().map(|vec| l2_normalize(vec)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn normalized_vector_has_unit_length() {
        let v = l2_normalize(&[3.0_f64, 4.0]);
        assert!((v[0] - 0.6).abs() < EPS);
        assert!((v[1] - 0.8).abs() < EPS);
        assert!((l2_norm(&v) - 1.0).abs() < EPS);
    }

    #[test]
    fn zero_vector_is_returned_unchanged() {
        let v = l2_normalize(&[0.0_f64, 0.0, 0.0]);
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
        assert!(v.iter().all(|x| !x.is_nan()));
        assert!(l2_normalize::<f64>(&[]).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs: [&[f64]; 3] = [&[1.0, 2.0, 3.0], &[-0.4, 0.0, 7.5, 1e-3], &[0.0, -2.0]];
        for input in inputs {
            let once = l2_normalize(input);
            let twice = l2_normalize(&once);
            for (a, b) in once.iter().zip(&twice) {
                assert!((a - b).abs() < EPS);
            }
        }
    }

    #[test]
    fn negative_components_keep_their_sign() {
        let v = l2_normalize(&[-2.0_f32, 0.0]);
        assert_eq!(v, vec![-1.0_f32, 0.0]);
    }

    #[test]
    fn normalize_all_keeps_row_order() {
        let rows = l2_normalize_all(&[vec![0.0, 5.0], vec![2.0, 0.0], vec![0.0, 0.0]]);
        assert_eq!(rows, vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 0.0]]);
    }
}
