//! Feature standardization and intercept augmentation.
//!
//! `ScalingStats` is an explicit value object: it is fitted once on the
//! training features and then threaded into every later `transform` call
//! (training batches, test split, prediction inputs), so train and test data
//! are always scaled with the same frozen statistics.

use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::{Axis, s};

/// Per-column mean and population variance of a feature matrix.
#[derive(Clone, Debug)]
pub struct ScalingStats {
    pub mean: Vector,
    pub variance: Vector,
}

impl ScalingStats {
    /// Computes column means and population variances (divisor `n`, not
    /// `n - 1`) from a reference matrix.
    pub fn fit(data: &Matrix) -> Result<Self> {
        let mean = data.mean_axis(Axis(0)).ok_or(Error::EmptyMatrix)?;
        let variance = data.var_axis(Axis(0), 0.0);

        Ok(Self { mean, variance })
    }

    /// Applies `(x - mean) / sqrt(variance)` column-wise.
    ///
    /// A zero-variance column divides by zero and yields non-finite values;
    /// this is deliberate, callers that care must check their inputs.
    pub fn transform(&self, data: &Matrix) -> Matrix {
        let std = self.variance.mapv(f64::sqrt);
        (data - &self.mean) / &std
    }

    /// Standardizes a single observation with the same frozen statistics.
    pub fn transform_row(&self, row: &Vector) -> Vector {
        let std = self.variance.mapv(f64::sqrt);
        (row - &self.mean) / &std
    }
}

/// Returns `data` with a leading column of ones, so the intercept can be
/// learned as an ordinary weight.
pub fn add_intercept_column(data: &Matrix) -> Matrix {
    let (n_samples, n_features) = (data.nrows(), data.ncols());
    let mut augmented = Matrix::ones((n_samples, n_features + 1));
    augmented.slice_mut(s![.., 1..]).assign(data);
    augmented
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_population_variance() {
        let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let stats = ScalingStats::fit(&data).unwrap();

        assert!((stats.mean[0] - 2.0).abs() < 1e-12);
        assert!((stats.mean[1] - 20.0).abs() < 1e-12);
        // population variance of [1, 2, 3] is 2/3, not 1
        assert!((stats.variance[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((stats.variance[1] - 200.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_round_trip() {
        let data = array![[1.0, 4.0], [2.0, 8.0], [3.0, 12.0], [4.0, 16.0]];
        let stats = ScalingStats::fit(&data).unwrap();
        let scaled = stats.transform(&data);

        let mean = scaled.mean_axis(Axis(0)).unwrap();
        let variance = scaled.var_axis(Axis(0), 0.0);
        for c in 0..2 {
            assert!(mean[c].abs() < 1e-12);
            assert!((variance[c] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transform_reuses_frozen_stats() {
        let train = array![[0.0], [10.0]];
        let stats = ScalingStats::fit(&train).unwrap();
        let other = array![[5.0], [15.0]];
        let scaled = stats.transform(&other);

        // scaled against the training mean/variance, not its own
        assert!((scaled[(0, 0)] - 0.0).abs() < 1e-12);
        assert!((scaled[(1, 0)] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_propagates_non_finite() {
        let data = array![[3.0, 1.0], [3.0, 2.0], [3.0, 3.0]];
        let stats = ScalingStats::fit(&data).unwrap();
        let scaled = stats.transform(&data);

        for r in 0..3 {
            assert!(!scaled[(r, 0)].is_finite());
            assert!(scaled[(r, 1)].is_finite());
        }
    }

    #[test]
    fn test_fit_empty_matrix() {
        let data = Matrix::zeros((0, 2));
        assert!(matches!(ScalingStats::fit(&data), Err(Error::EmptyMatrix)));
    }

    #[test]
    fn test_transform_row_matches_matrix_transform() {
        let data = array![[1.0, 2.0], [3.0, 6.0], [5.0, 10.0]];
        let stats = ScalingStats::fit(&data).unwrap();
        let scaled = stats.transform(&data);
        let row = stats.transform_row(&array![3.0, 6.0]);

        assert!((row[0] - scaled[(1, 0)]).abs() < 1e-12);
        assert!((row[1] - scaled[(1, 1)]).abs() < 1e-12);
    }

    #[test]
    fn test_add_intercept_column() {
        let data = array![[2.0, 3.0], [4.0, 5.0]];
        let augmented = add_intercept_column(&data);

        assert_eq!(augmented.shape(), &[2, 3]);
        for r in 0..2 {
            assert_eq!(augmented[(r, 0)], 1.0);
        }
        assert_eq!(augmented[(0, 1)], 2.0);
        assert_eq!(augmented[(0, 2)], 3.0);
        assert_eq!(augmented[(1, 1)], 4.0);
        assert_eq!(augmented[(1, 2)], 5.0);
    }
}
