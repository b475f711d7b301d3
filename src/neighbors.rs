//! K-nearest-neighbors prediction over standardized features.

use crate::error::{Error, Result};
use crate::preprocessing::ScalingStats;
use crate::{Matrix, Vector};
use ndarray::Axis;
use std::cmp::Ordering;

/// Predicts a value for `query` as the mean label of its `k` nearest
/// training rows under Euclidean distance.
///
/// Features and query are both standardized with statistics fitted on the
/// training features alone. Neighbor labels are always averaged, never
/// majority-voted, so {0,1} labels come back as a fraction rather than a
/// class. Equal distances keep their row order (the sort is stable).
pub fn knn_predict(features: &Matrix, labels: &Vector, query: &Vector, k: usize) -> Result<f64> {
    if features.nrows() != labels.len() {
        return Err(Error::DimensionMismatch(format!(
            "features has {} rows but labels has {} entries",
            features.nrows(),
            labels.len()
        )));
    }
    if query.len() != features.ncols() {
        return Err(Error::DimensionMismatch(format!(
            "query has {} entries but features has {} columns",
            query.len(),
            features.ncols()
        )));
    }
    if k == 0 || k > features.nrows() {
        return Err(Error::InvalidParameter(format!(
            "k must be between 1 and the number of training rows ({}), got {}",
            features.nrows(),
            k
        )));
    }

    let stats = ScalingStats::fit(features)?;
    let scaled = stats.transform(features);
    let scaled_query = stats.transform_row(query);

    let mut neighbors: Vec<(f64, f64)> = scaled
        .axis_iter(Axis(0))
        .zip(labels.iter())
        .map(|(row, &label)| {
            let distance = (&row - &scaled_query).mapv(|d| d * d).sum().sqrt();
            (distance, label)
        })
        .collect();

    neighbors.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let total: f64 = neighbors.iter().take(k).map(|&(_, label)| label).sum();
    Ok(total / k as f64)
}
