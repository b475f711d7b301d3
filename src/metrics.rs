use crate::error::{Error, Result};
use crate::Vector;

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch(format!(
            "y_true has {} entries but y_pred has {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    let mse = diff.mapv(|x| x * x).sum() / y_true.len() as f64;
    Ok(mse)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Cross-entropy over predicted probabilities, clipped away from 0 and 1 so
/// a saturated prediction cannot turn the whole epoch's loss into infinity.
pub fn log_loss(y_true: &Vector, y_proba: &Vector) -> Result<f64> {
    check_lengths(y_true, y_proba)?;

    let epsilon = 1e-15;
    let loss = y_true
        .iter()
        .zip(y_proba.iter())
        .map(|(&y, &p)| {
            let p = p.clamp(epsilon, 1.0 - epsilon);
            -y * p.ln() - (1.0 - y) * (1.0 - p).ln()
        })
        .sum::<f64>();

    Ok(loss / y_true.len() as f64)
}

/// Fraction of correct {0,1} predictions, counted through the sum of
/// absolute differences.
pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let n = y_true.len() as f64;
    let incorrect = (y_pred - y_true).mapv(f64::abs).sum();
    Ok((n - incorrect) / n)
}
