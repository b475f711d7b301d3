use crate::error::{Error, Result};
use crate::metrics;
use crate::optimizer::{self, Hypothesis, TrainConfig};
use crate::preprocessing::{self, ScalingStats};
use crate::{Matrix, Vector};

#[derive(Clone, Debug)]
pub struct LinearRegression {
    /// Learned weights, one per augmented column (index 0 is the intercept).
    pub weights: Option<Vector>,
    /// Per-epoch mean squared error, newest first.
    pub loss_history: Vec<f64>,
    scaling: Option<ScalingStats>,
    config: TrainConfig,
}

impl LinearRegression {
    pub fn new(config: TrainConfig) -> Self {
        Self {
            weights: None,
            loss_history: Vec::new(),
            scaling: None,
            config,
        }
    }

    /// Fits weights with mini-batch gradient descent on mean squared error.
    ///
    /// Standardization statistics are computed here, once, from `x`, and
    /// frozen for every later `predict` and `score` call.
    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(Error::DimensionMismatch(format!(
                "x has {} rows but y has {} entries",
                x.nrows(),
                y.len()
            )));
        }

        let scaling = ScalingStats::fit(x)?;
        let features = preprocessing::add_intercept_column(&scaling.transform(x));

        let (weights, history) =
            optimizer::run_training(&features, y, Hypothesis::Linear, &self.config)?;

        self.weights = Some(weights);
        self.loss_history = history;
        self.scaling = Some(scaling);
        Ok(())
    }

    /// Predicts raw target values for unscaled observations.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let weights = self.weights.as_ref().ok_or(Error::NotFitted)?;
        let scaling = self.scaling.as_ref().ok_or(Error::NotFitted)?;

        if x.ncols() + 1 != weights.len() {
            return Err(Error::DimensionMismatch(format!(
                "x has {} feature columns but the model was trained with {}",
                x.ncols(),
                weights.len() - 1
            )));
        }

        let features = preprocessing::add_intercept_column(&scaling.transform(x));
        Ok(features.dot(weights))
    }

    /// R² of the model's predictions against held-out labels.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let predictions = self.predict(x)?;
        metrics::r2_score(y, &predictions)
    }
}
