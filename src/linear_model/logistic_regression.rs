use crate::error::{Error, Result};
use crate::metrics;
use crate::optimizer::{self, Hypothesis, TrainConfig, sigmoid};
use crate::preprocessing::{self, ScalingStats};
use crate::{Matrix, Vector};

#[derive(Clone, Debug)]
pub struct LogisticRegression {
    /// Learned weights, one per augmented column (index 0 is the intercept).
    pub weights: Option<Vector>,
    /// Per-epoch log-loss, newest first.
    pub loss_history: Vec<f64>,
    scaling: Option<ScalingStats>,
    config: TrainConfig,
    decision_boundary: f64,
}

impl LogisticRegression {
    pub fn new(config: TrainConfig) -> Self {
        Self {
            weights: None,
            loss_history: Vec::new(),
            scaling: None,
            config,
            decision_boundary: 0.5,
        }
    }

    /// Probability threshold above which an observation is classified as 1.
    pub fn decision_boundary(mut self, decision_boundary: f64) -> Self {
        self.decision_boundary = decision_boundary;
        self
    }

    /// Fits weights with mini-batch gradient descent on log-loss.
    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(Error::DimensionMismatch(format!(
                "x has {} rows but y has {} entries",
                x.nrows(),
                y.len()
            )));
        }

        validate_labels(y)?;

        let scaling = ScalingStats::fit(x)?;
        let features = preprocessing::add_intercept_column(&scaling.transform(x));

        let (weights, history) =
            optimizer::run_training(&features, y, Hypothesis::Logistic, &self.config)?;

        self.weights = Some(weights);
        self.loss_history = history;
        self.scaling = Some(scaling);
        Ok(())
    }

    /// Class probabilities for unscaled observations.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector> {
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
        Ok(features.dot(weights).mapv(sigmoid))
    }

    /// {0,1} class predictions; a probability strictly above the decision
    /// boundary becomes class 1.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let probabilities = self.predict_proba(x)?;
        let boundary = self.decision_boundary;
        Ok(probabilities.mapv(|p| if p > boundary { 1.0 } else { 0.0 }))
    }

    /// Classification accuracy against held-out {0,1} labels.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let predictions = self.predict(x)?;
        metrics::accuracy_score(y, &predictions)
    }
}

fn validate_labels(y: &Vector) -> Result<()> {
    for &label in y.iter() {
        if label != 0.0 && label != 1.0 {
            return Err(Error::InvalidLabels(format!(
                "labels must be 0 or 1 for binary classification, got {}",
                label
            )));
        }
    }
    Ok(())
}
