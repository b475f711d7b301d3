//! Batch gradient descent shared by the linear and logistic models.
//!
//! Both models use the same update rule `w ← w − lr · xᵗ(h(xw) − y) / rows`;
//! only the hypothesis function `h` differs (identity for linear regression,
//! sigmoid for logistic regression), which makes the transpose-matmul form
//! the exact analytic gradient of MSE and of log-loss respectively.

use crate::error::Result;
use crate::metrics;
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, ArrayView2, s};

/// Maps the linear combination `x·w` to a prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hypothesis {
    Linear,
    Logistic,
}

impl Hypothesis {
    pub fn activate(&self, z: Vector) -> Vector {
        match self {
            Hypothesis::Linear => z,
            Hypothesis::Logistic => z.mapv(sigmoid),
        }
    }
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    if z > 500.0 {
        1.0
    } else if z < -500.0 {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}

/// Hyperparameters for a gradient-descent training run.
///
/// `learning_rate` is only the initial step size; it is adapted every epoch
/// by [`AdaptiveLearningRate`]. `batch_size` has no default; each epoch takes
/// `floor(n / batch_size)` contiguous batches of exactly that many rows, and
/// remainder rows are never trained on.
#[derive(Clone, Debug)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub iterations: usize,
    pub batch_size: usize,
}

impl TrainConfig {
    pub fn new(batch_size: usize) -> Self {
        if batch_size == 0 {
            panic!("batch_size must be > 0, got {}", batch_size);
        }

        Self {
            learning_rate: 0.1,
            iterations: 1000,
            batch_size,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// One weight vector being optimized, updated in place batch by batch.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    pub weights: Vector,
    hypothesis: Hypothesis,
}

impl GradientDescent {
    pub fn new(n_features: usize, hypothesis: Hypothesis) -> Self {
        Self {
            weights: Vector::zeros(n_features),
            hypothesis,
        }
    }

    /// Performs one gradient step on a batch of augmented features.
    pub fn step(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>, learning_rate: f64) {
        let guesses = self.hypothesis.activate(x.dot(&self.weights));
        let residual = &guesses - &y;
        let gradient = x.t().dot(&residual) / x.nrows() as f64;
        self.weights = &self.weights - &(gradient * learning_rate);
    }
}

/// Adapts the learning rate from the loss history, newest entry first.
///
/// A heuristic line-search substitute, not a guaranteed-convergent schedule:
/// halve when the last epoch made the loss worse, otherwise grow by 5%.
#[derive(Clone, Debug)]
pub struct AdaptiveLearningRate {
    pub rate: f64,
}

impl AdaptiveLearningRate {
    pub fn new(initial_rate: f64) -> Self {
        Self { rate: initial_rate }
    }

    pub fn update(&mut self, loss_history: &[f64]) {
        if loss_history.len() < 2 {
            return;
        }

        if loss_history[0] > loss_history[1] {
            self.rate /= 2.0;
        } else {
            self.rate *= 1.05;
        }
    }
}

/// Runs the full epoch × batch loop over standardized, augmented features.
///
/// Each epoch visits `floor(n / batch_size)` contiguous batches in order,
/// then records the epoch loss (over the full matrix, remainder rows
/// included) at the front of the history and adapts the rate. The epoch
/// count is fixed; there is no early stopping, and a diverging run simply
/// leaves non-finite values in the history.
pub(crate) fn run_training(
    x: &Matrix,
    y: &Vector,
    hypothesis: Hypothesis,
    config: &TrainConfig,
) -> Result<(Vector, Vec<f64>)> {
    let n_batches = x.nrows() / config.batch_size;
    let mut descent = GradientDescent::new(x.ncols(), hypothesis);
    let mut schedule = AdaptiveLearningRate::new(config.learning_rate);
    let mut history: Vec<f64> = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        for batch in 0..n_batches {
            let start = batch * config.batch_size;
            let end = start + config.batch_size;
            descent.step(
                x.slice(s![start..end, ..]),
                y.slice(s![start..end]),
                schedule.rate,
            );
        }

        let guesses = hypothesis.activate(x.dot(&descent.weights));
        let loss = match hypothesis {
            Hypothesis::Linear => metrics::mean_squared_error(y, &guesses)?,
            Hypothesis::Logistic => metrics::log_loss(y, &guesses)?,
        };
        history.insert(0, loss);
        schedule.update(&history);
    }

    Ok((descent.weights, history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sigmoid() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert!(sigmoid(2.0) > 0.5);
    }

    #[test]
    fn test_hypothesis_activate() {
        let z = array![-1.0, 0.0, 1.0];
        let linear = Hypothesis::Linear.activate(z.clone());
        assert_eq!(linear, z);

        let logistic = Hypothesis::Logistic.activate(z);
        assert!((logistic[1] - 0.5).abs() < 1e-12);
        assert!(logistic[0] < 0.5 && logistic[2] > 0.5);
    }

    #[test]
    fn test_config_defaults() {
        let config = TrainConfig::new(10);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.batch_size, 10);
    }

    #[test]
    #[should_panic(expected = "batch_size must be > 0")]
    fn test_config_rejects_zero_batch() {
        TrainConfig::new(0);
    }

    #[test]
    fn test_step_moves_weights_toward_labels() {
        // y = 2x with an intercept column already prepended
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let y = array![2.0, 4.0, 6.0];
        let mut descent = GradientDescent::new(2, Hypothesis::Linear);

        let before = y.mapv(|v| v * v).sum() / 3.0;
        descent.step(x.view(), y.view(), 0.1);
        let guesses = x.dot(&descent.weights);
        let after = (&guesses - &y).mapv(|v| v * v).sum() / 3.0;

        assert!(after < before);
        assert_eq!(descent.weights.len(), 2);
    }

    #[test]
    fn test_adaptive_rate_needs_two_entries() {
        let mut schedule = AdaptiveLearningRate::new(0.1);
        schedule.update(&[]);
        assert_eq!(schedule.rate, 0.1);
        schedule.update(&[1.0]);
        assert_eq!(schedule.rate, 0.1);
    }

    #[test]
    fn test_adaptive_rate_halves_on_worse_loss() {
        let mut schedule = AdaptiveLearningRate::new(0.4);
        // newest first: loss went 2.0 -> 5.0
        schedule.update(&[5.0, 2.0]);
        assert_eq!(schedule.rate, 0.2);
    }

    #[test]
    fn test_adaptive_rate_grows_on_improvement() {
        let mut schedule = AdaptiveLearningRate::new(0.2);
        schedule.update(&[1.0, 2.0]);
        assert!((schedule.rate - 0.21).abs() < 1e-12);

        // equal losses also grow
        let mut flat = AdaptiveLearningRate::new(0.2);
        flat.update(&[2.0, 2.0]);
        assert!((flat.rate - 0.21).abs() < 1e-12);
    }

    #[test]
    fn test_run_training_drops_remainder_rows() {
        // 3 rows, batch_size 2: the wildly inconsistent row 2 is never
        // trained on, so one epoch must produce the same weights as
        // training on the first two rows alone. A single epoch keeps the
        // adaptive rate out of the comparison (the recorded losses differ,
        // since the epoch loss does include the remainder row).
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 30.0]];
        let y = array![1.0, 2.0, -50.0];
        let config = TrainConfig::new(2).iterations(1);

        let (full, _) = run_training(&x, &y, Hypothesis::Linear, &config).unwrap();
        let head_x = array![[1.0, 1.0], [1.0, 2.0]];
        let head_y = array![1.0, 2.0];
        let (head, _) = run_training(&head_x, &head_y, Hypothesis::Linear, &config).unwrap();

        assert_eq!(full, head);
        assert!(full.iter().any(|&w| w != 0.0));
    }

    #[test]
    fn test_run_training_history_is_newest_first() {
        let x = array![[1.0, -1.0], [1.0, 1.0]];
        let y = array![0.0, 2.0];
        let config = TrainConfig::new(2).iterations(50).learning_rate(0.1);

        let (_, history) = run_training(&x, &y, Hypothesis::Linear, &config).unwrap();
        assert_eq!(history.len(), 50);
        // newest (front) loss should be far below the first epoch's loss
        assert!(history[0] < history[history.len() - 1]);
    }

    #[test]
    fn test_run_training_batch_larger_than_rows_takes_no_steps() {
        let x = array![[1.0, 1.0], [1.0, 2.0]];
        let y = array![1.0, 2.0];
        let config = TrainConfig::new(5).iterations(3);

        let (weights, history) = run_training(&x, &y, Hypothesis::Linear, &config).unwrap();
        assert!(weights.iter().all(|&w| w == 0.0));
        assert_eq!(history.len(), 3);
    }
}
