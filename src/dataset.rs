use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::{Axis, s};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A feature matrix with its parallel label vector.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(Error::DimensionMismatch(format!(
                "features has {} rows but labels has {} entries",
                features.nrows(),
                labels.len()
            )));
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Reorders rows with a seeded Fisher-Yates permutation, keeping each
    /// feature row paired with its label. Deterministic for a given seed.
    ///
    /// Shuffling happens here, before training; the training loop itself
    /// visits batches in a fixed order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut indices: Vec<usize> = (0..self.n_samples()).collect();
        indices.shuffle(&mut rng);

        self.features = self.features.select(Axis(0), &indices);
        self.labels = self.labels.select(Axis(0), &indices);
    }

    /// Splits into a leading training set and trailing test set.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(Error::InvalidParameter(format!(
                "test_size must be between 0 and 1, got {}",
                test_size
            )));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train = Dataset::new(
            self.features.slice(s![..n_train, ..]).to_owned(),
            self.labels.slice(s![..n_train]).to_owned(),
        )?;
        let test = Dataset::new(
            self.features.slice(s![n_train.., ..]).to_owned(),
            self.labels.slice(s![n_train..]).to_owned(),
        )?;

        Ok((train, test))
    }
}
