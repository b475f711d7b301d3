//! Linear models trained with batch gradient descent.
//!
//! This module provides:
//! - `LinearRegression`: mini-batch gradient descent on mean squared error
//! - `LogisticRegression`: mini-batch gradient descent on log-loss for
//!   binary classification
//!
//! Both models standardize their training features once, keep those frozen
//! statistics for every later prediction, and adapt the learning rate from
//! the per-epoch loss history.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use minilearn::{LinearRegression, TrainConfig};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = LinearRegression::new(TrainConfig::new(4).iterations(200));
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use minilearn::{LogisticRegression, TrainConfig};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = LogisticRegression::new(TrainConfig::new(4).iterations(200));
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! ```

mod linear_regression;
mod logistic_regression;

pub use linear_regression::LinearRegression;
pub use logistic_regression::LogisticRegression;
