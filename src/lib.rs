pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod neighbors;
pub mod optimizer;
pub mod preprocessing;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use linear_model::{LinearRegression, LogisticRegression};
pub use neighbors::knn_predict;
pub use optimizer::TrainConfig;
pub use preprocessing::ScalingStats;
