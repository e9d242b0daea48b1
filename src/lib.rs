//! A linear binary classifier (Adaline) trained with full-batch gradient descent.
//!
//! ```
//! use adaline::{Adaline, Dataset};
//! use ndarray::array;
//!
//! let dataset = Dataset::new(
//!     array![[-2., -1.], [-1., -2.], [1., 2.], [2., 1.]],
//!     array![0., 0., 1., 1.],
//! )?;
//!
//! let mut adaline = Adaline::new(0.005, 1);
//! let _labels = adaline.fit_dataset(&dataset, 15)?.predict(dataset.x())?;
//! # Ok::<(), adaline::MlErr>(())
//! ```

pub mod arch;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod optimization;
pub mod report;

pub use classifier::Adaline;
pub use config::{AdalineConfig, DatasetConfig, TrainingConfig};
pub use dataset::Dataset;
pub use error::{MlErr, Result};
pub use report::TrainingReport;
