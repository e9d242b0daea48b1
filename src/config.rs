use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{MlErr, Result, dataset::Dataset};

/// The default learning rate of an `Adaline`.
pub const DEFAULT_LEARNING_RATE: f32 = 1e-2;

/// The default seed for the weight initialization of an `Adaline`.
pub const DEFAULT_SEED: u64 = 1;

/// The amount of epochs of the default training session.
pub const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(15).unwrap();

/// The hyperparameters of an `Adaline`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdalineConfig {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f32,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for AdalineConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

fn default_learning_rate() -> f32 {
    DEFAULT_LEARNING_RATE
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetConfig {
    /// Row-major samples, each made of `x_size` features followed by its label.
    Inline { data: Vec<f32>, x_size: usize },
}

impl DatasetConfig {
    /// Materializes the configured dataset.
    pub fn build(&self) -> Result<Dataset> {
        match self {
            DatasetConfig::Inline { data, x_size } => Dataset::from_inline(data.clone(), *x_size),
        }
    }
}

/// Everything needed to run a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default)]
    pub model: AdalineConfig,
    pub epochs: NonZeroUsize,
    pub dataset: DatasetConfig,
}

impl TrainingConfig {
    /// Loads a `TrainingConfig` from a JSON file.
    ///
    /// # Errors
    /// `MlErr::Config` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| MlErr::Config(format!("cannot read '{}': {e}", path.display())))?;

        Self::from_json(&content)
    }

    /// Parses a `TrainingConfig` from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| MlErr::Config(format!("invalid JSON: {e}")))
    }
}

impl Default for TrainingConfig {
    /// Two linearly separable clusters of two samples each, trained for 15 epochs with a
    /// learning rate of 0.005.
    fn default() -> Self {
        let data = vec![
            -2., -1., 0., //
            -1., -2., 0., //
            1., 2., 1., //
            2., 1., 1., //
        ];

        Self {
            model: AdalineConfig {
                learning_rate: 5e-3,
                seed: DEFAULT_SEED,
            },
            epochs: DEFAULT_EPOCHS,
            dataset: DatasetConfig::Inline { data, x_size: 2 },
        }
    }
}
