use serde::Serialize;

/// A snapshot of a finished training, enough for a plotting tool to draw the loss curve and the
/// decision boundary `weights . x + bias = 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub epochs: usize,
    pub losses: Vec<f32>,
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl TrainingReport {
    /// The loss of the last epoch, if any epoch ran.
    pub fn final_loss(&self) -> Option<f32> {
        self.losses.last().copied()
    }

    /// Serializes the report as pretty printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
