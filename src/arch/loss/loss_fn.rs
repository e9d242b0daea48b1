use ndarray::{Array1, ArrayView1};

pub trait LossFn {
    /// The loss of `y_pred` against the expected `y`.
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32;

    /// The errors `y - y_pred` the loss is computed from.
    fn errors(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        &y - &y_pred
    }
}
