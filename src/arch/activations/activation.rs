use ndarray::{Array1, ArrayView1};

/// The function applied to the net input to get the training-time output of a neuron.
///
/// The output is what the loss and the gradient are computed against.
pub trait Activation {
    /// Applies the activation to a single net input.
    fn f(&self, z: f32) -> f32;

    /// Applies the activation elementwise over a batch of net inputs.
    fn activate(&self, net_input: ArrayView1<f32>) -> Array1<f32> {
        net_input.mapv(|z| self.f(z))
    }
}
