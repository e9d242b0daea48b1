use ndarray::{Array1, ArrayView1};

use super::Activation;

/// The identity activation, what makes an Adaline an Adaline and not a perceptron.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Activation for Identity {
    fn f(&self, z: f32) -> f32 {
        z
    }

    fn activate(&self, net_input: ArrayView1<f32>) -> Array1<f32> {
        net_input.to_owned()
    }
}
