use ndarray::{Array1, ArrayView1};

/// A hard threshold: `top` when the input reaches `tresh`, `bottom` otherwise.
///
/// Only used at prediction time, training never goes through it.
#[derive(Clone, Copy, Debug)]
pub struct Step<T> {
    top: T,
    bottom: T,
    tresh: f32,
}

impl<T: Copy> Step<T> {
    pub fn new(top: T, bottom: T, tresh: f32) -> Self {
        Self { top, bottom, tresh }
    }

    pub fn f(&self, z: f32) -> T {
        if z >= self.tresh {
            self.top
        } else {
            self.bottom
        }
    }

    pub fn apply(&self, z: ArrayView1<f32>) -> Array1<T> {
        z.mapv(|z| self.f(z))
    }
}

impl Default for Step<u8> {
    /// The class label step: 1 for non negative net inputs, 0 otherwise.
    fn default() -> Self {
        Self::new(1, 0, 0.)
    }
}
