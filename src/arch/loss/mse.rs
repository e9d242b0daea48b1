use ndarray::ArrayView1;

use super::LossFn;

/// Mean squared error loss function.
#[derive(Default, Clone, Copy, Debug)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        self.errors(y_pred, y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn mean_of_squared_errors() {
        let y_pred = array![0.5, 1.0, -1.0, 0.0];
        let y = array![0., 1., 1., 0.];

        assert_eq!(Mse.loss(y_pred.view(), y.view()), (0.25 + 0. + 4. + 0.) / 4.);
    }

    #[test]
    fn errors_are_target_minus_prediction() {
        let y_pred = array![0.25, 2.];
        let y = array![1., 0.];

        assert_eq!(Mse.errors(y_pred.view(), y.view()), array![0.75f32, -2.]);
    }

    #[test]
    fn empty_batch_has_no_loss() {
        let empty = ndarray::Array1::<f32>::zeros(0);
        assert_eq!(Mse.loss(empty.view(), empty.view()), 0.);
    }
}
