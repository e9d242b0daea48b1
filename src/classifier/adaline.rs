use log::{debug, info};
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::{
    MlErr, Result,
    arch::{
        activations::{Activation, Identity, Step},
        loss::{LossFn, Mse},
    },
    config::{AdalineConfig, DEFAULT_LEARNING_RATE, DEFAULT_SEED},
    dataset::{self, Dataset},
    initialization::{ParamGen, RandParamGen},
    optimization::{GradientDescent, Optimizer},
    report::TrainingReport,
};

const INIT_MEAN: f32 = 0.;
const INIT_STD_DEV: f32 = 1e-2;
const INIT_BIAS: f32 = 0.;

/// ADAptive LInear NEuron: a linear binary classifier trained with full-batch gradient descent
/// on the mean squared error of its continuous output.
///
/// The parameters live packed in a single buffer, the weights first and the bias last, and are
/// only present once a `fit` call succeeded.
#[derive(Debug, Clone)]
pub struct Adaline<A: Activation = Identity> {
    learning_rate: f32,
    seed: u64,
    activation: A,
    threshold: Step<u8>,
    loss_fn: Mse,

    params: Option<Vec<f32>>,
    losses: Vec<f32>,
}

impl Adaline<Identity> {
    /// Creates a new, unfitted `Adaline`.
    ///
    /// # Arguments
    /// * `learning_rate` - The length of the gradient steps taken on each epoch.
    /// * `seed` - The seed of the weight initialization, makes `fit` reproducible.
    pub fn new(learning_rate: f32, seed: u64) -> Self {
        Self::with_activation(learning_rate, seed, Identity)
    }

    /// Creates a new, unfitted `Adaline` from its config.
    pub fn from_config(config: &AdalineConfig) -> Self {
        Self::new(config.learning_rate, config.seed)
    }
}

impl Default for Adaline<Identity> {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE, DEFAULT_SEED)
    }
}

impl<A: Activation> Adaline<A> {
    /// Creates a new, unfitted `Adaline` that trains through the given activation.
    pub fn with_activation(learning_rate: f32, seed: u64, activation: A) -> Self {
        Self {
            learning_rate,
            seed,
            activation,
            threshold: Step::default(),
            loss_fn: Mse::new(),
            params: None,
            losses: Vec::new(),
        }
    }

    /// Trains the classifier from scratch for `epochs` epochs.
    ///
    /// Any previous training is discarded: the weights are drawn again from a normal
    /// distribution `N(0, 0.01)` seeded with this classifier's seed, the bias starts at zero and
    /// the loss history is cleared. On each epoch the whole batch is used to take one step:
    ///
    /// * `errors = y - activation(x . w + b)`
    /// * `w += learning_rate * x^T . errors`
    /// * `b += learning_rate * sum(errors)`
    ///
    /// # Arguments
    /// * `x` - The feature matrix, `n_samples x n_features`.
    /// * `y` - The targets, one label in {0, 1} per sample.
    /// * `epochs` - The amount of passes over the batch.
    ///
    /// # Returns
    /// The fitted classifier, to allow chaining.
    ///
    /// # Errors
    /// * `MlErr::InvalidArgument` if `epochs` is zero, the learning rate is not a positive
    ///   number, the matrix is empty or a label is not binary.
    /// * `MlErr::ShapeMismatch` if `y` doesn't have one label per sample.
    ///
    /// On error the classifier keeps its previous state.
    pub fn fit(
        &mut self,
        x: ArrayView2<f32>,
        y: ArrayView1<f32>,
        epochs: usize,
    ) -> Result<&mut Self> {
        if epochs == 0 {
            return Err(MlErr::InvalidArgument("epochs must be positive"));
        }

        if !(self.learning_rate.is_finite() && self.learning_rate > 0.) {
            return Err(MlErr::InvalidArgument(
                "the learning rate must be a positive number",
            ));
        }

        dataset::check_samples(x, y)?;

        let n_features = x.ncols();
        let mut params = self.init_params(n_features)?;
        let mut grad = vec![0.; params.len()];
        let mut optimizer = GradientDescent::new(self.learning_rate);
        let mut losses = Vec::with_capacity(epochs);

        for epoch in 1..=epochs {
            let net_input = compute_net_input(x, &params);
            let output = self.activation.activate(net_input.view());
            let errors = self.loss_fn.errors(output.view(), y);
            let loss = self.loss_fn.loss(output.view(), y);

            write_grad(x, errors.view(), &mut grad);
            optimizer.update_params(&mut params, &grad);

            losses.push(loss);
            info!("epoch {epoch} of {epochs} loss: {loss}");
        }

        self.params = Some(params);
        self.losses = losses;
        Ok(self)
    }

    /// Same as `fit`, taking the samples from a `Dataset`.
    pub fn fit_dataset(&mut self, dataset: &Dataset, epochs: usize) -> Result<&mut Self> {
        self.fit(dataset.x(), dataset.y(), epochs)
    }

    /// Predicts the class label of each sample: 1 when its net input is non negative, 0
    /// otherwise.
    ///
    /// # Errors
    /// * `MlErr::NotFitted` if the classifier was never fitted.
    /// * `MlErr::ShapeMismatch` if the samples don't have as many features as the ones it was
    ///   fitted with.
    pub fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<u8>> {
        let net_input = self.net_input(x)?;
        Ok(self.threshold.apply(net_input.view()))
    }

    /// Computes `x . w + b` for each sample.
    ///
    /// # Errors
    /// Same as `predict`.
    pub fn net_input(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        let params = self.params.as_deref().ok_or(MlErr::NotFitted)?;
        let n_features = params.len() - 1;

        if x.ncols() != n_features {
            return Err(MlErr::ShapeMismatch {
                what: "features",
                got: x.ncols(),
                expected: n_features,
            });
        }

        Ok(compute_net_input(x, params))
    }

    /// The training-time activation, the identity for an Adaline.
    pub fn activation(&self, net_input: ArrayView1<f32>) -> Array1<f32> {
        self.activation.activate(net_input)
    }

    /// The fraction of samples whose predicted label matches its target.
    pub fn score(&self, x: ArrayView2<f32>, y: ArrayView1<f32>) -> Result<f32> {
        let y_pred = self.predict(x)?;

        if y_pred.len() != y.len() {
            return Err(MlErr::ShapeMismatch {
                what: "targets",
                got: y.len(),
                expected: y_pred.len(),
            });
        }

        let hits = y_pred
            .iter()
            .zip(y)
            .filter(|&(&label, &target)| f32::from(label) == target)
            .count();

        Ok(hits as f32 / y.len().max(1) as f32)
    }

    /// The weights, if fitted.
    pub fn weights(&self) -> Option<ArrayView1<'_, f32>> {
        self.params
            .as_deref()
            .map(|params| ArrayView1::from(&params[..params.len() - 1]))
    }

    /// The bias, if fitted.
    pub fn bias(&self) -> Option<f32> {
        self.params.as_deref().and_then(|params| params.last().copied())
    }

    /// The mean squared error of each epoch of the last fit.
    pub fn losses(&self) -> &[f32] {
        &self.losses
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// A snapshot of the last fit, `None` if never fitted.
    pub fn report(&self) -> Option<TrainingReport> {
        let weights = self.weights()?.to_vec();
        let bias = self.bias()?;

        Some(TrainingReport {
            epochs: self.losses.len(),
            losses: self.losses.clone(),
            weights,
            bias,
        })
    }

    fn init_params(&self, n_features: usize) -> Result<Vec<f32>> {
        let mut weight_gen =
            RandParamGen::seeded_normal(self.seed, n_features, INIT_MEAN, INIT_STD_DEV)?;

        let mut params = weight_gen
            .sample(n_features)
            .ok_or(MlErr::InvalidArgument("the feature matrix has no features"))?;
        params.push(INIT_BIAS);

        debug!(seed = self.seed, n_features = n_features; "initialized parameters");
        Ok(params)
    }
}

/// Splits a packed parameter buffer into its weights and bias.
fn view_params(params: &[f32]) -> (ArrayView1<'_, f32>, f32) {
    match params.split_last() {
        Some((&bias, weights)) => (ArrayView1::from(weights), bias),
        None => (ArrayView1::from(params), 0.),
    }
}

fn compute_net_input(x: ArrayView2<f32>, params: &[f32]) -> Array1<f32> {
    let (weights, bias) = view_params(params);
    x.dot(&weights) + bias
}

/// Writes the gradient of half the summed squared errors into `grad`, packed like the
/// parameters: `-x^T . errors` for the weights and `-sum(errors)` for the bias.
fn write_grad(x: ArrayView2<f32>, errors: ArrayView1<f32>, grad: &mut [f32]) {
    let (dw, db) = grad.split_at_mut(x.ncols());

    let w_step = x.t().dot(&errors);
    for (g, step) in dw.iter_mut().zip(&w_step) {
        *g = -step;
    }

    db[0] = -errors.sum();
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    fn separable() -> (Array2<f32>, Array1<f32>) {
        let x = array![[-2., -1.], [-1., -2.], [1., 2.], [2., 1.]];
        let y = array![0., 0., 1., 1.];
        (x, y)
    }

    #[test]
    fn unfitted_has_no_state() {
        let adaline = Adaline::default();

        assert!(!adaline.is_fitted());
        assert!(adaline.weights().is_none());
        assert!(adaline.bias().is_none());
        assert!(adaline.losses().is_empty());
        assert!(adaline.report().is_none());
        assert_eq!(adaline.learning_rate(), 0.01);
        assert_eq!(adaline.seed(), 1);
    }

    #[test]
    fn single_epoch_matches_update_rule() {
        let (x, y) = separable();
        let lr = 0.005;

        let mut adaline = Adaline::new(lr, 3);
        adaline.fit(x.view(), y.view(), 1).unwrap();

        let w0 = RandParamGen::seeded_normal(3, 2, INIT_MEAN, INIT_STD_DEV)
            .unwrap()
            .sample(2)
            .unwrap();
        let w0 = Array1::from(w0);
        let errors = &y - &x.dot(&w0);
        let expected_w = &w0 + &(x.t().dot(&errors) * lr);
        let expected_b = lr * errors.sum();
        let expected_loss = errors.mapv(|e| e * e).mean().unwrap();

        let weights = adaline.weights().unwrap();
        for (w, e) in weights.iter().zip(&expected_w) {
            assert!((w - e).abs() < 1e-6, "{w} != {e}");
        }
        assert!((adaline.bias().unwrap() - expected_b).abs() < 1e-6);
        assert!((adaline.losses()[0] - expected_loss).abs() < 1e-6);
    }

    #[test]
    fn init_params_are_seeded_weights_and_zero_bias() {
        let adaline = Adaline::new(0.005, 7);

        let params = adaline.init_params(3).unwrap();
        let weights = RandParamGen::seeded_normal(7, 3, INIT_MEAN, INIT_STD_DEV)
            .unwrap()
            .sample(3)
            .unwrap();

        assert_eq!(params.len(), 4);
        assert_eq!(params[..3], weights[..]);
        assert_eq!(params[3], 0.);
    }

    #[test]
    fn net_input_is_weighted_sum_plus_bias() {
        let (x, y) = separable();
        let mut adaline = Adaline::new(0.005, 1);
        adaline.fit(x.view(), y.view(), 5).unwrap();

        let w = adaline.weights().unwrap().to_owned();
        let b = adaline.bias().unwrap();
        let net_input = adaline.net_input(x.view()).unwrap();

        for (row, z) in x.rows().into_iter().zip(&net_input) {
            let expected = row.dot(&w) + b;
            assert!((z - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn activation_is_identity() {
        let adaline = Adaline::default();
        let z = array![-3., 0., 0.125, 42.];

        assert_eq!(adaline.activation(z.view()), z);
    }

    #[test]
    fn zero_epochs_is_invalid() {
        let (x, y) = separable();
        let mut adaline = Adaline::default();

        let err = adaline.fit(x.view(), y.view(), 0).unwrap_err();

        assert!(matches!(err, MlErr::InvalidArgument(_)));
        assert!(!adaline.is_fitted());
    }

    #[test]
    fn bad_learning_rate_is_invalid() {
        let (x, y) = separable();

        for lr in [0., -0.1, f32::NAN, f32::INFINITY] {
            let mut adaline = Adaline::new(lr, 1);
            let err = adaline.fit(x.view(), y.view(), 1).unwrap_err();
            assert!(matches!(err, MlErr::InvalidArgument(_)));
        }
    }

    #[test]
    fn mismatched_targets() {
        let (x, _) = separable();
        let y = array![0., 1.];
        let mut adaline = Adaline::default();

        let err = adaline.fit(x.view(), y.view(), 1).unwrap_err();

        assert!(matches!(
            err,
            MlErr::ShapeMismatch {
                what: "targets",
                got: 2,
                expected: 4,
            }
        ));
    }

    #[test]
    fn predict_before_fit() {
        let (x, _) = separable();
        let adaline = Adaline::default();

        assert!(matches!(adaline.predict(x.view()), Err(MlErr::NotFitted)));
    }

    #[test]
    fn predict_with_wrong_width() {
        let (x, y) = separable();
        let mut adaline = Adaline::default();
        adaline.fit(x.view(), y.view(), 2).unwrap();

        let err = adaline.predict(array![[1., 2., 3.]].view()).unwrap_err();

        assert!(matches!(
            err,
            MlErr::ShapeMismatch {
                what: "features",
                got: 3,
                expected: 2,
            }
        ));
    }

    #[test]
    fn failed_fit_keeps_previous_model() {
        let (x, y) = separable();
        let mut adaline = Adaline::new(0.005, 1);
        adaline.fit(x.view(), y.view(), 4).unwrap();
        let report = adaline.report();

        assert!(adaline.fit(x.view(), y.view(), 0).is_err());
        assert_eq!(adaline.report(), report);
    }

    #[test]
    fn score_on_training_set() {
        let (x, y) = separable();
        let mut adaline = Adaline::new(0.005, 1);

        let score = adaline.fit(x.view(), y.view(), 15).unwrap().score(x.view(), y.view());

        assert_eq!(score.unwrap(), 1.);
    }

    #[test]
    fn report_mirrors_state() {
        let (x, y) = separable();
        let mut adaline = Adaline::new(0.005, 1);
        adaline.fit(x.view(), y.view(), 3).unwrap();

        let report = adaline.report().unwrap();

        assert_eq!(report.epochs, 3);
        assert_eq!(report.losses, adaline.losses());
        assert_eq!(report.weights, adaline.weights().unwrap().to_vec());
        assert_eq!(report.bias, adaline.bias().unwrap());
    }
}
