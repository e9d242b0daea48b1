use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{MlErr, Result};

/// An in-memory labeled dataset: a feature matrix with one sample per row and a binary target
/// per sample.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array2<f32>,
    y: Array1<f32>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The feature matrix, `n_samples x n_features`.
    /// * `y` - The targets, one label in {0, 1} per sample.
    ///
    /// # Returns
    /// The dataset, or an error if the shapes disagree or a label is not binary.
    pub fn new(x: Array2<f32>, y: Array1<f32>) -> Result<Self> {
        check_samples(x.view(), y.view())?;
        Ok(Self { x, y })
    }

    /// Creates a new `Dataset` from a row-major flat buffer where each row holds `x_size`
    /// features followed by its label.
    ///
    /// # Arguments
    /// * `data` - The raw rows.
    /// * `x_size` - The amount of features per sample.
    pub fn from_inline(data: Vec<f32>, x_size: usize) -> Result<Self> {
        if x_size == 0 {
            return Err(MlErr::InvalidArgument("a sample needs at least one feature"));
        }

        let row_size = x_size + 1;
        if data.len() % row_size != 0 {
            return Err(MlErr::ShapeMismatch {
                what: "inline dataset rows",
                got: data.len() % row_size,
                expected: 0,
            });
        }

        let rows = Array2::from_shape_vec((data.len() / row_size, row_size), data).map_err(
            |_| MlErr::ShapeMismatch {
                what: "inline dataset rows",
                got: 0,
                expected: row_size,
            },
        )?;

        let (x, y) = rows.view().split_at(Axis(1), x_size);
        Self::new(x.to_owned(), y.column(0).to_owned())
    }

    /// The feature matrix.
    pub fn x(&self) -> ArrayView2<'_, f32> {
        self.x.view()
    }

    /// The targets.
    pub fn y(&self) -> ArrayView1<'_, f32> {
        self.y.view()
    }

    /// The amount of samples.
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// The amount of features per sample.
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

/// Checks the invariants a feature matrix and its targets must hold to be trained on.
pub(crate) fn check_samples(x: ArrayView2<f32>, y: ArrayView1<f32>) -> Result<()> {
    let (n_samples, n_features) = x.dim();

    if n_samples == 0 {
        return Err(MlErr::InvalidArgument("the feature matrix has no samples"));
    }

    if n_features == 0 {
        return Err(MlErr::InvalidArgument("the feature matrix has no features"));
    }

    if y.len() != n_samples {
        return Err(MlErr::ShapeMismatch {
            what: "targets",
            got: y.len(),
            expected: n_samples,
        });
    }

    if y.iter().any(|&label| label != 0. && label != 1.) {
        return Err(MlErr::InvalidArgument("targets must be labels in {0, 1}"));
    }

    Ok(())
}
