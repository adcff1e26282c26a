use crate::error::{Error, Result};

/// A feature vector plus the label of the cluster it was assigned to.
///
/// The label is `None` until a clustering run sets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Feature values (e.g. `[r, g, b]` for a pixel).
    pub features: Vec<f32>,
    /// Cluster index in `0..k`, once assigned.
    pub label: Option<usize>,
}

impl Point {
    /// Create an unlabeled point.
    pub fn new(features: Vec<f32>) -> Self {
        Self {
            features,
            label: None,
        }
    }

    /// Feature vector length.
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

impl From<Vec<f32>> for Point {
    fn from(features: Vec<f32>) -> Self {
        Self::new(features)
    }
}

/// Check that `data` is non-empty, rectangular, and finite. Returns the dimension `n`.
pub(crate) fn validate_dataset(data: &[Vec<f32>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let dim = first.len();
    if dim == 0 {
        return Err(Error::InvalidParameter {
            name: "data",
            message: "points must have at least one feature",
        });
    }

    for (index, point) in data.iter().enumerate() {
        if point.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: point.len(),
            });
        }
        if point.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteValue { index });
        }
    }

    Ok(dim)
}
