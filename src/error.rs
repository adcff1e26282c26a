#[cfg(feature = "image")]
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by clustering and image I/O in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Requested number of passes is zero.
    #[error("invalid iteration count: requested {requested}, must be at least 1")]
    InvalidIterationCount {
        /// Requested number of passes.
        requested: usize,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A feature value is NaN or infinite.
    #[error("non-finite feature value in point {index}")]
    NonFiniteValue {
        /// Index of the offending point.
        index: usize,
    },

    /// Filesystem failure at the image boundary.
    #[cfg(feature = "image")]
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Image decode or encode failure.
    #[cfg(feature = "image")]
    #[error("image error on {}: {source}", .path.display())]
    Image {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: image::ImageError,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
