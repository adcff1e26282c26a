//! Clustering of dense vectors.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! For color quantization the points are pixels and the centroids become the palette.
//!
//! ## Labels
//!
//! Labels are `0..k`. Output is always in input order: `fit.points[i]` carries the
//! features of `data[i]`.
//!
//! ## Usage
//!
//! ```rust
//! use kquant::cluster::{Clustering, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let fit = Kmeans::new(2)
//!     .with_iter(10)
//!     .with_centroids(vec![vec![0.0, 0.0], vec![10.0, 10.0]])
//!     .fit(&data)
//!     .unwrap();
//! let labels = fit.labels();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//!
//! // Trait-generic use.
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! ```

mod kmeans;
mod point;
mod traits;
mod util;

pub use kmeans::{DegenerateCluster, Kmeans, KmeansFit, DEFAULT_ITER};
pub use point::Point;
pub use traits::Clustering;
