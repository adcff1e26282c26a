//! Fixed-budget k-means for color quantization.
//!
//! `kquant` partitions dense `f32` vectors into `k` groups by Lloyd iterations and
//! ships the glue to run it over image pixels.
//!
//! The primary public API is under [`cluster`], which provides:
//! - k-means (uniform random seeding, a fixed number of passes, empty clusters
//!   keep their previous centroid)
//!
//! With the default `image` feature, [`pixels`] reads images into point lists and
//! writes quantized point lists back out.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
#[cfg(feature = "image")]
pub mod pixels;

pub use cluster::{Clustering, DegenerateCluster, Kmeans, KmeansFit, Point};
pub use error::{Error, Result};
#[cfg(feature = "image")]
pub use pixels::{quantize_image, PixelImage};
