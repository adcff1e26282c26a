//! K-means with uniform random seeding and a fixed pass budget.
//!
//! # The Algorithm (Lloyd, 1982)
//!
//! 1. **Seed**: draw `k` centroids uniformly at random, with replacement, from the
//!    input points.
//! 2. **Assign**: compute the `m x k` matrix of squared Euclidean distances and label
//!    each point with the column holding its row minimum.
//! 3. **Update**: move each centroid to the per-feature mean of its members.
//! 4. Repeat steps 2-3 exactly `iter` times.
//!
//! There is no tolerance-based stopping rule: a run always performs every pass, even
//! after assignments stop changing.
//!
//! ## Empty clusters
//!
//! Seeding with replacement can pick the same point twice, and two identical
//! centroids can never both win a point (ties go to the lower index). A cluster with
//! no members keeps its previous centroid. Each occurrence is recorded as a
//! [`DegenerateCluster`] on the result and logged at `warn` level.
//!
//! ## Complexity
//!
//! - **Time**: O(iter * m * k * n).
//! - **Space**: O(m * k) for the distance matrix.

use rand::prelude::*;

use super::point::{validate_dataset, Point};
use super::traits::Clustering;
use super::util::{argmin, squared_euclidean};
use crate::error::{Error, Result};

/// Default number of passes.
pub const DEFAULT_ITER: usize = 50;

/// K-means clustering configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Number of assign/update passes.
    iter: usize,
    /// Seed for the random initializer. `None` draws one from entropy.
    seed: Option<u64>,
    /// Explicit starting centroids, bypassing random seeding.
    centroids: Option<Vec<Vec<f32>>>,
}

/// A cluster that received no points during one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateCluster {
    /// Zero-based pass index.
    pub pass: usize,
    /// Index of the empty cluster.
    pub cluster: usize,
}

/// Output of a k-means run.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Input points in input order, each labeled with its final cluster.
    pub points: Vec<Point>,
    /// Final centroids, `k x n`.
    pub centroids: Vec<Vec<f32>>,
    /// Sum of squared distances from each point to its labeled centroid.
    pub inertia: f32,
    /// Every empty-cluster event, in pass order.
    pub degenerate: Vec<DegenerateCluster>,
    /// Final label per point, mirrors `points[i].label`.
    labels: Vec<usize>,
}

impl Kmeans {
    /// Create a k-means clusterer with `k` clusters and the default pass budget.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iter: DEFAULT_ITER,
            seed: None,
            centroids: None,
        }
    }

    /// Set the number of passes.
    pub fn with_iter(mut self, iter: usize) -> Self {
        self.iter = iter;
        self
    }

    /// Seed the random initializer for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from these centroids instead of sampling.
    ///
    /// Must contain exactly `k` vectors of the dataset's dimension.
    pub fn with_centroids(mut self, centroids: Vec<Vec<f32>>) -> Self {
        self.centroids = Some(centroids);
        self
    }

    /// Configured pass budget.
    pub fn n_iter(&self) -> usize {
        self.iter
    }

    /// Run k-means on `data`.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let n = self.validate(data)?;
        let m = data.len();

        let mut centroids = match &self.centroids {
            Some(c) => c.clone(),
            None => {
                let seed = self.seed.unwrap_or_else(|| rand::rng().random());
                tracing::debug!(seed, "seeding centroids");
                let mut rng = StdRng::seed_from_u64(seed);
                sample_centroids(data, self.k, &mut rng)
            }
        };

        tracing::debug!(m, n, k = self.k, iter = self.iter, "k-means start");

        let mut labels = vec![0usize; m];
        let mut degenerate = Vec::new();

        for pass in 0..self.iter {
            let distances = distance_matrix(data, &centroids);
            assign_from_distances(&distances, self.k, &mut labels);

            if tracing::enabled!(tracing::Level::DEBUG) {
                let sse: f64 = labels
                    .iter()
                    .enumerate()
                    .map(|(i, &l)| distances[i * self.k + l] as f64)
                    .sum();
                tracing::debug!(pass, inertia = sse, "assignment done");
            }

            let empty = update_centroids(data, &labels, &mut centroids);
            for cluster in empty {
                tracing::warn!(pass, cluster, "empty cluster, keeping previous centroid");
                degenerate.push(DegenerateCluster { pass, cluster });
            }
        }

        Ok(assemble(data, &labels, centroids, degenerate))
    }

    fn validate(&self, data: &[Vec<f32>]) -> Result<usize> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > data.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: data.len(),
            });
        }
        if self.iter == 0 {
            return Err(Error::InvalidIterationCount {
                requested: self.iter,
            });
        }

        let n = validate_dataset(data)?;

        if let Some(init) = &self.centroids {
            if init.len() != self.k {
                return Err(Error::InvalidParameter {
                    name: "centroids",
                    message: "must contain exactly k vectors",
                });
            }
            for c in init {
                if c.len() != n {
                    return Err(Error::DimensionMismatch {
                        expected: n,
                        found: c.len(),
                    });
                }
                if c.iter().any(|v| !v.is_finite()) {
                    return Err(Error::InvalidParameter {
                        name: "centroids",
                        message: "must be finite",
                    });
                }
            }
        }

        Ok(n)
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

impl KmeansFit {
    /// Final label of every point, in input order.
    pub fn labels(&self) -> Vec<usize> {
        self.labels.clone()
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Member count per cluster under the final labels.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k()];
        for &l in &self.labels {
            sizes[l] += 1;
        }
        sizes
    }

    /// Nearest centroid for a new point.
    pub fn predict(&self, point: &[f32]) -> Result<usize> {
        let n = self.centroids.first().map_or(0, Vec::len);
        if point.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: point.len(),
            });
        }
        let row: Vec<f32> = self
            .centroids
            .iter()
            .map(|c| squared_euclidean(point, c))
            .collect();
        Ok(argmin(&row))
    }

    /// Every point replaced by its centroid, in input order.
    pub fn quantized(&self) -> Vec<Vec<f32>> {
        self.labels
            .iter()
            .map(|&l| self.centroids[l].clone())
            .collect()
    }
}

/// Draw `k` centroids uniformly at random, with replacement, from `data`.
pub(crate) fn sample_centroids<R: Rng + ?Sized>(
    data: &[Vec<f32>],
    k: usize,
    rng: &mut R,
) -> Vec<Vec<f32>> {
    (0..k)
        .map(|_| data[rng.random_range(0..data.len())].clone())
        .collect()
}

/// Row-major `m x k` matrix of squared distances, filled one centroid column at a time.
#[cfg(not(feature = "parallel"))]
pub(crate) fn distance_matrix(data: &[Vec<f32>], centroids: &[Vec<f32>]) -> Vec<f32> {
    let k = centroids.len();
    let mut out = vec![0.0f32; data.len() * k];
    for (j, c) in centroids.iter().enumerate() {
        for (i, p) in data.iter().enumerate() {
            out[i * k + j] = squared_euclidean(p, c);
        }
    }
    out
}

/// Row-major `m x k` matrix of squared distances, rows computed in parallel.
#[cfg(feature = "parallel")]
pub(crate) fn distance_matrix(data: &[Vec<f32>], centroids: &[Vec<f32>]) -> Vec<f32> {
    use rayon::prelude::*;

    let k = centroids.len();
    let mut out = vec![0.0f32; data.len() * k];
    out.par_chunks_mut(k)
        .zip(data.par_iter())
        .for_each(|(row, p)| {
            for (d, c) in row.iter_mut().zip(centroids) {
                *d = squared_euclidean(p, c);
            }
        });
    out
}

/// Label each row with its minimum column.
pub(crate) fn assign_from_distances(distances: &[f32], k: usize, labels: &mut [usize]) {
    for (label, row) in labels.iter_mut().zip(distances.chunks_exact(k)) {
        *label = argmin(row);
    }
}

/// Move each centroid to the mean of its members.
///
/// Empty clusters keep their current value. Returns their indices.
pub(crate) fn update_centroids(
    data: &[Vec<f32>],
    labels: &[usize],
    centroids: &mut [Vec<f32>],
) -> Vec<usize> {
    let k = centroids.len();
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &l) in labels.iter().enumerate() {
        groups[l].push(i);
    }

    let mut empty = Vec::new();
    for (j, members) in groups.iter().enumerate() {
        if members.is_empty() {
            empty.push(j);
            continue;
        }

        // Accumulate in f64: pixel datasets routinely exceed f32's exact-integer range.
        let mut sums = vec![0.0f64; centroids[j].len()];
        for &i in members {
            for (s, &v) in sums.iter_mut().zip(&data[i]) {
                *s += v as f64;
            }
        }
        let count = members.len() as f64;
        for (c, s) in centroids[j].iter_mut().zip(sums) {
            *c = (s / count) as f32;
        }
    }
    empty
}

/// Label a copy of `data` by position.
fn assemble(
    data: &[Vec<f32>],
    labels: &[usize],
    centroids: Vec<Vec<f32>>,
    degenerate: Vec<DegenerateCluster>,
) -> KmeansFit {
    let points: Vec<Point> = data
        .iter()
        .zip(labels)
        .map(|(features, &l)| Point {
            features: features.clone(),
            label: Some(l),
        })
        .collect();

    let inertia = points
        .iter()
        .zip(labels)
        .map(|(p, &l)| squared_euclidean(&p.features, &centroids[l]) as f64)
        .sum::<f64>() as f32;

    KmeansFit {
        points,
        centroids,
        inertia,
        degenerate,
        labels: labels.to_vec(),
    }
}
