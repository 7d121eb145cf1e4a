use crate::{DbscanError, DbscanHyperParams};
use num_traits::Float;

pub(crate) mod brute_force;
pub(crate) mod kd_tree;
#[cfg(feature = "parallel")]
pub(crate) mod precomputed;

// Above this many samples, Auto switches from brute force to a k-d tree.
pub(crate) const BRUTE_FORCE_N_SAMPLES_LIMIT: usize = 1_000;

/// The capability DBSCAN needs from a spatial index: given a data point,
/// find every point within a radius of it.
///
/// Implementations must be deterministic for a fixed dataset and radius,
/// must include the queried point itself in the result (its distance to
/// itself is zero), must use an inclusive comparison against the radius,
/// and must not mutate the dataset. No ordering of the returned indices is
/// required, but a fixed dataset must always produce the same ordering.
///
/// The built-in backends are selected through [`RangeQueryAlgorithm`];
/// custom indexes (grids, ball trees, disk-resident structures) plug in via
/// `Dbscan::cluster_with_index`. A failing backend aborts the run with
/// [`DbscanError::RangeQueryFailure`].
pub trait RangeQuery<T> {
    /// Returns the indices of all data points whose distance to the point
    /// at `id` is no greater than `epsilon`, including `id` itself.
    fn neighbours(&self, id: usize, epsilon: T) -> Result<Vec<usize>, DbscanError>;
}

/// The built-in range query backend options
#[derive(Debug, Clone, PartialEq)]
pub enum RangeQueryAlgorithm {
    /// The backend is selected internally based on the size of the
    /// input data
    Auto,
    /// Compares the queried point against every other point
    BruteForce,
    /// K-dimensional tree algorithm.
    KdTree,
}

pub(crate) enum RangeQueryBackend<'a, T: std::cmp::PartialEq> {
    BruteForce(brute_force::BruteForceRangeQuery<'a, T>),
    KdTree(kd_tree::KdTreeRangeQuery<'a, T>),
}

impl<'a, T: Float> RangeQueryBackend<'a, T> {
    pub(crate) fn select(
        data: &'a [Vec<T>],
        hp: &DbscanHyperParams<T>,
    ) -> Result<Self, DbscanError> {
        let n_samples = data.len();
        let backend = match (&hp.range_query, n_samples) {
            (RangeQueryAlgorithm::Auto, usize::MIN..=BRUTE_FORCE_N_SAMPLES_LIMIT) => {
                Self::BruteForce(brute_force::BruteForceRangeQuery::new(data, hp.dist_metric))
            }
            (RangeQueryAlgorithm::Auto, _) => {
                Self::KdTree(kd_tree::KdTreeRangeQuery::new(data, hp.dist_metric)?)
            }
            (RangeQueryAlgorithm::BruteForce, _) => {
                Self::BruteForce(brute_force::BruteForceRangeQuery::new(data, hp.dist_metric))
            }
            (RangeQueryAlgorithm::KdTree, _) => {
                Self::KdTree(kd_tree::KdTreeRangeQuery::new(data, hp.dist_metric)?)
            }
        };
        Ok(backend)
    }
}

impl<'a, T: Float> RangeQuery<T> for RangeQueryBackend<'a, T> {
    fn neighbours(&self, id: usize, epsilon: T) -> Result<Vec<usize>, DbscanError> {
        match self {
            Self::BruteForce(backend) => backend.neighbours(id, epsilon),
            Self::KdTree(backend) => backend.neighbours(id, epsilon),
        }
    }
}
