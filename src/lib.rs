//! Density-Based Spatial Clustering of Applications with Noise ("DBSCAN")
//! in Rust. Generic over floating point numeric types.
//!
//! DBSCAN groups points that sit in densely populated regions of the input
//! space and labels the remainder noise. The main benefits of DBSCAN are
//! that:
//!  1. It does not assume that all data points belong to a cluster, as many
//!     clustering algorithms do. I.e. a data set can contain "noise" points.
//!     This is important for modelling real world data, which is inherently
//!     noisy;
//!  2. It makes no assumptions about the number of clusters there have to
//!     be, unlike KMeans clustering. The number of clusters falls out of the
//!     density threshold; and
//!  3. Clusters can take arbitrary shapes. Any chain of points whose
//!     neighbourhoods keep meeting the density threshold is connected into
//!     one cluster.
//!
//! The density threshold is set by two hyper parameters: `epsilon`, the
//! neighbourhood radius, and `min_pts`, the number of neighbours (the point
//! itself included) a point needs within that radius to be a *core point*.
//! Clusters grow outwards from core points through their neighbourhoods.
//! Points inside a core point's neighbourhood that are not core themselves
//! join the cluster as *border points* but do not extend it further; points
//! reachable from no core point are noise. How neighbours are found is
//! pluggable through the [`RangeQuery`] trait; built-in backends cover
//! brute force scans and k-d trees.
//!
//! # Examples
//! ```
//!use dbscan::{Dbscan, DbscanHyperParams};
//!
//!let data: Vec<Vec<f32>> = vec![
//!    vec![1.0, 1.0],
//!    vec![1.1, 1.1],
//!    vec![0.9, 1.0],
//!    vec![5.0, 5.0],
//!    vec![5.1, 5.0],
//!    vec![4.9, 5.1],
//!    vec![10.0, 10.0],
//!];
//!let hyper_params = DbscanHyperParams::builder()
//!    .epsilon(0.5)
//!    .min_pts(3)
//!    .build();
//!let clusterer = Dbscan::new(&data, hyper_params);
//!let result = clusterer.cluster().unwrap();
//!assert_eq!(2, result.n_clusters());
//!assert_eq!(vec![0, 0, 0, 1, 1, 1, -1], result.labels());
//! ```
//!
//! # References
//! * [Ester, M., Kriegel, H.-P., Sander, J., Xu, X. A density-based algorithm for discovering clusters in large spatial databases with noise.](https://www.aaai.org/Papers/KDD/1996/KDD96-037.pdf)

pub use crate::centers::Center;
pub use crate::dbscan::Dbscan;
pub use crate::distance::DistanceMetric;
pub use crate::error::DbscanError;
pub use crate::hyper_parameters::{DbscanHyperParams, HyperParamBuilder};
pub use crate::progress::ClusterProgress;
pub use crate::range_query::{RangeQuery, RangeQueryAlgorithm};
pub use crate::result::ClusterResult;

mod centers;
mod dbscan;
mod distance;
mod error;
mod hyper_parameters;
mod progress;
mod range_query;
mod result;
mod validation;
