use crate::distance::DistanceMetric;
use crate::range_query::RangeQueryAlgorithm;
use num_traits::Float;

// Defaults for parameters
const EPSILON_DEFAULT: f64 = 0.5;
const MIN_PTS_DEFAULT: usize = 5;
const DISTANCE_METRIC_DEFAULT: DistanceMetric = DistanceMetric::Euclidean;
const RANGE_QUERY_DEFAULT: RangeQueryAlgorithm = RangeQueryAlgorithm::Auto;

// Valid minimums/left bounds of parameters
const MIN_PTS_MINIMUM: usize = 1;

/// A wrapper around the hyper parameters used in DBSCAN clustering.
/// Only use if you want to tune hyper parameters. Otherwise use
/// `Dbscan::default_hyper_params` to instantiate the model with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DbscanHyperParams<T> {
    pub(crate) epsilon: T,
    pub(crate) min_pts: usize,
    pub(crate) dist_metric: DistanceMetric,
    pub(crate) range_query: RangeQueryAlgorithm,
}

/// Builder object to set custom hyper parameters.
pub struct HyperParamBuilder<T> {
    epsilon: Option<T>,
    min_pts: Option<usize>,
    dist_metric: Option<DistanceMetric>,
    range_query: Option<RangeQueryAlgorithm>,
}

impl<T: Float> DbscanHyperParams<T> {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom hyper parameters to be set
    /// using various setter methods.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn builder() -> HyperParamBuilder<T> {
        HyperParamBuilder {
            epsilon: None,
            min_pts: None,
            dist_metric: None,
            range_query: None,
        }
    }
}

impl<T: Float> HyperParamBuilder<T> {
    /// Sets epsilon - the neighbourhood radius. Two points are neighbours if
    /// the distance between them is no greater than epsilon. This is the main
    /// hyper parameter together with `min_pts`: it fixes the density
    /// threshold for the whole run. Defaults to 0.5.
    ///
    /// The value must be a positive, finite distance; this is checked when
    /// clustering starts, before any range query runs.
    ///
    /// # Parameters
    /// * epsilon - the neighbourhood radius
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn epsilon(mut self, epsilon: T) -> HyperParamBuilder<T> {
        self.epsilon = Some(epsilon);
        self
    }

    /// Sets min pts - the number of neighbours (the point itself included)
    /// a point needs within epsilon to be a core point. Points whose
    /// neighbourhood is smaller can only ever join a cluster as border
    /// points, or end up as noise. Defaults to 5.
    ///
    /// # Parameters
    /// * min_pts - the minimum neighbourhood size of a core point
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn min_pts(mut self, min_pts: usize) -> HyperParamBuilder<T> {
        let valid_min_pts =
            HyperParamBuilder::<T>::validate_input_left_bound(min_pts, MIN_PTS_MINIMUM, "min_pts");
        self.min_pts = Some(valid_min_pts);
        self
    }

    /// Sets the distance metric used by the built-in range query backends to
    /// decide neighbourhood membership. Defaults to Euclidean. Options are
    /// defined by the DistanceMetric enum.
    ///
    /// # Parameters
    /// * dist_metric - the distance metric
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn dist_metric(mut self, dist_metric: DistanceMetric) -> HyperParamBuilder<T> {
        self.dist_metric = Some(dist_metric);
        self
    }

    /// Sets the range query backend used to find epsilon-neighbourhoods.
    /// The primary reason for changing this parameter is performance: brute
    /// force compares every pair of points, which works fine on small
    /// datasets but scales poorly to larger ones.
    /// Defaults to Auto, whereby the backend is chosen internally based on
    /// the size of the input data.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn range_query(mut self, range_query: RangeQueryAlgorithm) -> HyperParamBuilder<T> {
        self.range_query = Some(range_query);
        self
    }

    /// Finishes the building of the hyper parameter configuration. A call to
    /// this method is required to exit the builder pattern and complete the
    /// construction of the hyper parameters.
    ///
    /// # Returns
    /// * The completed DBSCAN hyper parameter configuration.
    pub fn build(self) -> DbscanHyperParams<T> {
        DbscanHyperParams {
            epsilon: self
                .epsilon
                .unwrap_or_else(|| T::from(EPSILON_DEFAULT).unwrap_or_else(T::one)),
            min_pts: self.min_pts.unwrap_or(MIN_PTS_DEFAULT),
            dist_metric: self.dist_metric.unwrap_or(DISTANCE_METRIC_DEFAULT),
            range_query: self.range_query.unwrap_or(RANGE_QUERY_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            println!(
                "DBSCAN_WARNING: {param} ({input_param}) cannot be lower \
                than {left_bound}. Set to {left_bound}."
            );
            left_bound
        } else {
            input_param
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let hp: DbscanHyperParams<f64> = DbscanHyperParams::default();
        assert_eq!(0.5, hp.epsilon);
        assert_eq!(5, hp.min_pts);
        assert_eq!(DistanceMetric::Euclidean, hp.dist_metric);
        assert_eq!(RangeQueryAlgorithm::Auto, hp.range_query);
    }

    #[test]
    fn min_pts_clamped_to_left_bound() {
        let hp: DbscanHyperParams<f32> = DbscanHyperParams::builder().min_pts(0).build();
        assert_eq!(1, hp.min_pts);
    }

    #[test]
    fn builder_overrides() {
        let hp: DbscanHyperParams<f32> = DbscanHyperParams::builder()
            .epsilon(1.5)
            .min_pts(3)
            .dist_metric(DistanceMetric::Manhattan)
            .range_query(RangeQueryAlgorithm::BruteForce)
            .build();
        assert_eq!(1.5, hp.epsilon);
        assert_eq!(3, hp.min_pts);
        assert_eq!(DistanceMetric::Manhattan, hp.dist_metric);
        assert_eq!(RangeQueryAlgorithm::BruteForce, hp.range_query);
    }
}
