use crate::progress::{ClusterProgress, NoProgress};
#[cfg(feature = "parallel")]
use crate::range_query::precomputed::PrecomputedNeighbourhoods;
use crate::range_query::RangeQuery;
#[cfg(feature = "serial")]
use crate::range_query::RangeQueryBackend;
use crate::result::ClusterResult;
use crate::validation::DataValidator;
use crate::{Center, DbscanError, DbscanHyperParams};
use num_traits::Float;
use std::collections::VecDeque;

/// The DBSCAN clustering algorithm in Rust. Generic over floating point
/// numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan<'a, T> {
    data: &'a [Vec<T>],
    n_samples: usize,
    hp: DbscanHyperParams<T>,
}

impl<'a, T: Float> Dbscan<'a, T> {
    /// Creates an instance of the DBSCAN clustering model using a custom
    /// hyper parameter configuration.
    ///
    /// # Parameters
    /// * `data` - a reference to the data to cluster, a collection of vectors
    ///            of floating point numbers. The vectors must all be of the
    ///            same dimensionality and contain no non-finite values.
    /// * `hyper_params` - the hyper parameter configuration.
    ///
    /// # Returns
    /// * The DBSCAN model instance.
    ///
    /// # Examples
    /// ```
    ///use dbscan::{Dbscan, DbscanHyperParams, DistanceMetric, RangeQueryAlgorithm};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.3, 1.1],
    ///    vec![1.3, 1.2],
    ///    vec![1.0, 1.1],
    ///    vec![1.2, 1.2],
    ///    vec![0.9, 1.0],
    ///    vec![3.7, 4.0],
    ///];
    ///let hyper_params = DbscanHyperParams::builder()
    ///    .epsilon(0.4)
    ///    .min_pts(3)
    ///    .dist_metric(DistanceMetric::Manhattan)
    ///    .range_query(RangeQueryAlgorithm::BruteForce)
    ///    .build();
    ///let clusterer = Dbscan::new(&data, hyper_params);
    /// ```
    pub fn new(data: &'a [Vec<T>], hyper_params: DbscanHyperParams<T>) -> Self {
        let n_samples = data.len();
        Dbscan {
            data,
            n_samples,
            hp: hyper_params,
        }
    }

    /// Creates an instance of the DBSCAN clustering model using the default
    /// hyper parameters.
    ///
    /// # Parameters
    /// * `data` - a reference to the data to cluster, a collection of vectors
    ///            of floating point numbers. The vectors must all be of the
    ///            same dimensionality and contain no non-finite values.
    ///
    /// # Returns
    /// * The DBSCAN model instance.
    ///
    /// # Examples
    /// ```
    ///use dbscan::Dbscan;
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.3, 1.1],
    ///    vec![1.3, 1.2],
    ///    vec![1.0, 1.1],
    ///    vec![1.2, 1.2],
    ///];
    ///let clusterer = Dbscan::default_hyper_params(&data);
    /// ```
    pub fn default_hyper_params(data: &'a [Vec<T>]) -> Dbscan<'a, T> {
        let hyper_params = DbscanHyperParams::default();
        Dbscan::new(data, hyper_params)
    }

    /// Performs clustering on the list of vectors passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains a [`ClusterResult`]: the
    ///   committed clusters (each a vector of indices into the input data,
    ///   every one at least `min_pts` large) and the noise set. Every input
    ///   point lands in exactly one cluster or in noise. An error will be
    ///   returned if the dimensionality of the input vectors is mismatched,
    ///   if any vector contains non-finite coordinates, if the passed data
    ///   set is empty, or if the hyper parameters are invalid.
    ///
    /// # Examples
    /// ```
    ///use dbscan::{Dbscan, DbscanHyperParams};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.0, 1.0],
    ///    vec![1.1, 1.1],
    ///    vec![0.9, 1.0],
    ///    vec![5.0, 5.0],
    ///    vec![5.1, 5.0],
    ///    vec![4.9, 5.1],
    ///    vec![10.0, 10.0],
    ///];
    ///let hyper_params = DbscanHyperParams::builder()
    ///    .epsilon(0.5)
    ///    .min_pts(3)
    ///    .build();
    ///let clusterer = Dbscan::new(&data, hyper_params);
    ///let result = clusterer.cluster().unwrap();
    /// // The first three points form one cluster, the next three a second
    ///assert_eq!(2, result.n_clusters());
    /// // The final point is noise
    ///assert_eq!(vec![0, 0, 0, 1, 1, 1, -1], result.labels());
    /// ```
    #[cfg(feature = "serial")]
    pub fn cluster(&self) -> Result<ClusterResult, DbscanError> {
        self.cluster_with_progress(&mut NoProgress)
    }

    /// Performs clustering as [`Dbscan::cluster`], reporting progress to the
    /// given observer after each object decision. The observer has no
    /// influence on the outcome; `cluster` is equivalent to calling this
    /// with a sink that discards the counters.
    #[cfg(feature = "serial")]
    pub fn cluster_with_progress(
        &self,
        progress: &mut dyn ClusterProgress,
    ) -> Result<ClusterResult, DbscanError> {
        let validator = DataValidator::new(self.data, &self.hp);
        validator.validate_input_data()?;
        let index = RangeQueryBackend::select(self.data, &self.hp)?;
        self.run(&index, progress)
    }

    /// Performs clustering using a caller-supplied spatial index instead of
    /// one of the built-in backends. The index must honour the
    /// [`RangeQuery`] contract; the `dist_metric` and `range_query` hyper
    /// parameters are not consulted.
    ///
    /// # Examples
    /// ```
    ///use dbscan::{Dbscan, DbscanError, DbscanHyperParams, RangeQuery};
    ///
    /// // Neighbourhoods resolved ahead of time, e.g. by an external index
    ///struct Adjacency(Vec<Vec<usize>>);
    ///
    ///impl RangeQuery<f32> for Adjacency {
    ///    fn neighbours(&self, id: usize, _epsilon: f32) -> Result<Vec<usize>, DbscanError> {
    ///        Ok(self.0[id].clone())
    ///    }
    ///}
    ///
    ///let data: Vec<Vec<f32>> = vec![vec![0.0], vec![0.1], vec![0.2]];
    ///let index = Adjacency(vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]]);
    ///let hyper_params = DbscanHyperParams::builder().min_pts(3).build();
    ///let clusterer = Dbscan::new(&data, hyper_params);
    ///let result = clusterer.cluster_with_index(&index).unwrap();
    ///assert_eq!(vec![0, 0, 0], result.labels());
    /// ```
    pub fn cluster_with_index<Q: RangeQuery<T>>(
        &self,
        index: &Q,
    ) -> Result<ClusterResult, DbscanError> {
        let validator = DataValidator::new(self.data, &self.hp);
        validator.validate_input_data()?;
        self.run(index, &mut NoProgress)
    }

    /// Performs clustering on the list of vectors passed to the constructor,
    /// evaluating all range queries in parallel up front. Classification
    /// itself is unchanged, so the result is identical to [`Dbscan::cluster`]
    /// with the brute force backend. Not recommended for small datasets.
    ///
    /// # Examples
    /// ```
    ///use dbscan::{Dbscan, DbscanHyperParams};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.0, 1.0],
    ///    vec![1.1, 1.1],
    ///    vec![0.9, 1.0],
    ///    vec![10.0, 10.0],
    ///];
    ///let hyper_params = DbscanHyperParams::builder()
    ///    .epsilon(0.5)
    ///    .min_pts(3)
    ///    .build();
    ///let clusterer = Dbscan::new(&data, hyper_params);
    ///let result = clusterer.cluster_par().unwrap();
    ///assert_eq!(vec![0, 0, 0, -1], result.labels());
    /// ```
    #[cfg(feature = "parallel")]
    pub fn cluster_par(&self) -> Result<ClusterResult, DbscanError>
    where
        T: Send + Sync,
    {
        let validator = DataValidator::new(self.data, &self.hp);
        validator.validate_input_data()?;
        let index = PrecomputedNeighbourhoods::build(self.data, &self.hp);
        self.run(&index, &mut NoProgress)
    }

    /// Calculates the centers of previously computed clusters.
    ///
    /// # Parameters
    /// * `center` - the type of center to calculate.
    /// * `result` - a reference to the outcome of a clustering run over the
    ///              same data.
    ///
    /// # Returns
    /// * A vector of cluster centers, one per committed cluster, in cluster
    ///   order. Noise points do not contribute to any center.
    ///
    /// # Examples
    /// ```
    ///use dbscan::{Center, Dbscan, DbscanHyperParams};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.0, 1.0],
    ///    vec![1.2, 1.0],
    ///    vec![1.1, 1.3],
    ///    vec![10.0, 10.0],
    ///];
    ///let hyper_params = DbscanHyperParams::builder()
    ///    .epsilon(0.5)
    ///    .min_pts(3)
    ///    .build();
    ///let clusterer = Dbscan::new(&data, hyper_params);
    ///let result = clusterer.cluster().unwrap();
    ///let centroids = clusterer.calc_centers(Center::Centroid, &result).unwrap();
    ///assert_eq!(1, centroids.len());
    ///assert_eq!(vec![1.1, 1.1], centroids[0]);
    /// ```
    pub fn calc_centers(
        &self,
        center: Center,
        result: &ClusterResult,
    ) -> Result<Vec<Vec<T>>, DbscanError> {
        if result.n_samples() != self.data.len() {
            return Err(DbscanError::WrongDimension(String::from(
                "The clustering result must come from the same data as the model.",
            )));
        }
        Ok(center.calc_centers(self.data, result))
    }

    fn run<Q>(
        &self,
        index: &Q,
        progress: &mut dyn ClusterProgress,
    ) -> Result<ClusterResult, DbscanError>
    where
        Q: RangeQuery<T> + ?Sized,
    {
        let mut state = RunState::new(self.n_samples);

        if self.n_samples < self.hp.min_pts {
            // No neighbourhood can hold min_pts members, so no point can
            // ever be a core point
            for id in 0..self.n_samples {
                state.mark_noise(id);
            }
            progress.objects_processed(state.n_processed, self.n_samples);
        } else {
            for id in 0..self.n_samples {
                if !state.processed[id] {
                    self.expand_cluster(id, index, &mut state)?;
                }
                progress.objects_processed(state.n_processed, self.n_samples);
                progress.clusters_found(state.clusters.len());
                if state.n_processed == self.n_samples {
                    break;
                }
            }
        }

        Ok(state.into_result(self.n_samples))
    }

    /// Grows one cluster outwards from `seed_id`, or classifies it as noise.
    /// Border objects become members of the first cluster that reaches them.
    fn expand_cluster<Q>(
        &self,
        seed_id: usize,
        index: &Q,
        state: &mut RunState,
    ) -> Result<(), DbscanError>
    where
        Q: RangeQuery<T> + ?Sized,
    {
        let neighbours = index.neighbours(seed_id, self.hp.epsilon)?;

        // The seed is not a core point. Noise is provisional: a later
        // expansion may still absorb it as a border point.
        if neighbours.len() < self.hp.min_pts {
            state.mark_noise(seed_id);
            return Ok(());
        }

        let mut current_cluster = Vec::with_capacity(neighbours.len());
        let mut seeds = VecDeque::new();
        for neighbour in neighbours {
            state.absorb(neighbour, &mut current_cluster, &mut seeds);
        }
        // The seed reached itself through its own neighbourhood; expanding
        // it again would only repeat the query just answered.
        seeds.retain(|&id| id != seed_id);

        while let Some(next) = seeds.pop_front() {
            let neighbourhood = index.neighbours(next, self.hp.epsilon)?;
            if neighbourhood.len() >= self.hp.min_pts {
                for neighbour in neighbourhood {
                    state.absorb(neighbour, &mut current_cluster, &mut seeds);
                }
            }
            if state.n_processed == self.n_samples && state.n_noise == 0 {
                // Nothing unclassified and nothing reclassifiable remains
                break;
            }
        }

        if current_cluster.len() >= self.hp.min_pts {
            state.commit(current_cluster);
        } else {
            // Neighbours already committed elsewhere can leave the cluster
            // under strength; return the remainder to noise rather than
            // dropping any object.
            state.dissolve(current_cluster);
        }
        Ok(())
    }
}

/// Classification state shared by the driver and the expansion loop.
///
/// `processed` marks ids that have received a classification attempt and
/// only ever grows; each id is pulled out of it exactly once, so no id is
/// ever range-queried twice just to re-test whether it is a core point.
/// `noise` is provisional until the run completes.
struct RunState {
    processed: Vec<bool>,
    noise: Vec<bool>,
    n_processed: usize,
    n_noise: usize,
    clusters: Vec<Vec<usize>>,
}

impl RunState {
    fn new(n_samples: usize) -> Self {
        RunState {
            processed: vec![false; n_samples],
            noise: vec![false; n_samples],
            n_processed: 0,
            n_noise: 0,
            clusters: Vec::new(),
        }
    }

    fn mark_noise(&mut self, id: usize) {
        if !self.processed[id] {
            self.processed[id] = true;
            self.n_processed += 1;
        }
        if !self.noise[id] {
            self.noise[id] = true;
            self.n_noise += 1;
        }
    }

    /// The absorption rule of cluster expansion. Unprocessed neighbours join
    /// the cluster and the worklist; noise neighbours are reclassified into
    /// the cluster without re-entering the worklist (they already failed the
    /// core point test once); members of committed clusters stay put.
    fn absorb(&mut self, id: usize, cluster: &mut Vec<usize>, seeds: &mut VecDeque<usize>) {
        if !self.processed[id] {
            self.processed[id] = true;
            self.n_processed += 1;
            cluster.push(id);
            seeds.push_back(id);
        } else if self.noise[id] {
            self.noise[id] = false;
            self.n_noise -= 1;
            cluster.push(id);
        }
    }

    fn commit(&mut self, cluster: Vec<usize>) {
        self.clusters.push(cluster);
    }

    fn dissolve(&mut self, cluster: Vec<usize>) {
        for id in cluster {
            if !self.noise[id] {
                self.noise[id] = true;
                self.n_noise += 1;
            }
        }
    }

    fn into_result(self, n_samples: usize) -> ClusterResult {
        let noise = (0..n_samples).filter(|&id| self.noise[id]).collect();
        ClusterResult::new(self.clusters, noise, n_samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedNeighbourhoods(Vec<Vec<usize>>);

    impl RangeQuery<f64> for FixedNeighbourhoods {
        fn neighbours(&self, id: usize, _epsilon: f64) -> Result<Vec<usize>, DbscanError> {
            Ok(self.0[id].clone())
        }
    }

    struct FailingIndex;

    impl RangeQuery<f64> for FailingIndex {
        fn neighbours(&self, _id: usize, _epsilon: f64) -> Result<Vec<usize>, DbscanError> {
            Err(DbscanError::RangeQueryFailure(String::from(
                "backing store unavailable",
            )))
        }
    }

    #[test]
    fn undersized_cluster_dissolves_to_noise() {
        // Ids 0-2 commit first. Id 3's neighbourhood is large enough only
        // because it leans on already committed members, so its own cluster
        // never reaches min_pts and falls back to noise.
        let data = vec![vec![0.0]; 4];
        let index = FixedNeighbourhoods(vec![
            vec![0, 1, 2],
            vec![0, 1, 2],
            vec![0, 1, 2],
            vec![0, 1, 3],
        ]);
        let hp = DbscanHyperParams::builder().min_pts(3).build();
        let clusterer = Dbscan::new(&data, hp);
        let result = clusterer.cluster_with_index(&index).unwrap();
        assert_eq!(1, result.n_clusters());
        assert_eq!(vec![0, 1, 2], result.clusters()[0]);
        assert_eq!(&[3], result.noise());
    }

    #[test]
    fn range_query_errors_abandon_the_run() {
        let data = vec![vec![0.0], vec![1.0]];
        let hp = DbscanHyperParams::builder().min_pts(1).build();
        let clusterer = Dbscan::new(&data, hp);
        let result = clusterer.cluster_with_index(&FailingIndex);
        assert!(matches!(result, Err(DbscanError::RangeQueryFailure(..))));
    }

    #[test]
    fn noise_is_reclassified_when_reached_from_a_core_point() {
        // Id 0 is tested first and fails the core test, then id 1 reaches
        // it as a border point and pulls it out of noise.
        let data = vec![vec![0.0]; 4];
        let index = FixedNeighbourhoods(vec![
            vec![0, 1],
            vec![0, 1, 2],
            vec![1, 2, 3],
            vec![2, 3],
        ]);
        let hp = DbscanHyperParams::builder().min_pts(3).build();
        let clusterer = Dbscan::new(&data, hp);
        let result = clusterer.cluster_with_index(&index).unwrap();
        assert_eq!(1, result.n_clusters());
        assert_eq!(vec![0, 1, 2, 3], {
            let mut members = result.clusters()[0].clone();
            members.sort();
            members
        });
        assert!(result.noise().is_empty());
    }
}
