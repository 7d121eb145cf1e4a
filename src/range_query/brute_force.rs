use crate::distance::DistanceMetric;
use crate::range_query::RangeQuery;
use crate::DbscanError;
use num_traits::Float;

pub(crate) struct BruteForceRangeQuery<'a, T> {
    data: &'a [Vec<T>],
    dist_metric: DistanceMetric,
}

impl<'a, T: Float> BruteForceRangeQuery<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>], dist_metric: DistanceMetric) -> Self {
        Self { data, dist_metric }
    }
}

impl<'a, T: Float> RangeQuery<T> for BruteForceRangeQuery<'a, T> {
    fn neighbours(&self, id: usize, epsilon: T) -> Result<Vec<usize>, DbscanError> {
        let point = &self.data[id];
        Ok(self
            .data
            .iter()
            .enumerate()
            .filter(|(_, other)| self.dist_metric.calc_dist(point, other) <= epsilon)
            .map(|(n, _)| n)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queried_point_is_its_own_neighbour() {
        let data = vec![vec![0.0, 0.0], vec![10.0, 10.0]];
        let index = BruteForceRangeQuery::new(&data, DistanceMetric::Euclidean);
        assert_eq!(vec![0], index.neighbours(0, 1.0).unwrap());
        assert_eq!(vec![1], index.neighbours(1, 1.0).unwrap());
    }

    #[test]
    fn radius_is_inclusive() {
        let data = vec![vec![0.0], vec![1.5], vec![1.6]];
        let index = BruteForceRangeQuery::new(&data, DistanceMetric::Euclidean);
        assert_eq!(vec![0, 1], index.neighbours(0, 1.5).unwrap());
    }

    #[test]
    fn respects_the_distance_metric() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let euclidean = BruteForceRangeQuery::new(&data, DistanceMetric::Euclidean);
        // sqrt(2) fits in a radius of 1.5, but the Manhattan distance of 2 does not
        assert_eq!(vec![0, 1], euclidean.neighbours(0, 1.5).unwrap());
        let manhattan = BruteForceRangeQuery::new(&data, DistanceMetric::Manhattan);
        assert_eq!(vec![0], manhattan.neighbours(0, 1.5).unwrap());
    }
}
