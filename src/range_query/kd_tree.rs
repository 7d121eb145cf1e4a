use crate::distance::{get_dist_func, DistanceMetric};
use crate::range_query::RangeQuery;
use crate::DbscanError;
use num_traits::Float;

pub(crate) struct KdTreeRangeQuery<'a, T: std::cmp::PartialEq> {
    data: &'a [Vec<T>],
    tree: kdtree::KdTree<T, usize, &'a Vec<T>>,
    dist_metric: DistanceMetric,
}

impl<'a, T: Float> KdTreeRangeQuery<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>], dist_metric: DistanceMetric) -> Result<Self, DbscanError> {
        let mut tree = kdtree::KdTree::new(data[0].len());
        for (n, datapoint) in data.iter().enumerate() {
            tree.add(datapoint, n).map_err(|err| {
                DbscanError::RangeQueryFailure(format!("could not index data point {n}: {err:?}"))
            })?;
        }
        Ok(Self {
            data,
            tree,
            dist_metric,
        })
    }
}

impl<'a, T: Float> RangeQuery<T> for KdTreeRangeQuery<'a, T> {
    fn neighbours(&self, id: usize, epsilon: T) -> Result<Vec<usize>, DbscanError> {
        let dist_func = get_dist_func(&self.dist_metric);
        let within = self
            .tree
            .within(&self.data[id], epsilon, &dist_func)
            .map_err(|err| {
                DbscanError::RangeQueryFailure(format!("range query for point {id} failed: {err:?}"))
            })?;
        Ok(within.into_iter().map(|(_dist, &n)| n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_a_linear_scan() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.4, 0.0],
            vec![0.0, 0.4],
            vec![3.0, 3.0],
        ];
        let index = KdTreeRangeQuery::new(&data, DistanceMetric::Euclidean).unwrap();

        let mut neighbours = index.neighbours(0, 0.5).unwrap();
        neighbours.sort();
        assert_eq!(vec![0, 1, 2], neighbours);

        assert_eq!(vec![3], index.neighbours(3, 0.5).unwrap());
    }
}
