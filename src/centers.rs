use crate::result::ClusterResult;
use num_traits::Float;

/// Possible methodologies for calculating the center of clusters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Center {
    /// The elementwise mean of all data points in a cluster.
    /// The output is not guaranteed to be an observed data point.
    Centroid,
}

impl Center {
    pub(crate) fn calc_centers<T: Float>(
        &self,
        data: &[Vec<T>],
        result: &ClusterResult,
    ) -> Vec<Vec<T>> {
        match self {
            Center::Centroid => Self::calc_centroids(data, result),
        }
    }

    fn calc_centroids<T: Float>(data: &[Vec<T>], result: &ClusterResult) -> Vec<Vec<T>> {
        // Noise points carry no weight; committed clusters are never empty
        result
            .clusters()
            .iter()
            .map(|cluster| {
                let n_dims = data[cluster[0]].len();
                let mut element_wise_sum = vec![T::zero(); n_dims];
                for &id in cluster {
                    for (sum, element) in element_wise_sum.iter_mut().zip(&data[id]) {
                        *sum = *sum + *element;
                    }
                }
                let count = T::from(cluster.len()).unwrap_or_else(T::one);
                element_wise_sum
                    .into_iter()
                    .map(|sum| sum / count)
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_is_the_cluster_mean() {
        let data = vec![
            vec![0.0, 0.0],
            vec![2.0, 2.0],
            vec![100.0, 100.0],
            vec![4.0, 6.0],
        ];
        let result = ClusterResult::new(vec![vec![0, 1, 3]], vec![2], 4);
        let centers = Center::Centroid.calc_centers(&data, &result);
        assert_eq!(vec![vec![2.0, 8.0 / 3.0]], centers);
    }
}
