#![cfg(feature = "parallel")]
use crate::distance::get_dist_func;
use crate::range_query::RangeQuery;
use crate::{DbscanError, DbscanHyperParams};
use num_traits::Float;
use rayon::prelude::*;

/// Epsilon-neighbourhoods of every data point, computed up front in
/// parallel. Only the range queries run on multiple threads; the
/// classification state machine that consumes this table stays single
/// threaded and owns all of its state.
///
/// The table is built for the run's fixed radius; queries at any other
/// radius would be meaningless, so the epsilon argument is ignored.
pub(crate) struct PrecomputedNeighbourhoods {
    neighbourhoods: Vec<Vec<usize>>,
}

impl PrecomputedNeighbourhoods {
    pub(crate) fn build<T>(data: &[Vec<T>], hp: &DbscanHyperParams<T>) -> Self
    where
        T: Float + Send + Sync,
    {
        let dist_func = get_dist_func::<T>(&hp.dist_metric);
        let epsilon = hp.epsilon;
        let neighbourhoods = data
            .par_iter()
            .map(|point| {
                data.iter()
                    .enumerate()
                    .filter(|(_, other)| dist_func(point, other) <= epsilon)
                    .map(|(n, _)| n)
                    .collect()
            })
            .collect();
        Self { neighbourhoods }
    }
}

impl<T: Float> RangeQuery<T> for PrecomputedNeighbourhoods {
    fn neighbours(&self, id: usize, _epsilon: T) -> Result<Vec<usize>, DbscanError> {
        Ok(self.neighbourhoods[id].clone())
    }
}
