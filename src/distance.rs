use num_traits::Float;

/// Possible distance metrics that can be used when searching the
/// epsilon-neighbourhood of a data point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DistanceMetric {
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl DistanceMetric {
    pub(crate) fn calc_dist<T: Float>(&self, a: &[T], b: &[T]) -> T {
        match *self {
            Self::Euclidean => euclidean_distance(a, b),
            Self::Manhattan => manhattan_distance(a, b),
            Self::Chebyshev => chebyshev_distance(a, b),
        }
    }
}

pub(crate) fn get_dist_func<T: Float>(metric: &DistanceMetric) -> impl Fn(&[T], &[T]) -> T {
    match metric {
        DistanceMetric::Euclidean => euclidean_distance,
        DistanceMetric::Manhattan => manhattan_distance,
        DistanceMetric::Chebyshev => chebyshev_distance,
    }
}

pub(crate) fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((*x) - (*y)) * ((*x) - (*y)))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

pub(crate) fn manhattan_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((*x) - (*y)).abs())
        .fold(T::zero(), std::ops::Add::add)
}

pub(crate) fn chebyshev_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((*x) - (*y)).abs())
        .fold(T::zero(), T::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() {
        let dist = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((dist - 5.0_f64).abs() < 1e-12);
    }

    #[test]
    fn manhattan() {
        let dist = manhattan_distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((dist - 7.0_f64).abs() < 1e-12);
    }

    #[test]
    fn chebyshev() {
        let dist = chebyshev_distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((dist - 4.0_f64).abs() < 1e-12);
    }

    #[test]
    fn distance_to_self_is_zero() {
        for metric in [
            DistanceMetric::Euclidean,
            DistanceMetric::Manhattan,
            DistanceMetric::Chebyshev,
        ] {
            let dist: f32 = metric.calc_dist(&[1.5, -2.2], &[1.5, -2.2]);
            assert_eq!(0.0, dist);
        }
    }
}
