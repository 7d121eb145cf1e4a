use crate::{DbscanError, DbscanHyperParams};
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Vec<T>],
    hp: &'a DbscanHyperParams<T>,
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>], hp: &'a DbscanHyperParams<T>) -> Self {
        Self { data, hp }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), DbscanError> {
        self.validate_hyper_params()?;
        if self.data.is_empty() {
            return Err(DbscanError::EmptyDataset);
        }
        let dims_0th = self.data[0].len();
        for (n, datapoint) in self.data.iter().enumerate() {
            for element in datapoint {
                if !element.is_finite() {
                    return Err(DbscanError::NonFiniteCoordinate(format!(
                        "{n}th vector contains non-finite element(s)"
                    )));
                }
            }
            let dims_nth = datapoint.len();
            if dims_nth != dims_0th {
                return Err(DbscanError::WrongDimension(format!(
                    "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }

    // Configuration problems are fatal and detected before any range
    // query runs.
    fn validate_hyper_params(&self) -> Result<(), DbscanError> {
        if self.hp.min_pts < 1 {
            return Err(DbscanError::InvalidParameter(String::from(
                "min_pts must be at least 1",
            )));
        }
        let epsilon = self.hp.epsilon;
        if epsilon.is_nan() || epsilon.is_infinite() || epsilon <= T::zero() {
            return Err(DbscanError::InvalidParameter(String::from(
                "epsilon must be a positive, finite distance",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_hp() -> DbscanHyperParams<f32> {
        DbscanHyperParams::builder().build()
    }

    #[test]
    fn accepts_well_formed_data() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let hp = default_hp();
        assert!(DataValidator::new(&data, &hp).validate_input_data().is_ok());
    }

    #[test]
    fn rejects_nan_epsilon() {
        let data = vec![vec![1.0, 2.0]];
        let hp = DbscanHyperParams::builder().epsilon(f32::NAN).build();
        let result = DataValidator::new(&data, &hp).validate_input_data();
        assert!(matches!(result, Err(DbscanError::InvalidParameter(..))));
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        let data = vec![vec![1.0, 2.0]];
        for epsilon in [0.0, -1.5] {
            let hp = DbscanHyperParams::builder().epsilon(epsilon).build();
            let result = DataValidator::new(&data, &hp).validate_input_data();
            assert!(matches!(result, Err(DbscanError::InvalidParameter(..))));
        }
    }
}
