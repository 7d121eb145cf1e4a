use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from invalid DBSCAN inputs or a failing
/// range query backend.
#[derive(Debug, Clone)]
pub enum DbscanError {
    EmptyDataset,
    WrongDimension(String),
    NonFiniteCoordinate(String),
    InvalidParameter(String),
    RangeQueryFailure(String),
}

impl Error for DbscanError {}

impl Display for DbscanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            DbscanError::EmptyDataset => String::from("The dataset provided is empty"),
            DbscanError::WrongDimension(msg) => {
                format!("Input vectors have mismatched dimensions: {msg}")
            }
            DbscanError::NonFiniteCoordinate(msg) => format!("Non finite coordinate: {msg}"),
            DbscanError::InvalidParameter(msg) => format!("Invalid parameter: {msg}"),
            DbscanError::RangeQueryFailure(msg) => format!("Range query failed: {msg}"),
        };
        write!(f, "{message}")
    }
}
