use thiserror::Error;

use crate::error_code::ErrorCode;

#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("Orbital state rejected: {0}")]
    Rejected(ErrorCode),

    #[error("Unable to read the wall clock for the record epoch: {0}")]
    ClockUnavailable(String),

    #[error("Unknown gravity model: {0}")]
    UnknownGravityModel(String),

    #[error("Unknown orbital parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid propagator setting: {0}")]
    InvalidSetting(String),

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),
}

impl From<ErrorCode> for OrbitError {
    fn from(code: ErrorCode) -> Self {
        OrbitError::Rejected(code)
    }
}

impl PartialEq for OrbitError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitError::*;
        match (self, other) {
            (Rejected(a), Rejected(b)) => a == b,
            (ClockUnavailable(a), ClockUnavailable(b)) => a == b,
            (UnknownGravityModel(a), UnknownGravityModel(b)) => a == b,
            (UnknownParameter(a), UnknownParameter(b)) => a == b,
            (InvalidSetting(a), InvalidSetting(b)) => a == b,
            (RootFindingError(a), RootFindingError(b)) => a == b,
            _ => false,
        }
    }
}
