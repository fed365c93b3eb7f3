use error_common::ClaimsDeskError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Policy store error: {0}")]
    Store(#[from] ClaimsDeskError),
}

impl CoverageError {
    pub fn code(&self) -> &'static str {
        match self {
            CoverageError::Store(err) => err.code(),
        }
    }
}

pub type CoverageResult<T> = Result<T, CoverageError>;
