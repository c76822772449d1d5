use thiserror::Error;

/// Failure taxonomy shared by every capability. Contract violations are
/// raised before any device call; there are no retries at this layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("contract violation: {0}")]
    ContractViolation(String),
    #[error("device allocation failed: {0}")]
    AllocationFailure(String),
    #[error("backend failure: {0}")]
    BackendFailure(String),
}

impl Error {
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendFailure(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
