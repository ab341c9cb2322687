use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComputeError {
    /// A caller supplied an argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error from date arithmetic
    #[error("Date error: {0}")]
    Date(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
