use thiserror::Error;

/// Core error type shared across Agristat crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The domain axes are empty or inconsistent.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
    /// The dataset violates the shape or derived-value contract.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Agristat crates.
pub type Result<T> = std::result::Result<T, Error>;
