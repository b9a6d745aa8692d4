use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("core error: {0}")]
    Core(#[from] agristat_core::Error),
}
