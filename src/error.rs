use thiserror::Error;

/// Top-level error type for the Polypath geometry engine.
#[derive(Debug, Error)]
pub enum PolypathError {
    #[error("tube radius {0} is negative")]
    NegativeRadius(f64),
}

/// Convenience type alias for results using [`PolypathError`].
pub type Result<T> = std::result::Result<T, PolypathError>;
