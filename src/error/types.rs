use thiserror::Error;

/// Unified result type for the spaced-grid crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced by the spacing-grid container.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),
    #[error("child `{0}` not found")]
    ChildNotFound(String),
    #[error("child `{0}` is already attached")]
    DuplicateChild(String),
    #[error("child index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
}
