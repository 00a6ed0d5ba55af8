use thiserror::Error;

/// The reason a table refused to change its capacity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeError {
    #[error("Capacity must be at least 1")]
    ZeroCapacity,
    #[error("Requested capacity {requested} cannot hold the {size} live entries")]
    BelowSize { requested: usize, size: usize },
}
