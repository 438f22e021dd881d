use std::time;
use thiserror::Error;

/// Error produced when a search or graph operation fails.
///
/// Failing to reach a goal is not an error: searches report that
/// outcome as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Vertex index {0} is out of range for a graph with {1} vertices")]
    IndexOutOfRange(usize, usize),

    #[error("Pop called on an empty container")]
    EmptyContainer,

    #[error("No path recorded to vertex {0}")]
    NoPathRecorded(usize),

    #[error("Edge weight {0} is not finite")]
    InvalidWeight(f64),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
