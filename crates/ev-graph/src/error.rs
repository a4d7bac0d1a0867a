//! Graph error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(String),

    #[error("edge {origin} -> {target} does not exist")]
    NonExistentEdge { origin: String, target: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
