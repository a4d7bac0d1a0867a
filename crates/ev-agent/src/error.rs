//! Agent construction errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent plan must contain at least one decision")]
    EmptyPlan,
}

pub type AgentResult<T> = Result<T, AgentError>;
