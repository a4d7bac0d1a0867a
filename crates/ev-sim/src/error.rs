//! Simulator errors.

use ev_action::ActionError;
use ev_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("agent {agent} has an empty plan")]
    EmptyPlan { agent: String },

    #[error("duplicate agent id {agent}: two agents were constructed with the same id")]
    DuplicateAgentId { agent: String },

    #[error("update() called before start()")]
    NotStarted,
}

pub type SimResult<T> = Result<T, SimError>;
