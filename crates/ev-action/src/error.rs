//! Action dispatch errors.

use ev_core::ActionKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{action} is not permitted on a {vertex_type} vertex")]
    Forbidden {
        action: ActionKind,
        vertex_type: &'static str,
    },
}

pub type ActionResult<T> = Result<T, ActionError>;
