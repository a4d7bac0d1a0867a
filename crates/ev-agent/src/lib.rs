//! Per-agent state machine: phase, SoC/payload bookkeeping, plan progress.
//!
//! | module      | contents                                    |
//! |-------------|------------------------------------------------|
//! | `state`     | [`Phase<K>`], [`AgentState<K>`]                 |
//! | `agent`     | [`Agent<K, A>`], implements `ev_action::AgentView` |
//! | `builder`   | [`AgentBuilder<K, A>`]                          |
//! | `error`     | [`AgentError`], [`AgentResult`]                 |

pub mod agent;
pub mod builder;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentBuilder;
pub use error::{AgentError, AgentResult};
pub use state::{AgentState, Phase};
