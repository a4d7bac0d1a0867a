//! `ev-sim` — the fixed-timestep multi-agent discrete-event tick loop.
//!
//! # Per-tick algorithm
//!
//! ```text
//! for tick in 0.. :
//!   time_min += delta_min; iteration += 1
//!   should_close = time_min >= stop_time_min
//!   for agent in agents (list order):
//!     action_time_min += delta_min
//!     if agent.is_done() || agent.out_of_charge: continue
//!     ① Travel   — crossing an edge; latches JustArrived once
//!                  action_time_min > edge.time_min, draining SoC by
//!                  edge.weight_wh.
//!     ② Act      — JustArrived enters the vertex's membership and starts
//!                  Waiting; Waiting clears once membership no longer
//!                  exceeds capacity; otherwise the current action's cost
//!                  is computed and, once action_time_min exceeds it,
//!                  applied to SoC and the agent leaves membership.
//!     ③ Advance  — on a finished action, move to the next decision (or
//!                  Done if the plan is exhausted), beginning travel only
//!                  if the next vertex differs from the current one.
//!   should_close |= all agents done
//!   extractor.append(snapshot)
//! ```
//!
//! | module       | contents                                         |
//! |--------------|-----------------------------------------------------|
//! | `sim`        | [`Simulator<K, A>`] and the tick algorithm          |
//! | `builder`    | [`SimBuilder<K, A>`]                                |
//! | `extractor`  | [`DataExtractor`], [`InMemoryExtractor`], snapshots |
//! | `error`      | [`SimError`], [`SimResult`]                         |

pub mod builder;
pub mod error;
pub mod extractor;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use extractor::{AgentSnapshot, DataExtractor, ExtractError, ExtractResult, InMemoryExtractor, TickSnapshot};
pub use sim::Simulator;
