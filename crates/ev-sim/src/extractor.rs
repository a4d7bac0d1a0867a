//! Per-tick snapshots and the append-only extractor contract.
//!
//! Grounded on `dt_output::{OutputWriter, SimOutputObserver}`'s writer
//! trait, generalized from "observer hung off `Sim::run`" to a field the
//! `Simulator` owns directly and calls at the end of every `update()` — the
//! spec's extractor is a direct collaborator of the simulator, not an
//! optional callback.

use ev_action::Decision;
use ev_agent::AgentState;
use ev_core::Id;

/// A deep copy of one agent's pending decision, prior decision, and state
/// at one instant — independently owned so later mutation of the live
/// simulation cannot alter recorded history.
#[derive(Clone, Debug)]
pub struct AgentSnapshot<K: Id, A: Id> {
    pub agent: A,
    pub decision: Decision<K>,
    pub previous_decision: Option<Decision<K>>,
    pub state: AgentState<K>,
}

/// One row of the time-indexed output table.
#[derive(Clone, Debug)]
pub struct TickSnapshot<K: Id, A: Id> {
    pub time_min: f64,
    pub agents: Vec<AgentSnapshot<K, A>>,
}

/// The error type an extractor reports on failure.
///
/// Boxed rather than a crate-local enum: the simulator never matches on
/// its variants, only logs it and forces `should_close`, so any
/// `std::error::Error` (CSV I/O failure, a full in-memory quota, …) is
/// equally admissible.
pub type ExtractError = Box<dyn std::error::Error + Send + Sync>;
pub type ExtractResult<T> = Result<T, ExtractError>;

/// An append-only sink for tick snapshots.
///
/// `start` writes the `t=0` row; `append` writes every row after. Both are
/// given the same signature since the contract ("atomically produce a row")
/// is identical — only the call site differs.
pub trait DataExtractor<K: Id, A: Id> {
    fn start(&mut self, snapshot: TickSnapshot<K, A>) -> ExtractResult<()>;
    fn append(&mut self, snapshot: TickSnapshot<K, A>) -> ExtractResult<()>;
}

/// The default extractor: an append-only `Vec<TickSnapshot<K, A>>` held
/// entirely in memory.
pub struct InMemoryExtractor<K: Id, A: Id> {
    rows: Vec<TickSnapshot<K, A>>,
}

impl<K: Id, A: Id> InMemoryExtractor<K, A> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// All recorded rows, in tick order.
    pub fn rows(&self) -> &[TickSnapshot<K, A>] {
        &self.rows
    }
}

impl<K: Id, A: Id> Default for InMemoryExtractor<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Id, A: Id> DataExtractor<K, A> for InMemoryExtractor<K, A> {
    fn start(&mut self, snapshot: TickSnapshot<K, A>) -> ExtractResult<()> {
        self.rows.push(snapshot);
        Ok(())
    }

    fn append(&mut self, snapshot: TickSnapshot<K, A>) -> ExtractResult<()> {
        self.rows.push(snapshot);
        Ok(())
    }
}
