//! A single plan entry: go to `vertex`, then perform `action`.

use ev_core::Id;

use crate::action::Action;

/// One step of an agent's plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<K: Id> {
    pub vertex: K,
    pub action: Action,
}

impl<K: Id> Decision<K> {
    pub fn new(vertex: K, action: Action) -> Self {
        Self { vertex, action }
    }
}
