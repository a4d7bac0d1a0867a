//! Hashable-key identity for vertices and agents.
//!
//! Unlike a population simulator where every entity is enumerated `0..N` up
//! front (and can therefore be identified by a dense `u32` index), this
//! framework lets the *caller* pick whatever identifier fits their scenario —
//! a string, a small struct, an integer. [`Id`] is a blanket trait rather
//! than a concrete wrapper so any such type can be used directly as a
//! `HashMap` key without an intermediate conversion step.
//!
//! Singleton-by-id (two constructions with an equal id refer to the same
//! vertex and share state) falls out of `Graph` storing vertices in a
//! `HashMap<K, _>` keyed by `K` — there is exactly one value per key, so no
//! global intern registry or metaclass trick is needed to get the invariant
//! the original model enforced with a Python metaclass. Agents do *not* get
//! this for free: `Simulator` stores them in a `Vec<Agent<K, A>>`, which has
//! no uniqueness check of its own, so the same singleton-by-id guarantee for
//! agents is enforced explicitly by `SimBuilder::build` (rejecting a
//! duplicate agent id with `SimError::DuplicateAgentId`) rather than falling
//! out of the storage type.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as a vertex or agent identifier.
///
/// Blanket-implemented for every type that is cheap to clone, comparable,
/// hashable, and printable — no manual `impl Id for MyType` is ever required.
pub trait Id: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
