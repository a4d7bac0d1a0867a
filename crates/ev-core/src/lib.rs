//! `ev-core` — foundational types for the `ev-fleet-sim` EV fleet simulator.
//!
//! This crate is a dependency of every other `ev-*` crate. It intentionally
//! has no `ev-*` dependencies and minimal external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                           |
//! |----------------|-----------------------------------------------------|
//! | [`ids`]        | The [`Id`] blanket trait                           |
//! | [`vertex_type`]| [`VertexType`], [`ActionKind`]                     |
//! | [`time`]       | [`SimParams`], [`SimControl`]                      |
//! | [`rng`]        | [`Uncertainty`], [`ZeroUncertainty`], [`GaussianUncertainty`] |
//! | [`error`]      | [`CoreError`], [`CoreResult`]                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vertex_type;


pub use error::{CoreError, CoreResult};
pub use ids::Id;
pub use rng::{GaussianUncertainty, Uncertainty, ZeroUncertainty};
pub use time::{SimControl, SimParams};
pub use vertex_type::{ActionKind, VertexType};
