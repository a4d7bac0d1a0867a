//! Directed, weighted, capacity-aware multigraph.
//!
//! | module      | contents                                             |
//! |-------------|-------------------------------------------------------|
//! | `vertex`    | `Vertex<K, A>`, `Capacity`                             |
//! | `edge`      | `Edge<K>`                                              |
//! | `graph`     | `Graph<K, A>` — vertex/edge storage and lookups        |
//! | `error`     | `GraphError`, `GraphResult`                            |

pub mod edge;
pub mod error;
pub mod graph;
pub mod vertex;


pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use vertex::{Capacity, Vertex};
