//! Directed acyclic graph built from a creation-order vertex chain plus
//! explicit edges.
//!
//! Vertices and edges live in `Vec` arenas owned by [`Graph`]. Chain links
//! (`next` / `previous`) and edge endpoints are `u32` ids into those arenas,
//! never owning references.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Linked`] chain trait |
//! | [`chain`] | `join`, `unjoin`, `remove`, `insert_after`, `insert_before`, `first`, `last`, `before`, `after` |
//! | [`vertex`] | [`Vertex`] |
//! | [`edge`] | [`Edge`], [`ProtoEdge`] |
//! | [`graph`] | [`Graph`]: vertex/edge creation, cycle checks, ancestor queries |
//! | [`error`] | [`GraphError`] |
//!
//! ```
//! use chain_dag::Graph;
//!
//! let mut g: Graph = Graph::new();
//! let v0 = g.add_vertex(&[]).unwrap();
//! let v1 = g.add_vertex(&[v0]).unwrap();
//! let v2 = g.add_vertex(&[]).unwrap();
//! let _v3 = g.add_vertex(&[v2]).unwrap();
//! let v4 = g.add_vertex(&[v0]).unwrap();
//!
//! assert_eq!(g.common_ancestors(v1, v4), vec![v0]);
//! assert!(g.add_edge(v4, v0).is_err());
//! ```

pub mod chain;
pub mod edge;
pub mod error;
pub mod graph;
pub mod types;
pub mod vertex;

pub use edge::{Edge, ProtoEdge};
pub use error::GraphError;
pub use graph::Graph;
pub use types::Linked;
pub use vertex::Vertex;
