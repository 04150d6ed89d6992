//! Shortest paths in small weighted directed graphs stored as dense
//! adjacency matrices.
//!
//! ```
//! use pathmatrix::prelude::*;
//!
//! let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
//!
//! let mut graph = AdjMatrix::new(4)?;
//! graph.set_edge(a, b, 1)?;
//! graph.set_edge(a, c, 10)?;
//! graph.set_edge(b, c, 2)?;
//! graph.set_edge(c, d, 1)?;
//!
//! let result = shortest_path(&graph, a, d)?;
//! assert_eq!(result.distance, Some(4));
//! assert_eq!(result.path, vec![a, b, c, d]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The [`wire`] module exposes the same computation behind a JSON
//! request/response boundary with labeled vertices.

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
pub mod wire;

pub mod prelude {
    pub use crate::{
        algo::{shortest_path, Algo, PathResult, ShortestPaths},
        core::{Distance, Labeling, Limits, VertexId, Weight},
        storage::AdjMatrix,
    };
}
