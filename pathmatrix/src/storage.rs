//! Graph storage.
//!
//! The only storage is the [adjacency matrix](adj_matrix). It provides very
//! fast edge insertion, removal and lookup, and the linear scans that
//! Dijkstra's algorithm does on dense graphs are cache friendly.
//!
//! |                | **[AdjMatrix]** |
//! |----------------|-----------------|
//! | set edge       | _O(1)_          |
//! | clear edge     | _O(1)_          |
//! | get neighbors  | _O(V)_          |
//! | lookup edge    | _O(1)_          |
//! | reset          | _O(V²)_         |
//! | space          | _O(V²)_         |
//!
//! * _V_ – vertex count

pub mod adj_matrix;
mod connectivity;

pub use adj_matrix::AdjMatrix;
pub use connectivity::Connectivity;
