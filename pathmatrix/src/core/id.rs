//! Identification of vertices in a graph.
//!
//! Vertices of an [`AdjMatrix`](crate::storage::AdjMatrix) are dense integer
//! indices in `[0, N)`. Human-readable names (letters, numbers) belong to the
//! presentation layer, see [`Labeling`](super::Labeling) and
//! [`Labels`](crate::wire::Labels).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a vertex in the adjacency matrix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn to_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Range of vertex ids `0..n`.
///
/// Returned by [`AdjMatrix::vertex_ids`](crate::storage::AdjMatrix::vertex_ids).
#[derive(Debug, Clone)]
pub struct VertexIds {
    range: std::ops::Range<usize>,
}

impl From<std::ops::Range<usize>> for VertexIds {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self { range }
    }
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VertexIds {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId)
    }
}

impl ExactSizeIterator for VertexIds {}
