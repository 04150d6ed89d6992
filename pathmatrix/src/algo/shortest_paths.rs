//! Find [single source shortest paths] and their distances in a graph using
//! [Dijkstra's algorithm].
//!
//! Edge weights are positive by construction of
//! [`AdjMatrix`](crate::storage::AdjMatrix), so Dijkstra's algorithm is always
//! applicable. See available parameters
//! [here](ShortestPathsBuilder#implementations).
//!
//! Unreachable vertices are not an error: their distance is `None` and the
//! path to them is empty.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use pathmatrix::{algo::ShortestPaths, core::VertexId, storage::AdjMatrix};
//!
//! let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
//!
//! let mut graph = AdjMatrix::new(4).unwrap();
//! graph
//!     .extend_with_edges([(a, b, 1), (b, c, 2), (a, c, 10), (c, d, 1)])
//!     .unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal(d).run(a).unwrap();
//! let result = shortest_paths.path_to(d);
//!
//! assert_eq!(result.distance, Some(4));
//! assert_eq!(result.path, vec![a, b, c, d]);
//! ```

use std::ops::Index;

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::{
    core::{weight::Tentative, Distance, VertexId},
    storage::AdjMatrix,
};

mod binary_heap;
mod builder;
mod linear_scan;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    dist: Vec<Tentative>,
    pred: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the given
    /// vertex.
    pub fn dist(&self, to: VertexId) -> Option<Distance> {
        self.dist.get(to.to_usize()).and_then(|dist| dist.finite())
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the given vertex is the source or if its
    /// distance is not known.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the distance and the vertices from the source to the given
    /// vertex, both endpoints included.
    pub fn path_to(&self, to: VertexId) -> PathResult {
        let Some(distance) = self.dist(to) else {
            return PathResult::unreachable();
        };

        let mut path = vec![to];
        path.extend(self.reconstruct(to));
        path.reverse();

        PathResult {
            distance: Some(distance),
            path,
        }
    }
}

impl Index<VertexId> for ShortestPaths {
    type Output = Distance;

    fn index(&self, index: VertexId) -> &Self::Output {
        match &self.dist[index.to_usize()] {
            Tentative::Finite(dist) => dist,
            Tentative::Infinite => panic!("distance to {index} is not known"),
        }
    }
}

/// Distance and path between two vertices.
///
/// The distance is `None` and the path is empty if and only if the target is
/// not reachable from the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathResult {
    pub distance: Option<Distance>,
    pub path: Vec<VertexId>,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            distance: None,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Computes the shortest path from `source` to `target`.
///
/// If `source == target`, the distance is 0 and the path is `[source]`.
/// Vertices that do not exist in the graph are rejected.
pub fn shortest_path(
    graph: &AdjMatrix,
    source: VertexId,
    target: VertexId,
) -> Result<PathResult, Error> {
    ShortestPaths::on(graph)
        .goal(target)
        .run(source)
        .map(|paths| paths.path_to(target))
}

/// Algorithm for [`ShortestPaths`].
///
/// Both variants finalize vertices in the same order (by distance, then by
/// index), so they produce the same distances and the same paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// Selects the closest unvisited vertex by scanning all vertices. Runs in
    /// _O(V²)_ which is optimal for dense graphs.
    #[default]
    LinearScan,

    /// Selects the closest unvisited vertex using a binary heap. Runs in _O(V²
    /// + E log V)_ on an adjacency matrix; faster when most vertices are
    /// unreachable or the goal is close.
    BinaryHeap,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source or goal vertex is not in the graph.
    #[error("vertex {0} does not exist")]
    VertexOutOfBounds(VertexId),
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    pred: &'a [Option<VertexId>],
}

impl Iterator for PathReconstruction<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = (*self.pred.get(self.curr.to_usize())?)?;
        Some(self.curr)
    }
}

/// Search state shared by both algorithms.
#[derive(Debug)]
struct Search {
    source: VertexId,
    dist: Vec<Tentative>,
    pred: Vec<Option<VertexId>>,
}

impl Search {
    fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut dist = vec![Tentative::Infinite; vertex_count];
        dist[source.to_usize()] = Tentative::Finite(0);

        Self {
            source,
            dist,
            pred: vec![None; vertex_count],
        }
    }

    fn dist(&self, vertex: VertexId) -> Tentative {
        self.dist[vertex.to_usize()]
    }

    /// Relaxation operation. Only a strictly better distance replaces the
    /// current one, so among equally long paths the first discovered wins.
    fn relax(&mut self, from: VertexId, to: VertexId, weight: u32) -> Option<Distance> {
        let candidate = self.dist(from) + weight;

        if candidate < self.dist(to) {
            tracing::trace!(%from, %to, dist = ?candidate, "relaxed");
            self.dist[to.to_usize()] = candidate;
            self.pred[to.to_usize()] = Some(from);
            candidate.finite()
        } else {
            None
        }
    }

    fn finish(self) -> ShortestPaths {
        ShortestPaths {
            source: self.source,
            dist: self.dist,
            pred: self.pred,
        }
    }

    /// Finishes a search that stopped at its goal. Vertices that were not
    /// finalized only have tentative distances, so they are reported as
    /// unknown.
    fn finish_at_goal(mut self, finalized: &FixedBitSet) -> ShortestPaths {
        for index in (0..self.dist.len()).filter(|index| !finalized.contains(*index)) {
            self.dist[index] = Tentative::Infinite;
            self.pred[index] = None;
        }

        ShortestPaths {
            source: self.source,
            dist: self.dist,
            pred: self.pred,
        }
    }
}
