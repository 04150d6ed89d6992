use std::{fmt, iter::Enumerate, slice};

use tracing::debug;

use crate::{
    common::matrix,
    core::{
        id::VertexIds, CreateGraphError, CreateGraphErrorKind, Limits, SetEdgeError,
        SetEdgeErrorKind, VertexId, Weight,
    },
};

use super::Connectivity;

/// Directed weighted graph over a fixed number of vertices, stored as a
/// row-major `N × N` matrix of weights.
///
/// A zero in the matrix means that there is no edge. The diagonal is always
/// zero: self-loops are rejected by [`set_edge`](AdjMatrix::set_edge). The
/// vertex count never changes after creation; use a new graph instead.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    weights: Vec<Weight>,
    vertex_count: usize,
    n_edges: usize,
    limits: Limits,
}

impl AdjMatrix {
    /// Creates an empty graph with `vertex_count` vertices under the default
    /// [`Limits`].
    pub fn new(vertex_count: usize) -> Result<Self, CreateGraphError> {
        Self::with_limits(vertex_count, Limits::default())
    }

    pub fn with_limits(vertex_count: usize, limits: Limits) -> Result<Self, CreateGraphError> {
        let len = matrix::linear_len(vertex_count)
            .filter(|_| limits.accepts_vertex_count(vertex_count));

        let Some(len) = len else {
            debug!(
                vertex_count,
                min = limits.min_vertices,
                max = limits.max_vertices,
                "rejected vertex count"
            );

            return Err(CreateGraphError::new(
                vertex_count,
                CreateGraphErrorKind::InvalidVertexCount {
                    min: limits.min_vertices,
                    max: limits.max_vertices,
                },
            ));
        };

        Ok(Self {
            weights: vec![0; len],
            vertex_count,
            n_edges: 0,
            limits,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn vertex_ids(&self) -> VertexIds {
        (0..self.vertex_count).into()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.to_usize() < self.vertex_count
    }

    /// Returns the weight of the edge `src → dst`, or `None` if there is no
    /// such edge or any of the endpoints does not exist.
    pub fn weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            return None;
        }

        match self.weights[self.index(src, dst)] {
            0 => None,
            weight => Some(weight),
        }
    }

    /// Sets the weight of the edge `src → dst`, overwriting the previous one.
    ///
    /// The reverse edge `dst → src` is not affected. Returns the previous
    /// weight. If an error is returned, the graph is left unchanged.
    pub fn set_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        weight: i64,
    ) -> Result<Option<Weight>, SetEdgeError> {
        let accepted = self.check_edge(src, dst, weight)?;

        let index = self.index(src, dst);
        let previous = std::mem::replace(&mut self.weights[index], accepted);

        if previous == 0 {
            self.n_edges += 1;
            Ok(None)
        } else {
            Ok(Some(previous))
        }
    }

    /// Sets all given edges, or none of them if any is rejected.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), SetEdgeError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, i64)>,
    {
        let edges = edges
            .into_iter()
            .map(|(src, dst, weight)| {
                self.check_edge(src, dst, weight)
                    .map(|accepted| (self.index(src, dst), accepted))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (index, weight) in edges {
            if std::mem::replace(&mut self.weights[index], weight) == 0 {
                self.n_edges += 1;
            }
        }

        Ok(())
    }

    /// Removes the edge `src → dst` and returns its weight. Removing an edge
    /// that does not exist is not an error.
    pub fn clear_edge(&mut self, src: VertexId, dst: VertexId) -> Option<Weight> {
        if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            return None;
        }

        let index = self.index(src, dst);
        match std::mem::take(&mut self.weights[index]) {
            0 => None,
            previous => {
                self.n_edges -= 1;
                Some(previous)
            }
        }
    }

    /// Removes all edges. The vertex count is preserved.
    pub fn reset(&mut self) {
        self.weights.fill(0);
        self.n_edges = 0;
    }

    /// Returns the outgoing edges of `src` as `(destination, weight)` pairs in
    /// the order of destination index.
    ///
    /// The iterator reads the matrix directly, so calling this again after a
    /// mutation reflects the new state.
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a vertex of the graph.
    pub fn neighbors(&self, src: VertexId) -> NeighborsIter<'_> {
        assert!(self.contains_vertex(src), "vertex does not exist");

        let start = self.index(src, VertexId::new(0));
        NeighborsIter {
            row: self.weights[start..start + self.vertex_count]
                .iter()
                .enumerate(),
        }
    }

    /// Returns all edges as `(source, destination, weight)` in row-major
    /// order.
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter {
            entries: self.weights.iter().enumerate(),
            vertex_count: self.vertex_count,
        }
    }

    /// Returns the rows of the matrix, with zero for absent edges.
    pub fn rows(&self) -> slice::Chunks<'_, Weight> {
        // `chunks` panics on zero, but an empty graph has no rows anyway.
        self.weights.chunks(self.vertex_count.max(1))
    }

    /// Returns a view of the edge presence without the weights.
    pub fn connectivity(&self) -> Connectivity {
        Connectivity::new(
            self.vertex_count,
            self.weights.iter().map(|weight| *weight > 0),
        )
    }

    fn index(&self, src: VertexId, dst: VertexId) -> usize {
        matrix::index(src.to_usize(), dst.to_usize(), self.vertex_count)
    }

    fn check_edge(&self, src: VertexId, dst: VertexId, weight: i64) -> Result<Weight, SetEdgeError> {
        let kind = if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            SetEdgeErrorKind::VertexOutOfBounds
        } else if src == dst {
            SetEdgeErrorKind::SelfLoopRejected
        } else {
            match self.limits.accept_weight(weight) {
                Some(accepted) => return Ok(accepted),
                None => SetEdgeErrorKind::InvalidWeight,
            }
        };

        debug!(%src, %dst, weight, %kind, "rejected edge");
        Err(SetEdgeError::new(weight, kind))
    }
}

impl fmt::Debug for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "AdjMatrix {{")?;
            for row in self.rows().take(self.vertex_count) {
                write!(f, "    ")?;
                for (col, weight) in row.iter().enumerate() {
                    if col > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{weight}")?;
                }
                writeln!(f)?;
            }
            writeln!(f, "}}")
        } else {
            f.debug_struct("AdjMatrix")
                .field("weights", &self.weights)
                .field("vertex_count", &self.vertex_count)
                .field("n_edges", &self.n_edges)
                .field("limits", &self.limits)
                .finish()
        }
    }
}

pub struct NeighborsIter<'a> {
    row: Enumerate<slice::Iter<'a, Weight>>,
}

impl Iterator for NeighborsIter<'_> {
    type Item = (VertexId, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.row
            .by_ref()
            .find(|(_, weight)| **weight > 0)
            .map(|(dst, weight)| (VertexId::new(dst), *weight))
    }
}

pub struct EdgesIter<'a> {
    entries: Enumerate<slice::Iter<'a, Weight>>,
    vertex_count: usize,
}

impl Iterator for EdgesIter<'_> {
    type Item = (VertexId, VertexId, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let vertex_count = self.vertex_count;

        self.entries
            .by_ref()
            .find(|(_, weight)| **weight > 0)
            .map(|(index, weight)| {
                let (src, dst) = matrix::coords(index, vertex_count);
                (VertexId::new(src), VertexId::new(dst), *weight)
            })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        core::CreateGraphErrorKind,
        infra::testing::check_consistency,
    };

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn create_checks_vertex_count() {
        assert_matches!(
            AdjMatrix::new(1),
            Err(CreateGraphError {
                vertex_count: 1,
                kind: CreateGraphErrorKind::InvalidVertexCount { min: 2, max: 26 }
            })
        );
        assert_matches!(AdjMatrix::new(27), Err(_));

        let graph = AdjMatrix::new(26).unwrap();
        assert_eq!(graph.vertex_count(), 26);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.rows().all(|row| row.iter().all(|w| *w == 0)));
    }

    #[test]
    fn create_with_custom_limits() {
        let limits = Limits::default().max_vertices(300);
        let graph = AdjMatrix::with_limits(300, limits).unwrap();

        assert_eq!(graph.vertex_count(), 300);
        assert_eq!(graph.limits(), &limits);
    }

    #[test]
    fn create_rejects_overflowing_vertex_count() {
        let vertex_count = 1 << (usize::BITS / 2);

        assert_matches!(
            AdjMatrix::with_limits(vertex_count, Limits::unbounded()),
            Err(CreateGraphError {
                kind: CreateGraphErrorKind::InvalidVertexCount { .. },
                ..
            })
        );
        assert_matches!(
            AdjMatrix::with_limits(usize::MAX, Limits::unbounded()),
            Err(CreateGraphError { vertex_count: usize::MAX, .. })
        );
    }

    #[test]
    fn set_edge_is_directed() {
        let mut graph = AdjMatrix::new(3).unwrap();

        assert_eq!(graph.set_edge(v(0), v(1), 5), Ok(None));
        assert_eq!(graph.weight(v(0), v(1)), Some(5));
        assert_eq!(graph.weight(v(1), v(0)), None);

        assert_eq!(graph.set_edge(v(1), v(0), 7), Ok(None));
        assert_eq!(graph.weight(v(0), v(1)), Some(5));
        assert_eq!(graph.weight(v(1), v(0)), Some(7));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn set_edge_overwrites() {
        let mut graph = AdjMatrix::new(2).unwrap();

        graph.set_edge(v(0), v(1), 5).unwrap();
        assert_eq!(graph.set_edge(v(0), v(1), 2), Ok(Some(5)));
        assert_eq!(graph.weight(v(0), v(1)), Some(2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn set_edge_rejects_self_loop() {
        let mut graph = AdjMatrix::new(3).unwrap();

        assert_matches!(
            graph.set_edge(v(1), v(1), 4),
            Err(SetEdgeError {
                kind: SetEdgeErrorKind::SelfLoopRejected,
                ..
            })
        );
        assert_eq!(graph.weight(v(1), v(1)), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn set_edge_rejects_nonpositive_weight() {
        let mut graph = AdjMatrix::new(3).unwrap();
        graph.set_edge(v(0), v(1), 9).unwrap();
        let before = graph.clone();

        assert_eq!(
            graph.set_edge(v(0), v(1), 0),
            Err(SetEdgeError::new(0, SetEdgeErrorKind::InvalidWeight))
        );
        assert_eq!(
            graph.set_edge(v(0), v(1), -3),
            Err(SetEdgeError::new(-3, SetEdgeErrorKind::InvalidWeight))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn set_edge_rejects_weight_over_limit() {
        let mut graph = AdjMatrix::with_limits(2, Limits::default().max_weight(10)).unwrap();

        assert_matches!(
            graph.set_edge(v(0), v(1), 11),
            Err(SetEdgeError {
                kind: SetEdgeErrorKind::InvalidWeight,
                ..
            })
        );
        assert_eq!(graph.set_edge(v(0), v(1), 10), Ok(None));
    }

    #[test]
    fn set_edge_rejects_missing_vertex() {
        let mut graph = AdjMatrix::new(2).unwrap();

        assert_matches!(
            graph.set_edge(v(0), v(2), 1),
            Err(SetEdgeError {
                kind: SetEdgeErrorKind::VertexOutOfBounds,
                ..
            })
        );
    }

    #[test]
    fn extend_with_edges_is_all_or_nothing() {
        let mut graph = AdjMatrix::new(3).unwrap();

        let result = graph.extend_with_edges([(v(0), v(1), 1), (v(1), v(2), 0)]);
        assert_matches!(result, Err(_));
        assert_eq!(graph.edge_count(), 0);

        graph
            .extend_with_edges([(v(0), v(1), 1), (v(1), v(2), 2), (v(0), v(1), 3)])
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(v(0), v(1)), Some(3));
    }

    #[test]
    fn clear_edge() {
        let mut graph = AdjMatrix::new(3).unwrap();
        graph.set_edge(v(0), v(1), 5).unwrap();
        graph.set_edge(v(1), v(0), 6).unwrap();

        assert_eq!(graph.clear_edge(v(0), v(1)), Some(5));
        assert_eq!(graph.clear_edge(v(0), v(1)), None);
        assert_eq!(graph.clear_edge(v(0), v(7)), None);
        assert_eq!(graph.weight(v(1), v(0)), Some(6));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn reset_keeps_vertex_count() {
        let mut graph = AdjMatrix::new(4).unwrap();
        graph.set_edge(v(0), v(1), 1).unwrap();
        graph.set_edge(v(2), v(3), 1).unwrap();

        graph.reset();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn neighbors_are_restartable() {
        let mut graph = AdjMatrix::new(4).unwrap();
        graph.set_edge(v(1), v(3), 2).unwrap();
        graph.set_edge(v(1), v(0), 4).unwrap();
        graph.set_edge(v(2), v(1), 1).unwrap();

        let expected = vec![(v(0), 4), (v(3), 2)];
        assert_eq!(graph.neighbors(v(1)).collect::<Vec<_>>(), expected);
        assert_eq!(graph.neighbors(v(1)).collect::<Vec<_>>(), expected);
        assert_eq!(graph.neighbors(v(0)).count(), 0);

        graph.clear_edge(v(1), v(0));
        assert_eq!(graph.neighbors(v(1)).collect::<Vec<_>>(), vec![(v(3), 2)]);
    }

    #[test]
    #[should_panic(expected = "vertex does not exist")]
    fn neighbors_of_missing_vertex() {
        let graph = AdjMatrix::new(2).unwrap();
        graph.neighbors(v(2)).count();
    }

    #[test]
    fn edges_row_major() {
        let mut graph = AdjMatrix::new(3).unwrap();
        graph.set_edge(v(2), v(0), 3).unwrap();
        graph.set_edge(v(0), v(2), 1).unwrap();
        graph.set_edge(v(0), v(1), 2).unwrap();

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(v(0), v(1), 2), (v(0), v(2), 1), (v(2), v(0), 3)]
        );
    }

    #[test]
    fn debug_alternate_prints_matrix() {
        let mut graph = AdjMatrix::new(2).unwrap();
        graph.set_edge(v(0), v(1), 7).unwrap();

        assert_eq!(format!("{graph:#?}"), "AdjMatrix {\n    0 7\n    0 0\n}\n");
    }

    #[test]
    fn consistent_after_mixed_mutations() {
        let mut graph = AdjMatrix::new(3).unwrap();

        graph.set_edge(v(1), v(2), 1).unwrap();
        graph.set_edge(v(1), v(1), 1).unwrap_err();
        graph.reset();
        graph.set_edge(v(1), v(2), 1).unwrap();
        graph.set_edge(v(2), v(1), 4).unwrap();
        graph.clear_edge(v(2), v(1));

        check_consistency(&graph).unwrap();
    }
}
