use fixedbitset::FixedBitSet;

use crate::{core::VertexId, storage::AdjMatrix};

use super::{Search, ShortestPaths};

pub fn linear_scan(graph: &AdjMatrix, source: VertexId, goal: Option<VertexId>) -> ShortestPaths {
    let mut steps = Steps::new(graph, source);

    while let Some(vertex) = steps.next() {
        if goal == Some(vertex) {
            return steps.search.finish_at_goal(&steps.visited);
        }
    }

    steps.search.finish()
}

/// The search as an iterator over vertices in the order they are finalized.
///
/// The outgoing edges of a finalized vertex are relaxed on the following
/// call to `next`, so the search can stop at a vertex without expanding it.
pub(super) struct Steps<'a> {
    graph: &'a AdjMatrix,
    pub(super) search: Search,
    visited: FixedBitSet,
    rounds: usize,
    expand: Option<VertexId>,
}

impl<'a> Steps<'a> {
    pub fn new(graph: &'a AdjMatrix, source: VertexId) -> Self {
        let n = graph.vertex_count();

        Self {
            graph,
            search: Search::new(n, source),
            visited: FixedBitSet::with_capacity(n),
            // The last remaining vertex cannot improve any other distance, so
            // N - 1 rounds are enough. The source alone is finalized when N = 1.
            rounds: n.saturating_sub(1).max(1),
            expand: None,
        }
    }

    fn select(&self) -> Option<VertexId> {
        // `min_by_key` returns the first of equal minima, which is the lowest
        // index.
        (0..self.graph.vertex_count())
            .filter(|index| !self.visited.contains(*index))
            .map(VertexId::new)
            .min_by_key(|vertex| self.search.dist(*vertex))
            .filter(|vertex| self.search.dist(*vertex).is_finite())
    }

    fn relax_from(&mut self, vertex: VertexId) {
        for (next, weight) in self.graph.neighbors(vertex) {
            if !self.visited.contains(next.to_usize()) {
                self.search.relax(vertex, next, weight);
            }
        }
    }
}

impl Iterator for Steps<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(vertex) = self.expand.take() {
            self.relax_from(vertex);
        }

        if self.rounds == 0 {
            return None;
        }

        let vertex = self.select()?;
        self.rounds -= 1;
        self.visited.insert(vertex.to_usize());
        self.expand = Some(vertex);

        Some(vertex)
    }
}
