use tracing::debug;

use crate::{core::VertexId, storage::AdjMatrix};

use super::{
    binary_heap::binary_heap, linear_scan::linear_scan, Algo, Error, ShortestPaths,
};

pub struct ShortestPathsBuilder<'a> {
    graph: &'a AdjMatrix,
    goal: Option<VertexId>,
    algo: Algo,
}

impl ShortestPaths {
    pub fn on(graph: &AdjMatrix) -> ShortestPathsBuilder<'_> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            algo: Algo::default(),
        }
    }
}

impl<'a> ShortestPathsBuilder<'a> {
    /// Stops the search once the distance to `goal` is final.
    pub fn goal(self, goal: VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn linear_scan(self) -> Self {
        self.using(Algo::LinearScan)
    }

    pub fn binary_heap(self) -> Self {
        self.using(Algo::BinaryHeap)
    }

    pub fn run(self, source: VertexId) -> Result<ShortestPaths, Error> {
        let ShortestPathsBuilder { graph, goal, algo } = self;

        for vertex in std::iter::once(source).chain(goal) {
            if !graph.contains_vertex(vertex) {
                debug!(%vertex, vertex_count = graph.vertex_count(), "vertex out of bounds");
                return Err(Error::VertexOutOfBounds(vertex));
            }
        }

        let _span = tracing::debug_span!(
            "shortest_paths",
            %source,
            goal = ?goal,
            ?algo,
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
        )
        .entered();

        let paths = match algo {
            Algo::LinearScan => linear_scan(graph, source, goal),
            Algo::BinaryHeap => binary_heap(graph, source, goal),
        };

        debug!(
            reached = paths.dist.iter().filter(|dist| dist.is_finite()).count(),
            "search finished"
        );

        Ok(paths)
    }
}
