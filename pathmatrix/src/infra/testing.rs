use thiserror::Error;

use crate::{
    algo::PathResult,
    core::{Distance, VertexId},
    storage::AdjMatrix,
};

pub fn create_path(vertex_count: usize, weight: i64) -> AdjMatrix {
    let mut graph = AdjMatrix::new(vertex_count).expect("vertex count within default limits");

    for i in 1..vertex_count {
        graph
            .set_edge(VertexId::new(i - 1), VertexId::new(i), weight)
            .expect("valid edge");
    }

    graph
}

pub fn create_complete(vertex_count: usize, weight: i64) -> AdjMatrix {
    let mut graph = AdjMatrix::new(vertex_count).expect("vertex count within default limits");

    for src in graph.vertex_ids() {
        for dst in graph.vertex_ids() {
            if src != dst {
                graph.set_edge(src, dst, weight).expect("valid edge");
            }
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("connectivity edge count ({0}) is not equal to edge count ({1})")]
    ConnectivityEdgeCountMismatch(usize, usize),
    #[error("neighbors of {0} do not match its matrix row")]
    NeighborsRowMismatch(VertexId),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaOutgoing(usize, usize),
    #[error("sum of in degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaIncoming(usize, usize),
}

pub fn check_consistency(graph: &AdjMatrix) -> Result<(), ConsistencyCheckError> {
    let edge_count = graph.edge_count();

    if let Some(vertex) = graph
        .vertex_ids()
        .find(|vertex| graph.weight(*vertex, *vertex).is_some())
    {
        return Err(ConsistencyCheckError::SelfLoop(vertex));
    }

    let edges = graph.edges().count();
    if edges != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edges, edge_count,
        ));
    }

    let connectivity = graph.connectivity();
    if connectivity.edge_count() != edge_count {
        return Err(ConsistencyCheckError::ConnectivityEdgeCountMismatch(
            connectivity.edge_count(),
            edge_count,
        ));
    }

    for (src, row) in graph.vertex_ids().zip(graph.rows()) {
        let from_row = row
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > 0)
            .map(|(dst, weight)| (VertexId::new(dst), *weight));

        if !graph.neighbors(src).eq(from_row) {
            return Err(ConsistencyCheckError::NeighborsRowMismatch(src));
        }
    }

    let out_degrees = graph
        .vertex_ids()
        .map(|vertex| connectivity.out_degree(vertex))
        .sum::<usize>();
    if out_degrees != edge_count {
        return Err(ConsistencyCheckError::HandshakingLemmaOutgoing(
            out_degrees,
            edge_count,
        ));
    }

    let in_degrees = graph
        .vertex_ids()
        .map(|vertex| connectivity.in_degree(vertex))
        .sum::<usize>();
    if in_degrees != edge_count {
        return Err(ConsistencyCheckError::HandshakingLemmaIncoming(
            in_degrees, edge_count,
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathCheckError {
    #[error("unreachable result must have an empty path")]
    UnreachableWithPath,
    #[error("reachable result must have a path")]
    ReachableWithoutPath,
    #[error("path does not go from {0} to {1}")]
    WrongEndpoints(VertexId, VertexId),
    #[error("there is no edge {0} -> {1} on the path")]
    MissingEdge(VertexId, VertexId),
    #[error("sum of path weights ({0}) is not equal to the distance ({1})")]
    DistanceMismatch(Distance, Distance),
}

/// Checks that the path starts and ends where it should, that each hop is an
/// edge and that the weights sum up to the distance.
pub fn check_path(
    graph: &AdjMatrix,
    source: VertexId,
    target: VertexId,
    result: &PathResult,
) -> Result<(), PathCheckError> {
    let Some(distance) = result.distance else {
        return if result.path.is_empty() {
            Ok(())
        } else {
            Err(PathCheckError::UnreachableWithPath)
        };
    };

    let (Some(first), Some(last)) = (result.path.first(), result.path.last()) else {
        return Err(PathCheckError::ReachableWithoutPath);
    };

    if *first != source || *last != target {
        return Err(PathCheckError::WrongEndpoints(source, target));
    }

    let mut sum: Distance = 0;
    for hop in result.path.windows(2) {
        let weight = graph
            .weight(hop[0], hop[1])
            .ok_or(PathCheckError::MissingEdge(hop[0], hop[1]))?;
        sum += Distance::from(weight);
    }

    if sum != distance {
        return Err(PathCheckError::DistanceMismatch(sum, distance));
    }

    Ok(())
}

/// Minimum over all simple paths from `source` to `target`, found by
/// exhaustive enumeration. Only usable on small graphs.
pub fn brute_force_distance(
    graph: &AdjMatrix,
    source: VertexId,
    target: VertexId,
) -> Option<Distance> {
    fn walk(
        graph: &AdjMatrix,
        vertex: VertexId,
        target: VertexId,
        length: Distance,
        on_path: &mut Vec<bool>,
        best: &mut Option<Distance>,
    ) {
        if vertex == target {
            *best = Some(best.map_or(length, |best| best.min(length)));
            return;
        }

        on_path[vertex.to_usize()] = true;

        for (next, weight) in graph.neighbors(vertex) {
            if !on_path[next.to_usize()] {
                walk(
                    graph,
                    next,
                    target,
                    length + Distance::from(weight),
                    on_path,
                    best,
                );
            }
        }

        on_path[vertex.to_usize()] = false;
    }

    assert!(
        graph.vertex_count() <= 10,
        "brute force is exponential in the vertex count"
    );

    let mut best = None;
    let mut on_path = vec![false; graph.vertex_count()];
    walk(graph, source, target, 0, &mut on_path, &mut best);
    best
}
