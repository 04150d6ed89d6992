//! Random graphs for demos, tests and benchmarks.

use fastrand::Rng;

use crate::{
    core::{Limits, VertexId, Weight},
    storage::AdjMatrix,
};

/// Random directed graph where each ordered pair of distinct vertices is
/// connected with probability `density`. Weights are uniform in
/// `1..=max_weight`.
pub fn random(vertex_count: usize, density: f32, max_weight: Weight, rng: &mut Rng) -> AdjMatrix {
    let mut graph = empty(vertex_count, max_weight);
    add_random_edges(&mut graph, density, max_weight, rng);
    graph
}

/// Like [`random`], but every vertex is reachable from every other vertex.
///
/// This is ensured by a directed cycle through all vertices in a random
/// order; other edges are added with probability `density` on top of it.
pub fn random_connected(
    vertex_count: usize,
    density: f32,
    max_weight: Weight,
    rng: &mut Rng,
) -> AdjMatrix {
    let mut graph = empty(vertex_count, max_weight);

    let mut order = graph.vertex_ids().collect::<Vec<_>>();
    rng.shuffle(&mut order);

    if vertex_count > 1 {
        let cycle = order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(src, dst)| (*src, *dst, i64::from(rng.u32(1..=max_weight))))
            .collect::<Vec<_>>();

        graph
            .extend_with_edges(cycle)
            .expect("cycle edges connect distinct vertices with valid weights");
    }

    add_random_edges(&mut graph, density, max_weight, rng);
    graph
}

fn empty(vertex_count: usize, max_weight: Weight) -> AdjMatrix {
    assert!(vertex_count > 0, "graph must have at least one vertex");

    AdjMatrix::with_limits(vertex_count, Limits::unbounded().max_weight(max_weight))
        .expect("unbounded limits accept any non-empty graph")
}

fn add_random_edges(graph: &mut AdjMatrix, density: f32, max_weight: Weight, rng: &mut Rng) {
    assert!(
        (0.0..=1.0).contains(&density),
        "density must be in [0, 1] range"
    );

    let n = graph.vertex_count();

    for src in 0..n {
        for dst in 0..n {
            let (src, dst) = (VertexId::new(src), VertexId::new(dst));

            if src == dst || graph.weight(src, dst).is_some() || rng.f32() >= density {
                continue;
            }

            graph
                .set_edge(src, dst, i64::from(rng.u32(1..=max_weight)))
                .expect("distinct vertices and weight within limits");
        }
    }
}
