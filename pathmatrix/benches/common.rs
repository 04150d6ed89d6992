#![allow(dead_code)]

use fastrand::Rng;
use pathmatrix::{core::Weight, infra::generate, storage::AdjMatrix};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub const MAX_WEIGHT: Weight = 1000;

pub fn pathmatrix_random(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjMatrix {
    generate::random_connected(vertex_count, density, MAX_WEIGHT, rng)
}

/// The same graph as a petgraph adjacency list, for comparison.
pub fn to_petgraph(graph: &AdjMatrix) -> DiGraph<(), u64> {
    let mut other = DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());

    for _ in graph.vertex_ids() {
        other.add_node(());
    }

    for (src, dst, weight) in graph.edges() {
        other.add_edge(
            NodeIndex::new(src.to_usize()),
            NodeIndex::new(dst.to_usize()),
            u64::from(weight),
        );
    }

    other
}
