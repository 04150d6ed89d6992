use proptest::{collection::vec, option, prelude::*};

use crate::{
    core::{Limits, VertexId, Weight, MAX_VERTICES},
    storage::AdjMatrix,
};

/// Strategy for graphs with `2..=max_vertices` vertices whose edge weights
/// are drawn from `weight`.
///
/// The edge density is drawn per graph, so both sparse and dense graphs are
/// generated. Zero weights from the strategy are treated as no edge.
pub fn adj_matrix<W>(max_vertices: usize, weight: W) -> impl Strategy<Value = AdjMatrix>
where
    W: Strategy<Value = Weight> + Clone,
{
    assert!(max_vertices >= 2, "graph must have at least two vertices");

    let limits = Limits::default().max_vertices(max_vertices.max(MAX_VERTICES));

    (2..=max_vertices, 0.05..0.95f64).prop_flat_map(move |(n, density)| {
        vec(option::weighted(density, weight.clone()), n * n).prop_map(move |cells| {
            let mut graph =
                AdjMatrix::with_limits(n, limits).expect("vertex count within limits");

            let edges = cells
                .into_iter()
                .enumerate()
                .filter_map(|(index, cell)| {
                    let (src, dst) = (index / n, index % n);
                    match cell {
                        Some(weight) if weight > 0 && src != dst => Some((
                            VertexId::new(src),
                            VertexId::new(dst),
                            i64::from(weight),
                        )),
                        _ => None,
                    }
                })
                .collect::<Vec<_>>();

            graph
                .extend_with_edges(edges)
                .expect("generated edges are valid");
            graph
        })
    })
}
