use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::{
    core::{Distance, VertexId},
    storage::AdjMatrix,
};

use super::{Search, ShortestPaths};

pub fn binary_heap(graph: &AdjMatrix, source: VertexId, goal: Option<VertexId>) -> ShortestPaths {
    let mut search = Search::new(graph.vertex_count(), source);
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());

    // Keyed by (distance, vertex) so that ties are resolved by the lowest
    // index, the same as the linear scan.
    let mut queue: BinaryHeap<Reverse<(Distance, VertexId)>> = BinaryHeap::new();
    queue.push(Reverse((0, source)));

    while let Some(Reverse((_, vertex))) = queue.pop() {
        // A vertex is pushed again whenever its distance improves. The stale
        // entries come out after the vertex is already finished.
        if visited.put(vertex.to_usize()) {
            continue;
        }

        if goal == Some(vertex) {
            return search.finish_at_goal(&visited);
        }

        for (next, weight) in graph.neighbors(vertex) {
            if visited.contains(next.to_usize()) {
                continue;
            }

            if let Some(next_dist) = search.relax(vertex, next, weight) {
                queue.push(Reverse((next_dist, next)));
            }
        }
    }

    search.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::shortest_paths::linear_scan::linear_scan;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn stale_entries_are_skipped() {
        // Vertex 2 is first discovered at distance 10, then improved to 2.
        let mut graph = AdjMatrix::new(4).unwrap();
        graph
            .extend_with_edges([
                (v(0), v(2), 10),
                (v(0), v(1), 1),
                (v(1), v(2), 1),
                (v(2), v(3), 1),
            ])
            .unwrap();

        let paths = binary_heap(&graph, v(0), None);

        assert_eq!(paths.dist(v(2)), Some(2));
        assert_eq!(paths.dist(v(3)), Some(3));
        assert_eq!(
            paths.reconstruct(v(3)).collect::<Vec<_>>(),
            vec![v(2), v(1), v(0)]
        );
    }

    #[test]
    fn same_predecessors_as_linear_scan() {
        let mut rng = fastrand::Rng::with_seed(42);

        for _ in 0..50 {
            let n = rng.usize(2..=12);
            let mut graph = AdjMatrix::new(n).unwrap();
            for u in 0..n {
                for w in 0..n {
                    if u != w && rng.bool() {
                        // Few distinct weights to provoke ties.
                        graph.set_edge(v(u), v(w), rng.i64(1..=3)).unwrap();
                    }
                }
            }

            let source = v(rng.usize(0..n));
            let heap = binary_heap(&graph, source, None);
            let scan = linear_scan(&graph, source, None);

            assert_eq!(heap.pred, scan.pred);
            assert_eq!(heap.dist, scan.dist);
        }
    }
}
