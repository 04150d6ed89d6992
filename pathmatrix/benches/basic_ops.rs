mod common;

use common::{pathmatrix_random, RANDOM_SEED};
use fastrand::Rng;
use pathmatrix::{
    core::{Limits, VertexId},
    storage::AdjMatrix,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [26, 100, 1000], args = [0.05, 0.5, 0.95])]
fn set_and_clear_edges<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = AdjMatrix::with_limits(N, Limits::unbounded()).unwrap();

    for src in 0..N {
        for dst in 0..N {
            if src != dst && rng.f32() < density {
                graph
                    .set_edge(VertexId::new(src), VertexId::new(dst), rng.i64(1..100))
                    .unwrap();
            }
        }
    }

    for _ in 0..(N * N / 4) {
        let src = VertexId::new(rng.usize(..N));
        let dst = VertexId::new(rng.usize(..N));
        graph.clear_edge(src, dst);
    }

    divan::black_box(graph.edge_count());
}

#[divan::bench(consts = [26, 100, 1000], args = [0.05, 0.5, 0.95])]
fn iterate_neighbors<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = pathmatrix_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        graph
            .vertex_ids()
            .map(|vertex| graph.neighbors(vertex).map(|(_, w)| u64::from(w)).sum::<u64>())
            .sum::<u64>()
    });
}

#[divan::bench(consts = [26, 100, 1000])]
fn reset<const N: usize>(bencher: divan::Bencher) {
    let graph = pathmatrix_random(N, 0.5, &mut Rng::with_seed(RANDOM_SEED));

    bencher
        .with_inputs(|| graph.clone())
        .bench_local_values(|mut graph| {
            graph.reset();
            graph
        });
}
