#![no_main]

use libfuzzer_sys::fuzz_target;

use pathmatrix::{
    algo::{Algo, ShortestPaths},
    infra::arbitrary::MutOpsSeq,
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = ops.graph();

    for op in ops {
        op.apply(&mut graph);
    }

    for source in graph.vertex_ids() {
        let linear = ShortestPaths::on(&graph).using(Algo::LinearScan).run(source).unwrap();
        let heap = ShortestPaths::on(&graph).using(Algo::BinaryHeap).run(source).unwrap();

        for target in graph.vertex_ids() {
            assert_eq!(linear.path_to(target), heap.path_to(target));
        }
    }
});
