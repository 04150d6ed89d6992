#![no_main]

use libfuzzer_sys::fuzz_target;

use pathmatrix::infra::{
    arbitrary::{MutOp, MutOpResult, MutOpsSeq},
    testing::{check_consistency, check_path},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = ops.graph();
    let n = graph.vertex_count();

    for op in ops {
        let result = op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();

        if let (MutOp::Query(src, dst), MutOpResult::Query(Some(path))) = (&op, &result) {
            check_path(&graph, src.get(n), dst.get(n), path)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();
        }
    }
});
