use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    algo::{shortest_path, PathResult},
    core::{SetEdgeError, VertexId, Weight, MAX_VERTICES, MIN_VERTICES},
    storage::AdjMatrix,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    /// Maps the index into `0..=m`. The value `m` is one past the last vertex
    /// so that out of bounds handling is exercised too.
    pub fn get(&self, m: usize) -> VertexId {
        VertexId::new(self.0 % (m + 1))
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp {
    SetEdge(Index, Index, i64),
    ClearEdge(Index, Index),
    Reset,
    Query(Index, Index),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult {
    SetEdge(Result<Option<Weight>, SetEdgeError>),
    ClearEdge(Option<Weight>),
    Reset,
    Query(Option<PathResult>),
}

impl MutOp {
    pub fn apply(&self, graph: &mut AdjMatrix) -> MutOpResult {
        let n = graph.vertex_count();

        match self {
            MutOp::SetEdge(src, dst, weight) => {
                MutOpResult::SetEdge(graph.set_edge(src.get(n), dst.get(n), *weight))
            }
            MutOp::ClearEdge(src, dst) => MutOpResult::ClearEdge(graph.clear_edge(src.get(n), dst.get(n))),
            MutOp::Reset => {
                graph.reset();
                MutOpResult::Reset
            }
            MutOp::Query(src, dst) => {
                MutOpResult::Query(shortest_path(graph, src.get(n), dst.get(n)).ok())
            }
        }
    }
}

/// A vertex count and a sequence of operations on a graph of that size.
pub struct MutOpsSeq {
    pub vertex_count: usize,
    pub ops: Vec<MutOp>,
}

impl MutOpsSeq {
    pub fn graph(&self) -> AdjMatrix {
        AdjMatrix::new(self.vertex_count).expect("vertex count generated within default limits")
    }
}

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "let mut graph = AdjMatrix::new({}).unwrap();", self.vertex_count)?;

        for op in self.ops.iter() {
            writeln!(f, "MutOp::{:?}.apply(&mut graph);", op)?;
        }

        Ok(())
    }
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = u.int_in_range(MIN_VERTICES..=MAX_VERTICES)?;
        let mut ops = Vec::new();

        while !u.is_empty() {
            match MutOp::arbitrary(u) {
                Ok(op) => ops.push(op),
                Err(_) => break,
            }
        }

        Ok(Self { vertex_count, ops })
    }
}
