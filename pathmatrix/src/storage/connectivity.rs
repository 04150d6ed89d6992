use std::fmt;

use bitvec::vec::BitVec;

use crate::{common::matrix, core::VertexId};

/// Edge presence of an [`AdjMatrix`](super::AdjMatrix), detached from the
/// weights.
///
/// This is a snapshot: later mutations of the graph are not reflected.
#[derive(Clone, PartialEq, Eq)]
pub struct Connectivity {
    data: BitVec,
    vertex_count: usize,
}

impl Connectivity {
    pub(crate) fn new<I>(vertex_count: usize, presence: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let data = presence.into_iter().collect::<BitVec>();
        debug_assert_eq!(Some(data.len()), matrix::linear_len(vertex_count));

        Self { data, vertex_count }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.data.count_ones()
    }

    pub fn contains(&self, src: VertexId, dst: VertexId) -> bool {
        let (src, dst) = (src.to_usize(), dst.to_usize());

        src < self.vertex_count
            && dst < self.vertex_count
            && self.data[matrix::index(src, dst, self.vertex_count)]
    }

    pub fn out_degree(&self, src: VertexId) -> usize {
        let src = src.to_usize();
        if src >= self.vertex_count {
            return 0;
        }

        let start = matrix::index(src, 0, self.vertex_count);
        self.data[start..start + self.vertex_count].count_ones()
    }

    pub fn in_degree(&self, dst: VertexId) -> usize {
        let dst = dst.to_usize();
        if dst >= self.vertex_count {
            return 0;
        }

        (0..self.vertex_count)
            .filter(|src| self.data[matrix::index(*src, dst, self.vertex_count)])
            .count()
    }

    /// Returns `true` if there is a self-loop anywhere. This never holds for a
    /// view created from a valid graph.
    pub fn has_self_loop(&self) -> bool {
        self.data
            .iter_ones()
            .any(|index| matrix::is_diagonal(index, self.vertex_count))
    }
}

impl fmt::Debug for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Connectivity {{")?;
            for row in 0..self.vertex_count {
                write!(f, "    ")?;
                for col in 0..self.vertex_count {
                    if col > 0 {
                        write!(f, " ")?;
                    }

                    let index = matrix::index(row, col, self.vertex_count);
                    write!(f, "{}", self.data[index] as usize)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "}}")
        } else {
            f.debug_struct("Connectivity")
                .field("data", &self.data)
                .field("vertex_count", &self.vertex_count)
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::AdjMatrix;

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn degrees() {
        let mut graph = AdjMatrix::new(4).unwrap();
        graph
            .extend_with_edges([(v(0), v(1), 3), (v(0), v(2), 8), (v(3), v(2), 1)])
            .unwrap();

        let conn = graph.connectivity();

        assert_eq!(conn.edge_count(), 3);
        assert!(conn.contains(v(0), v(2)));
        assert!(!conn.contains(v(2), v(0)));
        assert!(!conn.contains(v(0), v(9)));
        assert_eq!(conn.out_degree(v(0)), 2);
        assert_eq!(conn.in_degree(v(2)), 2);
        assert_eq!(conn.in_degree(v(0)), 0);
        assert!(!conn.has_self_loop());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut graph = AdjMatrix::new(2).unwrap();
        graph.set_edge(v(0), v(1), 1).unwrap();

        let conn = graph.connectivity();
        graph.clear_edge(v(0), v(1));

        assert!(conn.contains(v(0), v(1)));
        assert_eq!(graph.connectivity().edge_count(), 0);
    }

    #[test]
    fn debug_alternate() {
        let mut graph = AdjMatrix::new(2).unwrap();
        graph.set_edge(v(1), v(0), 1).unwrap();

        assert_eq!(
            format!("{:#?}", graph.connectivity()),
            "Connectivity {\n    0 0\n    1 0\n}\n"
        );
    }
}
