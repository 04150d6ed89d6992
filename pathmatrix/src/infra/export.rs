use std::{
    collections::HashSet,
    io::{self, Cursor, Write},
};

use crate::{
    core::{Labeling, VertexId},
    storage::AdjMatrix,
};

pub trait Export {
    fn export<W: Write>(&self, graph: &AdjMatrix, out: &mut W) -> io::Result<()>;

    fn to_string(&self, graph: &AdjMatrix) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("exports are text formats")
    }
}

/// The adjacency matrix as comma-separated values, with a header row and a
/// header column of vertex labels. Absent edges are written as 0.
///
/// ```text
/// ,A,B,C
/// A,0,5,0
/// B,0,0,2
/// C,1,0,0
/// ```
#[derive(Debug, Clone, Default)]
pub struct Csv {
    labeling: Labeling,
}

impl Csv {
    pub fn new(labeling: Labeling) -> Self {
        Self { labeling }
    }
}

impl Export for Csv {
    fn export<W: Write>(&self, graph: &AdjMatrix, out: &mut W) -> io::Result<()> {
        let labels = self.labeling.labels(graph.vertex_count());

        for label in labels.iter() {
            write!(out, ",{label}")?;
        }
        writeln!(out)?;

        for (label, row) in labels.iter().zip(graph.rows()) {
            write!(out, "{label}")?;
            for weight in row {
                write!(out, ",{weight}")?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

/// The graph in the [DOT](https://graphviz.org/doc/info/lang.html) language,
/// optionally with a path highlighted.
#[derive(Debug, Clone)]
pub struct Dot {
    name: String,
    labeling: Labeling,
    path: Vec<VertexId>,
}

impl Dot {
    pub fn new(name: Option<String>, labeling: Labeling) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            labeling,
            path: Vec::new(),
        }
    }

    /// Highlights the vertices and edges of the path.
    pub fn highlight(self, path: &[VertexId]) -> Self {
        Self {
            path: path.to_vec(),
            ..self
        }
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None, Labeling::default())
    }
}

const HIGHLIGHT: &str = ", color=red, penwidth=2";

impl Export for Dot {
    fn export<W: Write>(&self, graph: &AdjMatrix, out: &mut W) -> io::Result<()> {
        let on_path = self.path.iter().copied().collect::<HashSet<_>>();
        let path_edges = self
            .path
            .windows(2)
            .map(|hop| (hop[0], hop[1]))
            .collect::<HashSet<_>>();

        writeln!(out, "digraph {} {{", self.name)?;

        for vertex in graph.vertex_ids() {
            let style = if on_path.contains(&vertex) { HIGHLIGHT } else { "" };
            writeln!(
                out,
                "    v{} [label={:?}{style}];",
                vertex.to_usize(),
                self.labeling.label(vertex)
            )?;
        }

        for (src, dst, weight) in graph.edges() {
            let style = if path_edges.contains(&(src, dst)) {
                HIGHLIGHT
            } else {
                ""
            };
            writeln!(
                out,
                "    v{} -> v{} [label=\"{weight}\"{style}];",
                src.to_usize(),
                dst.to_usize()
            )?;
        }

        writeln!(out, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::shortest_path;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn create_graph() -> AdjMatrix {
        let mut graph = AdjMatrix::new(3).unwrap();
        graph
            .extend_with_edges([(v(0), v(1), 5), (v(1), v(2), 2), (v(2), v(0), 1)])
            .unwrap();
        graph
    }

    #[test]
    fn csv_letters() {
        let csv = Csv::default().to_string(&create_graph());

        assert_eq!(csv, ",A,B,C\nA,0,5,0\nB,0,0,2\nC,1,0,0\n");
    }

    #[test]
    fn csv_numbers() {
        let csv = Csv::new(Labeling::Numbers).to_string(&create_graph());

        assert_eq!(csv, ",1,2,3\n1,0,5,0\n2,0,0,2\n3,1,0,0\n");
    }

    #[test]
    fn dot_plain() {
        let dot = Dot::default().to_string(&create_graph());

        assert_eq!(
            dot,
            "digraph G {\n\
             \x20   v0 [label=\"A\"];\n\
             \x20   v1 [label=\"B\"];\n\
             \x20   v2 [label=\"C\"];\n\
             \x20   v0 -> v1 [label=\"5\"];\n\
             \x20   v1 -> v2 [label=\"2\"];\n\
             \x20   v2 -> v0 [label=\"1\"];\n\
             }\n"
        );
    }

    #[test]
    fn dot_highlighted_path() {
        let graph = create_graph();
        let result = shortest_path(&graph, v(0), v(2)).unwrap();

        let dot = Dot::new(Some(String::from("route")), Labeling::Letters)
            .highlight(&result.path)
            .to_string(&graph);

        assert!(dot.starts_with("digraph route {\n"));
        assert!(dot.contains("v0 -> v1 [label=\"5\", color=red, penwidth=2];"));
        assert!(dot.contains("v1 -> v2 [label=\"2\", color=red, penwidth=2];"));
        assert!(dot.contains("v2 -> v0 [label=\"1\"];"));
        assert!(dot.contains("v2 [label=\"C\", color=red, penwidth=2];"));
    }
}
