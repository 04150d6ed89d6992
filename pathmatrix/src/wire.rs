//! JSON request/response boundary.
//!
//! A request carries the graph as a sparse adjacency dictionary keyed by
//! vertex labels, together with the start and end labels:
//!
//! ```json
//! {
//!     "graph": { "A": { "B": 1, "C": 10 }, "B": { "C": 2 }, "C": { "D": 1 }, "D": {} },
//!     "start": "A",
//!     "end": "D"
//! }
//! ```
//!
//! The response has the total distance and the labels on the path, or `null`
//! and an empty list if the end is not reachable:
//!
//! ```json
//! { "distancia": 4, "caminho": ["A", "B", "C", "D"] }
//! ```
//!
//! The vertex set is given by the keys of the outer dictionary, in their
//! order of appearance. That order determines the vertex indices and thereby
//! which of several equally short paths is reported.

use std::{fmt, marker::PhantomData};

use rustc_hash::FxHashMap;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    algo::{shortest_path, shortest_paths, PathResult},
    core::{CreateGraphError, Distance, Labeling, Limits, SetEdgeError, VertexId},
    storage::AdjMatrix,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown vertex {0:?}")]
    UnknownVertex(String),
    #[error(transparent)]
    CreateGraph(#[from] CreateGraphError),
    #[error(transparent)]
    SetEdge(#[from] SetEdgeError),
    #[error(transparent)]
    ShortestPath(#[from] shortest_paths::Error),
}

/// Map that keeps the order of its entries as they appear in the input.
///
/// A repeated key replaces the value of the earlier entry but keeps its
/// position, like a JSON object read into a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<fn() -> V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut positions: FxHashMap<String, usize> = FxHashMap::default();
                let mut entries: Vec<(String, V)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    match positions.get(&key) {
                        Some(&position) => entries[position].1 = value,
                        None => {
                            positions.insert(key.clone(), entries.len());
                            entries.push((key, value));
                        }
                    }
                }

                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Sparse adjacency dictionary: source label to destination label to weight.
pub type AdjacencyDict = OrderedMap<OrderedMap<i64>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub graph: AdjacencyDict,
    #[serde(deserialize_with = "label")]
    pub start: String,
    #[serde(deserialize_with = "label")]
    pub end: String,
}

impl Request {
    /// Builds a request from a graph, naming its vertices by `labeling`.
    pub fn from_graph(graph: &AdjMatrix, labeling: Labeling, start: VertexId, end: VertexId) -> Self {
        let dict = graph
            .vertex_ids()
            .map(|src| {
                let neighbors = graph
                    .neighbors(src)
                    .map(|(dst, weight)| (labeling.label(dst), i64::from(weight)))
                    .collect();
                (labeling.label(src), neighbors)
            })
            .collect();

        Self {
            graph: dict,
            start: labeling.label(start),
            end: labeling.label(end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "distancia")]
    pub distance: Option<Distance>,
    #[serde(rename = "caminho")]
    pub path: Vec<String>,
}

impl Response {
    pub fn new(result: &PathResult, labels: &Labels) -> Self {
        Self {
            distance: result.distance,
            path: result
                .path
                .iter()
                .map(|vertex| labels.label(*vertex).unwrap_or_default().to_owned())
                .collect(),
        }
    }
}

/// Bidirectional mapping between vertex labels and vertex ids.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    ids: FxHashMap<String, VertexId>,
    labels: Vec<String>,
}

impl Labels {
    /// Assigns ids to the labels in the given order. A repeated label keeps
    /// its first id.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut this = Self::default();

        for label in labels {
            let label = label.into();
            if !this.ids.contains_key(&label) {
                this.ids
                    .insert(label.clone(), VertexId::new(this.labels.len()));
                this.labels.push(label);
            }
        }

        this
    }

    pub fn from_labeling(labeling: Labeling, vertex_count: usize) -> Self {
        Self::new(labeling.labels(vertex_count))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn id(&self, label: &str) -> Result<VertexId, Error> {
        self.ids
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(label.to_owned()))
    }

    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(vertex.to_usize()).map(String::as_str)
    }
}

/// Translates the request into a graph and finds the shortest path.
///
/// Each call builds its own graph, so requests are independent of each
/// other. Nothing is computed if any label is unknown or any edge invalid.
pub fn solve(request: &Request, limits: &Limits) -> Result<Response, Error> {
    let _span = tracing::debug_span!(
        "solve",
        vertex_count = request.graph.len(),
        start = %request.start,
        end = %request.end,
    )
    .entered();

    let labels = Labels::new(request.graph.keys());
    let start = labels.id(&request.start)?;
    let end = labels.id(&request.end)?;

    let mut edges = Vec::new();
    for (src, neighbors) in request.graph.iter() {
        let src = labels.id(src)?;
        for (dst, weight) in neighbors.iter() {
            edges.push((src, labels.id(dst)?, *weight));
        }
    }

    let mut graph = AdjMatrix::with_limits(labels.len(), *limits)?;
    graph.extend_with_edges(edges)?;

    let result = shortest_path(&graph, start, end)?;
    debug!(distance = ?result.distance, hops = result.path.len().saturating_sub(1), "solved");

    Ok(Response::new(&result, &labels))
}

/// Like [`solve`], but reads the request from and writes the response to
/// JSON text.
pub fn solve_json(input: &str, limits: &Limits) -> Result<String, Error> {
    let request: Request = serde_json::from_str(input).map_err(|error| {
        debug!(%error, "malformed request");
        error
    })?;
    let response = solve(&request, limits)?;
    Ok(serde_json::to_string(&response)?)
}

/// Accepts a label given either as a string or as a number.
fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLabel {
        Text(String),
        Number(i64),
    }

    Ok(match RawLabel::deserialize(deserializer)? {
        RawLabel::Text(text) => text,
        RawLabel::Number(number) => number.to_string(),
    })
}
