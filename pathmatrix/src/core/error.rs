use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("creating graph failed: {kind}")]
pub struct CreateGraphError {
    pub vertex_count: usize,
    pub kind: CreateGraphErrorKind,
}

impl CreateGraphError {
    pub fn new(vertex_count: usize, kind: CreateGraphErrorKind) -> Self {
        Self { vertex_count, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreateGraphErrorKind {
    InvalidVertexCount { min: usize, max: usize },
}

impl fmt::Display for CreateGraphErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateGraphErrorKind::InvalidVertexCount { min, max } => {
                write!(f, "vertex count must be between {min} and {max}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("setting edge failed: {kind}")]
pub struct SetEdgeError {
    pub weight: i64,
    pub kind: SetEdgeErrorKind,
}

impl SetEdgeError {
    pub fn new(weight: i64, kind: SetEdgeErrorKind) -> Self {
        Self { weight, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetEdgeErrorKind {
    SelfLoopRejected,
    InvalidWeight,
    VertexOutOfBounds,
}

impl fmt::Display for SetEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SetEdgeErrorKind::SelfLoopRejected => "edges from a vertex to itself are not allowed",
            SetEdgeErrorKind::InvalidWeight => "weight must be a positive integer within limits",
            SetEdgeErrorKind::VertexOutOfBounds => "endpoint does not exist",
        };
        f.write_str(reason)
    }
}
