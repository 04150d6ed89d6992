use serde::{Deserialize, Serialize};

use super::weight::Weight;

pub const MIN_VERTICES: usize = 2;
pub const MAX_VERTICES: usize = 26;

/// Policy bounds checked when a graph is created or mutated.
///
/// The defaults match an editor that names vertices by the letters `A` to
/// `Z`. Limits can be deserialized, so a deployment can override them from a
/// configuration file:
///
/// ```
/// use pathmatrix::core::Limits;
///
/// let limits: Limits = serde_json::from_str(r#"{ "max_vertices": 200 }"#).unwrap();
///
/// assert_eq!(limits.min_vertices, 2);
/// assert_eq!(limits.max_vertices, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub max_weight: Weight,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_vertices: MIN_VERTICES,
            max_vertices: MAX_VERTICES,
            max_weight: Weight::MAX,
        }
    }
}

impl Limits {
    /// Limits that accept any non-empty graph.
    pub fn unbounded() -> Self {
        Self {
            min_vertices: 1,
            max_vertices: usize::MAX,
            max_weight: Weight::MAX,
        }
    }

    pub fn min_vertices(self, min_vertices: usize) -> Self {
        Self {
            min_vertices,
            ..self
        }
    }

    pub fn max_vertices(self, max_vertices: usize) -> Self {
        Self {
            max_vertices,
            ..self
        }
    }

    pub fn max_weight(self, max_weight: Weight) -> Self {
        assert!(max_weight > 0, "maximum weight must be positive");
        Self { max_weight, ..self }
    }

    pub fn accepts_vertex_count(&self, vertex_count: usize) -> bool {
        (self.min_vertices..=self.max_vertices).contains(&vertex_count)
    }

    /// Converts the weight to the stored representation, or `None` if it is
    /// not a positive integer within the limit.
    pub fn accept_weight(&self, weight: i64) -> Option<Weight> {
        if weight <= 0 {
            return None;
        }

        Weight::try_from(weight)
            .ok()
            .filter(|weight| *weight <= self.max_weight)
    }
}
