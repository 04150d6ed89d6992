pub mod error;
pub mod id;
pub mod weight;

mod label;
mod limits;

pub use error::*;
pub use id::VertexId;
pub use label::Labeling;
pub use limits::{Limits, MAX_VERTICES, MIN_VERTICES};
pub use weight::{Distance, Weight};
