pub mod traits;
pub mod keyed;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use keyed::{Edge, KeyedGraph, Vertex};

/// Caller-assigned vertex identifier. Keys need not be contiguous or start at zero.
pub type VertexKey = i64;
