//! Keyed SSSP - Single-pair shortest paths over graphs with caller-assigned vertex keys
//!
//! A graph is built incrementally from integer vertex keys and weighted directed edges,
//! then queried with Dijkstra's algorithm for the cheapest path between two keys.
//! Edge weights must be non-negative; this is a documented precondition, not a check.
//!
//! ```
//! use keyed_sssp::{DijkstraSolver, KeyedGraph, MutableGraph};
//!
//! let mut graph: KeyedGraph<u32> = KeyedGraph::new();
//! for key in 1..=4 {
//!     graph.add_vertex(key);
//! }
//! graph.add_edge(1, 2, 1);
//! graph.add_edge(2, 3, 2);
//! graph.add_edge(1, 3, 5);
//! graph.add_edge(3, 4, 1);
//!
//! let mut solver = DijkstraSolver::new(&graph);
//! let outcome = solver.solve(1, 4);
//! assert!(outcome.success);
//! assert_eq!(outcome.distance, Some(4));
//! assert_eq!(solver.path(), vec![1, 2, 3, 4]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    dijkstra::DijkstraSolver, PathQuery, SolveEvent, SolveOutcome, SolveStats,
};
/// Re-export main types for convenient use
pub use graph::{Graph, KeyedGraph, MutableGraph, VertexKey, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {0} is not in the graph")]
    MissingVertex(VertexKey),

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Invalid token {found:?}, expected {expected}")]
    Parse {
        expected: &'static str,
        found: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
