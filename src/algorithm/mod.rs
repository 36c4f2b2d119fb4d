pub mod traits;
pub mod dijkstra;

pub use traits::{PathQuery, SolveEvent, SolveOutcome, SolveStats};
