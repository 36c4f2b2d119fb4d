use serde::Serialize;

use crate::graph::{VertexKey, Weight};

/// Work counters for a single query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Vertices finalized, target included
    pub settled: usize,

    /// Successful relaxations (each one pushes a frontier entry)
    pub relaxed: usize,

    /// Frontier entries popped for an already finalized vertex
    pub stale_discarded: usize,
}

/// Result of a single source/target query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome<W> {
    /// True if the target was reached
    pub success: bool,

    /// Finalized distance of the target, `None` when there is no path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<W>,

    pub stats: SolveStats,
}

/// One step of a running query, reported to the observer of `solve_traced`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveEvent<W> {
    /// A vertex was extracted from the frontier and finalized
    Settled { key: VertexKey, distance: W },

    /// A vertex received a better tentative distance through `predecessor`
    Relaxed {
        key: VertexKey,
        predecessor: VertexKey,
        distance: W,
    },

    /// A frontier entry for an already finalized vertex was dropped
    StaleDiscarded { key: VertexKey },
}

/// A reusable single-pair shortest path session
pub trait PathQuery<W>
where
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Runs a query from `from` to `to`, discarding the state of any previous query
    fn solve(&mut self, from: VertexKey, to: VertexKey) -> SolveOutcome<W>;

    /// Keys along the path found by the last successful `solve`, source first.
    /// Empty if the last query failed or nothing was solved yet.
    fn path(&self) -> Vec<VertexKey>;

    /// Clears all per-query state so the session can serve an independent query
    fn reset(&mut self);
}
