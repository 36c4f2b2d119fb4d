use serde::Serialize;

use crate::algorithm::SolveOutcome;
use crate::graph::VertexKey;
use crate::Result;

pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Joins path keys with `separator`, e.g. `1 -> 2 -> 3`
pub fn format_path(path: &[VertexKey], separator: &str) -> String {
    path.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Machine readable summary of one query
///
/// Serializes as `{ from, to, success, distance?, stats, path }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport<W> {
    pub from: VertexKey,
    pub to: VertexKey,
    #[serde(flatten)]
    pub outcome: SolveOutcome<W>,
    pub path: Vec<VertexKey>,
}

impl<W> QueryReport<W>
where
    W: Serialize + Clone,
{
    pub fn new(from: VertexKey, to: VertexKey, outcome: &SolveOutcome<W>, path: Vec<VertexKey>) -> Self {
        QueryReport {
            from,
            to,
            outcome: outcome.clone(),
            path,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
