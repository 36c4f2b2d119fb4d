use crate::algorithm::{PathQuery, SolveEvent, SolveOutcome, SolveStats};
use crate::data_structures::Frontier;
use crate::graph::{Graph, VertexKey, Weight};

/// Per-query state of one vertex
#[derive(Debug, Clone, Copy)]
struct VertexState<W> {
    /// Best known distance from the source; `None` means unreached
    distance: Option<W>,

    /// Finalized: `distance` will not change again during this query
    visited: bool,

    /// Slot the current best distance came from
    predecessor: Option<usize>,
}

impl<W> VertexState<W> {
    fn unreached() -> Self {
        VertexState {
            distance: None,
            visited: false,
            predecessor: None,
        }
    }
}

/// Dijkstra's algorithm as a reusable query session over a borrowed graph
///
/// The graph is only read. Everything a query computes (distances, finalized flags,
/// predecessors, the frontier) lives in the session and is wiped by [`reset`], which
/// `solve` also calls before starting, so one session can answer any number of
/// queries and several sessions can share one graph.
///
/// Edge weights must be non-negative. With negative weights the session still
/// terminates but the reported paths are not guaranteed to be shortest. A distance
/// that would overflow the weight type is never recorded; the edge is skipped.
///
/// [`reset`]: DijkstraSolver::reset
#[derive(Debug)]
pub struct DijkstraSolver<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'g G,

    /// Indexed by vertex slot
    state: Vec<VertexState<W>>,

    frontier: Frontier<usize, W>,

    source: Option<usize>,
    target: Option<usize>,
    solved: bool,
    stats: SolveStats,
}

impl<'g, W, G> DijkstraSolver<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Creates a session over `graph`
    pub fn new(graph: &'g G) -> Self {
        let n = graph.vertex_count();
        DijkstraSolver {
            graph,
            state: vec![VertexState::unreached(); n],
            frontier: Frontier::with_capacity(n),
            source: None,
            target: None,
            solved: false,
            stats: SolveStats::default(),
        }
    }

    /// The graph this session reads
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Whether the last query reached its target
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Source and target keys of the current query, if both resolved
    pub fn endpoints(&self) -> Option<(VertexKey, VertexKey)> {
        let source = self.graph.key_of(self.source?)?;
        let target = self.graph.key_of(self.target?)?;
        Some((source, target))
    }

    /// Recorded distance of a vertex in the current query state
    pub fn distance(&self, key: VertexKey) -> Option<W> {
        let slot = self.graph.slot(key)?;
        self.state[slot].distance
    }

    /// Whether a vertex has been finalized in the current query
    pub fn is_settled(&self, key: VertexKey) -> bool {
        self.graph
            .slot(key)
            .map_or(false, |slot| self.state[slot].visited)
    }

    /// Runs a query from `from` to `to`, discarding the state of any previous query
    pub fn solve(&mut self, from: VertexKey, to: VertexKey) -> SolveOutcome<W> {
        self.solve_traced(from, to, |_| {})
    }

    /// Keys along the path found by the last successful `solve`, source first
    pub fn path(&self) -> Vec<VertexKey> {
        if !self.solved {
            return Vec::new();
        }

        self.target
            .and_then(|t| self.graph.key_of(t))
            .and_then(|key| self.reconstruct_path(key))
            .unwrap_or_default()
    }

    /// Restores every vertex to unreached and forgets the last query
    pub fn reset(&mut self) {
        for entry in self.state.iter_mut() {
            *entry = VertexState::unreached();
        }
        self.frontier.clear();
        self.source = None;
        self.target = None;
        self.solved = false;
        self.stats = SolveStats::default();
    }

    /// Like `solve`, but reports every settle, relaxation and stale discard to `observer`
    pub fn solve_traced<F>(&mut self, from: VertexKey, to: VertexKey, mut observer: F) -> SolveOutcome<W>
    where
        F: FnMut(SolveEvent<W>),
    {
        self.reset();
        let graph = self.graph;

        let (source, target) = match (graph.slot(from), graph.slot(to)) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                log::debug!("no path {} -> {}: endpoint not in graph", from, to);
                return self.outcome();
            }
        };
        self.source = Some(source);
        self.target = Some(target);

        log::debug!("solving {} -> {} over {} vertices", from, to, graph.vertex_count());

        self.state[source].distance = Some(W::zero());
        self.frontier.push(source, W::zero());

        while let Some((u, dist_u)) = self.frontier.pop() {
            let u_key = graph.key_of(u).unwrap_or_default();

            if self.state[u].visited {
                self.stats.stale_discarded += 1;
                observer(SolveEvent::StaleDiscarded { key: u_key });
                continue;
            }

            // The first non-stale entry of a vertex carries its final distance
            self.state[u].visited = true;
            self.stats.settled += 1;
            observer(SolveEvent::Settled {
                key: u_key,
                distance: dist_u,
            });
            log::trace!("settled {} at {:?}", u_key, dist_u);

            if u == target {
                self.solved = true;
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let entry = &mut self.state[v];
                if entry.visited {
                    continue;
                }

                let Some(candidate) = dist_u.relax_add(weight) else {
                    log::trace!("skipping edge into slot {}: distance overflows", v);
                    continue;
                };
                let improves = match entry.distance {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    entry.distance = Some(candidate);
                    entry.predecessor = Some(u);
                    self.frontier.push(v, candidate);
                    self.stats.relaxed += 1;
                    observer(SolveEvent::Relaxed {
                        key: graph.key_of(v).unwrap_or_default(),
                        predecessor: u_key,
                        distance: candidate,
                    });
                }
            }
        }

        let outcome = self.outcome();
        log::debug!(
            "{} -> {}: success={} distance={:?} settled={} stale={}",
            from,
            to,
            outcome.success,
            outcome.distance,
            outcome.stats.settled,
            outcome.stats.stale_discarded
        );
        outcome
    }

    /// Walks predecessors back from `key` and returns the keys source first.
    ///
    /// Returns `None` if the vertex is unknown or was not reached by the current query.
    /// For a vertex that is reached but not finalized the result is the best path
    /// found so far.
    pub fn reconstruct_path(&self, key: VertexKey) -> Option<Vec<VertexKey>> {
        let slot = self.graph.slot(key)?;
        self.state[slot].distance?;

        let mut path = Vec::new();
        let mut current = Some(slot);
        while let Some(s) = current {
            path.push(self.graph.key_of(s)?);
            current = self.state[s].predecessor;
        }
        path.reverse();

        Some(path)
    }

    fn outcome(&self) -> SolveOutcome<W> {
        let distance = if self.solved {
            self.target.and_then(|t| self.state[t].distance)
        } else {
            None
        };

        SolveOutcome {
            success: self.solved,
            distance,
            stats: self.stats,
        }
    }
}

impl<'g, W, G> PathQuery<W> for DijkstraSolver<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&mut self, from: VertexKey, to: VertexKey) -> SolveOutcome<W> {
        DijkstraSolver::solve(self, from, to)
    }

    fn path(&self) -> Vec<VertexKey> {
        DijkstraSolver::path(self)
    }

    fn reset(&mut self) {
        DijkstraSolver::reset(self)
    }
}
