use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::graph::VertexKey;
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed edge owned by its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    /// Slot of the destination vertex
    pub target: usize,
    pub weight: W,
}

/// A vertex record: its key and its outgoing adjacency list
#[derive(Debug, Clone)]
pub struct Vertex<W> {
    key: VertexKey,
    edges: Vec<Edge<W>>,
}

impl<W> Vertex<W> {
    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

/// A directed graph stored as an arena of vertices indexed by key
///
/// Slots are handed out in insertion order and never reused, so a slot stays valid
/// for the lifetime of the graph.
#[derive(Debug, Clone)]
pub struct KeyedGraph<W>
where
    W: Weight,
{
    /// Vertex arena, indexed by slot
    vertices: Vec<Vertex<W>>,

    /// Key -> slot
    index: HashMap<VertexKey, usize>,

    edge_count: usize,
}

impl<W> KeyedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        KeyedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        KeyedGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Looks up the vertex for a key
    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex<W>> {
        self.index.get(&key).map(|&slot| &self.vertices[slot])
    }

    /// Vertex keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.vertices.iter().map(|v| v.key)
    }

    /// Like `add_edge`, but reports the first missing endpoint instead of dropping the edge
    pub fn try_add_edge(&mut self, from: VertexKey, to: VertexKey, weight: W) -> Result<()> {
        let from_slot = self.index.get(&from).copied().ok_or(Error::MissingVertex(from))?;
        let to_slot = self.index.get(&to).copied().ok_or(Error::MissingVertex(to))?;
        self.push_edge(from_slot, to_slot, weight);
        Ok(())
    }

    /// Returns true if any edge carries a weight below zero.
    ///
    /// The solver gives no guarantees on such graphs; this is a diagnostic for callers.
    pub fn has_negative_weights(&self) -> bool {
        self.vertices
            .iter()
            .flat_map(|v| v.edges.iter())
            .any(|edge| edge.weight < W::zero())
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: W) {
        self.vertices[from].edges.push(Edge { target: to, weight });
        self.edge_count += 1;
    }
}

impl<W> Default for KeyedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for KeyedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn slot(&self, key: VertexKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    fn key_of(&self, slot: usize) -> Option<VertexKey> {
        self.vertices.get(slot).map(|v| v.key)
    }

    fn outgoing_edges(&self, slot: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(vertex) = self.vertices.get(slot) {
            Box::new(vertex.edges.iter().map(|edge| (edge.target, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for KeyedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, key: VertexKey) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let slot = self.vertices.len();
        self.vertices.push(Vertex {
            key,
            edges: Vec::new(),
        });
        self.index.insert(key, slot);
        true
    }

    fn add_edge(&mut self, from: VertexKey, to: VertexKey, weight: W) -> bool {
        match (self.slot(from), self.slot(to)) {
            (Some(from_slot), Some(to_slot)) => {
                self.push_edge(from_slot, to_slot, weight);
                true
            }
            _ => {
                log::debug!("dropping edge {} -> {}: endpoint not in graph", from, to);
                false
            }
        }
    }
}
