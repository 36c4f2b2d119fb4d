use std::fmt::Debug;
use num_traits::{CheckedAdd, Float, Zero};
use ordered_float::OrderedFloat;

use super::VertexKey;

/// Numeric edge weight usable by the solver.
///
/// Any totally ordered number with an additive zero qualifies: the primitive integers
/// and `OrderedFloat`. Non-negativity is a precondition of the algorithm and is not
/// enforced by the type.
pub trait Weight: Zero + Copy + Ord + Debug {
    /// Distance plus edge weight, or `None` if the sum is not representable
    fn relax_add(self, weight: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn relax_add(self, weight: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &weight)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate to infinity instead of wrapping
impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn relax_add(self, weight: Self) -> Option<Self> {
        Some(self + weight)
    }
}

/// Trait representing a weighted directed graph addressed by vertex keys
///
/// Vertices also have a dense internal slot (`0..vertex_count()`), which is what
/// adjacency iteration hands out and what per-query scratch tables are indexed by.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Resolves a vertex key to its slot
    fn slot(&self, key: VertexKey) -> Option<usize>;

    /// Returns the key stored in a slot
    fn key_of(&self, slot: usize) -> Option<VertexKey>;

    /// Returns an iterator over the outgoing edges of a slot as `(target slot, weight)`
    fn outgoing_edges(&self, slot: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, key: VertexKey) -> bool {
        self.slot(key).is_some()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: VertexKey, to: VertexKey) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists. With parallel edges the cheapest wins.
    fn edge_weight(&self, from: VertexKey, to: VertexKey) -> Option<W> {
        let from = self.slot(from)?;
        let to = self.slot(to)?;
        self.outgoing_edges(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex with the given key. Returns false if the key was already present.
    fn add_vertex(&mut self, key: VertexKey) -> bool;

    /// Adds a directed edge between two existing vertices.
    ///
    /// Returns false, and leaves the graph untouched, when either endpoint is absent.
    fn add_edge(&mut self, from: VertexKey, to: VertexKey, weight: W) -> bool;
}
