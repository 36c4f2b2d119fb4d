use crate::graph::{KeyedGraph, MutableGraph, VertexKey};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with roughly `edge_factor * n` edges
///
/// Keys are spread out and shuffled (`0, 7, 14, ...` in random order) so callers never
/// rely on keys being dense slots. Weights are drawn from `1..=max_weight`; self-loops
/// are skipped.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> KeyedGraph<u32> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut keys: Vec<VertexKey> = (0..n as VertexKey).map(|i| i * 7).collect();
    keys.shuffle(rng);

    let mut graph = KeyedGraph::with_capacity(n);
    for &key in &keys {
        graph.add_vertex(key);
    }

    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = keys[rng.gen_range(0..n)];
        let v = keys[rng.gen_range(0..n)];
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 8-connectivity
///
/// The vertex at `(x, y)` has key `y * width + x`. Cardinal moves cost 1.0, diagonal
/// moves 1.4.
pub fn generate_grid(width: usize, height: usize) -> KeyedGraph<OrderedFloat<f64>> {
    let mut graph = KeyedGraph::with_capacity(width * height);
    let key = |x: usize, y: usize| (y * width + x) as VertexKey;

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(key(x, y));
        }
    }

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    graph.add_edge(key(x, y), key(nx as usize, ny as usize), OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected both ways)
pub fn generate_geometric<R: Rng>(n: usize, r: f64, rng: &mut R) -> KeyedGraph<OrderedFloat<f64>> {
    let mut graph = KeyedGraph::with_capacity(n);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();
    for i in 0..n {
        graph.add_vertex(i as VertexKey);
    }

    for i in 0..n {
        for j in 0..n {
            if i != j {
                let (x1, y1) = points[i];
                let (x2, y2) = points[j];
                let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
                if dist <= r {
                    graph.add_edge(i as VertexKey, j as VertexKey, OrderedFloat(dist));
                }
            }
        }
    }

    graph
}
