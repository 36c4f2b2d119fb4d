use std::time::{Duration, Instant};

use clap::Parser;
use keyed_sssp::graph::generators::generate_random;
use keyed_sssp::{DijkstraSolver, Graph, KeyedGraph, VertexKey};
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Times a reused solver session against parallel sessions on random graphs
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct BenchmarkConfig {
    /// Graph sizes (vertex counts) to test
    #[arg(long, value_delimiter = ',', default_value = "1000,10000,50000,100000")]
    sizes: Vec<usize>,

    /// Average number of edges per vertex
    #[arg(short, long, default_value_t = 4.0)]
    edge_factor: f64,

    /// Queries per graph
    #[arg(short, long, default_value_t = 200)]
    queries: usize,

    /// Edge weights are drawn from 1..=max_weight
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    max_weight: u32,

    /// Seed for graph and query generation
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct Measurement {
    size: usize,
    reused: Duration,
    parallel: Duration,
    found: usize,
}

/// One session answering every query in turn
fn run_reused(graph: &KeyedGraph<u32>, queries: &[(VertexKey, VertexKey)]) -> (Duration, usize) {
    let start = Instant::now();
    let mut solver = DijkstraSolver::new(graph);
    let found = queries
        .iter()
        .filter(|&&(from, to)| solver.solve(from, to).success)
        .count();
    (start.elapsed(), found)
}

/// One session per rayon worker, all reading the same graph
fn run_parallel(graph: &KeyedGraph<u32>, queries: &[(VertexKey, VertexKey)]) -> (Duration, usize) {
    let start = Instant::now();
    let found = queries
        .par_iter()
        .map_init(
            || DijkstraSolver::new(graph),
            |solver, &(from, to)| solver.solve(from, to).success,
        )
        .filter(|&success| success)
        .count();
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();
    let config = BenchmarkConfig::parse();
    let mut rng = StdRng::seed_from_u64(config.seed);

    println!("=====================================================");
    println!("Benchmark: reused session vs parallel sessions");
    println!("Edge factor: {} edges per vertex (on average)", config.edge_factor);
    println!("Queries per graph: {}", config.queries);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &config.sizes {
        if size == 0 {
            log::warn!("skipping empty graph size");
            continue;
        }
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, config.edge_factor, config.max_weight, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let keys: Vec<VertexKey> = graph.keys().collect();
        let queries: Vec<(VertexKey, VertexKey)> = (0..config.queries)
            .map(|_| (keys[rng.gen_range(0..size)], keys[rng.gen_range(0..size)]))
            .collect();

        let (reused, found) = run_reused(&graph, &queries);
        let (parallel, parallel_found) = run_parallel(&graph, &queries);
        if found != parallel_found {
            log::warn!("reused and parallel runs disagree: {} vs {}", found, parallel_found);
        }

        println!("  - {} of {} queries had a path", found, queries.len());
        results.push(Measurement {
            size,
            reused,
            parallel,
            found,
        });
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<13} | {:<8} | {:<8}",
        "Vertices", "Reused (ms)", "Parallel (ms)", "Speedup", "Found"
    );
    println!("-----------------------------------------------------");

    for m in &results {
        let speedup = m.reused.as_secs_f64() / m.parallel.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<12} | {:<13} | {:<8.2} | {:<8}",
            m.size,
            m.reused.as_millis(),
            m.parallel.as_millis(),
            speedup,
            m.found
        );
    }
}
