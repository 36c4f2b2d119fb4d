use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use keyed_sssp::io::{format_path, Problem, QueryReport, TokenReader, DEFAULT_SEPARATOR};
use keyed_sssp::{DijkstraSolver, Weight};
use ordered_float::OrderedFloat;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WeightKind {
    /// 64-bit signed integers
    Int,
    /// 64-bit floats
    Float,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Reads a graph and one query from text, prints the shortest path between the two keys
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, standard input when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Numeric type of the edge weights
    #[arg(short, long, value_enum, default_value = "int")]
    weights: WeightKind,

    /// Separator printed between path keys
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Fail on edges naming unknown vertices instead of dropping them
    #[arg(long)]
    strict: bool,

    /// Print a prompt before each input section
    #[arg(short, long)]
    prompts: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.weights {
        WeightKind::Int => run::<i64>(&args),
        WeightKind::Float => run::<OrderedFloat<f64>>(&args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn open_input(args: &Args) -> keyed_sssp::Result<Box<dyn BufRead>> {
    Ok(match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    })
}

fn prompt(args: &Args, text: &str) {
    if args.prompts {
        println!("{}", text);
    }
}

/// Returns whether a path was found
fn run<W>(args: &Args) -> keyed_sssp::Result<bool>
where
    W: Weight + FromStr + Serialize,
{
    let mut reader = TokenReader::new(open_input(args)?);

    prompt(args, "Type number of vertices, then the vertex keys");
    let vertices = reader.read_vertices()?;
    prompt(args, "Type number of edges, then the edges (from key, to key, weight)");
    let edges = reader.read_edges::<W>()?;
    prompt(args, "Type the from and to keys to solve");
    let query = reader.read_query()?;

    let problem = Problem {
        vertices,
        edges,
        query,
    };
    let graph = problem.build_graph(args.strict)?;
    if graph.has_negative_weights() {
        log::warn!("graph has negative edge weights, paths may not be shortest");
    }

    let (from, to) = problem.query;
    let mut solver = DijkstraSolver::new(&graph);
    let outcome = solver.solve(from, to);
    let path = solver.path();

    match args.format {
        OutputFormat::Json => {
            println!("{}", QueryReport::new(from, to, &outcome, path).to_json()?);
        }
        OutputFormat::Text if outcome.success => {
            println!("{}", format_path(&path, &args.separator));
        }
        OutputFormat::Text => {
            eprintln!("no path from {} to {}", from, to);
        }
    }

    Ok(outcome.success)
}
