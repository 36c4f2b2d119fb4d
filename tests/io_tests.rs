use keyed_sssp::io::{format_path, Problem, QueryReport, TokenReader, DEFAULT_SEPARATOR};
use keyed_sssp::{DijkstraSolver, Error, Graph};
use ordered_float::OrderedFloat;
use std::io::Cursor;

const DIAMOND_INPUT: &str = "4\n1 2 3 4\n4\n1 2 1\n2 3 2\n1 3 5\n3 4 1\n1 4\n";

#[test]
fn test_read_problem_in_original_layout() {
    let mut reader = TokenReader::new(Cursor::new(DIAMOND_INPUT));
    let problem: Problem<i64> = reader.read_problem().unwrap();

    assert_eq!(problem.vertices, vec![1, 2, 3, 4]);
    assert_eq!(problem.edges, vec![(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 4, 1)]);
    assert_eq!(problem.query, (1, 4));
}

#[test]
fn test_tokens_may_span_lines_arbitrarily() {
    let input = "2 10\n\n   20 1\n10\n20 2.5 10 20";
    let mut reader = TokenReader::new(Cursor::new(input));
    let problem: Problem<OrderedFloat<f64>> = reader.read_problem().unwrap();

    assert_eq!(problem.vertices, vec![10, 20]);
    assert_eq!(problem.edges, vec![(10, 20, OrderedFloat(2.5))]);
    assert_eq!(problem.query, (10, 20));
}

#[test]
fn test_truncated_input_reports_what_was_expected() {
    let mut reader = TokenReader::new(Cursor::new("3\n1 2"));
    match reader.read_problem::<i64>() {
        Err(Error::UnexpectedEof { expected }) => assert_eq!(expected, "vertex key"),
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_malformed_token_is_a_parse_error() {
    let mut reader = TokenReader::new(Cursor::new("2\n1 2\n1\n1 2 heavy\n1 2"));
    match reader.read_problem::<i64>() {
        Err(Error::Parse { expected, found }) => {
            assert_eq!(expected, "edge weight");
            assert_eq!(found, "heavy");
        }
        other => panic!("expected Parse error, got {:?}", other),
    }

    let mut reader = TokenReader::new(Cursor::new("-1"));
    assert!(matches!(
        reader.read_vertices(),
        Err(Error::Parse { expected: "vertex count", .. })
    ));
}

#[test]
fn test_build_graph_drops_or_rejects_dangling_edges() {
    let problem = Problem {
        vertices: vec![1, 2, 2],
        edges: vec![(1, 2, 3u32), (1, 9, 1)],
        query: (1, 2),
    };

    let graph = problem.build_graph(false).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    match problem.build_graph(true) {
        Err(Error::MissingVertex(key)) => assert_eq!(key, 9),
        other => panic!("expected MissingVertex, got {:?}", other),
    }
}

#[test]
fn test_format_path() {
    assert_eq!(format_path(&[1, 2, 3, 4], DEFAULT_SEPARATOR), "1 -> 2 -> 3 -> 4");
    assert_eq!(format_path(&[7], ","), "7");
    assert_eq!(format_path(&[], DEFAULT_SEPARATOR), "");
}

#[test]
fn test_end_to_end_report() {
    let mut reader = TokenReader::new(Cursor::new(DIAMOND_INPUT));
    let problem: Problem<i64> = reader.read_problem().unwrap();
    let graph = problem.build_graph(false).unwrap();

    let (from, to) = problem.query;
    let mut solver = DijkstraSolver::new(&graph);
    let outcome = solver.solve(from, to);
    let report = QueryReport::new(from, to, &outcome, solver.path());

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["distance"], 4);
    assert_eq!(json["path"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(json["stats"]["settled"], 4);
    assert_eq!(json["stats"]["stale_discarded"], 0);
}

#[test]
fn test_failed_report_omits_distance() {
    let problem = Problem {
        vertices: vec![1, 2],
        edges: Vec::<(i64, i64, i64)>::new(),
        query: (1, 2),
    };
    let graph = problem.build_graph(false).unwrap();
    let mut solver = DijkstraSolver::new(&graph);
    let outcome = solver.solve(1, 2);

    let report = QueryReport::new(1, 2, &outcome, solver.path());
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("distance").is_none());
    assert_eq!(json["stats"]["settled"], 1);
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_huge_counts_with_truncated_input_are_eof_errors() {
    let mut reader = TokenReader::new(Cursor::new("1\n1\n18446744073709551615\n"));
    match reader.read_problem::<i64>() {
        Err(Error::UnexpectedEof { expected }) => assert_eq!(expected, "edge source key"),
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }

    let mut reader = TokenReader::new(Cursor::new("18446744073709551615\n5"));
    match reader.read_vertices() {
        Err(Error::UnexpectedEof { expected }) => assert_eq!(expected, "vertex key"),
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}
