use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::graph::{KeyedGraph, MutableGraph, VertexKey, Weight};
use crate::{Error, Result};

/// A parsed problem: vertex keys, edge triples and one query pair
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<W> {
    pub vertices: Vec<VertexKey>,
    pub edges: Vec<(VertexKey, VertexKey, W)>,
    pub query: (VertexKey, VertexKey),
}

impl<W> Problem<W>
where
    W: Weight,
{
    /// Builds the graph described by this problem.
    ///
    /// Edges naming unknown vertices are dropped with a warning, or reported as
    /// `Error::MissingVertex` when `strict` is set.
    pub fn build_graph(&self, strict: bool) -> Result<KeyedGraph<W>> {
        let mut graph = KeyedGraph::with_capacity(self.vertices.len());

        for &key in &self.vertices {
            if !graph.add_vertex(key) {
                log::warn!("duplicate vertex {} ignored", key);
            }
        }

        for &(from, to, weight) in &self.edges {
            if strict {
                graph.try_add_edge(from, to, weight)?;
            } else if !graph.add_edge(from, to, weight) {
                log::warn!("edge {} -> {} dropped: endpoint not in graph", from, to);
            }
        }

        Ok(graph)
    }
}

/// Reads whitespace separated tokens from a buffered reader, across line breaks
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R> TokenReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Parses the next token as `T`; `expected` names the value in error messages
    pub fn read<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| Error::Parse {
            expected,
            found: token,
        })
    }

    /// Reads a count followed by that many vertex keys
    pub fn read_vertices(&mut self) -> Result<Vec<VertexKey>> {
        let count: usize = self.read("vertex count")?;
        (0..count).map(|_| self.read("vertex key")).collect()
    }

    /// Reads a count followed by that many `from to weight` triples
    pub fn read_edges<W: FromStr>(&mut self) -> Result<Vec<(VertexKey, VertexKey, W)>> {
        let count: usize = self.read("edge count")?;
        // The count is untrusted, so the vector grows with the triples actually read
        (0..count)
            .map(|_| -> Result<(VertexKey, VertexKey, W)> {
                let from = self.read("edge source key")?;
                let to = self.read("edge target key")?;
                let weight = self.read("edge weight")?;
                Ok((from, to, weight))
            })
            .collect()
    }

    /// Reads a `from to` query pair
    pub fn read_query(&mut self) -> Result<(VertexKey, VertexKey)> {
        let from = self.read("query source key")?;
        let to = self.read("query target key")?;
        Ok((from, to))
    }

    /// Reads vertices, edges and the query, in that order
    pub fn read_problem<W: FromStr>(&mut self) -> Result<Problem<W>> {
        let vertices = self.read_vertices()?;
        let edges = self.read_edges()?;
        let query = self.read_query()?;
        Ok(Problem {
            vertices,
            edges,
            query,
        })
    }

    fn next_token(&mut self, expected: &'static str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::UnexpectedEof { expected });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
