//! Edge list file loading
//!
//! Text format: one edge per line as two whitespace-separated vertex
//! tokens. Blank lines and anything after `#` are ignored.
//!
//! ```text
//! # road network
//! home work
//! work gym
//! ```

use anyhow::{bail, Context};
use std::path::Path;

use crate::graph::Edge;

/// Parse edge list text into string-keyed edges
///
/// # Errors
/// Fails on the first line that does not hold exactly two tokens, naming
/// the 1-indexed line number.
///
/// # Example
/// ```
/// use graph_walker_core::edgelist;
///
/// let edges = edgelist::parse_edge_list("a b\n# comment\nb c\n").unwrap();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].v1, "b");
/// ```
pub fn parse_edge_list(text: &str) -> anyhow::Result<Vec<Edge<String>>> {
    let mut edges = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [v1, v2] => edges.push(Edge::new(v1.to_string(), v2.to_string())),
            _ => bail!(
                "line {}: expected two vertices, found {}: {:?}",
                idx + 1,
                tokens.len(),
                raw_line.trim()
            ),
        }
    }

    Ok(edges)
}

/// Read and parse an edge list file
pub fn read_edge_list(path: &Path) -> anyhow::Result<Vec<Edge<String>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list: {}", path.display()))?;

    let edges = parse_edge_list(&text)
        .with_context(|| format!("Invalid edge list: {}", path.display()))?;

    log::debug!("Loaded {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Convert string vertices to dense indices for the matrix builder
pub fn to_index_edges(edges: &[Edge<String>]) -> anyhow::Result<Vec<Edge<usize>>> {
    edges
        .iter()
        .map(|edge| {
            let v1 = parse_index(&edge.v1)?;
            let v2 = parse_index(&edge.v2)?;
            Ok(Edge::new(v1, v2))
        })
        .collect()
}

fn parse_index(token: &str) -> anyhow::Result<usize> {
    token
        .parse::<usize>()
        .with_context(|| format!("Vertex {:?} is not a non-negative integer index", token))
}
