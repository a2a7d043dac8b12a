//! Weight-matrix input: a start vertex on the first line, then one whitespace-separated
//! row of integer weights per line.

use std::fs;
use std::path::Path;

use log::debug;

use crate::{Edge, Error, Graph, Result, Vertex, VertexId, Weight};

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// Cells holding this value produce no edge.
    pub absent_weight: Option<Weight>,
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| {
        Error::MalformedInput(format!("line {}: `{}` is not an integer", line, token))
    })
}

pub fn parse_graph(input: &str) -> Result<(VertexId, Graph)> {
    parse_graph_with(input, ParseOptions::default())
}

pub fn parse_graph_with(input: &str, options: ParseOptions) -> Result<(VertexId, Graph)> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (start_line, start_text) = lines
        .next()
        .ok_or_else(|| Error::MalformedInput("missing start vertex".to_string()))?;
    let start: i64 = parse_number(start_text, start_line)?;

    let mut matrix: Vec<Vec<Weight>> = Vec::new();
    for (line, text) in lines {
        let row = text
            .split_whitespace()
            .map(|t| parse_number(t, line))
            .collect::<Result<Vec<Weight>>>()?;
        matrix.push(row);
    }

    let n = matrix.len();
    if n == 0 {
        return Err(Error::MalformedInput("weight matrix is empty".to_string()));
    }
    if start < 0 || start as usize >= n {
        return Err(Error::MalformedInput(format!(
            "start vertex {} is outside [0, {})",
            start, n
        )));
    }
    if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(Error::MalformedInput(format!(
            "row {} has {} entries, expected {}",
            i,
            row.len(),
            n
        )));
    }

    let mut graph = Graph::undirected();
    for i in 0..n {
        graph.add_vertex(Vertex::new(i));
    }

    debug!("start vertex is {}", start);
    for (i, row) in matrix.iter().enumerate() {
        debug!("matrix row {}: {:?}", i, row);
        for (j, &w) in row.iter().enumerate() {
            if options.absent_weight == Some(w) {
                continue;
            }
            graph.add_edge(Edge::weighted(i, j, w));
        }
    }

    Ok((VertexId(start as usize), graph))
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<(VertexId, Graph)> {
    read_graph_with(path, ParseOptions::default())
}

pub fn read_graph_with<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<(VertexId, Graph)> {
    let content = fs::read_to_string(path)?;
    parse_graph_with(&content, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdgeKey;
    use std::io::Write;

    const SQUARE: &str = "0\n0 1 3 4\n1 0 2 6\n3 2 0 5\n4 6 5 0\n";

    #[test]
    fn builds_upper_triangle() {
        let (start, g) = parse_graph(SQUARE).unwrap();
        assert_eq!(start, VertexId(0));
        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 6);
        assert!(g.edges().all(|e| e.source < e.target));
        assert_eq!(g.get_edge(EdgeKey::new(3, 2), false).unwrap().weight(), Some(5));
    }

    #[test]
    fn asymmetric_matrix_keeps_first_cell() {
        let (_, g) = parse_graph("1\n0 7\n9 0\n").unwrap();
        assert_eq!(g.size(), 1);
        assert_eq!(g.get_edge(EdgeKey::new(0, 1), true).unwrap().weight(), Some(7));
    }

    #[test]
    fn zero_cells_are_edges_by_default() {
        let (_, g) = parse_graph("0\n0 0\n0 0\n").unwrap();
        assert_eq!(g.size(), 1);

        let opts = ParseOptions {
            absent_weight: Some(0),
        };
        let (_, g) = parse_graph_with("0\n0 0\n0 0\n", opts).unwrap();
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn tolerates_blank_lines_and_extra_spaces() {
        let (start, g) = parse_graph("\n 1 \n0  2\n\n2 0\n\n").unwrap();
        assert_eq!(start, VertexId(1));
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn rejects_bad_start() {
        for input in ["2\n0 1\n1 0\n", "-1\n0 1\n1 0\n", "x\n0 1\n1 0\n", ""] {
            assert!(
                matches!(parse_graph(input), Err(Error::MalformedInput(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn rejects_ragged_or_empty_matrix() {
        assert!(matches!(parse_graph("0\n0 1\n1\n"), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_graph("0\n0 1 2\n1 0 2\n"), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_graph("0\n"), Err(Error::MalformedInput(_))));
        assert!(matches!(parse_graph("0\n0 a\n1 0\n"), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SQUARE.as_bytes()).unwrap();

        let (start, g) = read_graph(file.path()).unwrap();
        assert_eq!(start, VertexId(0));
        assert_eq!(g.size(), 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_graph(dir.path().join("nope.txt")),
            Err(Error::Io(_))
        ));
    }
}
