//! Whitespace- or delimiter-separated edge lists (SNAP layout).
//!
//! Each row with at least two tokens contributes an edge between its first
//! two tokens; further tokens are ignored. Node labels are kept and nodes are
//! numbered in order of first appearance.
//!
//! Whitespace-separated files treat text after `#` as a comment. Files with
//! an explicit delimiter go through a [`csv`] reader, so quoted fields are
//! honoured and only rows starting with `#` are comments.

use std::{collections::HashMap, io::BufRead, path::Path};

use super::{csv_error, io_error, open};
use crate::{Graph, GraphKind, error::DatasetError};

/// Reads an edge list file into a simple graph.
///
/// `delimiter` of `None` splits on any whitespace.
///
/// # Errors
/// Returns [`DatasetError::Io`] when the file cannot be opened or read, and
/// [`DatasetError::Csv`] when a delimited file cannot be decoded.
pub fn read_edge_list(path: &Path, delimiter: Option<u8>) -> Result<Graph, DatasetError> {
    parse_edge_list(open(path)?, delimiter, path)
}

/// Parses edge list text from `reader`; `path` is only used in errors.
///
/// # Errors
/// Returns [`DatasetError::Io`] when reading from `reader` fails, and
/// [`DatasetError::Csv`] when a delimited record cannot be decoded.
///
/// # Examples
/// ```
/// use std::{io::Cursor, path::Path};
/// use netlab_core::datasets::parse_edge_list;
///
/// let text = "# comment\na b\nb c extra\nlonely\n";
/// let graph = parse_edge_list(Cursor::new(text), None, Path::new("demo"))?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.label(2), Some("c"));
/// # Ok::<(), netlab_core::DatasetError>(())
/// ```
pub fn parse_edge_list<R: BufRead>(
    reader: R,
    delimiter: Option<u8>,
    path: &Path,
) -> Result<Graph, DatasetError> {
    let mut graph = Graph::new(GraphKind::Simple);
    let mut ids: HashMap<String, usize> = HashMap::new();

    let Some(delimiter) = delimiter else {
        for line in reader.lines() {
            let line = line.map_err(|source| io_error(path, source))?;
            let content = line.split('#').next().unwrap_or_default();
            let mut tokens = content.split_whitespace();
            if let (Some(left), Some(right)) = (tokens.next(), tokens.next()) {
                add_edge(&mut graph, &mut ids, left, right);
            }
        }
        return Ok(graph);
    };

    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);
    for record in records.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        if let (Some(left), Some(right)) = (record.get(0), record.get(1))
            && !left.is_empty()
            && !right.is_empty()
        {
            add_edge(&mut graph, &mut ids, left, right);
        }
    }
    Ok(graph)
}

fn add_edge(graph: &mut Graph, ids: &mut HashMap<String, usize>, left: &str, right: &str) {
    let left = node_id(graph, ids, left);
    let right = node_id(graph, ids, right);
    graph.add_edge(left, right);
}

fn node_id(graph: &mut Graph, ids: &mut HashMap<String, usize>, label: &str) -> usize {
    if let Some(&id) = ids.get(label) {
        return id;
    }
    let id = graph.add_labelled_node(label);
    ids.insert(label.to_owned(), id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use rstest::rstest;

    fn parse(text: &str, delimiter: Option<u8>) -> Graph {
        parse_edge_list(Cursor::new(text), delimiter, Path::new("test.txt"))
            .expect("in-memory parse must succeed")
    }

    #[rstest]
    fn labels_follow_first_appearance() {
        let graph = parse("30 10\n10 20\n", None);
        let labels: Vec<_> = (0..3).map(|node| graph.label(node)).collect();
        assert_eq!(labels, vec![Some("30"), Some("10"), Some("20")]);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 2));
    }

    #[rstest]
    #[case::full_line_comment("# FromNodeId ToNodeId\n1 2\n", 1)]
    #[case::trailing_comment("1 2 # weight\n2 3\n", 2)]
    #[case::blank_lines("\n\n1\t2\n\n", 1)]
    #[case::single_token("1\n1 2\n", 1)]
    #[case::duplicates("1 2\n2 1\n", 1)]
    fn comments_and_short_lines_are_skipped(#[case] text: &str, #[case] edges: usize) {
        assert_eq!(parse(text, None).edge_count(), edges);
    }

    #[rstest]
    fn explicit_delimiter_trims_tokens() {
        let graph = parse("id_1,id_2\n0, 1\n1 ,2\n", Some(b','));
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.label(3), Some("1"));
        assert_eq!(graph.edge_count(), 3);
    }

    #[rstest]
    fn delimited_rows_honour_quotes_and_comments() {
        let text = "# id_1,id_2\n\"a,1\",b\n\nb,\"c\"\nlonely\n,d\n";
        let graph = parse(text, Some(b','));
        let labels: Vec<_> = (0..graph.node_count()).map(|node| graph.label(node)).collect();
        assert_eq!(labels, vec![Some("a,1"), Some("b"), Some("c")]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[rstest]
    fn undecodable_delimited_row_is_a_csv_error() {
        let text: &[u8] = b"0,1\n\xff,2\n";
        let err = parse_edge_list(Cursor::new(text), Some(b','), Path::new("g.csv"))
            .expect_err("invalid UTF-8 must fail");
        assert_eq!(err.code().as_str(), "DATASET_CSV");
        assert!(err.to_string().contains("g.csv"));
    }

    #[rstest]
    fn missing_file_reports_path() {
        let err = read_edge_list(Path::new("/nonexistent/netlab/edges.txt"), None)
            .expect_err("missing files must fail");
        match err {
            DatasetError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/netlab/edges.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
