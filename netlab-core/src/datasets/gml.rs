//! A small GML reader covering the subset used by graph datasets.
//!
//! A document is a list of `key value` pairs where a value is an integer, a
//! real, a quoted string or a bracketed nested list. Lines starting with `#`
//! are comments. Only the top-level `graph` list is interpreted: its `node`
//! entries (keyed by their integer `id`), its `edge` entries (`source` and
//! `target` ids) and the `multigraph` flag. Everything else is ignored.

use std::{collections::HashMap, io::Read, path::Path};

use tracing::debug;

use super::{io_error, open};
use crate::{Graph, GraphKind, error::DatasetError};

/// Reads a GML file, identifying nodes by their `id` attribute.
///
/// # Errors
/// Returns [`DatasetError::Io`] when the file cannot be read and
/// [`DatasetError::Gml`] when the document is invalid.
pub fn read_gml(path: &Path) -> Result<Graph, DatasetError> {
    let mut text = String::new();
    open(path)?
        .read_to_string(&mut text)
        .map_err(|source| io_error(path, source))?;
    parse_gml(&text, path)
}

/// Parses GML text; `path` is only used in errors.
///
/// Nodes are numbered in document order and labelled with their `id`.
///
/// # Errors
/// Returns [`DatasetError::Gml`] for lexical or structural problems: a
/// missing `graph` list, a node without an integer `id`, a repeated node id,
/// an edge naming an unknown node, or a repeated edge in a graph that is not
/// declared `multigraph 1`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use netlab_core::datasets::parse_gml;
///
/// let text = r#"graph [
///   node [ id 7 label "a" ]
///   node [ id 9 ]
///   edge [ source 7 target 9 ]
/// ]"#;
/// let graph = parse_gml(text, Path::new("demo.gml"))?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.label(0), Some("7"));
/// assert!(graph.has_edge(0, 1));
/// # Ok::<(), netlab_core::DatasetError>(())
/// ```
pub fn parse_gml(text: &str, path: &Path) -> Result<Graph, DatasetError> {
    let tokens = tokenize(text).map_err(|err| err.into_dataset_error(path))?;
    let document = Parser::new(tokens)
        .parse_document()
        .map_err(|err| err.into_dataset_error(path))?;
    build_graph(&document).map_err(|err| err.into_dataset_error(path))
}

#[derive(Debug)]
struct GmlFault {
    line: usize,
    message: String,
}

impl GmlFault {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    fn into_dataset_error(self, path: &Path) -> DatasetError {
        DatasetError::Gml {
            path: path.to_path_buf(),
            line: self.line,
            message: self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Key(String),
    Int(i64),
    Real,
    Str,
    Open,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
struct Spanned {
    token: Token,
    line: usize,
}

fn tokenize(text: &str) -> Result<Vec<Spanned>, GmlFault> {
    let mut tokens = Vec::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        if raw_line.trim_start().starts_with('#') {
            continue;
        }
        let mut chars = raw_line.char_indices().peekable();
        while let Some(&(start, ch)) = chars.peek() {
            if ch.is_whitespace() {
                chars.next();
                continue;
            }
            let token = match ch {
                '[' => {
                    chars.next();
                    Token::Open
                }
                ']' => {
                    chars.next();
                    Token::Close
                }
                '"' => {
                    chars.next();
                    if !chars.by_ref().any(|(_, inner)| inner == '"') {
                        return Err(GmlFault::new(line, "unterminated string"));
                    }
                    Token::Str
                }
                _ => {
                    let mut end = raw_line.len();
                    while let Some(&(offset, next)) = chars.peek() {
                        if next.is_whitespace() || next == '[' || next == ']' || next == '"' {
                            end = offset;
                            break;
                        }
                        chars.next();
                    }
                    classify_word(&raw_line[start..end], line)?
                }
            };
            tokens.push(Spanned { token, line });
        }
    }
    Ok(tokens)
}

fn classify_word(word: &str, line: usize) -> Result<Token, GmlFault> {
    let starts_key = word
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
    if starts_key {
        if word.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return Ok(Token::Key(word.to_owned()));
        }
        return Err(GmlFault::new(line, format!("invalid key `{word}`")));
    }
    if let Ok(value) = word.parse::<i64>() {
        return Ok(Token::Int(value));
    }
    word.parse::<f64>()
        .map(|_| Token::Real)
        .map_err(|_| GmlFault::new(line, format!("unexpected token `{word}`")))
}

/// Attribute value; only integers and lists are interpreted.
#[derive(Debug)]
enum Value {
    Int(i64),
    Real,
    Str,
    List(Vec<Entry>),
}

#[derive(Debug)]
struct Entry {
    key: String,
    value: Value,
    line: usize,
}

struct Parser {
    tokens: std::vec::IntoIter<Spanned>,
    last_line: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last_line: 1,
        }
    }

    fn advance(&mut self) -> Option<Spanned> {
        let token = self.tokens.next()?;
        self.last_line = token.line;
        Some(token)
    }

    fn parse_document(mut self) -> Result<Vec<Entry>, GmlFault> {
        self.parse_list(false)
    }

    fn parse_list(&mut self, nested: bool) -> Result<Vec<Entry>, GmlFault> {
        let mut entries = Vec::new();
        loop {
            let Some(Spanned { token, line }) = self.advance() else {
                if nested {
                    return Err(GmlFault::new(self.last_line, "unterminated list"));
                }
                return Ok(entries);
            };
            let key = match token {
                Token::Key(key) => key,
                Token::Close if nested => return Ok(entries),
                other => {
                    return Err(GmlFault::new(
                        line,
                        format!("expected a key, found {other:?}"),
                    ));
                }
            };
            let value = self.parse_value(&key, line)?;
            entries.push(Entry { key, value, line });
        }
    }

    fn parse_value(&mut self, key: &str, line: usize) -> Result<Value, GmlFault> {
        let Some(Spanned { token, line: at }) = self.advance() else {
            return Err(GmlFault::new(line, format!("key `{key}` has no value")));
        };
        match token {
            Token::Int(value) => Ok(Value::Int(value)),
            Token::Real => Ok(Value::Real),
            Token::Str => Ok(Value::Str),
            Token::Open => self.parse_list(true).map(Value::List),
            other => Err(GmlFault::new(
                at,
                format!("key `{key}` has invalid value {other:?}"),
            )),
        }
    }
}

fn int_attribute(entries: &[Entry], key: &str) -> Option<i64> {
    entries.iter().find_map(|entry| match entry.value {
        Value::Int(value) if entry.key == key => Some(value),
        _ => None,
    })
}

fn build_graph(document: &[Entry]) -> Result<Graph, GmlFault> {
    let Some((body, graph_line)) = document.iter().find_map(|entry| match &entry.value {
        Value::List(body) if entry.key == "graph" => Some((body, entry.line)),
        _ => None,
    }) else {
        return Err(GmlFault::new(1, "missing top-level `graph` list"));
    };

    let kind = if int_attribute(body, "multigraph") == Some(1) {
        GraphKind::Multi
    } else {
        GraphKind::Simple
    };
    if int_attribute(body, "directed") == Some(1) {
        debug!(line = graph_line, "reading directed GML graph as undirected");
    }

    let mut graph = Graph::new(kind);
    let mut ids: HashMap<i64, usize> = HashMap::new();
    for entry in body {
        let Value::List(attributes) = &entry.value else {
            continue;
        };
        match entry.key.as_str() {
            "node" => {
                let id = int_attribute(attributes, "id")
                    .ok_or_else(|| GmlFault::new(entry.line, "node has no integer `id`"))?;
                if ids.contains_key(&id) {
                    return Err(GmlFault::new(entry.line, format!("node id {id} is duplicated")));
                }
                ids.insert(id, graph.add_labelled_node(id.to_string()));
            }
            "edge" => {
                let endpoint = |key: &str| -> Result<usize, GmlFault> {
                    let id = int_attribute(attributes, key).ok_or_else(|| {
                        GmlFault::new(entry.line, format!("edge has no integer `{key}`"))
                    })?;
                    ids.get(&id).copied().ok_or_else(|| {
                        GmlFault::new(entry.line, format!("edge references unknown node {id}"))
                    })
                };
                let (source, target) = (endpoint("source")?, endpoint("target")?);
                if !graph.add_edge(source, target) {
                    return Err(GmlFault::new(
                        entry.line,
                        format!("edge {source}--{target} is duplicated"),
                    ));
                }
            }
            _ => {}
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn parse(text: &str) -> Result<Graph, DatasetError> {
        parse_gml(text, Path::new("power.gml"))
    }

    fn gml_line(err: DatasetError) -> (usize, String) {
        match err {
            DatasetError::Gml { line, message, .. } => (line, message),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    fn reads_nodes_edges_and_ignores_extra_attributes() {
        let text = "\
Creator \"netlab\"
# generated
graph
[
  directed 0
  node
  [
    id 1
    label \"first node\"
    weight 2.5e-1
  ]
  node [ id -4 graphics [ x 1.0 y 2 ] ]
  node [ id 3 ]
  edge [ source 1 target -4 ]
  edge [ source 3 target 1 value 7 ]
]
";
        let graph = parse(text).expect("valid GML");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.label(1), Some("-4"));
        assert_eq!(graph.canonical_edges(), vec![(0, 1), (0, 2)]);
        assert!(!graph.is_multigraph());
    }

    #[rstest]
    fn multigraph_keeps_parallel_edges() {
        let text = "graph [ multigraph 1 node [ id 0 ] node [ id 1 ] \
                    edge [ source 0 target 1 ] edge [ source 1 target 0 ] ]";
        let graph = parse(text).expect("valid GML");
        assert!(graph.is_multigraph());
        assert_eq!(graph.edge_count(), 2);
    }

    #[rstest]
    #[case::no_graph("Creator \"x\"", "missing top-level")]
    #[case::missing_id("graph [ node [ label \"a\" ] ]", "no integer `id`")]
    #[case::duplicate_node("graph [ node [ id 1 ] node [ id 1 ] ]", "duplicated")]
    #[case::unknown_node("graph [ node [ id 1 ] edge [ source 1 target 2 ] ]", "unknown node 2")]
    #[case::duplicate_edge(
        "graph [ node [ id 1 ] node [ id 2 ] edge [ source 1 target 2 ] edge [ source 2 target 1 ] ]",
        "duplicated"
    )]
    #[case::unterminated_list("graph [ node [ id 1 ]", "unterminated list")]
    #[case::unterminated_string("graph [ label \"open ]", "unterminated string")]
    #[case::dangling_key("graph [ node ]", "invalid value")]
    #[case::real_id("graph [ node [ id 1.5 ] ]", "no integer `id`")]
    #[case::string_id("graph [ node [ id \"1\" ] ]", "no integer `id`")]
    #[case::string_key("graph [ \"label\" 1 ]", "expected a key, found Str")]
    fn rejects_invalid_documents(#[case] text: &str, #[case] fragment: &str) {
        let (_, message) = gml_line(parse(text).expect_err("invalid GML must fail"));
        assert!(message.contains(fragment), "{message:?} lacks {fragment:?}");
    }

    #[rstest]
    fn reports_line_of_offending_entry() {
        let text = "graph [\n  node [ id 1 ]\n  edge [ source 1 target 9 ]\n]\n";
        let (line, _) = gml_line(parse(text).expect_err("unknown node must fail"));
        assert_eq!(line, 3);
    }
}
