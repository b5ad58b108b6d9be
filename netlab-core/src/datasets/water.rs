//! Water distribution network files (`ky2.txt` layout).
//!
//! Rows are tab separated. A row with exactly nine fields describes a pipe:
//! fields two and three name its end points, and the pipe becomes an edge
//! only when both names contain `J` (junctions). Any other non-blank row must
//! hold three fields, `name`, `x` and `y`, and sets the position of an
//! already-known junction. Fields are read verbatim: quote characters carry
//! no meaning (pipe diameters are often written as `12"`).

use std::{collections::HashMap, io::BufRead, path::Path};

use csv::StringRecord;
use tracing::debug;

use super::{csv_error, open};
use crate::{Graph, GraphKind, Position, error::DatasetError};

const PIPE_FIELDS: usize = 9;

/// Reads a water network file.
///
/// # Errors
/// Returns [`DatasetError::Io`] when the file cannot be read, and the errors
/// of [`parse_water_network`] for malformed content.
pub fn read_water_network(path: &Path) -> Result<Graph, DatasetError> {
    parse_water_network(open(path)?, path)
}

/// Parses water network text from `reader`; `path` is only used in errors.
///
/// Node labels are the junction names. Coordinates for names that never
/// appeared in a junction-to-junction pipe are skipped.
///
/// # Errors
/// Returns [`DatasetError::MalformedRow`] for a row that is neither a pipe
/// nor a coordinate triple, [`DatasetError::InvalidNumber`] when a
/// coordinate is not a number, and [`DatasetError::Csv`] when a row cannot
/// be decoded.
///
/// # Examples
/// ```
/// use std::{io::Cursor, path::Path};
/// use netlab_core::datasets::parse_water_network;
///
/// let text = "P1\tJ-1\tJ-2\t0\t0\t0\t0\t0\t0\nP2\tJ-2\tR-1\t0\t0\t0\t0\t0\t0\nJ-1\t1.5\t2\n";
/// let graph = parse_water_network(Cursor::new(text), Path::new("ky2.txt"))?;
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.position(0).map(|p| p.x), Some(1.5));
/// # Ok::<(), netlab_core::DatasetError>(())
/// ```
pub fn parse_water_network<R: BufRead>(reader: R, path: &Path) -> Result<Graph, DatasetError> {
    let mut graph = Graph::new(GraphKind::Simple);
    let mut ids: HashMap<String, usize> = HashMap::new();

    let mut rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b'\t')
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    for row in rows.records() {
        let row = row.map_err(|source| csv_error(path, source))?;
        let line = line_of(&row);

        if row.len() == PIPE_FIELDS {
            if let (Some(from), Some(to)) = (row.get(1), row.get(2))
                && from.contains('J')
                && to.contains('J')
            {
                let from = junction(&mut graph, &mut ids, from);
                let to = junction(&mut graph, &mut ids, to);
                graph.add_edge(from, to);
            }
            continue;
        }

        if row.iter().all(str::is_empty) {
            continue;
        }
        let fields: Vec<&str> = row.iter().collect();
        let [name, x, y] = fields.as_slice() else {
            return Err(DatasetError::MalformedRow {
                path: path.to_path_buf(),
                line,
                fields: fields.len(),
            });
        };
        let position = Position {
            x: parse_coordinate(x, path, line)?,
            y: parse_coordinate(y, path, line)?,
        };
        match ids.get(*name) {
            Some(&node) => {
                graph.set_position(node, position);
            }
            None => debug!(name = *name, line, "skipping position of unknown node"),
        }
    }
    Ok(graph)
}

fn line_of(row: &StringRecord) -> usize {
    row.position()
        .and_then(|position| usize::try_from(position.line()).ok())
        .unwrap_or_default()
}

fn junction(graph: &mut Graph, ids: &mut HashMap<String, usize>, name: &str) -> usize {
    if let Some(&id) = ids.get(name) {
        return id;
    }
    let id = graph.add_labelled_node(name);
    ids.insert(name.to_owned(), id);
    id
}

fn parse_coordinate(raw: &str, path: &Path, line: usize) -> Result<f64, DatasetError> {
    raw.parse().map_err(|_| DatasetError::InvalidNumber {
        path: path.to_path_buf(),
        line,
        value: raw.to_owned(),
    })
}
