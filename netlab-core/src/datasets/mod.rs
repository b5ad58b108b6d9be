//! File-backed graph datasets.
//!
//! Every dataset is read from a fixed file name under a dataset directory and
//! reduced to its largest connected component. The karate club graph is built
//! in and needs no file.

mod edge_list;
mod gml;
mod karate;
mod water;

use std::{
    env,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use tracing::{field, info, instrument};

use crate::{Graph, error::DatasetError};

pub use edge_list::{parse_edge_list, read_edge_list};
pub use gml::{parse_gml, read_gml};
pub use karate::{KARATE_NODES, karate_club};
pub use water::{parse_water_network, read_water_network};

/// Environment variable overriding the dataset directory.
pub const DATASET_DIR_ENV: &str = "NETLAB_DATASET_DIR";

/// Dataset directory used when [`DATASET_DIR_ENV`] is unset.
pub const DEFAULT_DATASET_DIR: &str = "datasets";

/// Resolves the dataset directory from the environment.
#[must_use]
pub fn default_dataset_dir() -> PathBuf {
    env::var_os(DATASET_DIR_ENV).map_or_else(|| PathBuf::from(DEFAULT_DATASET_DIR), PathBuf::from)
}

/// On-disk layout of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Edge list; `None` splits on whitespace.
    EdgeList {
        /// Field delimiter.
        delimiter: Option<u8>,
    },
    /// Tab-separated water distribution network.
    WaterNetwork,
    /// GML with nodes identified by `id`.
    Gml,
    /// Built-in karate club graph.
    Karate,
}

/// One entry of the dataset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Catalogue key.
    pub key: &'static str,
    /// File name under the dataset directory; `None` for built-in graphs.
    pub file: Option<&'static str>,
    /// How the file is parsed.
    pub format: DatasetFormat,
    /// Whether node labels from the file are kept.
    pub keep_labels: bool,
}

const fn edge_list(key: &'static str, file: &'static str) -> DatasetSpec {
    DatasetSpec {
        key,
        file: Some(file),
        format: DatasetFormat::EdgeList { delimiter: None },
        keep_labels: true,
    }
}

/// Every registered dataset, in listing order.
pub const DATASETS: &[DatasetSpec] = &[
    DatasetSpec {
        key: "water",
        file: Some("ky2.txt"),
        format: DatasetFormat::WaterNetwork,
        keep_labels: false,
    },
    DatasetSpec {
        keep_labels: false,
        ..edge_list("as_733", "as19971108.txt")
    },
    edge_list("p2p_gnuetella08", "p2p-Gnutella08.txt"),
    edge_list("ca_grqc", "ca-GrQc.txt"),
    edge_list("cit_hep_th", "cit-HepTh.txt"),
    edge_list("wiki_vote", "wiki-Vote.txt"),
    edge_list("email_eu_all", "email-EuAll.txt"),
    edge_list("dblp", "dblp.txt"),
    DatasetSpec {
        format: DatasetFormat::EdgeList {
            delimiter: Some(b','),
        },
        ..edge_list("gitub", "github.csv")
    },
    edge_list("ca_astro_ph", "ca-AstroPh.txt"),
    edge_list("ca_hep_th", "ca-HepTh.txt"),
    edge_list("enron_email", "email-enron.txt"),
    DatasetSpec {
        key: "karate",
        file: None,
        format: DatasetFormat::Karate,
        keep_labels: true,
    },
    edge_list("oregon_1", "as-oregon1.txt"),
    DatasetSpec {
        key: "electrical",
        file: Some("power.gml"),
        format: DatasetFormat::Gml,
        keep_labels: true,
    },
    edge_list("roadnet_ca", "road-california.txt"),
];

/// Looks up a dataset by catalogue key.
#[must_use]
pub fn find_dataset(key: &str) -> Option<&'static DatasetSpec> {
    DATASETS.iter().find(|spec| spec.key == key)
}

impl DatasetSpec {
    /// Returns the file path under `dir`, if the dataset is file backed.
    #[must_use]
    pub fn path_in(&self, dir: &Path) -> Option<PathBuf> {
        self.file.map(|file| dir.join(file))
    }

    /// Reads the dataset from `dir` and keeps its largest component.
    ///
    /// # Errors
    /// Returns the reader's [`DatasetError`], or
    /// [`DatasetError::EmptyGraph`] when the file yields no nodes.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use netlab_core::datasets::find_dataset;
    ///
    /// let karate = find_dataset("karate").expect("karate is registered");
    /// let graph = karate.load(Path::new("unused"))?;
    /// assert_eq!(graph.edge_count(), 78);
    /// # Ok::<(), netlab_core::DatasetError>(())
    /// ```
    #[instrument(
        name = "datasets.load",
        err,
        skip(self, dir),
        fields(dataset = self.key, nodes = field::Empty, edges = field::Empty),
    )]
    pub fn load(&self, dir: &Path) -> Result<Graph, DatasetError> {
        let raw = match (self.format, self.path_in(dir)) {
            (DatasetFormat::Karate, _) | (_, None) => karate_club(),
            (DatasetFormat::EdgeList { delimiter }, Some(path)) => read_edge_list(&path, delimiter)?,
            (DatasetFormat::WaterNetwork, Some(path)) => read_water_network(&path)?,
            (DatasetFormat::Gml, Some(path)) => read_gml(&path)?,
        };
        let raw_nodes = raw.node_count();
        let graph = raw.largest_component().ok_or_else(|| DatasetError::EmptyGraph {
            dataset: self.key.to_owned(),
        })?;
        let graph = if self.keep_labels {
            graph
        } else {
            graph.without_labels()
        };

        let span = tracing::Span::current();
        span.record("nodes", graph.node_count());
        span.record("edges", graph.edge_count());
        info!(
            dataset = self.key,
            raw_nodes,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dataset loaded"
        );
        Ok(graph)
    }
}

/// Upstream download locations of the external datasets.
///
/// Informational only; nothing in the library fetches them. The `ca_hep_th`
/// entry points at the citation network, as it always has.
pub const GRAPH_URLS: &[(&str, &str)] = &[
    ("p2p_gnuetella08", "https://snap.stanford.edu/data/p2p-Gnutella08.txt.gz"),
    ("ca_grqc", "https://snap.stanford.edu/data/ca-GrQc.txt.gz"),
    ("cit_hep_th", "https://snap.stanford.edu/data/cit-HepTh.txt.gz"),
    ("wiki_vote", "https://snap.stanford.edu/data/wiki-Vote.txt.gz"),
    ("email_eu_all", "https://snap.stanford.edu/data/email-EuAll.txt.gz"),
    (
        "dblp",
        "https://snap.stanford.edu/data/bigdata/communities/com-dblp.ungraph.txt.gz",
    ),
    ("ca_astro_ph", "https://snap.stanford.edu/data/ca-AstroPh.txt.gz"),
    ("ca_hep_th", "https://snap.stanford.edu/data/cit-HepTh.txt.gz"),
    ("enron_email", "https://snap.stanford.edu/data/email-Enron.txt.gz"),
    ("oregon_1", "https://snap.stanford.edu/data/oregon1_010331.txt.gz"),
    (
        "electrical",
        "http://konect.uni-koblenz.de/downloads/tsv/opsahl-powergrid.tar.bz2",
    ),
    ("roadnet_ca", "https://snap.stanford.edu/data/roadNet-CA.txt.gz"),
];

/// Returns the static dataset URL table.
#[must_use]
pub const fn graph_urls() -> &'static [(&'static str, &'static str)] {
    GRAPH_URLS
}

fn open(path: &Path) -> Result<BufReader<File>, DatasetError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: io::Error) -> DatasetError {
    DatasetError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> DatasetError {
    DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use rstest::rstest;

    #[rstest]
    fn dataset_keys_are_unique() {
        let keys: HashSet<_> = DATASETS.iter().map(|spec| spec.key).collect();
        assert_eq!(keys.len(), DATASETS.len());
    }

    #[rstest]
    fn every_url_names_a_registered_dataset() {
        for (key, url) in graph_urls() {
            assert!(find_dataset(key).is_some(), "{key} is not a dataset");
            assert!(url.starts_with("http"), "{url} is not a URL");
        }
    }

    #[rstest]
    #[case::github("gitub", DatasetFormat::EdgeList { delimiter: Some(b',') })]
    #[case::power_grid("electrical", DatasetFormat::Gml)]
    #[case::water("water", DatasetFormat::WaterNetwork)]
    fn formats_match_their_files(#[case] key: &str, #[case] format: DatasetFormat) {
        assert_eq!(find_dataset(key).map(|spec| spec.format), Some(format));
    }

    #[rstest]
    fn as_733_drops_labels() {
        let spec = find_dataset("as_733").expect("as_733 is registered");
        assert!(!spec.keep_labels);
        assert_eq!(spec.file, Some("as19971108.txt"));
    }
}
