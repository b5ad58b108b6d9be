//! Reading the connectome tables and producing the treated ROI table.

use std::{
    collections::BTreeMap,
    fmt,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{Span, field, info, instrument, warn};

use crate::{
    clean::clean_roi,
    errors::ConnectomeError,
    records::{Neuron, NeuronPair, RoiConnection, SynapseCount, TreatedRoi},
    superset::RoiSupersetMapping,
};

/// Directory holding the exported tables when none is given.
pub const DEFAULT_CONNECTOME_DIR: &str = "exported-traced-adjacencies";
/// Neuron table file name.
pub const NEURONS_FILE: &str = "traced-neurons.csv";
/// Total connection table file name.
pub const TOTAL_CONNECTIONS_FILE: &str = "traced-total-connections.csv";
/// Per-ROI connection table file name.
pub const ROI_CONNECTIONS_FILE: &str = "traced-roi-connections.csv";
/// Cache of the cleaned and classified ROI table.
pub const TREATED_ROI_FILE: &str = "treated_roi.csv";

/// The three exported tables, as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectomeTables {
    /// Rows of [`NEURONS_FILE`].
    pub neurons: Vec<Neuron>,
    /// Rows of [`TOTAL_CONNECTIONS_FILE`].
    pub synapses: Vec<SynapseCount>,
    /// Rows of [`ROI_CONNECTIONS_FILE`].
    pub rois: Vec<RoiConnection>,
}

impl ConnectomeTables {
    /// Pair keys of the synapse table, row for row.
    #[must_use]
    pub fn synapse_pairs(&self) -> Vec<NeuronPair> {
        self.synapses.iter().map(SynapseCount::pair).collect()
    }

    /// Pair keys of the ROI table, row for row.
    #[must_use]
    pub fn roi_pairs(&self) -> Vec<NeuronPair> {
        self.rois.iter().map(RoiConnection::pair).collect()
    }
}

/// Returns [`DEFAULT_CONNECTOME_DIR`] as a path.
#[must_use]
pub fn default_connectome_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CONNECTOME_DIR)
}

/// Reads the neuron, total connection and ROI connection tables from `dir`.
///
/// Columns other than the ones mapped by the record types are ignored.
///
/// # Errors
/// Returns [`ConnectomeError::Io`] when a table is missing or unreadable and
/// [`ConnectomeError::Csv`] when a row does not decode.
#[instrument(
    name = "connectome.read",
    err,
    skip_all,
    fields(dir = %dir.display(), neurons = field::Empty, synapses = field::Empty, rois = field::Empty),
)]
pub fn read_datasets(dir: &Path) -> Result<ConnectomeTables, ConnectomeError> {
    let tables = ConnectomeTables {
        neurons: read_table(&dir.join(NEURONS_FILE))?,
        synapses: read_table(&dir.join(TOTAL_CONNECTIONS_FILE))?,
        rois: read_table(&dir.join(ROI_CONNECTIONS_FILE))?,
    };
    let span = Span::current();
    span.record("neurons", tables.neurons.len());
    span.record("synapses", tables.synapses.len());
    span.record("rois", tables.rois.len());
    Ok(tables)
}

/// How the loader uses [`TREATED_ROI_FILE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Reuse an existing cache and write one when it is missing.
    #[default]
    ReadWrite,
    /// Reuse an existing cache but never write.
    ReadOnly,
    /// Always recompute and never write.
    Disabled,
}

impl CachePolicy {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "read-write",
            Self::ReadOnly => "read-only",
            Self::Disabled => "disabled",
        }
    }

    const fn reads(self) -> bool {
        matches!(self, Self::ReadWrite | Self::ReadOnly)
    }

    const fn writes(self) -> bool {
        matches!(self, Self::ReadWrite)
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the treated table of a [`Connectome`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreatedSource {
    /// Read back from [`TREATED_ROI_FILE`].
    Cache,
    /// Cleaned and classified from the ROI table.
    Computed,
}

impl TreatedSource {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Computed => "computed",
        }
    }
}

/// Loaded tables together with the treated ROI table.
#[derive(Debug, Clone)]
pub struct Connectome {
    /// Raw tables.
    pub tables: ConnectomeTables,
    /// One record per neuron pair: its heaviest ROI and that ROI's superset.
    pub treated: Vec<TreatedRoi>,
    /// ROI rows without a counterpart in `treated`.
    pub dropped_duplicates: usize,
    /// Origin of `treated`.
    pub source: TreatedSource,
}

impl Connectome {
    /// Counts treated records per superset; `None` collects unmapped ROIs.
    #[must_use]
    pub fn superset_counts(&self) -> BTreeMap<Option<&str>, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.treated {
            *counts.entry(record.superset.as_deref()).or_insert(0) += 1;
        }
        counts
    }
}

/// Loads a connectome directory and derives its treated ROI table.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use netlab_providers_connectome::{CachePolicy, ConnectomeLoader};
///
/// let connectome = ConnectomeLoader::new()
///     .with_cache_policy(CachePolicy::ReadOnly)
///     .load(Path::new("exported-traced-adjacencies"))?;
/// println!("{} treated pairs", connectome.treated.len());
/// # Ok::<(), netlab_providers_connectome::ConnectomeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectomeLoader {
    cache: CachePolicy,
    mapping: RoiSupersetMapping,
}

impl ConnectomeLoader {
    /// Loader with [`CachePolicy::ReadWrite`] and the hemibrain mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache policy.
    #[must_use]
    pub fn with_cache_policy(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    /// Replaces the mapping used to classify treated records.
    #[must_use]
    pub fn with_mapping(mut self, mapping: RoiSupersetMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Cache policy applied by [`Self::load`].
    #[must_use]
    pub fn cache_policy(&self) -> CachePolicy {
        self.cache
    }

    /// Mapping applied to computed records; cached records keep their stored superset.
    #[must_use]
    pub fn mapping(&self) -> &RoiSupersetMapping {
        &self.mapping
    }

    /// Reads the tables in `dir` and produces the treated ROI table.
    ///
    /// An existing [`TREATED_ROI_FILE`] is reused when the policy reads the
    /// cache. Otherwise the ROI table is cleaned with
    /// [`clean_roi`](crate::clean_roi), each survivor is classified with the
    /// mapping, and under [`CachePolicy::ReadWrite`] the result is written
    /// back through a `.part` file renamed into place.
    ///
    /// # Errors
    /// Returns [`ConnectomeError`] when a table or the cache cannot be read
    /// or decoded, or when the cache cannot be written.
    #[instrument(
        name = "connectome.load",
        err,
        skip_all,
        fields(
            dir = %dir.display(),
            cache = %self.cache,
            source = field::Empty,
            treated = field::Empty,
            dropped = field::Empty,
        ),
    )]
    pub fn load(&self, dir: &Path) -> Result<Connectome, ConnectomeError> {
        let tables = read_datasets(dir)?;
        let cache_path = dir.join(TREATED_ROI_FILE);

        let (treated, source) = if self.cache.reads() && cache_path.is_file() {
            (read_table::<TreatedRoi>(&cache_path)?, TreatedSource::Cache)
        } else {
            let treated = self.treat(tables.rois.clone());
            if self.cache.writes() {
                write_atomic(&cache_path, &treated)?;
                info!(path = %cache_path.display(), rows = treated.len(), "treated ROI cache written");
            }
            (treated, TreatedSource::Computed)
        };

        if treated.len() > tables.rois.len() {
            warn!(
                treated = treated.len(),
                rois = tables.rois.len(),
                "treated ROI cache holds more rows than the ROI table"
            );
        }
        let dropped_duplicates = tables.rois.len().saturating_sub(treated.len());

        let span = Span::current();
        span.record("source", source.as_str());
        span.record("treated", treated.len());
        span.record("dropped", dropped_duplicates);

        Ok(Connectome {
            tables,
            treated,
            dropped_duplicates,
            source,
        })
    }

    fn treat(&self, rois: Vec<RoiConnection>) -> Vec<TreatedRoi> {
        clean_roi(rois)
            .records
            .into_iter()
            .map(|record| {
                let superset = self.mapping.superset_of(&record.roi).map(str::to_owned);
                TreatedRoi {
                    pre: record.pre,
                    post: record.post,
                    roi: record.roi,
                    weight: record.weight,
                    superset,
                }
            })
            .collect()
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConnectomeError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    csv::Reader::from_reader(BufReader::new(file))
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| ConnectomeError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn write_atomic<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ConnectomeError> {
    let mut part_path = path.to_path_buf();
    part_path.set_extension("part");

    let written = write_rows(&part_path, rows)
        .and_then(|()| fs::rename(&part_path, path).map_err(|source| io_error(path, source)));
    if written.is_err() && part_path.exists() {
        // The write error is the one worth reporting.
        if let Err(error) = fs::remove_file(&part_path) {
            warn!(path = %part_path.display(), %error, "failed to remove partial cache file");
        }
    }
    written
}

fn write_rows<T: Serialize>(part_path: &Path, rows: &[T]) -> Result<(), ConnectomeError> {
    let file = File::create(part_path).map_err(|source| io_error(part_path, source))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| ConnectomeError::Csv {
                path: part_path.to_path_buf(),
                source,
            })?;
    }
    writer
        .into_inner()
        .map_err(|error| io_error(part_path, error.into_error()))?
        .flush()
        .map_err(|source| io_error(part_path, source))
}

fn io_error(path: &Path, source: io::Error) -> ConnectomeError {
    ConnectomeError::Io {
        path: path.to_path_buf(),
        source,
    }
}
