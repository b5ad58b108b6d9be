//! The graph catalogue: one registry of models, datasets and fixtures.
//!
//! A [`GraphCatalogue`] is built once and passed to whoever needs graphs.
//! Keys live in three disjoint namespaces, checked in order: random
//! [`Model`]s, file-backed [datasets](crate::datasets) and hand-built
//! [fixtures](crate::fixtures).

use std::{fmt, path::PathBuf};

use serde::Serialize;
use tracing::{field, info, instrument, warn};

use crate::{
    Graph, ModelParams,
    datasets::{self, DATASETS, DatasetSpec},
    error::{CatalogueError, Result},
    fixtures::{FIXTURES, Fixture},
    models::Model,
};

/// Namespace a catalogue key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Random-graph models.
    Models,
    /// File-backed datasets.
    Datasets,
    /// Hand-built fixtures.
    Custom,
}

impl Namespace {
    /// Returns the group name used in [`GraphOptions`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Models => "models",
            Self::Datasets => "datasets",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valid catalogue keys grouped by namespace, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphOptions {
    /// Model keys.
    pub models: Vec<&'static str>,
    /// Dataset keys.
    pub datasets: Vec<&'static str>,
    /// Fixture keys.
    pub custom: Vec<&'static str>,
}

impl GraphOptions {
    /// Renders the listing as JSON indented by one space per level.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::GraphCatalogue;
    ///
    /// let json = GraphCatalogue::builder().build().options().to_json();
    /// assert!(json.starts_with("{\n \"models\": [\n  \"ER\","));
    /// ```
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        if self.serialize(&mut serializer).is_err() {
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

/// Builder for [`GraphCatalogue`].
///
/// # Examples
/// ```
/// use netlab_core::GraphCatalogue;
///
/// let catalogue = GraphCatalogue::builder().with_dataset_dir("/data/graphs").build();
/// assert_eq!(catalogue.dataset_dir().to_str(), Some("/data/graphs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphCatalogueBuilder {
    dataset_dir: Option<PathBuf>,
}

impl GraphCatalogueBuilder {
    /// Creates a builder using the environment's dataset directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads dataset files from `dir` instead of the default location.
    #[must_use]
    pub fn with_dataset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dataset_dir = Some(dir.into());
        self
    }

    /// Finalises the catalogue.
    ///
    /// Without an explicit directory, `NETLAB_DATASET_DIR` is consulted and
    /// `./datasets` used as the fallback.
    #[must_use]
    pub fn build(self) -> GraphCatalogue {
        GraphCatalogue {
            dataset_dir: self
                .dataset_dir
                .unwrap_or_else(datasets::default_dataset_dir),
            models: &Model::ALL,
            datasets: DATASETS,
            fixtures: FIXTURES,
        }
    }
}

/// Immutable registry dispatching catalogue keys to graph producers.
///
/// # Examples
/// ```
/// use netlab_core::{GraphCatalogue, ModelParams};
///
/// let catalogue = GraphCatalogue::builder().build();
/// let path = catalogue
///     .load("p4", &ModelParams::default())?
///     .expect("p4 is registered");
/// assert_eq!(path.edge_count(), 3);
///
/// assert!(catalogue.load("no-such-graph", &ModelParams::default())?.is_none());
/// # Ok::<(), netlab_core::CatalogueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphCatalogue {
    dataset_dir: PathBuf,
    models: &'static [Model],
    datasets: &'static [DatasetSpec],
    fixtures: &'static [Fixture],
}

impl Default for GraphCatalogue {
    fn default() -> Self {
        GraphCatalogueBuilder::new().build()
    }
}

impl GraphCatalogue {
    /// Starts configuring a catalogue.
    #[must_use]
    pub fn builder() -> GraphCatalogueBuilder {
        GraphCatalogueBuilder::new()
    }

    /// Returns the directory dataset files are read from.
    #[must_use]
    pub fn dataset_dir(&self) -> &std::path::Path {
        &self.dataset_dir
    }

    /// Produces the graph registered under `key`.
    ///
    /// Model keys consume `params`, filling unset fields with the model
    /// defaults; dataset and fixture keys ignore them. An unknown key is not
    /// an error: the valid keys are logged at `warn` level and `Ok(None)` is
    /// returned.
    ///
    /// # Errors
    /// Returns [`CatalogueError::MissingParameter`] when a model is requested
    /// without `n`, [`CatalogueError::Generation`] when a model rejects its
    /// parameters and [`CatalogueError::Dataset`] when a dataset cannot be
    /// read.
    #[instrument(
        name = "catalogue.load",
        err,
        skip(self, params),
        fields(key = %key, namespace = field::Empty, nodes = field::Empty, edges = field::Empty),
    )]
    pub fn load(&self, key: &str, params: &ModelParams) -> Result<Option<Graph>> {
        let Some(entry) = self.resolve(key) else {
            warn!(
                key,
                options = %self.options_json(),
                "graph not supported; select one of the listed keys"
            );
            return Ok(None);
        };
        let namespace = entry.namespace();
        let span = tracing::Span::current();
        span.record("namespace", namespace.as_str());

        let graph = match entry {
            Entry::Model(model) => model.generate(params)?,
            Entry::Dataset(spec) => {
                spec.load(&self.dataset_dir)
                    .map_err(|error| CatalogueError::Dataset {
                        dataset: spec.key,
                        error,
                    })?
            }
            Entry::Fixture(fixture) => fixture.build(),
        };
        span.record("nodes", graph.node_count());
        span.record("edges", graph.edge_count());
        info!(
            key,
            namespace = namespace.as_str(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph ready"
        );
        Ok(Some(graph))
    }

    fn resolve(&self, key: &str) -> Option<Entry> {
        if let Some(&model) = self.models.iter().find(|model| model.key() == key) {
            return Some(Entry::Model(model));
        }
        if let Some(spec) = self.datasets.iter().find(|spec| spec.key == key) {
            return Some(Entry::Dataset(spec));
        }
        self.fixtures
            .iter()
            .find(|fixture| fixture.key == key)
            .map(Entry::Fixture)
    }

    /// Returns the namespace `key` is registered in, if any.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{GraphCatalogue, Namespace};
    ///
    /// let catalogue = GraphCatalogue::builder().build();
    /// assert_eq!(catalogue.namespace("WS"), Some(Namespace::Models));
    /// assert_eq!(catalogue.namespace("karate"), Some(Namespace::Datasets));
    /// assert_eq!(catalogue.namespace("k4-1"), Some(Namespace::Custom));
    /// assert_eq!(catalogue.namespace("k5"), None);
    /// ```
    #[must_use]
    pub fn namespace(&self, key: &str) -> Option<Namespace> {
        self.resolve(key).map(|entry| entry.namespace())
    }

    /// Returns whether `key` is registered in any namespace.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.namespace(key).is_some()
    }

    /// Lists the valid keys grouped by namespace.
    #[must_use]
    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            models: self.models.iter().map(|model| model.key()).collect(),
            datasets: self.datasets.iter().map(|spec| spec.key).collect(),
            custom: self.fixtures.iter().map(|fixture| fixture.key).collect(),
        }
    }

    /// Lists the valid keys as JSON indented by one space per level.
    #[must_use]
    pub fn options_json(&self) -> String {
        self.options().to_json()
    }

    /// Returns the static dataset download URL table.
    #[must_use]
    pub const fn urls(&self) -> &'static [(&'static str, &'static str)] {
        datasets::graph_urls()
    }
}

enum Entry {
    Model(Model),
    Dataset(&'static DatasetSpec),
    Fixture(&'static Fixture),
}

impl Entry {
    const fn namespace(&self) -> Namespace {
        match self {
            Self::Model(_) => Namespace::Models,
            Self::Dataset(_) => Namespace::Datasets,
            Self::Fixture(_) => Namespace::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> GraphCatalogue {
        GraphCatalogue::builder()
            .with_dataset_dir("/nonexistent/netlab")
            .build()
    }

    #[rstest]
    fn options_follow_registration_order(catalogue: GraphCatalogue) {
        let options = catalogue.options();
        assert_eq!(options.models, vec!["ER", "WS", "BA", "CSF"]);
        assert_eq!(options.datasets.first(), Some(&"water"));
        assert_eq!(options.datasets.last(), Some(&"roadnet_ca"));
        assert_eq!(options.datasets.len(), 16);
        assert_eq!(options.custom.len(), 10);
    }

    #[rstest]
    fn options_json_uses_single_space_indent(catalogue: GraphCatalogue) {
        let json = catalogue.options_json();
        assert!(json.contains("\n \"datasets\": [\n  \"water\",\n"));
        assert!(json.ends_with("\n ]\n}"));
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["custom"][0], "o4");
    }

    #[rstest]
    #[case::model("CSF", Some(Namespace::Models))]
    #[case::dataset("electrical", Some(Namespace::Datasets))]
    #[case::fixture("c4_3_bridge", Some(Namespace::Custom))]
    #[case::unknown("C4", None)]
    fn namespaces_are_resolved(
        catalogue: GraphCatalogue,
        #[case] key: &str,
        #[case] expected: Option<Namespace>,
    ) {
        assert_eq!(catalogue.namespace(key), expected);
        assert_eq!(catalogue.contains(key), expected.is_some());
    }

    #[rstest]
    fn missing_dataset_file_is_fatal(catalogue: GraphCatalogue) {
        let err = catalogue
            .load("ca_grqc", &ModelParams::default())
            .expect_err("file is missing");
        assert_eq!(err.code(), crate::CatalogueErrorCode::DatasetFailure);
        assert_eq!(err.dataset_code(), Some(crate::DatasetErrorCode::Io));
    }

    #[rstest]
    fn builtin_dataset_ignores_directory(catalogue: GraphCatalogue) {
        let graph = catalogue
            .load("karate", &ModelParams::default())
            .expect("karate is built in")
            .expect("karate is registered");
        assert_eq!(graph.node_count(), 34);
    }

    #[rstest]
    fn urls_are_exposed(catalogue: GraphCatalogue) {
        assert_eq!(catalogue.urls().len(), 12);
    }
}
