//! Command implementations and argument parsing for the netlab CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use netlab_core::{
    CatalogueError, GraphCatalogue, GraphKind, GraphOptions, ModelParams, Namespace,
    datasets::graph_urls,
};
use netlab_providers_connectome::{
    CachePolicy, ConnectomeError, ConnectomeLoader, DEFAULT_CONNECTOME_DIR, TreatedSource,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Label printed for treated records whose ROI has no superset.
const UNMAPPED_LABEL: &str = "(unmapped)";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "netlab", about = "Build test graphs and summarise connectome tables.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a catalogue graph and print its size.
    Graph(GraphCommand),
    /// Print the valid graph keys as JSON.
    Options,
    /// Print the download URLs of the external datasets.
    Urls,
    /// Load a connectome directory and summarise its treated ROI table.
    Connectome(ConnectomeCommand),
}

/// Options accepted by the `graph` command.
#[derive(Debug, Args, Clone)]
pub struct GraphCommand {
    /// Catalogue key, such as `ER`, `karate` or `p4`.
    pub key: String,

    /// Number of nodes for random models.
    #[arg(long)]
    pub n: Option<usize>,

    /// Neighbour or attachment count for random models.
    #[arg(long)]
    pub m: Option<usize>,

    /// Edge, rewiring or triad probability for random models.
    #[arg(long)]
    pub p: Option<f64>,

    /// Seed for reproducible random models.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding dataset files (defaults to `NETLAB_DATASET_DIR`, then `./datasets`).
    #[arg(long = "dataset-dir")]
    pub dataset_dir: Option<PathBuf>,
}

impl GraphCommand {
    fn params(&self) -> ModelParams {
        ModelParams {
            n: self.n,
            m: self.m,
            p: self.p,
            seed: self.seed,
        }
    }
}

/// Options accepted by the `connectome` command.
#[derive(Debug, Args, Clone)]
pub struct ConnectomeCommand {
    /// Directory with the exported traced adjacency tables.
    #[arg(default_value = DEFAULT_CONNECTOME_DIR)]
    pub dir: PathBuf,

    /// How the treated ROI cache is used.
    #[arg(long, value_enum, default_value_t = CacheArg::ReadWrite)]
    pub cache: CacheArg,
}

/// Cache policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CacheArg {
    /// Reuse the cache and write it when missing.
    ReadWrite,
    /// Reuse the cache without writing.
    ReadOnly,
    /// Ignore the cache entirely.
    Disabled,
}

impl From<CacheArg> for CachePolicy {
    fn from(value: CacheArg) -> Self {
        match value {
            CacheArg::ReadWrite => Self::ReadWrite,
            CacheArg::ReadOnly => Self::ReadOnly,
            CacheArg::Disabled => Self::Disabled,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The key names no catalogue entry.
    #[error("graph `{key}` is not supported; run `netlab options` for the valid keys")]
    UnsupportedGraph {
        /// Key supplied by the user.
        key: String,
    },
    /// Building a catalogue graph failed.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// Loading the connectome tables failed.
    #[error(transparent)]
    Connectome(#[from] ConnectomeError),
}

/// Size of a graph built by the `graph` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    /// Catalogue key.
    pub key: String,
    /// Namespace the key resolved in.
    pub namespace: Namespace,
    /// Whether parallel edges are kept.
    pub kind: GraphKind,
    /// Node count.
    pub nodes: usize,
    /// Edge count.
    pub edges: usize,
    /// Connected component count.
    pub components: usize,
}

/// Table sizes reported by the `connectome` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectomeSummary {
    /// Directory that was loaded.
    pub dir: PathBuf,
    /// Cache policy in effect.
    pub cache: CachePolicy,
    /// Origin of the treated table.
    pub source: TreatedSource,
    /// Neuron rows.
    pub neurons: usize,
    /// Total connection rows.
    pub synapses: usize,
    /// ROI connection rows.
    pub rois: usize,
    /// Treated ROI rows, one per neuron pair.
    pub treated: usize,
    /// ROI rows dropped as duplicates of a pair.
    pub dropped_duplicates: usize,
    /// Treated rows per superset, unmapped ROIs last.
    pub supersets: Vec<(String, usize)>,
}

/// Outcome of a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `graph`.
    Graph(GraphSummary),
    /// Result of `options`.
    Options(GraphOptions),
    /// Result of `urls`.
    Urls(&'static [(&'static str, &'static str)]),
    /// Result of `connectome`.
    Connectome(ConnectomeSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph key is unsupported or when building
/// the graph or loading the connectome fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netlab_cli::cli::{Cli, Command, ExecutionSummary, GraphCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Graph(GraphCommand {
///         key: "k4-2".into(),
///         n: None,
///         m: None,
///         p: None,
///         seed: None,
///         dataset_dir: None,
///     }),
/// };
/// let ExecutionSummary::Graph(summary) = run_cli(cli)? else {
///     panic!("graph command yields a graph summary");
/// };
/// assert_eq!((summary.nodes, summary.edges), (4, 6));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Graph(command) => {
            span.record("command", "graph");
            run_graph(&command).map(ExecutionSummary::Graph)
        }
        Command::Options => {
            span.record("command", "options");
            Ok(ExecutionSummary::Options(GraphCatalogue::default().options()))
        }
        Command::Urls => {
            span.record("command", "urls");
            Ok(ExecutionSummary::Urls(graph_urls()))
        }
        Command::Connectome(command) => {
            span.record("command", "connectome");
            run_connectome(&command).map(ExecutionSummary::Connectome)
        }
    }
}

#[instrument(
    name = "cli.graph",
    err,
    skip(command),
    fields(key = %command.key, dataset_dir = field::Empty),
)]
pub(super) fn run_graph(command: &GraphCommand) -> Result<GraphSummary, CliError> {
    let mut builder = GraphCatalogue::builder();
    if let Some(dir) = &command.dataset_dir {
        builder = builder.with_dataset_dir(dir.clone());
    }
    let catalogue = builder.build();
    Span::current().record("dataset_dir", field::display(catalogue.dataset_dir().display()));

    let unsupported = || CliError::UnsupportedGraph {
        key: command.key.clone(),
    };
    let graph = catalogue
        .load(&command.key, &command.params())?
        .ok_or_else(unsupported)?;
    let namespace = catalogue.namespace(&command.key).ok_or_else(unsupported)?;

    let summary = GraphSummary {
        key: command.key.clone(),
        namespace,
        kind: graph.kind(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        components: graph.component_count(),
    };
    info!(
        key = summary.key.as_str(),
        nodes = summary.nodes,
        edges = summary.edges,
        "graph built"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.connectome",
    err,
    skip(command),
    fields(dir = %command.dir.display(), cache = field::Empty),
)]
pub(super) fn run_connectome(command: &ConnectomeCommand) -> Result<ConnectomeSummary, CliError> {
    let cache = CachePolicy::from(command.cache);
    Span::current().record("cache", cache.as_str());

    let connectome = ConnectomeLoader::new()
        .with_cache_policy(cache)
        .load(&command.dir)?;

    let mut supersets = Vec::new();
    let mut unmapped = 0;
    for (superset, count) in connectome.superset_counts() {
        match superset {
            Some(name) => supersets.push((name.to_owned(), count)),
            None => unmapped = count,
        }
    }
    if unmapped > 0 {
        supersets.push((UNMAPPED_LABEL.to_owned(), unmapped));
    }

    let summary = ConnectomeSummary {
        dir: command.dir.clone(),
        cache,
        source: connectome.source,
        neurons: connectome.tables.neurons.len(),
        synapses: connectome.tables.synapses.len(),
        rois: connectome.tables.rois.len(),
        treated: connectome.treated.len(),
        dropped_duplicates: connectome.dropped_duplicates,
        supersets,
    };
    info!(
        treated = summary.treated,
        dropped = summary.dropped_duplicates,
        source = summary.source.as_str(),
        "connectome summarised"
    );
    Ok(summary)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use netlab_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let urls: &'static [(&'static str, &'static str)] = &[("demo", "https://example.org/demo.txt")];
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&ExecutionSummary::Urls(urls), &mut buffer)?;
/// assert_eq!(buffer.into_inner(), b"demo\thttps://example.org/demo.txt\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Graph(graph) => {
            let kind = match graph.kind {
                GraphKind::Simple => "simple",
                GraphKind::Multi => "multi",
            };
            writeln!(writer, "graph: {} ({})", graph.key, graph.namespace)?;
            writeln!(writer, "kind: {kind}")?;
            writeln!(writer, "nodes: {}", graph.nodes)?;
            writeln!(writer, "edges: {}", graph.edges)?;
            writeln!(writer, "components: {}", graph.components)?;
        }
        ExecutionSummary::Options(options) => writeln!(writer, "{}", options.to_json())?,
        ExecutionSummary::Urls(urls) => {
            for (key, url) in *urls {
                writeln!(writer, "{key}\t{url}")?;
            }
        }
        ExecutionSummary::Connectome(connectome) => {
            writeln!(writer, "directory: {}", connectome.dir.display())?;
            writeln!(
                writer,
                "treated source: {} (cache {})",
                connectome.source.as_str(),
                connectome.cache
            )?;
            writeln!(writer, "neurons: {}", connectome.neurons)?;
            writeln!(writer, "connections: {}", connectome.synapses)?;
            writeln!(writer, "roi connections: {}", connectome.rois)?;
            writeln!(writer, "treated pairs: {}", connectome.treated)?;
            writeln!(writer, "dropped duplicates: {}", connectome.dropped_duplicates)?;
            for (superset, count) in &connectome.supersets {
                writeln!(writer, "{superset}\t{count}")?;
            }
        }
    }
    Ok(())
}
