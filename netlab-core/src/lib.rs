//! Netlab core library: a catalogue of test graphs.
//!
//! Graphs come from seeded random models, SNAP-style dataset files and a set
//! of hand-built fixtures, all reachable through [`GraphCatalogue`].

mod catalogue;
pub mod datasets;
mod error;
pub mod fixtures;
mod graph;
mod models;

pub use crate::{
    catalogue::{GraphCatalogue, GraphCatalogueBuilder, GraphOptions, Namespace},
    error::{
        CatalogueError, CatalogueErrorCode, DatasetError, DatasetErrorCode, GenerationError,
        GenerationErrorCode, Result,
    },
    graph::{Graph, GraphKind, Node, Position},
    models::{
        CONNECTED_WATTS_STROGATZ_TRIES, Model, ModelParams, barabasi_albert,
        clustered_scale_free, connected_watts_strogatz, default_edge_probability, erdos_renyi,
    },
};
