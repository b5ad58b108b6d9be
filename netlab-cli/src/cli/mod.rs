//! Command-line interface for the graph catalogue and the connectome loader.
//!
//! `graph` builds one catalogue entry and reports its size, `options` and
//! `urls` print the static listings, and `connectome` loads a table
//! directory and summarises the treated ROI table.

mod commands;

pub use commands::{
    CacheArg, Cli, CliError, Command, ConnectomeCommand, ConnectomeSummary, ExecutionSummary,
    GraphCommand, GraphSummary, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
