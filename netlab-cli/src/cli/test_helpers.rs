//! Small helpers shared across CLI tests.

use super::{Cli, CliError, Command, ExecutionSummary, GraphCommand, render_summary, run_cli};

pub(super) fn graph_command(key: &str) -> GraphCommand {
    GraphCommand {
        key: key.to_owned(),
        n: None,
        m: None,
        p: None,
        seed: None,
        dataset_dir: None,
    }
}

pub(super) fn graph_cli(command: GraphCommand) -> Cli {
    Cli {
        command: Command::Graph(command),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_summary(summary, &mut buffer) {
        panic!("rendering into memory cannot fail: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("summary must be UTF-8: {err}"),
    }
}
