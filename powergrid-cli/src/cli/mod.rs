//! Command-line interface for the power-grid planner.
//!
//! `powergrid <input file>` loads the graph, computes the minimum spanning
//! tree and prints the total wire length followed by one line per selected
//! edge.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, USAGE, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
