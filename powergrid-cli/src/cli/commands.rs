//! Argument parsing, execution and rendering for the `powergrid` binary.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use powergrid_core::{GraphLoader, LoadError, MstError, PowergridError, SpanningTree, solve_with};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Printed when the arguments cannot be parsed.
pub const USAGE: &str = "Usage: powergrid <input file>";

/// Exit status for any input, I/O or internal failure.
const EXIT_FAILURE: u8 = 1;
/// Exit status when the substations cannot all be connected.
const EXIT_NO_SOLUTION: u8 = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "powergrid",
    about = "Compute the cheapest wiring that connects every substation.",
    override_usage = "powergrid <input file>"
)]
pub struct Cli {
    /// Graph file: the substation count on line 1, then one
    /// `start,end,weight,name` record per line.
    #[arg(value_name = "input file")]
    pub input: PathBuf,
}

/// Errors surfaced while executing the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("Cannot open file '{}'.", .path.display())]
    Open {
        /// Path supplied on the command line.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the opened input file failed part-way.
    #[error("An I/O error occurred reading '{}'.", .path.display())]
    Read {
        /// Path supplied on the command line.
        path: PathBuf,
        /// 1-based line being read when the failure occurred.
        line: usize,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Loading or solving failed.
    #[error(transparent)]
    Core(#[from] PowergridError),
}

impl CliError {
    /// Returns the process exit status for this error: `2` when no spanning
    /// tree exists, `1` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(PowergridError::Mst(MstError::NoSpanningTree { .. })) => EXIT_NO_SOLUTION,
            _ => EXIT_FAILURE,
        }
    }

    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "CLI_OPEN",
            Self::Read { .. } => "CLI_READ",
            Self::Core(error) => error.detail_code(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Input file the graph was read from.
    pub input: PathBuf,
    /// The minimum spanning tree.
    pub tree: SpanningTree,
}

/// Loads the graph named by `cli` and computes its minimum spanning tree.
///
/// # Errors
/// Returns [`CliError::Open`] or [`CliError::Read`] for file problems and
/// [`CliError::Core`] for invalid input or a disconnected graph.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use powergrid_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2\n1,2,7,main\n")?;
/// let summary = run_cli(Cli { input: file.path().to_path_buf() })?;
/// assert_eq!(summary.tree.total_weight(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(input = field::Empty, total_weight = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli { input } = cli;
    let span = Span::current();
    span.record("input", field::display(input.display()));

    let reader = open_input(&input)?;
    let tree = solve_with(&GraphLoader::new(), reader).map_err(|error| match error {
        PowergridError::Load(LoadError::Read { line, source }) => CliError::Read {
            path: input.clone(),
            line,
            source,
        },
        other => CliError::Core(other),
    })?;

    span.record("total_weight", tree.total_weight());
    info!(
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary { input, tree })
}

#[instrument(name = "cli.open_input", err, skip(path), fields(path = %path.display()))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes the report: the total wire length, then one `<name> [<weight>]`
/// line per tree edge in report order.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use powergrid_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let tree = powergrid_core::solve("2\n1,2,4,feeder\n".as_bytes())?;
/// let summary = ExecutionSummary { input: PathBuf::from("grid.txt"), tree };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Total wire length (meters): 4\nfeeder [4]\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "Total wire length (meters): {}",
        summary.tree.total_weight()
    )?;
    for edge in summary.tree.edges() {
        writeln!(writer, "{} [{}]", edge.name(), edge.weight())?;
    }
    Ok(())
}
