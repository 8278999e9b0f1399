//! Helpers shared by the CLI unit tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) const CANONICAL_INPUT: &str = "\
6
1,2,3,ab
1,6,5,af
1,5,6,ae
2,6,4,bf
5,6,2,ef
2,3,1,bc
3,6,4,cf
3,4,6,cd
4,5,8,de
4,6,5,df
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_expecting_error(input: PathBuf, panic_msg: &str) -> CliError {
    match run_cli(Cli { input }) {
        Ok(summary) => panic!("{panic_msg}: got {summary:?}"),
        Err(err) => err,
    }
}
