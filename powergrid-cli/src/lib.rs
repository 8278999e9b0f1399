//! Support library for the `powergrid` binary.
//!
//! Exposes argument parsing, execution and rendering so tests can drive the
//! command without spawning a process.

pub mod cli;
pub mod logging;
