//! Support library for the `netlab` binary.
//!
//! Exposes the command pipeline and logging set-up so tests can drive
//! commands without spawning a process.

pub mod cli;
pub mod logging;
