//! Command modules for the pylex CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod generate;
pub mod scan;

pub use generate::{run_generate, GenerateArgs};
pub use scan::{run_scan, ScanArgs};
