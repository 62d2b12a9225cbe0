//! Command-line entry point: parse arguments, resolve configuration, dispatch.

mod commands;
pub mod setup;

pub use commands::run;
