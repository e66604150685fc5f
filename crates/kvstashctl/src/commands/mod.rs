//! Subcommand implementations.

pub mod get;
pub mod put;
