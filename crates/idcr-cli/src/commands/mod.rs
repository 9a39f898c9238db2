//! CLI subcommands.

pub mod batch;
pub mod extract;
pub mod fields;
