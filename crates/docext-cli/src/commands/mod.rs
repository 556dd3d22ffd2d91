//! CLI subcommands.

pub mod convert;
pub mod extract;
pub mod serve;
