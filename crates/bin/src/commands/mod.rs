//! Subcommand implementations.

pub mod check;
pub mod convert;
pub mod edit;
pub mod show;
