//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations.

pub mod check;
pub mod config;
pub mod dispatcher;
pub mod loading;

pub use check::{CheckCommand, CheckSummary, TestReport};
pub use config::ConfigCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
