//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "requisite.yml";

/// Requisite - Test preconditions with deterministic skip or fail outcomes.
#[derive(Debug, Parser)]
#[command(name = "requisite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate every test in a manifest
    Check(CheckArgs),

    /// Show resolved behaviors and parameter migrations
    Config(ConfigArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the manifest
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Cargo.lock-style package index (overrides manifest packages)
    #[arg(long, value_name = "PATH")]
    pub lockfile: Option<PathBuf>,

    /// Load additional variables from a dotenv file (repeatable)
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_files: Vec<PathBuf>,

    /// Override a parameter (repeatable)
    #[arg(short = 'P', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            lockfile: None,
            env_files: Vec::new(),
            params: Vec::new(),
            json: false,
        }
    }
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Path to the manifest
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Override a parameter (repeatable)
    #[arg(short = 'P', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            params: Vec::new(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check_defaults() {
        let cli = Cli::try_parse_from(["requisite", "check"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.manifest, PathBuf::from("requisite.yml"));
                assert!(args.lockfile.is_none());
                assert!(args.env_files.is_empty());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_check_with_options() {
        let cli = Cli::try_parse_from([
            "requisite",
            "check",
            "--manifest",
            "tests.yml",
            "--lockfile",
            "Cargo.lock",
            "--env-file",
            ".env",
            "--env-file",
            ".env.local",
            "-P",
            "behaviorOnMissingClasses=fail",
            "--param",
            "failOnMissingEnvironmentVariables=true",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.manifest, PathBuf::from("tests.yml"));
                assert_eq!(args.lockfile, Some(PathBuf::from("Cargo.lock")));
                assert_eq!(args.env_files.len(), 2);
                assert_eq!(args.params.len(), 2);
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["requisite", "config", "--no-color", "--debug"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Config(_)));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["requisite"]).is_err());
    }
}
