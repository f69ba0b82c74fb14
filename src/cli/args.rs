//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// envtier - Resolve the deployment environment tier and its replica count.
#[derive(Debug, Parser)]
#[command(name = "envtier")]
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
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve custom-resource events on AWS Lambda (default if no command specified)
    Serve,

    /// Resolve the environment once and print it
    Resolve(ResolveArgs),

    /// Run a custom-resource event through the handler locally
    Invoke(InvokeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where to read the environment label from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StoreArgs {
    /// Parameter holding the environment label (defaults to $SSM_PARAM_NAME)
    #[arg(short, long, value_name = "NAME")]
    pub param: Option<String>,

    /// Read parameters from a local file instead of SSM (NAME=value lines or YAML)
    #[arg(long, value_name = "PATH")]
    pub params_file: Option<PathBuf>,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `invoke` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InvokeArgs {
    /// Event JSON file, or `-` for stdin
    #[arg(short, long, value_name = "PATH")]
    pub event: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
