//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
#[allow(async_fn_in_trait)]
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Where command output is written
    ///
    /// # Errors
    ///
    /// Any failure ends the process with exit code 1.
    async fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub async fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<()> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(&self.settings, args.clone());
                cmd.execute(out).await
            }
            Some(Commands::Invoke(args)) => {
                let cmd = super::invoke::InvokeCommand::new(&self.settings, args.clone());
                cmd.execute(out).await
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out).await
            }
            Some(Commands::Serve) | None => {
                let cmd = super::serve::ServeCommand::new(&self.settings);
                cmd.execute(out).await
            }
        }
    }
}
