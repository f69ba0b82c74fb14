//! Shell completions generation.
//!
//! The `envtier completions` command generates shell completion scripts.

use std::io::Write;

use crate::cli::args::{Cli, CompletionsArgs};
use clap::CommandFactory;

use super::dispatcher::Command;

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    async fn execute(&self, out: &mut dyn Write) -> crate::error::Result<()> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "envtier", out);
        Ok(())
    }
}
