//! The `envtier serve` command.
//!
//! Runs the Lambda event loop. This is what the function's bootstrap
//! executes when no subcommand is given.

use std::io::Write;

use crate::config::Settings;
use crate::error::{EnvtierError, Result};
use crate::runtime;

use super::dispatcher::Command;

/// The serve command implementation.
pub struct ServeCommand<'a> {
    settings: &'a Settings,
}

impl<'a> ServeCommand<'a> {
    /// Create a new serve command.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl Command for ServeCommand<'_> {
    async fn execute(&self, _out: &mut dyn Write) -> Result<()> {
        runtime::serve(self.settings)
            .await
            .map_err(|err| EnvtierError::Other(anyhow::anyhow!(err)))?;
        Ok(())
    }
}
