//! The `envtier invoke` command.
//!
//! Feeds a custom-resource event through the same handler the Lambda uses
//! and prints the response.

use std::io::{Read, Write};
use std::path::Path;

use crate::cli::args::InvokeArgs;
use crate::config::Settings;
use crate::environment::EnvironmentResolver;
use crate::error::{EnvtierError, Result};
use crate::handler::{CustomResourceHandler, CustomResourceRequest};

use super::dispatcher::Command;

/// The invoke command implementation.
pub struct InvokeCommand<'a> {
    settings: &'a Settings,
    args: InvokeArgs,
}

impl<'a> InvokeCommand<'a> {
    /// Create a new invoke command.
    pub fn new(settings: &'a Settings, args: InvokeArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for InvokeCommand<'_> {
    async fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let request = read_event(&self.args.event)?;
        let parameter_name = self.args.store.parameter_name(self.settings)?;
        let store = self.args.store.open(self.settings).await?;

        let handler = CustomResourceHandler::new(EnvironmentResolver::new(store), parameter_name);
        let response = handler.handle(request).await?;

        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        Ok(())
    }
}

/// Read and decode an event from a file, or stdin for `-`.
fn read_event(path: &Path) -> Result<CustomResourceRequest> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        raw
    } else {
        std::fs::read_to_string(path)?
    };
    parse_event(&raw)
}

fn parse_event(raw: &str) -> Result<CustomResourceRequest> {
    serde_json::from_str(raw).map_err(|e| EnvtierError::InvalidEvent {
        message: e.to_string(),
    })
}
