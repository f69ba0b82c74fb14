//! The `envtier resolve` command.
//!
//! Reads the environment label once and prints the tier and replica count.

use std::io::Write;

use console::style;

use crate::cli::args::ResolveArgs;
use crate::config::Settings;
use crate::environment::{EnvironmentResolver, ResolvedEnvironment};
use crate::error::Result;
use crate::handler::ResponseData;

use super::dispatcher::Command;

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    settings: &'a Settings,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(settings: &'a Settings, args: ResolveArgs) -> Self {
        Self { settings, args }
    }

    fn write_text(&self, resolved: &ResolvedEnvironment, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} {}", style("Environment:  ").bold(), style(resolved.tier).green())?;
        writeln!(out, "{} {}", style("Replica count:").bold(), resolved.replica_count)?;
        writeln!(out, "{} {}", style("Parameter:    ").bold(), style(&resolved.key).dim())?;
        Ok(())
    }

    fn write_json(&self, resolved: &ResolvedEnvironment, out: &mut dyn Write) -> Result<()> {
        let data = ResponseData {
            environment: Some(resolved.tier),
            replica_count: Some(resolved.replica_count),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&data)?)?;
        Ok(())
    }
}

impl Command for ResolveCommand<'_> {
    async fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let parameter_name = self.args.store.parameter_name(self.settings)?;
        let store = self.args.store.open(self.settings).await?;
        let resolved = EnvironmentResolver::new(store).resolve(&parameter_name).await?;

        if self.args.json {
            self.write_json(&resolved, out)?;
        } else {
            self.write_text(&resolved, out)?;
        }
        Ok(())
    }
}
