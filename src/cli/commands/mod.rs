//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary for the Lambda bootstrap and local use
//! - Shared settings loading
//! - The same handler code path locally and on Lambda

pub mod completions;
pub mod dispatcher;
pub mod invoke;
pub mod resolve;
pub mod serve;
pub mod store;

pub use dispatcher::{Command, CommandDispatcher};
