//! envtier - Environment tier resolution for CloudFormation custom resources.
//!
//! envtier reads the deployment environment label from a parameter store,
//! classifies it as `development`, `staging` or `production`, and maps it to
//! a replica count. It runs as an AWS Lambda behind a CDK custom-resource
//! provider, and as a CLI for local checks.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime settings from environment variables
//! - [`environment`] - Environment tiers and resolution
//! - [`error`] - Error types and result aliases
//! - [`handler`] - Custom-resource request/response adapter
//! - [`runtime`] - Lambda runtime integration
//! - [`store`] - Parameter stores (SSM, local file, in-memory)
//!
//! # Example
//!
//! ```
//! use envtier::environment::{EnvironmentResolver, EnvironmentTier};
//! use envtier::store::MemoryStore;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryStore::new().with_value("/platform/account/env", "PRODuction ");
//! let resolver = EnvironmentResolver::new(store);
//!
//! let resolved = resolver.resolve("/platform/account/env").await.unwrap();
//! assert_eq!(resolved.tier, EnvironmentTier::Production);
//! assert_eq!(resolved.replica_count, 2);
//! # });
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod handler;
pub mod runtime;
pub mod store;

pub use error::{EnvtierError, Result, StoreError};
