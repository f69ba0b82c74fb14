//! Parameter stores.
//!
//! The environment label lives in an external key-value store. This module
//! defines the [`ParameterStore`] seam and its implementations:
//!
//! - [`ssm`] - AWS Systems Manager Parameter Store
//! - [`file`] - Local parameter file (`NAME=value` lines or YAML)
//! - [`memory`] - In-process map, used as a test double
//!
//! [`AnyStore`] picks one at runtime for the CLI.

pub mod file;
pub mod memory;
pub mod ssm;

use std::future::Future;

use crate::error::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use ssm::SsmParameterStore;

/// Read access to a key-value parameter store.
pub trait ParameterStore {
    /// Fetch the current value for `key`.
    ///
    /// Every call is a fresh read. Absent keys and unreachable stores are
    /// reported as [`StoreError`].
    fn get_value(&self, key: &str) -> impl Future<Output = Result<String, StoreError>> + Send;
}

/// A store chosen at runtime.
pub enum AnyStore {
    Ssm(SsmParameterStore),
    File(FileStore),
}

impl ParameterStore for AnyStore {
    async fn get_value(&self, key: &str) -> Result<String, StoreError> {
        match self {
            Self::Ssm(store) => store.get_value(key).await,
            Self::File(store) => store.get_value(key).await,
        }
    }
}

impl std::fmt::Debug for AnyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ssm(_) => write!(f, "AnyStore::Ssm"),
            Self::File(store) => write!(f, "AnyStore::File({})", store.path().display()),
        }
    }
}
