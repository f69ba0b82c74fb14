//! In-memory parameter store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::ParameterStore;
use crate::error::StoreError;

/// A parameter store backed by a map.
///
/// Counts every read so callers can assert whether the store was touched.
///
/// # Example
///
/// ```
/// use envtier::store::MemoryStore;
///
/// let store = MemoryStore::new().with_value("/platform/account/env", "staging");
/// assert_eq!(store.reads(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    reads: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of reads served so far, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl ParameterStore for MemoryStore {
    async fn get_value(&self, key: &str) -> Result<String, StoreError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }
}
