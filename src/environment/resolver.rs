//! Environment resolution.
//!
//! Reads the environment label from a parameter store and classifies it:
//! 1. Fetch the raw value for the key (one read, no retry, no cache)
//! 2. Trim and lowercase it
//! 3. Match it against the known tiers
//! 4. Attach the tier's replica count

use tracing::{debug, info};

use super::tier::{normalize, EnvironmentTier};
use crate::error::{EnvtierError, Result};
use crate::store::ParameterStore;

/// A resolved environment with its replica count and where it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnvironment {
    /// The parameter the label was read from.
    pub key: String,
    /// The classified tier.
    pub tier: EnvironmentTier,
    /// Replicas to run in this tier.
    pub replica_count: u32,
}

impl ResolvedEnvironment {
    /// Classify a raw label read from `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use envtier::environment::{EnvironmentTier, ResolvedEnvironment};
    ///
    /// let resolved = ResolvedEnvironment::classify("/platform/account/env", "Staging").unwrap();
    /// assert_eq!(resolved.tier, EnvironmentTier::Staging);
    /// assert_eq!(resolved.replica_count, 2);
    ///
    /// assert!(ResolvedEnvironment::classify("/platform/account/env", "sandbox").is_err());
    /// ```
    pub fn classify(key: &str, raw: &str) -> Result<Self> {
        let tier =
            EnvironmentTier::parse(raw).ok_or_else(|| EnvtierError::InvalidEnvironment {
                value: normalize(raw),
                key: key.to_string(),
            })?;

        Ok(Self {
            key: key.to_string(),
            tier,
            replica_count: tier.replica_count(),
        })
    }
}

/// Resolves environment tiers through a [`ParameterStore`].
///
/// The store is owned by the resolver so a test double can be swapped in.
pub struct EnvironmentResolver<S> {
    store: S,
}

impl<S: ParameterStore> EnvironmentResolver<S> {
    /// Create a resolver reading from `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read `key` from the store and classify its value.
    ///
    /// Store failures are returned unchanged. A value that is not a
    /// known tier yields [`EnvtierError::InvalidEnvironment`].
    pub async fn resolve(&self, key: &str) -> Result<ResolvedEnvironment> {
        debug!(parameter = key, "Reading environment label");
        let raw = self.store.get_value(key).await?;

        let resolved = ResolvedEnvironment::classify(key, &raw)?;
        info!(
            environment = %resolved.tier,
            replica_count = resolved.replica_count,
            "Computed replica count"
        );
        Ok(resolved)
    }
}
