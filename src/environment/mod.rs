//! Environment tiers and their resolution.
//!
//! The active environment is a label held in a parameter store. It is
//! trimmed, lowercased and matched against three tiers:
//!
//! | Tier          | Replicas |
//! |---------------|----------|
//! | `development` | 1        |
//! | `staging`     | 2        |
//! | `production`  | 2        |
//!
//! Any other label is an error.

pub mod resolver;
pub mod tier;

pub use resolver::{EnvironmentResolver, ResolvedEnvironment};
pub use tier::{normalize, EnvironmentTier};
