//! Environment tiers and their replica counts.

use serde::Serialize;

/// A deployment environment tier.
///
/// Each tier carries a fixed replica count that is handed to the
/// downstream Helm release.
///
/// # Example
///
/// ```
/// use envtier::environment::EnvironmentTier;
///
/// let tier = EnvironmentTier::parse("  PRODuction ").unwrap();
/// assert_eq!(tier, EnvironmentTier::Production);
/// assert_eq!(tier.replica_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentTier {
    Development,
    Staging,
    Production,
}

impl EnvironmentTier {
    /// All recognized tiers.
    pub const ALL: [EnvironmentTier; 3] = [
        EnvironmentTier::Development,
        EnvironmentTier::Staging,
        EnvironmentTier::Production,
    ];

    /// Get the tier label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Number of replicas to run in this tier.
    pub fn replica_count(&self) -> u32 {
        match self {
            Self::Development => 1,
            Self::Staging | Self::Production => 2,
        }
    }

    /// Parse a raw label. Surrounding whitespace and case are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "development" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Trim and lowercase a raw label.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl std::fmt::Display for EnvironmentTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EnvironmentTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid environment: {}", normalize(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_runs_one_replica() {
        assert_eq!(EnvironmentTier::Development.replica_count(), 1);
    }

    #[test]
    fn staging_and_production_run_two_replicas() {
        assert_eq!(EnvironmentTier::Staging.replica_count(), 2);
        assert_eq!(EnvironmentTier::Production.replica_count(), 2);
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(
            EnvironmentTier::parse("PRODuction "),
            Some(EnvironmentTier::Production)
        );
        assert_eq!(
            EnvironmentTier::parse("\tStaging\n"),
            Some(EnvironmentTier::Staging)
        );
        assert_eq!(
            EnvironmentTier::parse("development"),
            Some(EnvironmentTier::Development)
        );
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(EnvironmentTier::parse("sandbox"), None);
        assert_eq!(EnvironmentTier::parse(""), None);
        assert_eq!(EnvironmentTier::parse("prod"), None);
        assert_eq!(EnvironmentTier::parse("dev elopment"), None);
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for tier in EnvironmentTier::ALL {
            assert_eq!(EnvironmentTier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn from_str_reports_normalized_value() {
        let err = " SandBox ".parse::<EnvironmentTier>().unwrap_err();
        assert_eq!(err, "Invalid environment: sandbox");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(EnvironmentTier::Staging.to_string(), "staging");
    }

    #[test]
    fn serializes_as_lowercase_label() {
        let json = serde_json::to_string(&EnvironmentTier::Production).unwrap();
        assert_eq!(json, "\"production\"");
    }
}
