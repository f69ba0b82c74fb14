//! Custom-resource request and response payloads.
//!
//! Field names follow the CloudFormation custom-resource wire format as
//! relayed by the CDK `Provider` framework (PascalCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::{EnvironmentTier, ResolvedEnvironment};

/// Physical id reported on delete when the request carries none.
pub const DEFAULT_PHYSICAL_RESOURCE_ID: &str = "env";

/// Lifecycle event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "Create"),
            Self::Update => write!(f, "Update"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}

/// An incoming custom-resource event.
///
/// Only `RequestType` is required; the rest is accepted when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceRequest {
    pub request_type: RequestType,
    pub physical_resource_id: Option<String>,
    pub request_id: Option<String>,
    pub stack_id: Option<String>,
    pub logical_resource_id: Option<String>,
    pub resource_type: Option<String>,
    #[serde(rename = "ResponseURL")]
    pub response_url: Option<String>,
    pub service_token: Option<String>,
    pub resource_properties: Option<Value>,
    pub old_resource_properties: Option<Value>,
}

impl CustomResourceRequest {
    /// Create a bare request of the given type.
    pub fn new(request_type: RequestType) -> Self {
        Self {
            request_type,
            physical_resource_id: None,
            request_id: None,
            stack_id: None,
            logical_resource_id: None,
            resource_type: None,
            response_url: None,
            service_token: None,
            resource_properties: None,
            old_resource_properties: None,
        }
    }

    /// Set the physical resource id, builder style.
    pub fn with_physical_resource_id(mut self, id: impl Into<String>) -> Self {
        self.physical_resource_id = Some(id.into());
        self
    }
}

/// Attributes exposed to the stack through `Fn::GetAtt`.
///
/// Empty on delete, serialized as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<u32>,
}

impl ResponseData {
    /// Check if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.environment.is_none() && self.replica_count.is_none()
    }
}

/// Response returned to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub physical_resource_id: String,
    pub data: ResponseData,
}

impl CustomResourceResponse {
    /// Response for a Create or Update event.
    ///
    /// The physical id is `<parameter>:<tier>`.
    pub fn resolved(resolved: &ResolvedEnvironment) -> Self {
        Self {
            physical_resource_id: format!("{}:{}", resolved.key, resolved.tier),
            data: ResponseData {
                environment: Some(resolved.tier),
                replica_count: Some(resolved.replica_count),
            },
        }
    }

    /// Response for a Delete event.
    pub fn deleted(physical_resource_id: Option<String>) -> Self {
        Self {
            physical_resource_id: physical_resource_id
                .unwrap_or_else(|| DEFAULT_PHYSICAL_RESOURCE_ID.to_string()),
            data: ResponseData::default(),
        }
    }
}
