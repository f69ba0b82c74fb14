//! Custom-resource event handling.

use tracing::info;

use super::event::{CustomResourceRequest, CustomResourceResponse, RequestType};
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::store::ParameterStore;

/// Answers orchestrator lifecycle events with the resolved environment.
///
/// Create and Update resolve the configured parameter. Delete is
/// acknowledged without touching the store.
pub struct CustomResourceHandler<S> {
    resolver: EnvironmentResolver<S>,
    parameter_name: String,
}

impl<S: ParameterStore> CustomResourceHandler<S> {
    /// Create a handler resolving `parameter_name` through `resolver`.
    pub fn new(resolver: EnvironmentResolver<S>, parameter_name: impl Into<String>) -> Self {
        Self {
            resolver,
            parameter_name: parameter_name.into(),
        }
    }

    /// The parameter resolved on Create and Update.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    /// Get the resolver.
    pub fn resolver(&self) -> &EnvironmentResolver<S> {
        &self.resolver
    }

    /// Handle one event.
    pub async fn handle(&self, request: CustomResourceRequest) -> Result<CustomResourceResponse> {
        info!(
            request_type = %request.request_type,
            logical_resource_id = request.logical_resource_id.as_deref().unwrap_or("-"),
            "Handling custom resource event"
        );

        match request.request_type {
            RequestType::Delete => Ok(CustomResourceResponse::deleted(
                request.physical_resource_id,
            )),
            RequestType::Create | RequestType::Update => {
                let resolved = self.resolver.resolve(&self.parameter_name).await?;
                Ok(CustomResourceResponse::resolved(&resolved))
            }
        }
    }
}
