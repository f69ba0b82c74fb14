//! Lambda runtime integration.
//!
//! Builds the SSM client and handler once per cold start, then serves
//! custom-resource events until the runtime shuts down.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::{error, info};

use crate::config::Settings;
use crate::environment::EnvironmentResolver;
use crate::handler::{CustomResourceHandler, CustomResourceRequest, CustomResourceResponse};
use crate::store::{ParameterStore, SsmParameterStore};

/// Run the Lambda event loop against SSM.
pub async fn serve(settings: &Settings) -> Result<(), Error> {
    let parameter_name = settings.require_parameter_name()?.to_string();
    let store = SsmParameterStore::from_settings(settings).await;
    let handler = CustomResourceHandler::new(EnvironmentResolver::new(store), parameter_name);

    info!(
        parameter = handler.parameter_name(),
        timeout_ms = settings.store_timeout.map(|t| t.as_millis() as u64),
        "Starting Lambda runtime"
    );

    lambda_runtime::run(service_fn(|event: LambdaEvent<CustomResourceRequest>| {
        handle_event(&handler, event)
    }))
    .await
}

/// Handle one Lambda invocation.
pub async fn handle_event<S: ParameterStore>(
    handler: &CustomResourceHandler<S>,
    event: LambdaEvent<CustomResourceRequest>,
) -> Result<CustomResourceResponse, Error> {
    let request_id = event.context.request_id.clone();
    match handler.handle(event.payload).await {
        Ok(response) => Ok(response),
        Err(err) => {
            error!(%request_id, error = %err, "Custom resource event failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::RequestType;
    use crate::store::MemoryStore;
    use lambda_runtime::Context;

    fn handler_with(store: MemoryStore) -> CustomResourceHandler<MemoryStore> {
        CustomResourceHandler::new(EnvironmentResolver::new(store), "/platform/account/env")
    }

    #[tokio::test]
    async fn handle_event_returns_response() {
        let handler =
            handler_with(MemoryStore::new().with_value("/platform/account/env", "development"));
        let event = LambdaEvent::new(
            CustomResourceRequest::new(RequestType::Create),
            Context::default(),
        );

        let response = handle_event(&handler, event).await.unwrap();
        assert_eq!(response.data.replica_count, Some(1));
    }

    #[tokio::test]
    async fn handle_event_reports_errors() {
        let handler =
            handler_with(MemoryStore::new().with_value("/platform/account/env", "sandbox"));
        let event = LambdaEvent::new(
            CustomResourceRequest::new(RequestType::Create),
            Context::default(),
        );

        let err = handle_event(&handler, event).await.unwrap_err();
        assert!(err.to_string().contains("sandbox"));
    }

    #[tokio::test]
    async fn serve_requires_parameter_name() {
        let err = serve(&Settings::default()).await.unwrap_err();
        assert!(err.to_string().contains("SSM_PARAM_NAME"));
    }
}
