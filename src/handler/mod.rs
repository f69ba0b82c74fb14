//! Custom-resource adapter.
//!
//! The provisioning orchestrator invokes envtier with CloudFormation
//! custom-resource events:
//!
//! - `Create` / `Update` resolve the environment and return it as
//!   `Data.Environment` / `Data.ReplicaCount`
//! - `Delete` is acknowledged immediately with empty `Data`

pub mod custom_resource;
pub mod event;

pub use custom_resource::CustomResourceHandler;
pub use event::{
    CustomResourceRequest, CustomResourceResponse, RequestType, ResponseData,
    DEFAULT_PHYSICAL_RESOURCE_ID,
};
