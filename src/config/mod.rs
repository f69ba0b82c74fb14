//! Runtime configuration for envtier.
//!
//! Settings come from process environment variables, the way the Lambda
//! execution environment hands them over:
//!
//! - `SSM_PARAM_NAME` - parameter holding the environment label
//! - `ENVTIER_STORE_TIMEOUT_MS` - optional bound on each store read
//! - `ENVTIER_SSM_ENDPOINT` - optional SSM endpoint override
//! - `ENVTIER_SSM_DECRYPT` - request decryption of `SecureString` parameters
//! - `ENVTIER_LOG_FORMAT` - `json` or `text`
//!
//! CLI flags override these values.

pub mod settings;

pub use settings::{
    LogFormat, Settings, LAMBDA_FUNCTION_VAR, LOG_FORMAT_VAR, PARAM_NAME_VAR, SSM_DECRYPT_VAR,
    SSM_ENDPOINT_VAR, STORE_TIMEOUT_VAR,
};
