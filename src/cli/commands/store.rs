//! Store selection shared by `resolve` and `invoke`.

use tracing::debug;

use crate::cli::args::StoreArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::store::{AnyStore, FileStore, SsmParameterStore};

impl StoreArgs {
    /// The parameter to resolve: `--param`, else `SSM_PARAM_NAME`.
    pub fn parameter_name(&self, settings: &Settings) -> Result<String> {
        match &self.param {
            Some(param) => Ok(param.clone()),
            None => settings.require_parameter_name().map(str::to_string),
        }
    }

    /// Open the selected store: the parameter file if given, else SSM.
    pub async fn open(&self, settings: &Settings) -> Result<AnyStore> {
        match &self.params_file {
            Some(path) => {
                debug!(path = %path.display(), "Using parameter file");
                Ok(AnyStore::File(FileStore::load(path)?))
            }
            None => {
                debug!("Using SSM Parameter Store");
                Ok(AnyStore::Ssm(SsmParameterStore::from_settings(settings).await))
            }
        }
    }
}
