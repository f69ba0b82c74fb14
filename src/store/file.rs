//! Local parameter files.
//!
//! Lets the CLI run against a file instead of SSM. Two formats are read:
//!
//! ```text
//! # dotenv style, any extension other than .yml/.yaml
//! /platform/account/env=production
//! /platform/other="quoted value"
//! ```
//!
//! ```yaml
//! # YAML string mapping
//! /platform/account/env: production
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ParameterStore;
use crate::error::{EnvtierError, Result, StoreError};

/// A parameter store loaded from a local file.
///
/// The file is read once; later edits are not picked up.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Load a parameter file.
    ///
    /// # Errors
    ///
    /// Returns `ParamsFileNotFound` if the file doesn't exist.
    /// Returns `ParamsFileParseError` for malformed content.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnvtierError::ParamsFileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EnvtierError::Io(e)
            }
        })?;

        let values = if is_yaml(path) {
            parse_yaml(&content, path)?
        } else {
            parse_lines(&content, path)?
        };
        debug!(path = %path.display(), count = values.len(), "Loaded parameter file");

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Path the parameters were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of parameters in the file.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the file defined no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParameterStore for FileStore {
    async fn get_value(&self, key: &str) -> std::result::Result<String, StoreError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

fn parse_yaml(content: &str, source_path: &Path) -> Result<HashMap<String, String>> {
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_yaml::from_str(content).map_err(|e| EnvtierError::ParamsFileParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse `NAME=value` lines.
fn parse_lines(content: &str, source_path: &Path) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                values.insert(key.trim().to_string(), unquote(value.trim()));
            }
            _ => {
                return Err(EnvtierError::ParamsFileParseError {
                    path: source_path.to_path_buf(),
                    message: format!("Invalid line {}: {}", line_num + 1, line),
                });
            }
        }
    }

    Ok(values)
}

/// Remove surrounding quotes from a value.
fn unquote(value: &str) -> String {
    let quoted = (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''));
    if quoted && value.len() >= 2 {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}
