//! Runtime settings of the directory.
//!
//! Read once at startup from a JSON blob embedded in the host page. Every key
//! is optional; an absent blob means defaults.

use crate::error::ConfigError;
use crate::model::Employee;
use serde::Deserialize;

/// Rows per page of the employee table.
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub page_size: usize,
    /// Records loaded into the store before the first render.
    pub seed: Vec<Employee>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed: Vec::new(),
        }
    }
}

impl DirectoryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DirectoryConfig = serde_json::from_str(raw)?;
        if config.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(config)
    }
}
