//! FILENAME: core/operations/src/config.rs
//! PURPOSE: Engine-wide settings, loadable from JSON.
//! CONTEXT: Every field has a default, so a config file only needs to name
//! what it changes:
//!
//!   { "group_order": "ascending", "log_file": "/tmp/operations.log" }

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OpResult, OperationError};

/// Row order of the table produced by group-by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Groups appear in the order their key is first met.
    FirstSeen,
    /// Groups are sorted by key.
    Ascending,
}

impl Default for GroupOrder {
    fn default() -> Self {
        GroupOrder::FirstSeen
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Token meaning "no value" in string arguments.
    pub placeholder: String,

    pub group_order: GroupOrder,

    /// When set, log lines are also written to this file.
    ///
    /// The log sink is process-wide: building an engine with a `log_file`
    /// redirects the log of every engine in the process to that file.
    pub log_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            placeholder: engine::SUNDEF.to_string(),
            group_order: GroupOrder::FirstSeen,
            log_file: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> OpResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| OperationError::Config(e.to_string()))?;
        if config.placeholder.trim().is_empty() {
            return Err(OperationError::Config("placeholder must not be blank".to_string()));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> OpResult<Self> {
        let json = std::fs::read_to_string(path)?;
        EngineConfig::from_json_str(&json)
    }

    /// True when `text` is the "no value" placeholder.
    pub fn is_placeholder(&self, text: &str) -> bool {
        text.trim() == self.placeholder
    }
}
