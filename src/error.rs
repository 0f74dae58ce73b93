//! Advisor Errors
//!
//! Domain-level failure conditions. None of these ever reach the caller of a
//! tool directly: the dispatcher turns them into `status: "error"` results.

use crate::agent::types::Stage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error("No {kind} data for '{key}'")]
    LookupMiss { kind: &'static str, key: String },

    #[error("{0} is disabled in this deployment")]
    FeatureDisabled(&'static str),

    #[error("Stage transition {from} -> {to} is not allowed")]
    InvalidTransition { from: Stage, to: Stage },

    #[error("Timeline storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl AdvisorError {
    pub fn lookup_miss(kind: &'static str, key: &str) -> Self {
        AdvisorError::LookupMiss {
            kind,
            key: key.to_string(),
        }
    }
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
