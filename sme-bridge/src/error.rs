//! Bridge error types.

use sme_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid parameter for {action}: {reason}")]
    InvalidParameter { action: String, reason: String },

    #[error("Profile is not being edited; send EditProfile first")]
    NotEditing,

    #[error("Template not found: {0}")]
    UnknownTemplate(String),

    #[error("No uploaded file named {0}")]
    UnknownUpload(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
