//! Error types for editor construction and configuration.

use thiserror::Error;

/// Errors raised while setting up an editor session.
///
/// Editing operations themselves never fail: degenerate drafts, stale
/// selections and an empty undo stack are silent no-ops.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for editor setup.
pub type EditorResult<T> = Result<T, EditorError>;
