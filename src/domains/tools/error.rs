//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while resolving, loading or running a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No manifest is registered under the requested identifier.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Two manifests were registered under the same identifier.
    #[error("Duplicate tool id: {0}")]
    DuplicateId(String),

    /// The tool's module could not be loaded.
    #[error("Failed to load tool: {0}")]
    LoadFailed(String),

    /// The input handed to a tool was rejected by it.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A category name did not match any known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "load failed" error.
    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::LoadFailed(msg.into())
    }

    /// Create a new "invalid input" error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error is an expected lookup miss rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
