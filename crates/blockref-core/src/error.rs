//! Error types and exit codes for blockref
//!
//! Exit codes:
//! - 0: Success
//! - 1: Any reported failure (usage, I/O, storage, lookup miss)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Any failure (1)
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for BlockrefError {
    fn from(err: rusqlite::Error) -> Self {
        BlockrefError::Other(err.to_string())
    }
}

/// Errors that can occur during blockref operations
#[derive(Error, Debug)]
pub enum BlockrefError {
    #[error("{0}")]
    UsageError(String),

    #[error("block not found: {id}")]
    BlockNotFound { id: String },

    #[error("vault directory not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl BlockrefError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        BlockrefError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        BlockrefError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BlockrefError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        BlockrefError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::Failure
    }

    /// Short machine-readable error kind, used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            BlockrefError::UsageError(_) => "usage_error",
            BlockrefError::BlockNotFound { .. } => "block_not_found",
            BlockrefError::VaultNotFound { .. } => "vault_not_found",
            BlockrefError::Json(_) => "json_error",
            BlockrefError::Toml(_) => "toml_error",
            BlockrefError::InvalidValue { .. } => "invalid_value",
            BlockrefError::NotFound { .. } => "not_found",
            BlockrefError::FailedOperation { .. } => "failed_operation",
            BlockrefError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            BlockrefError::Other(_) => "other",
        }
    }
}

/// Result type alias for blockref operations
pub type Result<T> = std::result::Result<T, BlockrefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_exits_with_failure() {
        let errors = [
            BlockrefError::UsageError("bad flag".to_string()),
            BlockrefError::BlockNotFound {
                id: "b123456".to_string(),
            },
            BlockrefError::not_found("block", "b1"),
            BlockrefError::io_operation("read", "/tmp/x.md", "denied"),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), ExitCode::Failure);
            assert_eq!(i32::from(err.exit_code()), 1);
        }
    }

    #[test]
    fn test_io_operation_message_names_target() {
        let err = BlockrefError::io_operation("read", "/vault/a.md", "permission denied");
        assert_eq!(
            err.to_string(),
            "failed to read /vault/a.md: permission denied"
        );
        assert_eq!(err.kind(), "failed_operation_with_target");
    }
}
