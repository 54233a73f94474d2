//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success (including a search that finds no path)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph file, rejected weight)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dfs, bfs, ucs, or all)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        line: usize,
        from: String,
        to: String,
        weight: i64,
    },

    #[error("failed to read graph {path:?}: {reason}")]
    GraphUnreadable { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphwalkError {
    /// Create a parse error for a line of the graph file
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        GraphwalkError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::UnknownAlgorithm(_)
            | GraphwalkError::UsageError(_) => ExitCode::Usage,

            GraphwalkError::Parse { .. }
            | GraphwalkError::NegativeWeight { .. }
            | GraphwalkError::GraphUnreadable { .. } => ExitCode::Data,

            GraphwalkError::Io(_)
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::Parse { .. } => "parse_error",
            GraphwalkError::NegativeWeight { .. } => "negative_weight",
            GraphwalkError::GraphUnreadable { .. } => "graph_unreadable",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphwalkError::Parse { line, .. } | GraphwalkError::NegativeWeight { line, .. } =
            self
        {
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;
