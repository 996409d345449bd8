//! Structured evaluation errors
//!
//! Errors never crash the calculator. They are values that propagate
//! through dispatch, land in the history log, and render as a single
//! user-facing line.

use crate::NumberError;
use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
    pub const ARITY: &str = "ARITY";
    pub const OPERATION_FAILED: &str = "OPERATION_FAILED";
    pub const DUPLICATE_OPERATION: &str = "DUPLICATE_OPERATION";
    pub const PLUGIN_LOAD: &str = "PLUGIN_LOAD";
    pub const MALFORMED_PLUGIN: &str = "MALFORMED_PLUGIN";
    pub const NO_OPERATIONS: &str = "NO_OPERATIONS";
}

/// Expected operand count for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, got: usize) -> bool {
        match *self {
            Arity::Exact(n) => got == n,
            Arity::AtLeast(n) => got >= n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Evaluation and registration errors
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcError {
    #[error("unknown operation '{name}'")]
    UnknownOperation {
        name: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        similar: Vec<String>,
    },

    #[error("'{operation}' expects {expected} operand(s), got {got}")]
    Arity {
        operation: String,
        expected: Arity,
        got: usize,
    },

    #[error("'{operation}' failed: {cause}")]
    Execution {
        operation: String,
        #[source]
        cause: NumberError,
    },

    #[error("operation '{name}' is already registered")]
    DuplicateOperation { name: String },

    #[error("plugin '{plugin}' failed to load: {cause}")]
    PluginLoad {
        plugin: String,
        #[source]
        cause: Box<CalcError>,
    },

    #[error("plugin '{plugin}' is malformed: {detail}")]
    MalformedPlugin { plugin: String, detail: String },

    #[error("no operations available: startup cannot continue")]
    NoOperationsAvailable,
}

impl CalcError {
    pub fn unknown_operation(name: impl Into<String>, similar: Vec<String>) -> Self {
        CalcError::UnknownOperation { name: name.into(), similar }
    }

    pub fn arity(operation: impl Into<String>, expected: Arity, got: usize) -> Self {
        CalcError::Arity { operation: operation.into(), expected, got }
    }

    pub fn execution(operation: impl Into<String>, cause: NumberError) -> Self {
        CalcError::Execution { operation: operation.into(), cause }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        CalcError::DuplicateOperation { name: name.into() }
    }

    pub fn plugin_load(plugin: impl Into<String>, cause: CalcError) -> Self {
        CalcError::PluginLoad { plugin: plugin.into(), cause: Box::new(cause) }
    }

    pub fn malformed_plugin(plugin: impl Into<String>, detail: impl Into<String>) -> Self {
        CalcError::MalformedPlugin { plugin: plugin.into(), detail: detail.into() }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::UnknownOperation { .. } => codes::UNKNOWN_OPERATION,
            CalcError::Arity { .. } => codes::ARITY,
            CalcError::Execution { .. } => codes::OPERATION_FAILED,
            CalcError::DuplicateOperation { .. } => codes::DUPLICATE_OPERATION,
            CalcError::PluginLoad { .. } => codes::PLUGIN_LOAD,
            CalcError::MalformedPlugin { .. } => codes::MALFORMED_PLUGIN,
            CalcError::NoOperationsAvailable => codes::NO_OPERATIONS,
        }
    }

    /// Actionable hint for the user, if one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CalcError::UnknownOperation { similar, .. } if !similar.is_empty() => {
                let names: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                Some(format!("Similar: {}. Type 'help' for the full list.", names.join(", ")))
            }
            CalcError::UnknownOperation { .. } => {
                Some("Type 'help' for available operations.".to_string())
            }
            CalcError::Arity { operation, .. } => {
                Some(format!("Use 'help {}' for usage.", operation))
            }
            _ => None,
        }
    }

    /// One-line rendering with code and optional suggestion
    pub fn render(&self) -> String {
        match self.suggestion() {
            Some(hint) => format!("[{}] {} ({})", self.code(), self, hint),
            None => format!("[{}] {}", self.code(), self),
        }
    }
}
