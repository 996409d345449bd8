//! Evaluation outcomes
//!
//! The result of executing one command: a number or a structured error.
//! Errors are ordinary values here so they can be recorded in history
//! exactly like successes.

use crate::{CalcError, Number};
use serde::Serialize;

/// Value-or-error result of one dispatch
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    Value(Number),
    Error(CalcError),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Outcome::Value(n) => Some(*n),
            Outcome::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&CalcError> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Error(e) => Some(e),
        }
    }
}

impl From<Result<Number, CalcError>> for Outcome {
    fn from(result: Result<Number, CalcError>) -> Self {
        match result {
            Ok(n) => Outcome::Value(n),
            Err(e) => Outcome::Error(e),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Value(n) => write!(f, "{}", n),
            Outcome::Error(e) => write!(f, "{}", e.render()),
        }
    }
}
