//! Command parsing
//!
//! A command line has the shape `<operation> <operand> [<operand> ...]`.
//! Operands are numbers; the operation token is lowercased here so the
//! registry can stay exact-match.

use reckon_core::{Number, NumberError};
use serde::Serialize;
use thiserror::Error;

/// Errors for lines that never reach the dispatcher
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("invalid operand '{token}': {cause}")]
    InvalidOperand {
        token: String,
        #[source]
        cause: NumberError,
    },
}

/// A parsed invocation: operation name plus ordered operands
#[derive(Debug, Clone, Serialize)]
pub struct Command {
    pub operation: String,
    pub operands: Vec<Number>,
}

impl Command {
    pub fn new(operation: impl Into<String>, operands: Vec<Number>) -> Self {
        Self { operation: operation.into(), operands }
    }

    /// Parse one input line into a command
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let operation = tokens.next().ok_or(ParseError::Empty)?;

        let operands = tokens
            .map(|token| {
                Number::from_str(token).map_err(|cause| ParseError::InvalidOperand {
                    token: token.to_string(),
                    cause,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(operation.to_lowercase(), operands))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.operation)?;
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
