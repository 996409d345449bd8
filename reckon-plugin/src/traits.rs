//! Plugin traits

use reckon_core::{Arity, Number, NumberError};
use serde::Serialize;
use std::sync::Arc;

/// Metadata for an operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperationMeta {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub arity: Arity,
    pub category: &'static str,
}

/// A named, fixed-arity pure numeric function.
///
/// Implementations must be pure and non-blocking: no I/O, no suspension.
/// The dispatcher enforces the declared arity before calling `apply`.
pub trait Operation: Send + Sync {
    fn meta(&self) -> OperationMeta;
    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError>;
}

impl std::fmt::Debug for dyn Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.meta().name)
            .finish()
    }
}

/// Metadata for a plugin
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

/// An externally supplied source of operations
pub trait Plugin: Send + Sync {
    fn meta(&self) -> PluginMeta;
    fn operations(&self) -> Vec<Arc<dyn Operation>>;
}
