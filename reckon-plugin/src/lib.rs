//! Reckon Plugin System
//!
//! Provides the traits and machinery for extending the calculator:
//! - `Operation`: a named, fixed-arity pure numeric function
//! - `Plugin`: a source of operations with its own metadata
//! - `OperationRegistry`: unique-name lookup table
//! - `PluginLoader`: partial-failure-tolerant loading pass

mod loader;
mod registry;
mod traits;

pub use loader::{LoadReport, LoadedPlugin, PluginLoader};
pub use registry::OperationRegistry;
pub use traits::{Operation, OperationMeta, Plugin, PluginMeta};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        LoadReport, Operation, OperationMeta, OperationRegistry, Plugin, PluginLoader, PluginMeta,
    };
    pub use reckon_core::prelude::*;
}
