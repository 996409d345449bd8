//! Reckon Standard Library
//!
//! Built-in operations, packaged as two plugins: core arithmetic and the
//! scientific function set.

pub mod arithmetic;
pub mod math;
pub mod trig;

use reckon_plugin::{Operation, Plugin, PluginMeta};
use std::sync::Arc;

/// Core arithmetic: add, subtract, multiply, divide
pub struct ArithmeticPlugin;

impl Plugin for ArithmeticPlugin {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "arithmetic",
            version: env!("CARGO_PKG_VERSION"),
            description: "Basic arithmetic operations",
        }
    }

    fn operations(&self) -> Vec<Arc<dyn Operation>> {
        vec![
            Arc::new(arithmetic::Add),
            Arc::new(arithmetic::Subtract),
            Arc::new(arithmetic::Multiply),
            Arc::new(arithmetic::Divide),
        ]
    }
}

/// Scientific functions: roots, powers, logarithms, trigonometry
pub struct ScientificPlugin;

impl Plugin for ScientificPlugin {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "scientific",
            version: env!("CARGO_PKG_VERSION"),
            description: "Scientific functions (sqrt, power, log, trig)",
        }
    }

    fn operations(&self) -> Vec<Arc<dyn Operation>> {
        vec![
            Arc::new(math::Sqrt),
            Arc::new(math::Power),
            Arc::new(math::Log),
            Arc::new(math::Ln),
            Arc::new(trig::Sin),
            Arc::new(trig::Cos),
            Arc::new(trig::Tan),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reckon_plugin::{OperationRegistry, PluginLoader};

    #[test]
    fn both_plugins_load_cleanly() {
        let loader = PluginLoader::new()
            .with_plugin(ArithmeticPlugin)
            .with_plugin(ScientificPlugin);
        let mut registry = OperationRegistry::new();
        let report = loader.load_into(&mut registry);

        assert_eq!(report.failure_count(), 0);
        assert_eq!(registry.len(), 11);
        assert!(registry.contains("add"));
        assert!(registry.contains("tan"));
    }
}
