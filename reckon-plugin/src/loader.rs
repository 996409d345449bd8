//! Plugin Loader
//!
//! Loads a configured set of plugins into the registry. A malformed plugin
//! fails on its own; the pass continues with the remaining plugins and the
//! caller gets a summary report.

use crate::{OperationRegistry, Plugin, PluginMeta};
use reckon_core::CalcError;
use std::collections::HashSet;
use tracing::{info, warn};

/// One successfully loaded plugin and the operations it contributed
#[derive(Debug, Clone)]
pub struct LoadedPlugin {
    pub meta: PluginMeta,
    pub operations: Vec<&'static str>,
}

/// Result of a loading pass
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedPlugin>,
    pub failures: Vec<CalcError>,
}

impl LoadReport {
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// One-line summary, e.g. "2/3 plugins loaded, 11 operations"
    pub fn summary(&self, registry: &OperationRegistry) -> String {
        format!(
            "{}/{} plugins loaded, {} operations",
            self.loaded_count(),
            self.loaded_count() + self.failure_count(),
            registry.len()
        )
    }
}

/// Loads plugins into an `OperationRegistry`
pub struct PluginLoader {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginLoader {
    pub fn new() -> Self {
        Self { plugins: Vec::new() }
    }

    pub fn with_plugin<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Load every configured plugin, tolerating per-plugin failures.
    ///
    /// A plugin is registered atomically: its capability set is validated
    /// first, and nothing is registered if any of its operations would be
    /// rejected.
    pub fn load_into(&self, registry: &mut OperationRegistry) -> LoadReport {
        let mut report = LoadReport::default();

        for plugin in &self.plugins {
            let meta = plugin.meta();
            match Self::load_plugin(plugin.as_ref(), registry) {
                Ok(operations) => {
                    info!(
                        plugin = meta.name,
                        version = meta.version,
                        operations = operations.len(),
                        "plugin loaded"
                    );
                    report.loaded.push(LoadedPlugin { meta, operations });
                }
                Err(cause) => {
                    let err = CalcError::plugin_load(meta.name, cause);
                    warn!(plugin = meta.name, error = %err, "plugin rejected");
                    report.failures.push(err);
                }
            }
        }

        report
    }

    fn load_plugin(
        plugin: &dyn Plugin,
        registry: &mut OperationRegistry,
    ) -> Result<Vec<&'static str>, CalcError> {
        let meta = plugin.meta();
        let operations = plugin.operations();

        if operations.is_empty() {
            return Err(CalcError::malformed_plugin(meta.name, "exposes no operations"));
        }

        // Validate the full capability set before touching the registry so
        // a rejected plugin leaves no partial state behind.
        let mut seen: HashSet<&'static str> = HashSet::new();
        for operation in &operations {
            let name = operation.meta().name;
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(CalcError::malformed_plugin(
                    meta.name,
                    format!("invalid operation name {:?}", name),
                ));
            }
            if !seen.insert(name) {
                return Err(CalcError::malformed_plugin(
                    meta.name,
                    format!("declares operation '{}' twice", name),
                ));
            }
            if registry.contains(name) {
                return Err(CalcError::duplicate(name));
            }
        }

        let mut names = Vec::with_capacity(operations.len());
        for operation in operations {
            let name = operation.meta().name;
            registry.register(operation)?;
            names.push(name);
        }
        names.sort_unstable();
        Ok(names)
    }
}

impl Default for PluginLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operation, OperationMeta};
    use reckon_core::{codes, Arity, Number, NumberError};
    use std::sync::Arc;

    struct Named(&'static str);

    impl Operation for Named {
        fn meta(&self) -> OperationMeta {
            OperationMeta {
                name: self.0,
                summary: "test operation",
                usage: "test",
                arity: Arity::Exact(1),
                category: "test",
            }
        }

        fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
            Ok(operands[0])
        }
    }

    struct FakePlugin {
        name: &'static str,
        ops: Vec<&'static str>,
    }

    impl Plugin for FakePlugin {
        fn meta(&self) -> PluginMeta {
            PluginMeta {
                name: self.name,
                version: "1.0.0",
                description: "test plugin",
            }
        }

        fn operations(&self) -> Vec<Arc<dyn Operation>> {
            self.ops.iter().map(|&n| Arc::new(Named(n)) as Arc<dyn Operation>).collect()
        }
    }

    #[test]
    fn loads_all_well_formed_plugins() {
        let loader = PluginLoader::new()
            .with_plugin(FakePlugin { name: "alpha", ops: vec!["inc"] })
            .with_plugin(FakePlugin { name: "beta", ops: vec!["dec", "neg"] });
        let mut registry = OperationRegistry::new();
        let report = loader.load_into(&mut registry);

        assert_eq!(report.loaded_count(), 2);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn malformed_plugin_does_not_abort_pass() {
        // One of three plugins is malformed: the other two register fully
        // and exactly one failure is reported.
        let loader = PluginLoader::new()
            .with_plugin(FakePlugin { name: "alpha", ops: vec!["inc"] })
            .with_plugin(FakePlugin { name: "broken", ops: vec![] })
            .with_plugin(FakePlugin { name: "beta", ops: vec!["dec"] });
        let mut registry = OperationRegistry::new();
        let report = loader.load_into(&mut registry);

        assert_eq!(report.loaded_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].code(), codes::PLUGIN_LOAD);
        assert!(registry.contains("inc"));
        assert!(registry.contains("dec"));
    }

    #[test]
    fn conflicting_plugin_is_rejected_atomically() {
        let loader = PluginLoader::new()
            .with_plugin(FakePlugin { name: "alpha", ops: vec!["inc"] })
            .with_plugin(FakePlugin { name: "clash", ops: vec!["neg", "inc"] });
        let mut registry = OperationRegistry::new();
        let report = loader.load_into(&mut registry);

        assert_eq!(report.loaded_count(), 1);
        assert_eq!(report.failure_count(), 1);
        // "neg" was declared before the clash but must not be registered
        assert!(!registry.contains("neg"));
        assert!(registry.contains("inc"));
    }

    #[test]
    fn duplicate_declaration_within_plugin_is_malformed() {
        let loader =
            PluginLoader::new().with_plugin(FakePlugin { name: "twice", ops: vec!["inc", "inc"] });
        let mut registry = OperationRegistry::new();
        let report = loader.load_into(&mut registry);

        assert_eq!(report.failure_count(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn summary_counts_plugins_and_operations() {
        let loader = PluginLoader::new()
            .with_plugin(FakePlugin { name: "alpha", ops: vec!["inc", "dec"] })
            .with_plugin(FakePlugin { name: "broken", ops: vec![] });
        let mut registry = OperationRegistry::new();
        let report = loader.load_into(&mut registry);

        assert_eq!(report.summary(&registry), "1/2 plugins loaded, 2 operations");
    }
}
