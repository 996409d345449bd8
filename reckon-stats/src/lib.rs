//! Reckon Statistics Plugin
//!
//! Variadic statistical operations. All follow the never-panic rule and
//! report empty or undersized inputs as domain errors.

mod helpers;

pub mod central;
pub mod dispersion;

use reckon_plugin::{Operation, Plugin, PluginMeta};
use std::sync::Arc;

/// Statistics: mean, median, mode, stdev, variance
pub struct StatisticsPlugin;

impl Plugin for StatisticsPlugin {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "statistics",
            version: env!("CARGO_PKG_VERSION"),
            description: "Statistical operations over operand lists",
        }
    }

    fn operations(&self) -> Vec<Arc<dyn Operation>> {
        vec![
            Arc::new(central::Mean),
            Arc::new(central::Median),
            Arc::new(central::Mode),
            Arc::new(dispersion::Stdev),
            Arc::new(dispersion::Variance),
        ]
    }
}
