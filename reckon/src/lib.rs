//! Reckon - plugin-based calculator core
//!
//! Ties the registry and plugins to a dispatch-and-history engine:
//! parse a line into a `Command`, execute it through the `Dispatcher`,
//! and keep every attempt in the append-only `HistoryLog`.

mod command;
mod dispatch;
mod history;

pub use command::{Command, ParseError};
pub use dispatch::Dispatcher;
pub use history::{HistoryEntry, HistoryLog};

pub use reckon_core::{Arity, CalcError, Number, NumberError, Outcome};
pub use reckon_plugin::{
    LoadReport, LoadedPlugin, Operation, OperationMeta, OperationRegistry, Plugin, PluginLoader,
    PluginMeta,
};
