//! Reckon CLI
//!
//! Builds the registry from the configured plugins, then either evaluates
//! a single command (`-e`) or drops into the interactive REPL.

mod repl;

use clap::Parser;
use reckon::{Command, Dispatcher, OperationRegistry, PluginLoader};
use reckon_stats::StatisticsPlugin;
use reckon_std::{ArithmeticPlugin, ScientificPlugin};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reckon")]
#[command(about = "Plugin-based REPL calculator", version)]
struct Cli {
    /// Evaluate one command line (e.g. "add 2 3") and exit
    #[arg(short = 'e', long = "eval", value_name = "COMMAND")]
    eval: Option<String>,

    /// Do not load the scientific plugin
    #[arg(long)]
    no_scientific: bool,

    /// Do not load the statistics plugin
    #[arg(long)]
    no_statistics: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("RECKON_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let mut loader = PluginLoader::new().with_plugin(ArithmeticPlugin);
    if !cli.no_scientific {
        loader = loader.with_plugin(ScientificPlugin);
    }
    if !cli.no_statistics {
        loader = loader.with_plugin(StatisticsPlugin);
    }

    let mut registry = OperationRegistry::new();
    let report = loader.load_into(&mut registry);
    for failure in &report.failures {
        eprintln!("{}", failure.render());
    }

    if registry.is_empty() {
        eprintln!("{}", reckon::CalcError::NoOperationsAvailable.render());
        std::process::exit(1);
    }
    tracing::info!(summary = %report.summary(&registry), "plugins initialized");

    match cli.eval {
        Some(line) => {
            let mut dispatcher = Dispatcher::new(registry);
            std::process::exit(eval_once(&mut dispatcher, &line));
        }
        None => {
            let mut repl = repl::Repl::new(Dispatcher::new(registry), report);
            repl.run();
        }
    }
}

/// One-shot evaluation for scripting: result to stdout, errors to stderr
fn eval_once(dispatcher: &mut Dispatcher, line: &str) -> i32 {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("[PARSE_ERROR] {}", e);
            return 1;
        }
    };
    let outcome = dispatcher.execute(command);
    match outcome.as_number() {
        Some(value) => {
            println!("{}", value);
            0
        }
        None => {
            eprintln!("{}", outcome);
            1
        }
    }
}
