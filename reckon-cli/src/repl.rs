//! Interactive loop
//!
//! Single-threaded: block on one line of input, dispatch it, print the
//! result, repeat. Evaluation errors go to stderr and never end the
//! session; only `exit`/`quit` or end-of-input do.

use reckon::{Command, Dispatcher, LoadReport};
use std::fs::File;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "reckon> ";

pub struct Repl {
    dispatcher: Dispatcher,
    report: LoadReport,
}

impl Repl {
    pub fn new(dispatcher: Dispatcher, report: LoadReport) -> Self {
        Self { dispatcher, report }
    }

    pub fn run(&mut self) {
        self.print_banner();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{}", PROMPT);
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    eprintln!("input error: {}", e);
                    break;
                }
                None => {
                    println!();
                    break;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            // First token decides between meta-commands and dispatch
            let head = tokens.next().unwrap_or_default().to_lowercase();
            let rest: Vec<&str> = tokens.collect();

            match head.as_str() {
                "exit" | "quit" => break,
                "help" => self.help(rest.first().copied()),
                "history" => self.history_command(&rest),
                "plugins" => self.plugins(),
                _ => self.evaluate(trimmed),
            }
        }

        println!("Goodbye!");
    }

    fn print_banner(&self) {
        println!("{}", "=".repeat(50));
        println!("  Reckon Calculator");
        println!("  Type 'help' for available commands");
        println!("  Type 'exit' or 'quit' to leave");
        println!("{}", "=".repeat(50));
        println!("{}", self.report.summary(self.dispatcher.registry()));
    }

    fn evaluate(&mut self, line: &str) {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("[PARSE_ERROR] {}", e);
                return;
            }
        };

        let outcome = self.dispatcher.execute(command);
        match outcome.as_number() {
            Some(value) => println!("Result: {}", value),
            None => eprintln!("{}", outcome),
        }
    }

    fn help(&self, name: Option<&str>) {
        match name {
            Some(name) => {
                let name = name.to_lowercase();
                match self
                    .dispatcher
                    .registry()
                    .metas()
                    .into_iter()
                    .find(|m| m.name == name)
                {
                    Some(meta) => println!("{} - {}", meta.usage, meta.summary),
                    None => eprintln!("no operation named '{}'", name),
                }
            }
            None => {
                println!("Available operations:");
                let mut metas = self.dispatcher.registry().metas();
                metas.sort_by_key(|m| (m.category, m.name));
                let mut category = "";
                for meta in metas {
                    if meta.category != category {
                        category = meta.category;
                        println!("  [{}]", category);
                    }
                    println!("    {} - {}", meta.usage, meta.summary);
                }
                println!("Meta commands:");
                println!("    help [operation] - show this help or one operation");
                println!("    history [N] - show history (last N entries)");
                println!("    history clear - reset the session history");
                println!("    history export <path> - write history as JSON");
                println!("    plugins - list loaded plugins");
                println!("    exit/quit - leave the calculator");
            }
        }
    }

    fn history_command(&mut self, args: &[&str]) {
        match args {
            [] => self.show_history(None),
            ["clear"] => {
                self.dispatcher.history_mut().clear();
                println!("History cleared.");
            }
            ["export", path] => self.export_history(path),
            [n] => match n.parse::<usize>() {
                Ok(n) => self.show_history(Some(n)),
                Err(_) => eprintln!("usage: history [N] | history clear | history export <path>"),
            },
            _ => eprintln!("usage: history [N] | history clear | history export <path>"),
        }
    }

    fn show_history(&self, limit: Option<usize>) {
        let history = self.dispatcher.history();
        if history.is_empty() {
            println!("No history available.");
            return;
        }

        let limit = limit.unwrap_or(history.len());
        for (i, entry) in history.last(limit).enumerate() {
            println!("{:3}. {}", i + 1, entry);
        }
    }

    fn export_history(&self, path: &str) {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("cannot write '{}': {}", path, e);
                return;
            }
        };
        match self.dispatcher.history().export_to(file) {
            Ok(()) => println!("History exported to {}", path),
            Err(e) => eprintln!("export failed: {}", e),
        }
    }

    fn plugins(&self) {
        if self.report.loaded.is_empty() {
            println!("No plugins loaded.");
        }
        for plugin in &self.report.loaded {
            println!(
                "{} v{} - {}",
                plugin.meta.name, plugin.meta.version, plugin.meta.description
            );
            println!("    operations: {}", plugin.operations.join(", "));
        }
        if self.report.failure_count() > 0 {
            println!("{} plugin(s) failed to load.", self.report.failure_count());
        }
    }
}
