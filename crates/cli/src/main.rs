//! CLI entry point: a read-eval-print loop over the event log.

use std::io::{self, BufRead, Write};

use event_store::FileEventStore;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;
mod error;
mod shell;

use config::Config;
use shell::{Shell, ShellOutcome};

fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = FileEventStore::new(&config.events_path);
    if let Err(e) = store.load() {
        eprintln!("Failed to load event log from {}: {e}", config.events_path);
        std::process::exit(1);
    }

    let mut shell = match Shell::new(store) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Failed to build read models: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        path = %config.events_path,
        count = shell.event_count(),
        "event log loaded"
    );

    println!("Event Sourcing CLI - 'loop'");
    println!("Loaded {} events from storage", shell.event_count());
    println!("{}", Shell::usage());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        }

        match shell.execute(&line) {
            Ok(ShellOutcome::Continue(output)) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Ok(ShellOutcome::Exit(farewell)) => {
                println!("{farewell}");
                break;
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}
