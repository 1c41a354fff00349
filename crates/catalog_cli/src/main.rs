//! Interactive catalog entry point.
//!
//! # Responsibility
//! - Parse configuration and start optional file logging.
//! - Run the text menu on stdin/stdout.

mod config;
mod menu;

use catalog_core::{init_logging, Catalog, FixedYear, YearSource};
use clap::Parser;
use config::CliConfig;
use menu::{Menu, MenuError};
use std::io;

fn main() {
    let config = CliConfig::parse();

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    let result = match config.current_year {
        Some(year) => run(Catalog::with_clock(FixedYear(year))),
        None => run(Catalog::new()),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run<C: YearSource>(catalog: Catalog<C>) -> Result<(), MenuError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), catalog).run()
}
