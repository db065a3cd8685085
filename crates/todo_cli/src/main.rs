//! Interactive todo shell.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Start logging, open the store and hand stdin/stdout to the menu loop.

mod cli;
mod menu;
mod render;

use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use todo_core::{init_logging, AppConfig, StoreError, TodoService};

fn main() -> ExitCode {
    let config = cli::Cli::parse().into_config();

    if let Some(log_dir) = std::env::current_dir()
        .ok()
        .and_then(|cwd| config.resolved_log_dir(&cwd))
    {
        if let Err(err) = init_logging(&config.log_level, &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&config, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Shell failure that ends the process with a non-zero status.
#[derive(Debug)]
enum RunError {
    /// The configured store could not be loaded; the menu never started.
    Load(StoreError),
    /// Reading prompts or writing output failed.
    Io(io::Error),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "cannot load todos: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

/// Opens the configured store and drives the menu.
///
/// A store that cannot be loaded is fatal and leaves the file untouched.
fn run(config: &AppConfig, input: impl BufRead, output: impl Write) -> Result<(), RunError> {
    let mut service = TodoService::open(config.open_store()).map_err(RunError::Load)?;
    info!(
        "event=app_start module=cli status=ok file={}",
        config.data_file.display()
    );

    menu::Menu::new(&mut service, input, output)
        .run()
        .map_err(RunError::Io)
}
