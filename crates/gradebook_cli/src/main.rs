//! Gradebook CLI entry point.
//!
//! # Responsibility
//! - Parse command-line configuration and bootstrap logging.
//! - Open the gradebook and hand it to the interactive menu.

mod menu;
mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use gradebook_core::{
    default_log_level, init_logging, open_repository, GradebookService, StorageBackend,
};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(version)]
#[command(about = "Track course scores and weighted GPA", long_about = None)]
struct Cli {
    /// Gradebook data file
    #[arg(long, value_name = "PATH", default_value = "gradebook.json")]
    data: PathBuf,
    /// Storage format; `auto` picks SQLite for .db/.sqlite/.sqlite3 files
    #[arg(long, value_enum, default_value_t = BackendArg::Auto)]
    backend: BackendArg,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Write rolling log files to this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// `--log-level` when given, otherwise the build-mode default.
    fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum BackendArg {
    Auto,
    Json,
    Sqlite,
}

impl From<BackendArg> for StorageBackend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Auto => StorageBackend::Auto,
            BackendArg::Json => StorageBackend::Json,
            BackendArg::Sqlite => StorageBackend::Sqlite,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(cli.effective_log_level(), log_dir).map_err(|err| anyhow!(err))?;
    }

    let repo = open_repository(&cli.data, cli.backend.into())
        .with_context(|| format!("failed to open gradebook at {}", cli.data.display()))?;
    let mut service = GradebookService::open(repo)
        .with_context(|| format!("failed to load gradebook from {}", cli.data.display()))?;
    info!(
        "event=cli_start module=cli status=ok data={} courses={}",
        cli.data.display(),
        service.list().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run_menu(&mut service, stdin.lock(), stdout.lock())?;
    Ok(())
}
