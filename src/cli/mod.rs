//! Command-line interface for wttrfetch.
//!
//! Parses flags, loads the source list, runs the orchestrator and maps the
//! result to an exit [`Outcome`]. The process exit itself happens in
//! `main`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{info, warn};

use crate::adapters::{FileSink, HttpFetcher};
use crate::config::{self, SampleStatus};
use crate::core::Orchestrator;
use crate::domain::{RunResult, SourceDescriptor};

/// wttrfetch - a wttr weather retriever
///
/// Fetches every configured image and writes it only when its SHA-512 is
/// not in the source's ignore list.
#[derive(Parser, Debug)]
#[command(name = "wttrfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The configuration file [default: <executable>.json]
    #[arg(long, env = "WTTRFETCH_CONFIG", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Create the configuration file if it does not exist and then exit
    #[arg(long)]
    pub create_config_file: bool,

    /// Ignore errors in writing files
    #[arg(long)]
    pub ignore_errors: bool,

    /// Log the hashes that are not in the ignore list
    #[arg(long)]
    pub log_hash_check: bool,
}

/// How the process should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything that needed writing was written
    Success,

    /// At least one destination could not be written
    WriteFailed,

    /// The configuration could not be read, decoded or created
    ConfigUnreadable,
}

impl Outcome {
    /// Map a finished run to an outcome
    pub fn from_run(result: &RunResult, ignore_errors: bool) -> Self {
        if result.failed() && !ignore_errors {
            Outcome::WriteFailed
        } else {
            Outcome::Success
        }
    }

    /// Process exit code
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::WriteFailed => 1,
            Outcome::ConfigUnreadable => 3,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

impl Cli {
    /// Resolved configuration path
    pub fn config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(config::default_config_path)
    }

    /// Execute the CLI
    pub async fn execute(self) -> Outcome {
        let path = self.config_path();

        if self.create_config_file {
            return match create_sample(&path) {
                Ok(()) => Outcome::Success,
                Err(e) => config_failure(&e),
            };
        }

        let sources = match load_sources(&path) {
            Ok(sources) => sources,
            Err(e) => return config_failure(&e),
        };

        let orchestrator = Orchestrator::<HttpFetcher, FileSink>::default()
            .with_hash_logging(self.log_hash_check);
        let result = orchestrator.run(&sources).await;

        if result.failed() && self.ignore_errors {
            warn!("Write errors ignored");
        }
        Outcome::from_run(&result, self.ignore_errors)
    }
}

fn load_sources(path: &Path) -> Result<Vec<SourceDescriptor>> {
    let sources = config::load_sources(path)
        .with_context(|| format!("Cannot read config file: {}", path.display()))?;
    info!(config = %path.display(), sources = sources.len(), "Loaded configuration");
    Ok(sources)
}

fn create_sample(path: &Path) -> Result<()> {
    let status = config::write_sample(path)
        .with_context(|| format!("Cannot create config file: {}", path.display()))?;

    match status {
        SampleStatus::Created => {
            println!("Wrote sample config {} with {}", path.display(), config::SAMPLE_URL)
        }
        SampleStatus::AlreadyExists => {
            println!("Config file {} already exists, leaving it untouched", path.display())
        }
    }
    Ok(())
}

/// Report a configuration failure with usage text
fn config_failure(error: &anyhow::Error) -> Outcome {
    eprintln!("{:#}\n", error);
    eprintln!("{}", Cli::command().render_help());
    Outcome::ConfigUnreadable
}
