//! Command-line front end for the `topwords` binary.

use crate::config::{find_config_in, load_config, Config, ConfigError};
use crate::error::Error;
use crate::fetch::{spawn_fetch, wait_for};
use crate::ranker::WordRanker;
use crate::report::Report;
use crate::types::SelectionMethod;
use clap::{ArgAction, Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error as ThisError;

/// Report the most frequent words of a web page or text file
#[derive(Debug, Parser)]
#[command(name = "topwords", version, about)]
pub struct Cli {
    /// Page to download (overrides the config file)
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a local file instead of downloading; the body marker is only
    /// applied when --marker is given
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Configuration file [default: ./topwords.toml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of words to report
    #[arg(short = 'k', long)]
    pub top: Option<usize>,

    /// Text that marks the start of the document body
    #[arg(long, conflicts_with = "no_marker")]
    pub marker: Option<String>,

    /// Analyse the whole document instead of searching for the body marker
    #[arg(long)]
    pub no_marker: bool,

    /// Top-K selection strategy
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Count the empty tokens left by leading or trailing punctuation
    #[arg(long)]
    pub keep_empty: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Selection strategy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Linear,
    Heap,
}

impl From<MethodArg> for SelectionMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Linear => SelectionMethod::Linear,
            MethodArg::Heap => SelectionMethod::Heap,
        }
    }
}

/// Anything that stops a run.
#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Run(#[from] Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses arguments, runs the analysis and maps failures to an exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli)?;
    let ranker = WordRanker::from_config(&config);

    let report = match &cli.file {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(Error::from)?;
            let marker = if cli.marker.is_some() {
                config.body_marker()
            } else {
                None
            };
            ranker.rank_page(&text, marker)?
        }
        None => {
            let page = wait_for(spawn_fetch(config.url.clone()))?;
            ranker.rank_page(&page, config.body_marker())?
        }
    };

    print_report(&report, cli.json)
}

fn print_report(report: &Report, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        log::info!(
            "{} words, {} distinct",
            report.total,
            report.distinct
        );
        print!("{}", report);
    }
    Ok(())
}

/// Loads the configuration file (explicit, or found in the working
/// directory) and applies command-line overrides on top.
pub fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::current_dir().ok().and_then(|dir| find_config_in(&dir)));

    let mut config = match path {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            load_config(&path)?
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

/// Copies every flag the user actually passed into `config`.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    if let Some(top) = cli.top {
        config.top = top;
    }
    if let Some(marker) = &cli.marker {
        config.marker = Some(marker.clone());
    }
    if cli.no_marker {
        config.marker = None;
    }
    if let Some(method) = cli.method {
        config.method = method.into();
    }
    if cli.keep_empty {
        config.keep_empty = true;
    }
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => Level::Trace.to_level_filter(),
    }
}

fn init_logger(verbose: u8) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(verbose));
    }
}
