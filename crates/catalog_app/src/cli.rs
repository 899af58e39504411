//! CLI argument definitions for the catalog search client.

use std::path::PathBuf;

use catalog_core::{Locale, SearchField};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::platform::config::AppConfig;
use crate::platform::logging::LogDestination;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Search the Open Library catalog by title, author or ISBN",
    long_about = "Search the Open Library catalog by title, author or ISBN.\n\n\
                  Use `search` for a single query or `shell` for an interactive session\n\
                  with paging and local ISBN filtering."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: ./catalog.ron if present).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Search endpoint URL (overrides the config file).
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Language for messages and labels.
    #[arg(long, value_enum, global = true)]
    pub locale: Option<LocaleArg>,

    /// Terminal height used to size a page of results.
    #[arg(long, value_name = "N", global = true)]
    pub rows: Option<u32>,

    /// Log level.
    #[arg(long = "log-level", value_enum, default_value = "info", global = true)]
    pub log_level: LogLevelArg,

    /// Where log lines go.
    #[arg(long = "log-dest", value_enum, default_value = "file", global = true)]
    pub log_dest: LogDestArg,

    /// Log file used by the file destination.
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = "catalog.log",
        global = true
    )]
    pub log_file: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one search and print the requested page.
    Search(SearchArgs),

    /// Interactive session with paging and local filtering.
    Shell,

    /// Print the effective configuration as RON.
    Config,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search terms.
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Field to search.
    #[arg(long = "by", value_enum, default_value = "title")]
    pub field: FieldArg,

    /// Page of results to show.
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Only show results whose ISBN contains this fragment.
    #[arg(long = "isbn-filter", value_name = "DIGITS")]
    pub isbn_filter: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FieldArg {
    Title,
    Author,
    Isbn,
}

impl From<FieldArg> for SearchField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Title => SearchField::Title,
            FieldArg::Author => SearchField::Author,
            FieldArg::Isbn => SearchField::Isbn,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LocaleArg {
    En,
    Es,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Locale::English,
            LocaleArg::Es => Locale::Spanish,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogDestArg {
    File,
    Terminal,
    Both,
}

impl From<LogDestArg> for LogDestination {
    fn from(value: LogDestArg) -> Self {
        match value {
            LogDestArg::File => LogDestination::File,
            LogDestArg::Terminal => LogDestination::Terminal,
            LogDestArg::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale.into();
        }
    }

    /// `--rows`, then `$LINES`, then the configured height.
    pub fn viewport_rows(&self, config: &AppConfig) -> u32 {
        self.rows
            .or_else(|| std::env::var("LINES").ok()?.trim().parse().ok())
            .unwrap_or(config.viewport_rows)
    }
}
