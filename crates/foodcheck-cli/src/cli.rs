//! CLI argument definitions for the food browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use foodcheck_cli::config::ConfigOverrides;

#[derive(Parser)]
#[command(
    name = "foodcheck",
    version,
    about = "Browse a food nutrition database and see which foods are approved",
    long_about = "Browse a food nutrition database served over HTTP.\n\n\
                  Every food is shown with its calories, protein, carbohydrates and fat,\n\
                  and marked approved or restricted by name and calorie rules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read configuration from this file instead of the default location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the food service (overrides the config file).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Rows per page (overrides the config file).
    #[arg(
        long = "per-page",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    pub per_page: Option<u32>,

    /// Show fewer page numbers, for narrow terminals.
    #[arg(long = "narrow", global = true)]
    pub narrow: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            per_page: self.per_page,
            narrow: self.narrow,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch and show one page of foods.
    Search(SearchArgs),

    /// List the service's data columns and the fields they map to.
    Columns,

    /// Classify records from a local JSON file without contacting the service.
    Classify(ClassifyArgs),

    /// Browse interactively: type to search, `:n`/`:p` to page, `:q` to quit.
    Browse,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Search text; empty shows all foods.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Page number to show.
    #[arg(
        long = "page",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,

    /// Show how each field was located and why each food got its status.
    #[arg(long = "explain")]
    pub explain: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// JSON file holding an array of records or a full API page.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file with the column catalog (array or `{"columns": [...]}`).
    #[arg(long = "columns", value_name = "FILE")]
    pub columns: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
