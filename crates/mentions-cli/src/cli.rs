//! CLI argument definitions for the drug-mentions pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "drug-mentions",
    version,
    about = "Drug mentions pipeline - match drug names against publication titles",
    long_about = "Match drug names against clinical trial and PubMed publication titles,\n\
                  derive per-journal mentions, and write the aggregated result as a\n\
                  JSON report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write the aggregated mentions report.
    Run(RunArgs),

    /// List the configured input sources and their cleaning rules.
    Sources,

    /// Report the journal mentioning the most distinct drugs.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the drugs CSV file.
    #[arg(long = "drugs", value_name = "PATH")]
    pub drugs: PathBuf,

    /// Path to the PubMed CSV file.
    #[arg(long = "pubmed-csv", value_name = "PATH")]
    pub pubmed_csv: PathBuf,

    /// Path to the PubMed JSON file.
    #[arg(long = "pubmed-json", value_name = "PATH")]
    pub pubmed_json: PathBuf,

    /// Path to the clinical trials CSV file.
    #[arg(long = "clinical-trials", value_name = "PATH")]
    pub clinical_trials: PathBuf,

    /// Path for the JSON report.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "output/drug_mentions.json"
    )]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to a previously written mentions report.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,
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
