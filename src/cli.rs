use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "linetally")]
#[command(author, version, about = "Count code, comment and whitespace lines per language")]
#[command(long_about = "Walks a directory tree and classifies every line of every recognized\n\
    source file as code, comment or whitespace, reporting per-language totals.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    1 - Scan failed\n  \
    2 - Usage error")]
pub struct Cli {
    /// Root directory to scan
    pub root: PathBuf,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Honor .gitignore files during traversal
    #[arg(long)]
    pub gitignore: bool,

    /// Abort on the first unreadable file instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress warnings and non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
