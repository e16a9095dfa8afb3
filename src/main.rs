use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use linetally::cli::Cli;
use linetally::counter::{FileCounter, FileTally, LanguageTally};
use linetally::language::LanguageRegistry;
use linetally::output::{JsonFormatter, OutputFormat, ReportFormatter, RunReport, TextFormatter};
use linetally::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use linetally::{EXIT_SCAN_ERROR, EXIT_SUCCESS};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_SCAN_ERROR
        }
    };

    std::process::exit(exit_code);
}

/// Result of handing one enumerated file to the counter. Files no language
/// claims produce no outcome at all.
enum FileOutcome {
    Counted(usize, FileTally),
    Failed(PathBuf, std::io::Error),
}

fn run(cli: &Cli) -> linetally::Result<()> {
    // 1. Enumerate files under the root
    let filter = GlobFilter::new(&cli.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, cli.gitignore);
    let files = scanner.scan(&cli.root)?;

    // 2. Count each matched file (parallel with rayon); every worker keeps a
    //    local tally, nothing is shared while counting
    let registry = LanguageRegistry::default();
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .filter_map(|path| process_file(path, &registry))
        .collect();

    // 3. Merge into per-language totals after the join, serially
    let mut tallies = vec![LanguageTally::new(); registry.len()];
    for outcome in outcomes {
        match outcome {
            FileOutcome::Counted(index, tally) => tallies[index].merge(&tally),
            FileOutcome::Failed(path, source) => {
                if cli.fail_fast {
                    return Err(linetally::LinetallyError::FileRead { path, source });
                }
                if !cli.quiet {
                    eprintln!(
                        "Warning: skipping unreadable file {}: {source}",
                        path.display()
                    );
                }
            }
        }
    }

    // 4. Report, in registration order
    let report = RunReport::new(&registry, &tallies);
    let output = format_report(cli.format, &report)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)
}

fn process_file(path: &Path, registry: &LanguageRegistry) -> Option<FileOutcome> {
    let base_name = path.file_name()?.to_str()?;
    let index = registry.match_language(base_name)?;
    let counter = FileCounter::new(registry.get(index)?);

    match count_file_lines(path, &counter) {
        Ok(tally) => Some(FileOutcome::Counted(index, tally)),
        Err(e) => Some(FileOutcome::Failed(path.to_path_buf(), e)),
    }
}

fn count_file_lines(path: &Path, counter: &FileCounter) -> std::io::Result<FileTally> {
    let metadata = fs::metadata(path)?;

    if metadata.len() >= LARGE_FILE_THRESHOLD {
        let file = File::open(path)?;
        counter.count_reader(BufReader::new(file))
    } else {
        let content = fs::read_to_string(path)?;
        Ok(counter.count(&content))
    }
}

fn format_report(format: OutputFormat, report: &RunReport) -> linetally::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> linetally::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
