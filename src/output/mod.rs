mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::counter::LanguageTally;
use crate::error::Result;
use crate::language::LanguageRegistry;

/// One language's line in the final report.
#[derive(Debug, Clone)]
pub struct LanguageReport {
    pub name: String,
    pub tally: LanguageTally,
}

/// The completed run: every registered language, in registration order,
/// paired with its accumulated tally. Zero-file languages are kept.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub languages: Vec<LanguageReport>,
}

impl RunReport {
    #[must_use]
    pub fn new(registry: &LanguageRegistry, tallies: &[LanguageTally]) -> Self {
        let languages = registry
            .all()
            .iter()
            .zip(tallies)
            .map(|(spec, tally)| LanguageReport {
                name: spec.name.clone(),
                tally: *tally,
            })
            .collect();
        Self { languages }
    }

    /// Sum of all per-language tallies.
    #[must_use]
    pub fn totals(&self) -> LanguageTally {
        self.languages
            .iter()
            .fold(LanguageTally::new(), |mut acc, lang| {
                acc.files += lang.tally.files;
                acc.code += lang.tally.code;
                acc.comment += lang.tally.comment;
                acc.whitespace += lang.tally.whitespace;
                acc
            })
    }
}

/// Trait for formatting the run report into various output formats.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &RunReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
