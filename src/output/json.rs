use serde::Serialize;

use crate::error::Result;

use super::{ReportFormatter, RunReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    languages: Vec<LanguageEntry>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    code: usize,
    comments: usize,
    whitespace: usize,
}

#[derive(Serialize)]
struct LanguageEntry {
    name: String,
    files: usize,
    code: usize,
    comments: usize,
    whitespace: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let totals = report.totals();
        let output = JsonOutput {
            summary: Summary {
                total_files: totals.files,
                code: totals.code,
                comments: totals.comment,
                whitespace: totals.whitespace,
            },
            languages: report
                .languages
                .iter()
                .map(|lang| LanguageEntry {
                    name: lang.name.clone(),
                    files: lang.tally.files,
                    code: lang.tally.code,
                    comments: lang.tally.comment,
                    whitespace: lang.tally.whitespace,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
