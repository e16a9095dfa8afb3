use std::fmt::Write;

use crate::error::Result;

use super::{ReportFormatter, RunReport};

/// Numbers narrower than this still pad to it, so the three rows of a
/// language stay aligned with each other across typical counts.
const MIN_NUMBER_WIDTH: usize = 12;

pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        for lang in &report.languages {
            let code = group_digits(lang.tally.code);
            let comments = group_digits(lang.tally.comment);
            let whitespace = group_digits(lang.tally.whitespace);

            let width = [code.len(), comments.len(), whitespace.len(), MIN_NUMBER_WIDTH]
                .into_iter()
                .max()
                .unwrap_or(MIN_NUMBER_WIDTH);

            let _ = writeln!(
                output,
                "Code type: {} ({} total files)",
                lang.name,
                group_digits(lang.tally.files)
            );
            let _ = writeln!(output, "    Code:       {code:>width$}");
            let _ = writeln!(output, "    Comments:   {comments:>width$}");
            let _ = writeln!(output, "    Whitespace: {whitespace:>width$}");
        }

        Ok(output)
    }
}

/// Format a count with thousands separators: 1234567 -> "1,234,567".
#[must_use]
pub fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
