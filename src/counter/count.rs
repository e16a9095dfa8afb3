use std::io::BufRead;

use crate::language::LanguageSpec;

use super::{LineClassifier, LineKind};

/// Per-file counters. The three fields always sum to the file's line count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTally {
    pub code: usize,
    pub comment: usize,
    pub whitespace: usize,
}

impl FileTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            comment: 0,
            whitespace: 0,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.comment + self.whitespace
    }
}

/// Run-wide counters for one language. Created zeroed, mutated only by
/// merging completed file tallies, read once by the reporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageTally {
    pub files: usize,
    pub code: usize,
    pub comment: usize,
    pub whitespace: usize,
}

impl LanguageTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            code: 0,
            comment: 0,
            whitespace: 0,
        }
    }

    /// Fold one completed file into this language's totals. The file count
    /// bumps exactly once per file, zero-line files included.
    pub const fn merge(&mut self, file: &FileTally) {
        self.files += 1;
        self.code += file.code;
        self.comment += file.comment;
        self.whitespace += file.whitespace;
    }
}

/// Streams a file's lines once, top to bottom, tracking whether the scan is
/// currently inside a multi-line comment.
///
/// Every line inside a block counts as comment, blank lines included. A line
/// that both opens and closes a block stays outside (self-contained block).
/// Nesting is not tracked: the state is a bool, and one end marker always
/// closes. An unterminated block simply ends with the file.
pub struct FileCounter<'a> {
    classifier: LineClassifier<'a>,
}

impl<'a> FileCounter<'a> {
    #[must_use]
    pub const fn new(spec: &'a LanguageSpec) -> Self {
        Self {
            classifier: LineClassifier::new(spec),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> FileTally {
        let mut tally = FileTally::new();
        let mut in_block = false;

        for line in source.lines() {
            self.process_line(line, &mut tally, &mut in_block);
        }

        tally
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for
    /// large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading fails; the partial tally is dropped so
    /// callers never commit counts from a half-read file.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<FileTally> {
        let mut tally = FileTally::new();
        let mut in_block = false;

        for line_result in reader.lines() {
            let line = line_result?;
            self.process_line(&line, &mut tally, &mut in_block);
        }

        Ok(tally)
    }

    fn process_line(&self, line: &str, tally: &mut FileTally, in_block: &mut bool) {
        if *in_block {
            // The whole line is comment, even if blank. No same-line re-open
            // check: a line that closes and "starts" again is purely a close.
            tally.comment += 1;
            if self.classifier.ends_block(line) {
                *in_block = false;
            }
            return;
        }

        match self.classifier.classify(line) {
            LineKind::Whitespace => tally.whitespace += 1,
            LineKind::Comment => tally.comment += 1,
            LineKind::Code => tally.code += 1,
        }

        // A block opened and closed on the same line never enters the state.
        if self.classifier.starts_block(line) && !self.classifier.ends_block(line) {
            *in_block = true;
        }
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
