use crate::language::LanguageSpec;

/// Category of a single line. Exactly one applies to every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Whitespace,
    Comment,
    Code,
}

pub struct LineClassifier<'a> {
    spec: &'a LanguageSpec,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(spec: &'a LanguageSpec) -> Self {
        Self { spec }
    }

    /// Classify one line in isolation. Multi-line markers are never consulted
    /// here; whether the line opens or closes a block is a separate check.
    #[must_use]
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Whitespace;
        }
        if self
            .spec
            .line_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
        {
            return LineKind::Comment;
        }
        LineKind::Code
    }

    /// True iff the language has block comments and the raw line contains a
    /// start marker. Containment, not starts-with: a trailing `/*` opens.
    #[must_use]
    pub fn starts_block(&self, line: &str) -> bool {
        self.spec
            .block
            .as_ref()
            .is_some_and(|b| b.starts.iter().any(|m| line.contains(m.as_str())))
    }

    /// True iff the language has block comments and the raw line contains an
    /// end marker. Always false for languages without block comments.
    #[must_use]
    pub fn ends_block(&self, line: &str) -> bool {
        self.spec
            .block
            .as_ref()
            .is_some_and(|b| b.ends.iter().any(|m| line.contains(m.as_str())))
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
