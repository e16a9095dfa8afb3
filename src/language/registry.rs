use std::path::Path;

/// How a language claims a file. Matching looks at the base file name only,
/// never at the directory it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMatcher {
    /// Case-insensitive extension set, without the leading dot.
    Extensions(Vec<String>),
    /// Case-insensitive exact base-name match (e.g. `CMakeLists.txt`).
    BaseName(String),
}

impl FileMatcher {
    #[must_use]
    pub fn extensions(exts: Vec<&str>) -> Self {
        Self::Extensions(exts.into_iter().map(String::from).collect())
    }

    #[must_use]
    pub fn base_name(name: &str) -> Self {
        Self::BaseName(name.to_string())
    }

    #[must_use]
    pub fn matches(&self, base_name: &str) -> bool {
        match self {
            Self::Extensions(exts) => extension_of(base_name)
                .is_some_and(|ext| exts.iter().any(|e| e.eq_ignore_ascii_case(ext))),
            Self::BaseName(name) => base_name.eq_ignore_ascii_case(name),
        }
    }
}

fn extension_of(base_name: &str) -> Option<&str> {
    Path::new(base_name).extension().and_then(|e| e.to_str())
}

/// Multi-line comment markers, tested by raw-line containment.
///
/// Most languages have a single start/end pair; Python uses both triple-quote
/// forms for opening and closing, so both sides are sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSyntax {
    pub starts: Vec<String>,
    pub ends: Vec<String>,
}

impl BlockSyntax {
    #[must_use]
    pub fn new(starts: Vec<&str>, ends: Vec<&str>) -> Self {
        Self {
            starts: starts.into_iter().map(String::from).collect(),
            ends: ends.into_iter().map(String::from).collect(),
        }
    }
}

/// Declarative definition of one language: how to recognize its files and
/// its comment syntax. Stateless; safe to share across concurrent scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    pub name: String,
    pub matcher: FileMatcher,
    /// Prefixes that mark a trimmed line as a single-line comment.
    pub line_prefixes: Vec<String>,
    /// `None` means the language has no multi-line comments.
    pub block: Option<BlockSyntax>,
}

impl LanguageSpec {
    #[must_use]
    pub fn new(
        name: &str,
        matcher: FileMatcher,
        line_prefixes: Vec<&str>,
        block: Option<BlockSyntax>,
    ) -> Self {
        Self {
            name: name.to_string(),
            matcher,
            line_prefixes: line_prefixes.into_iter().map(String::from).collect(),
            block,
        }
    }
}

/// Ordered list of known languages. Registration order is significant: it is
/// both the match priority (first match wins) and the report order.
#[derive(Debug)]
pub struct LanguageRegistry {
    specs: Vec<LanguageSpec>,
}

impl LanguageRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn register(&mut self, spec: LanguageSpec) {
        self.specs.push(spec);
    }

    /// Find the first language whose matcher accepts the base name.
    /// Returns the registry index, which doubles as the tally slot.
    /// `None` means the file is ignored entirely (not an error).
    #[must_use]
    pub fn match_language(&self, base_name: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.matcher.matches(base_name))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LanguageSpec> {
        self.specs.get(index)
    }

    #[must_use]
    pub fn all(&self) -> &[LanguageSpec] {
        &self.specs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(LanguageSpec::new(
            "C/C++",
            FileMatcher::extensions(vec!["h", "hpp", "hxx", "cpp", "cxx", "cc", "c"]),
            vec!["//", "/*"],
            Some(BlockSyntax::new(vec!["/*"], vec!["*/"])),
        ));

        registry.register(LanguageSpec::new(
            "C#",
            FileMatcher::extensions(vec!["cs"]),
            vec!["//", "/*"],
            Some(BlockSyntax::new(vec!["/*"], vec!["*/"])),
        ));

        registry.register(LanguageSpec::new(
            "Python",
            FileMatcher::extensions(vec!["py"]),
            vec!["#", "\"\"\"", "'''"],
            Some(BlockSyntax::new(
                vec!["\"\"\"", "'''"],
                vec!["\"\"\"", "'''"],
            )),
        ));

        registry.register(LanguageSpec::new(
            "Shell",
            FileMatcher::extensions(vec!["sh"]),
            vec!["#"],
            None,
        ));

        registry.register(LanguageSpec::new(
            "Batch File",
            FileMatcher::extensions(vec!["cmd", "bat"]),
            vec!["rem", "::"],
            None,
        ));

        registry.register(LanguageSpec::new(
            "Assembly",
            FileMatcher::extensions(vec!["s", "asm"]),
            vec!["#", ";"],
            None,
        ));

        registry.register(LanguageSpec::new(
            "XML",
            FileMatcher::extensions(vec!["xml"]),
            vec!["<!--"],
            Some(BlockSyntax::new(vec!["<!--"], vec!["-->"])),
        ));

        registry.register(LanguageSpec::new(
            "MSBuild",
            FileMatcher::extensions(vec!["csproj", "proj", "ilproj", "targets", "props"]),
            vec!["<!--"],
            Some(BlockSyntax::new(vec!["<!--"], vec!["-->"])),
        ));

        registry.register(LanguageSpec::new(
            "CMake",
            FileMatcher::base_name("CMakeLists.txt"),
            vec!["#"],
            None,
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
