mod registry;

pub use registry::{BlockSyntax, FileMatcher, LanguageRegistry, LanguageSpec};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
