mod classify;
mod count;

pub use classify::{LineClassifier, LineKind};
pub use count::{FileCounter, FileTally, LanguageTally};
