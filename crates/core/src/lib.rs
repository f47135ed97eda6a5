#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod classifier;
pub mod language;

pub use classifier::{LineClassifier, TrailingFlush};
pub use language::{CompiledPatterns, Language, LanguageEntry, LanguageTable, extension_of};
pub use lines_shared_kernel::{LineKind, Tally};
