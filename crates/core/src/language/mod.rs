//! Language table: maps file extensions to comment syntax.
//!
//! Descriptors are plain data. The regexes built from them are compiled at
//! most once per table entry, the first time a file of that language is
//! scanned, and shared read-only afterwards.

mod builtin;

use std::sync::{LazyLock, OnceLock};

use hashbrown::HashMap;
use lines_shared_kernel::{LinesError, Result};
use regex::Regex;

pub use builtin::BUILTIN_LANGUAGES;

/// Static description of one language's comment syntax.
///
/// Patterns are regex sources; `None` means the language has no such
/// comment form. Block comments exist only when both block patterns do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    /// Lower-case extensions including the leading dot.
    pub extensions: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    pub block_start: Option<&'static str>,
    pub block_end: Option<&'static str>,
}

/// Compiled form of a [`Language`]'s patterns.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub line_comment: Option<Regex>,
    pub block: Option<BlockPatterns>,
}

#[derive(Debug)]
pub struct BlockPatterns {
    pub start: Regex,
    pub end: Regex,
}

impl CompiledPatterns {
    /// Compiles every pattern of `language`.
    ///
    /// # Errors
    /// Returns [`LinesError::LanguagePattern`] naming the first pattern that
    /// does not compile.
    pub fn compile(language: &Language) -> Result<Self> {
        let compile = |source: &str| {
            Regex::new(source).map_err(|e| LinesError::LanguagePattern {
                language: language.name.to_string(),
                pattern: source.to_string(),
                details: e.to_string(),
            })
        };

        let line_comment = non_empty(language.line_comment).map(compile).transpose()?;
        let block = match (non_empty(language.block_start), non_empty(language.block_end)) {
            (Some(start), Some(end)) => Some(BlockPatterns {
                start: compile(start)?,
                end: compile(end)?,
            }),
            _ => None,
        };

        Ok(Self { line_comment, block })
    }
}

fn non_empty(pattern: Option<&'static str>) -> Option<&'static str> {
    pattern.filter(|p| !p.is_empty())
}

#[derive(Debug, Clone)]
struct PatternFailure {
    pattern: String,
    details: String,
}

/// A table row: the descriptor plus its lazily compiled patterns.
#[derive(Debug)]
pub struct LanguageEntry {
    language: Language,
    compiled: OnceLock<std::result::Result<CompiledPatterns, PatternFailure>>,
}

impl LanguageEntry {
    const fn new(language: Language) -> Self {
        Self {
            language,
            compiled: OnceLock::new(),
        }
    }

    pub const fn language(&self) -> &Language {
        &self.language
    }

    pub const fn name(&self) -> &'static str {
        self.language.name
    }

    /// Compiled patterns, built on first call.
    ///
    /// A compile failure is remembered, so every later file of the same
    /// language reports the same error without recompiling.
    ///
    /// # Errors
    /// Returns [`LinesError::LanguagePattern`] when a pattern is malformed.
    pub fn patterns(&self) -> Result<&CompiledPatterns> {
        let compiled = self.compiled.get_or_init(|| {
            CompiledPatterns::compile(&self.language).map_err(|e| match e {
                LinesError::LanguagePattern { pattern, details, .. } => PatternFailure { pattern, details },
                other => PatternFailure {
                    pattern: String::new(),
                    details: other.to_string(),
                },
            })
        });

        compiled.as_ref().map_err(|failure| LinesError::LanguagePattern {
            language: self.language.name.to_string(),
            pattern: failure.pattern.clone(),
            details: failure.details.clone(),
        })
    }
}

/// Extension-keyed lookup over a set of languages.
#[derive(Debug)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
    by_extension: HashMap<&'static str, usize>,
}

static BUILTIN: LazyLock<LanguageTable> = LazyLock::new(|| LanguageTable::from_languages(BUILTIN_LANGUAGES));

impl LanguageTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a table from caller-supplied descriptors.
    ///
    /// When two descriptors claim the same extension the first one wins.
    pub fn from_languages(languages: &[Language]) -> Self {
        let mut entries = Vec::with_capacity(languages.len());
        let mut by_extension = HashMap::new();

        for language in languages {
            let idx = entries.len();
            for ext in language.extensions {
                by_extension.entry(*ext).or_insert(idx);
            }
            entries.push(LanguageEntry::new(*language));
        }

        Self { entries, by_extension }
    }

    /// Looks up a lower-cased extension with its leading dot, e.g. `".go"`.
    pub fn lookup(&self, extension: &str) -> Option<&LanguageEntry> {
        self.by_extension.get(extension).map(|&idx| &self.entries[idx])
    }

    /// Resolves the language of a file from its base name.
    pub fn for_file_name(&self, file_name: &str) -> Option<&LanguageEntry> {
        extension_of(file_name).and_then(|ext| self.lookup(&ext))
    }

    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter().map(LanguageEntry::language)
    }
}

/// Substring from the last `.` of `file_name` to its end, lower-cased.
pub fn extension_of(file_name: &str) -> Option<String> {
    file_name.rfind('.').map(|idx| file_name[idx..].to_lowercase())
}
