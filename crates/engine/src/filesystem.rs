use crate::options::TraversalOrder;
use lines_shared_kernel::{LinesError, Result};
use regex::Regex;
use std::collections::VecDeque;
use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Raw name patterns as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePatterns<'a> {
    pub filter: Option<&'a str>,
    pub exclude: Option<&'a str>,
    pub filter_dir: Option<&'a str>,
    pub exclude_dir: Option<&'a str>,
}

/// Name predicates applied to every directory entry.
///
/// `filter`/`exclude` apply to files and directories alike; `filter_dir`/
/// `exclude_dir` only decide which directories are descended into. Matching
/// is an unanchored search over the bare entry name.
#[derive(Debug, Clone, Default)]
pub struct NameFilters {
    pub filter: Option<Regex>,
    pub exclude: Option<Regex>,
    pub filter_dir: Option<Regex>,
    pub exclude_dir: Option<Regex>,
}

impl NameFilters {
    /// Compiles the four optional patterns; empty strings mean "not set".
    ///
    /// # Errors
    /// Returns [`LinesError::InvalidPattern`] naming the offending flag.
    pub fn compile(patterns: &NamePatterns<'_>) -> Result<Self> {
        Ok(Self {
            filter: compile_one("--filter", patterns.filter)?,
            exclude: compile_one("--exclude", patterns.exclude)?,
            filter_dir: compile_one("--filter-dir", patterns.filter_dir)?,
            exclude_dir: compile_one("--exclude-dir", patterns.exclude_dir)?,
        })
    }

    /// Whether an entry of any type with this name is considered at all.
    pub fn admits_entry(&self, name: &str) -> bool {
        self.filter.as_ref().is_none_or(|re| re.is_match(name))
            && !self.exclude.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Whether a directory with this name is descended into.
    pub fn admits_dir(&self, name: &str) -> bool {
        self.admits_entry(name)
            && self.filter_dir.as_ref().is_none_or(|re| re.is_match(name))
            && !self.exclude_dir.as_ref().is_some_and(|re| re.is_match(name))
    }
}

fn compile_one(flag: &str, pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern.filter(|p| !p.is_empty()) {
        None => Ok(None),
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|e| LinesError::invalid_pattern(flag, p, e)),
    }
}

/// Recursively enumerates the files under `root`, handing each admitted file
/// to `dispatch`.
///
/// A `root` that is itself a file is dispatched alone, provided its name
/// passes `filter`/`exclude`. Returning [`ControlFlow::Break`] from
/// `dispatch` stops the walk early without error.
///
/// # Errors
/// Returns [`LinesError::Traversal`] for the first directory that cannot be
/// listed; nothing further is dispatched after that.
pub fn walk<F>(root: &Path, filters: &NameFilters, order: TraversalOrder, mut dispatch: F) -> Result<()>
where
    F: FnMut(PathBuf) -> ControlFlow<()>,
{
    let meta = fs::metadata(root).map_err(|source| LinesError::Traversal {
        path: root.to_path_buf(),
        source,
    })?;
    let mut listing = if meta.is_dir() {
        list_dir(root, filters)?
    } else {
        Listing::single_file(root, filters)
    };

    let mut pending = VecDeque::new();
    loop {
        for file in listing.files {
            if dispatch(file).is_break() {
                return Ok(());
            }
        }

        match order {
            // Reversed so the stack pops subdirectories in name order.
            TraversalOrder::DepthFirst => pending.extend(listing.dirs.into_iter().rev()),
            TraversalOrder::BreadthFirst => pending.extend(listing.dirs),
        }

        let Some(dir) = next_dir(&mut pending, order) else {
            return Ok(());
        };
        listing = list_dir(&dir, filters)?;
    }
}

fn next_dir(pending: &mut VecDeque<PathBuf>, order: TraversalOrder) -> Option<PathBuf> {
    match order {
        TraversalOrder::DepthFirst => pending.pop_back(),
        TraversalOrder::BreadthFirst => pending.pop_front(),
    }
}

#[derive(Debug, Default)]
struct Listing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl Listing {
    fn single_file(path: &Path, filters: &NameFilters) -> Self {
        let admitted = path
            .file_name()
            .is_none_or(|name| filters.admits_entry(&name.to_string_lossy()));
        Self {
            files: if admitted { vec![path.to_path_buf()] } else { Vec::new() },
            dirs: Vec::new(),
        }
    }
}

/// Lists one directory level, split into admitted files and subdirectories,
/// each sorted by path.
fn list_dir(dir: &Path, filters: &NameFilters) -> Result<Listing> {
    let traversal = |source| LinesError::Traversal {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = Listing::default();
    for entry in fs::read_dir(dir).map_err(traversal)? {
        let entry = entry.map_err(traversal)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !filters.admits_entry(&name) {
            continue;
        }

        let file_type = entry.file_type().map_err(traversal)?;
        if file_type.is_dir() {
            if filters.admits_dir(&name) {
                listing.dirs.push(entry.path());
            }
        } else if file_type.is_file() {
            listing.files.push(entry.path());
        } else if file_type.is_symlink() {
            // Links to files are counted; links to directories are not followed.
            let path = entry.path();
            if fs::metadata(&path).is_ok_and(|m| m.is_file()) {
                listing.files.push(path);
            }
        }
    }

    listing.files.sort_unstable();
    listing.dirs.sort_unstable();
    log::debug!(
        "{}: {} files, {} directories",
        dir.display(),
        listing.files.len(),
        listing.dirs.len()
    );
    Ok(listing)
}
