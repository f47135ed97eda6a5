// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Category a single source line was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Code,
    LineComment,
    BlockComment,
    Mixed,
    Empty,
}

/// Line counts for one file, or for every file of one language.
///
/// The five category counters always sum to `total`: the only way to grow a
/// tally is [`Tally::record`], which bumps `total` together with exactly one
/// category, or one of the merge operations, which add whole tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tally {
    total: u64,
    code: u64,
    block_comment: u64,
    line_comment: u64,
    mixed: u64,
    empty: u64,
    files: u64,
}

impl Tally {
    #[inline]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            block_comment: 0,
            line_comment: 0,
            mixed: 0,
            empty: 0,
            files: 0,
        }
    }

    /// Counts one line of the given kind.
    pub fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::LineComment => self.line_comment += 1,
            LineKind::BlockComment => self.block_comment += 1,
            LineKind::Mixed => self.mixed += 1,
            LineKind::Empty => self.empty += 1,
        }
    }

    /// Folds a finished per-file tally into this running total.
    ///
    /// The file's line counters are added element-wise and `files` grows by
    /// exactly one, whatever the incoming tally's own `files` value is.
    pub fn merge_file(&mut self, file: &Self) {
        self.add_lines(file);
        self.files += 1;
    }

    /// Seeds a language total from its first file.
    #[must_use]
    pub fn first_file(file: &Self) -> Self {
        let mut seeded = Self::new();
        seeded.merge_file(file);
        seeded
    }

    fn add_lines(&mut self, other: &Self) {
        self.total += other.total;
        self.code += other.code;
        self.block_comment += other.block_comment;
        self.line_comment += other.line_comment;
        self.mixed += other.mixed;
        self.empty += other.empty;
    }

    #[inline]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub const fn code(&self) -> u64 {
        self.code
    }

    #[inline]
    pub const fn block_comment(&self) -> u64 {
        self.block_comment
    }

    #[inline]
    pub const fn line_comment(&self) -> u64 {
        self.line_comment
    }

    /// Line and block comment lines together.
    #[inline]
    pub const fn comments(&self) -> u64 {
        self.line_comment + self.block_comment
    }

    #[inline]
    pub const fn mixed(&self) -> u64 {
        self.mixed
    }

    #[inline]
    pub const fn empty(&self) -> u64 {
        self.empty
    }

    #[inline]
    pub const fn files(&self) -> u64 {
        self.files
    }

    /// Number of lines counted under `kind`.
    pub const fn count_of(&self, kind: LineKind) -> u64 {
        match kind {
            LineKind::Code => self.code,
            LineKind::LineComment => self.line_comment,
            LineKind::BlockComment => self.block_comment,
            LineKind::Mixed => self.mixed,
            LineKind::Empty => self.empty,
        }
    }

    /// `true` when the five categories add up to `total`.
    pub const fn is_balanced(&self) -> bool {
        self.code + self.block_comment + self.line_comment + self.mixed + self.empty == self.total
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.total == 0 && self.files == 0
    }
}

/// Element-wise sum of two aggregated tallies, `files` included.
impl Add for Tally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.add_lines(&rhs);
        self.files += rhs.files;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a Tally> for Tally {
    fn sum<I: Iterator<Item = &'a Tally>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromIterator<LineKind> for Tally {
    fn from_iter<I: IntoIterator<Item = LineKind>>(iter: I) -> Self {
        let mut tally = Self::new();
        for kind in iter {
            tally.record(kind);
        }
        tally
    }
}
