//! Per-file line classifier.
//!
//! A [`LineClassifier`] is created for one file, fed that file's lines in
//! order, and consumed by [`LineClassifier::finish`]. The only state carried
//! between lines is whether a block comment is still open.

use lines_shared_kernel::{LineKind, Tally};

use crate::language::{BlockPatterns, CompiledPatterns};

/// What to do once the line source is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingFlush {
    /// Exactly one classification per input line.
    #[default]
    None,
    /// Classify one extra empty line after the last one, as older releases
    /// did. Kept for output compatibility only.
    Legacy,
}

#[derive(Debug)]
pub struct LineClassifier<'p> {
    patterns: &'p CompiledPatterns,
    in_block_comment: bool,
    tally: Tally,
}

impl<'p> LineClassifier<'p> {
    pub const fn new(patterns: &'p CompiledPatterns) -> Self {
        Self {
            patterns,
            in_block_comment: false,
            tally: Tally::new(),
        }
    }

    /// Classifies one line (terminator already stripped) and counts it.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let kind = self.kind_of(line);
        self.tally.record(kind);
        kind
    }

    /// Classifies every line of `lines`.
    pub fn classify_lines<'l, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'l str>,
    {
        for line in lines {
            self.classify(line);
        }
    }

    pub const fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Counts so far, without the trailing flush.
    pub const fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn finish(mut self, trailing: TrailingFlush) -> Tally {
        if trailing == TrailingFlush::Legacy {
            self.classify("");
        }
        self.tally
    }

    fn kind_of(&mut self, line: &str) -> LineKind {
        if self.in_block_comment {
            // The state is only ever entered through a block pattern.
            self.in_block_comment = self
                .patterns
                .block
                .as_ref()
                .is_some_and(|block| block.stays_open(line));
            return LineKind::BlockComment;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Empty;
        }

        if let Some(line_comment) = &self.patterns.line_comment
            && let Some(found) = line_comment.find(trimmed)
        {
            return if found.start() == 0 {
                LineKind::LineComment
            } else {
                LineKind::Mixed
            };
        }

        if let Some(block) = &self.patterns.block
            && let Some(opening) = block.opening(trimmed)
        {
            self.in_block_comment = !opening.closes;
            return if opening.first_start == 0 {
                LineKind::BlockComment
            } else {
                LineKind::Mixed
            };
        }

        LineKind::Code
    }
}

/// Block markers found on a line outside any open comment.
struct Opening {
    first_start: usize,
    closes: bool,
}

impl BlockPatterns {
    fn last_start(&self, line: &str) -> Option<usize> {
        self.start.find_iter(line).last().map(|m| m.start())
    }

    fn last_end(&self, line: &str) -> Option<usize> {
        self.end.find_iter(line).last().map(|m| m.start())
    }

    /// Whether an already open comment is still open after `line`.
    ///
    /// It stays open when no end marker occurs, or when a start marker
    /// begins strictly after the last end marker. Markers at the same offset
    /// count as closed.
    fn stays_open(&self, line: &str) -> bool {
        let Some(end) = self.last_end(line) else {
            return true;
        };
        self.last_start(line).is_some_and(|start| start > end)
    }

    fn opening(&self, line: &str) -> Option<Opening> {
        let mut starts = self.start.find_iter(line).map(|m| m.start());
        let first_start = starts.next()?;
        let last_start = starts.last().unwrap_or(first_start);
        let closes = self.last_end(line).is_some_and(|end| end >= last_start);
        Some(Opening { first_start, closes })
    }
}
