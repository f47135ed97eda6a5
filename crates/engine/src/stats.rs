use hashbrown::HashMap;
use lines_core::Tally;
use std::time::Duration;

/// Result of one completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Language name to aggregated tally.
    pub languages: HashMap<String, Tally>,
    pub files_dispatched: u64,
    pub files_counted: u64,
    pub files_unrecognized: u64,
    pub files_failed: u64,
    pub elapsed: Duration,
}

impl ScanReport {
    /// Sum over every language; `files` is the number of counted files.
    pub fn totals(&self) -> Tally {
        self.languages.values().sum()
    }

    /// Languages ordered by total lines, largest first, ties by name.
    pub fn sorted(&self) -> Vec<(&str, &Tally)> {
        let mut rows: Vec<_> = self.languages.iter().map(|(name, tally)| (name.as_str(), tally)).collect();
        rows.sort_by(|a, b| b.1.total().cmp(&a.1.total()).then_with(|| a.0.cmp(b.0)));
        rows
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
