use hashbrown::HashMap;
use lines_core::Tally;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Per-language running totals shared by all workers.
///
/// [`Aggregator::merge`] is the only way to change a total. Each merge is a
/// single critical section, so a language's counters and its file count
/// always move together.
#[derive(Debug, Default)]
pub struct Aggregator {
    totals: Mutex<HashMap<String, Tally>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one file's tally to `language`'s total.
    pub fn merge(&self, language: &str, file: &Tally) {
        let mut totals = self.lock();
        match totals.get_mut(language) {
            Some(total) => total.merge_file(file),
            None => {
                totals.insert(language.to_owned(), Tally::first_file(file));
            }
        }
    }

    /// Copy of the current totals.
    pub fn snapshot(&self) -> HashMap<String, Tally> {
        self.lock().clone()
    }

    pub fn into_languages(self) -> HashMap<String, Tally> {
        self.totals.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic elsewhere cannot leave a half-applied merge behind.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Tally>> {
        self.totals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
