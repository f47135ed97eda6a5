use crate::filesystem::NameFilters;
use crate::options::TraversalOrder;
use derive_builder::Builder;
use lines_core::TrailingFlush;
use lines_shared_kernel::{LinesError, Result};
use std::path::PathBuf;

/// Bound of the work queue between the walker and the workers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Two workers per logical CPU.
pub fn default_threads() -> usize {
    num_cpus::get().saturating_mul(2).max(1)
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub root: PathBuf,
    #[builder(default)]
    pub filters: NameFilters,
    #[builder(default)]
    pub order: TraversalOrder,
    #[builder(default = "default_threads()")]
    pub threads: usize,
    #[builder(default = "DEFAULT_QUEUE_CAPACITY")]
    pub queue_capacity: usize,
    #[builder(default)]
    pub trailing: TrailingFlush,
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.threads == Some(0) {
            return Err("threads must be at least 1".to_string());
        }
        if self.queue_capacity == Some(0) {
            return Err("queue capacity must be at least 1".to_string());
        }
        Ok(())
    }

    /// Builds the config, reporting problems as configuration errors.
    ///
    /// # Errors
    /// Returns [`LinesError::InvalidConfiguration`] when a required field is
    /// missing or a value is out of range.
    pub fn finish(&self) -> Result<Config> {
        self.build().map_err(|e| LinesError::InvalidConfiguration { reason: e.to_string() })
    }
}

impl Config {
    /// Default scan of `root`.
    ///
    /// # Errors
    /// Never fails for the defaults; the `Result` mirrors [`ConfigBuilder::finish`].
    pub fn for_root(root: impl Into<PathBuf>) -> Result<Self> {
        ConfigBuilder::default().root(root.into()).finish()
    }
}
