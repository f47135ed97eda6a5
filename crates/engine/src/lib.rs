// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub mod aggregate;
pub mod config;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

pub use crate::aggregate::Aggregator;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::filesystem::{NameFilters, NamePatterns};
pub use crate::options::TraversalOrder;
pub use crate::processor::{FileOutcome, scan_file};
pub use crate::stats::ScanReport;
pub use lines_core::{LanguageTable, Tally, TrailingFlush};

use hashbrown::HashMap;
use lines_shared_kernel::{LinesError, Result};

#[derive(Debug, Default)]
struct Counters {
    dispatched: AtomicU64,
    counted: AtomicU64,
    unrecognized: AtomicU64,
    failed: AtomicU64,
}

impl Counters {
    fn record(&self, outcome: &FileOutcome) {
        let counter = match outcome {
            FileOutcome::Counted { .. } => &self.counted,
            FileOutcome::Unrecognized => &self.unrecognized,
            FileOutcome::Failed(_) => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Counts every recognized file under `config.root` with the built-in
/// language table.
///
/// # Errors
/// See [`run_with_table`].
pub fn run(config: &Config) -> Result<ScanReport> {
    run_with_table(config, LanguageTable::builtin())
}

/// Counts every recognized file under `config.root`.
///
/// The walker runs on its own thread and feeds a bounded queue that a pool
/// of `config.threads` workers drains. Files that cannot be opened or whose
/// language patterns are malformed are skipped and counted as failed.
///
/// # Errors
///
/// Returns [`LinesError::Traversal`] when a directory cannot be listed. Files
/// already queued at that point are still scanned before the error is
/// returned. Returns [`LinesError::ThreadPool`] when the workers cannot be
/// started.
pub fn run_with_table(config: &Config, table: &LanguageTable) -> Result<ScanReport> {
    let started = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|i| format!("lines-worker-{i}"))
        .build()
        .map_err(|e| LinesError::ThreadPool { details: e.to_string() })?;

    let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(config.queue_capacity);
    let aggregator = Aggregator::new();
    let counters = Counters::default();

    let walked = std::thread::scope(|scope| {
        let dispatched = &counters.dispatched;
        let walker = std::thread::Builder::new()
            .name("lines-walker".into())
            .spawn_scoped(scope, move || {
                // Moving the sender in closes the queue when the walk ends.
                let tx = tx;
                filesystem::walk(&config.root, &config.filters, config.order, |path| {
                    if tx.send(path).is_err() {
                        return ControlFlow::Break(());
                    }
                    dispatched.fetch_add(1, Ordering::Relaxed);
                    ControlFlow::Continue(())
                })
            })
            .map_err(|e| LinesError::ThreadPool { details: e.to_string() })?;

        pool.install(|| {
            rx.into_iter().par_bridge().for_each(|path| {
                let outcome = processor::scan_file(&path, table, config.trailing);
                counters.record(&outcome);
                if let FileOutcome::Counted { language, tally } = outcome {
                    aggregator.merge(language, &tally);
                }
            });
        });

        walker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    });

    let report = ScanReport {
        languages: aggregator.into_languages(),
        files_dispatched: counters.dispatched.into_inner(),
        files_counted: counters.counted.into_inner(),
        files_unrecognized: counters.unrecognized.into_inner(),
        files_failed: counters.failed.into_inner(),
        elapsed: started.elapsed(),
    };

    if let Err(e) = walked {
        log::warn!(
            "Scan of {} aborted after {} files: {e}",
            config.root.display(),
            report.files_dispatched
        );
        return Err(e);
    }

    log::info!(
        "Scanned {} files ({} counted, {} unrecognized, {} failed) in {:?}",
        report.files_dispatched,
        report.files_counted,
        report.files_unrecognized,
        report.files_failed,
        report.elapsed
    );
    Ok(report)
}

/// Per-language totals for `root` using the default configuration.
///
/// # Errors
/// Returns the first traversal error encountered.
pub fn count_lines(root: impl AsRef<Path>) -> Result<HashMap<String, Tally>> {
    let config = Config::for_root(root.as_ref())?;
    run(&config).map(|report| report.languages)
}
