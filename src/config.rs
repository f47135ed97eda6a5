// src/config.rs
use crate::args::{Args, OutputFormat};
use lines_engine::{ConfigBuilder, NameFilters, NamePatterns, TrailingFlush, TraversalOrder};
use lines_shared_kernel::LinesError;

/// Everything one invocation needs: the scan itself plus how to print it.
#[derive(Debug, Clone)]
pub struct Config {
    pub scan: lines_engine::Config,
    pub format: OutputFormat,
    pub timing: bool,
}

impl TryFrom<Args> for Config {
    type Error = LinesError;

    /// Compiles the name patterns up front, so a bad pattern fails before
    /// anything is read from disk.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let filters = NameFilters::compile(&NamePatterns {
            filter: args.filter.filter.as_deref(),
            exclude: args.filter.exclude.as_deref(),
            filter_dir: args.filter.filter_dir.as_deref(),
            exclude_dir: args.filter.exclude_dir.as_deref(),
        })?;

        let mut builder = ConfigBuilder::default();
        builder
            .root(args.path)
            .filters(filters)
            .queue_capacity(args.scan.queue_capacity);
        if args.scan.breadth {
            builder.order(TraversalOrder::BreadthFirst);
        }
        if let Some(jobs) = args.scan.jobs {
            builder.threads(jobs);
        }
        if args.scan.legacy_trailing_line {
            builder.trailing(TrailingFlush::Legacy);
        }

        Ok(Self {
            scan: builder.finish()?,
            format: args.output.format,
            timing: args.output.timing,
        })
    }
}
