// src/args.rs
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lines",
    version,
    about = "Count code, comment, mixed and empty lines per language"
)]
pub struct Args {
    /// Directory (or single file) to scan
    #[arg(value_hint = ValueHint::AnyPath, value_parser = parsers::parse_root)]
    pub path: PathBuf,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Regular expressions matched against bare entry names.
#[derive(ClapArgs, Debug, Default)]
pub struct FilterOptions {
    /// Only consider files and directories whose name matches
    #[arg(long, help_heading = "Filters")]
    pub filter: Option<String>,

    /// Skip files and directories whose name matches
    #[arg(long, help_heading = "Filters")]
    pub exclude: Option<String>,

    /// Only descend into directories whose name matches
    #[arg(long = "filter-dir", alias = "filterDir", help_heading = "Filters")]
    pub filter_dir: Option<String>,

    /// Never descend into directories whose name matches
    #[arg(long = "exclude-dir", alias = "excludeDir", help_heading = "Filters")]
    pub exclude_dir: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Visit directories breadth-first instead of depth-first
    #[arg(long, help_heading = "Scan")]
    pub breadth: bool,

    /// Worker threads [default: twice the number of CPUs]
    #[arg(short, long, value_parser = parsers::parse_jobs, help_heading = "Scan")]
    pub jobs: Option<usize>,

    /// Files queued ahead of the workers
    #[arg(
        long,
        default_value_t = lines_engine::config::DEFAULT_QUEUE_CAPACITY,
        value_parser = parsers::parse_queue_capacity,
        help_heading = "Scan"
    )]
    pub queue_capacity: usize,

    /// Count one extra empty line per file, as releases before 0.3 did
    #[arg(long, help_heading = "Scan")]
    pub legacy_trailing_line: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Print how long the scan took
    #[arg(short, long, help_heading = "Output")]
    pub timing: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_aliases_are_accepted() {
        let args = Args::try_parse_from(["lines", "--filterDir", "^src$", "--excludeDir", "vendor", "."]).unwrap();
        assert_eq!(args.filter.filter_dir.as_deref(), Some("^src$"));
        assert_eq!(args.filter.exclude_dir.as_deref(), Some("vendor"));
    }

    #[test]
    fn path_is_required() {
        assert!(Args::try_parse_from(["lines"]).is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lines", "src/"]).unwrap();
        assert_eq!(args.path, PathBuf::from("src"));
        assert_eq!(args.output.format, OutputFormat::Table);
        assert_eq!(args.scan.jobs, None);
        assert!(!args.scan.breadth);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let err = Args::try_parse_from(["lines", "-j", "0", "."]).unwrap_err();
        assert!(err.to_string().contains("--jobs must be at least 1"));
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["lines", "-vv", "."]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
