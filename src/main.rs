use clap::Parser;
use lines::args::Args;
use lines::config::Config;
use lines::presentation;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("lines v{} scanning {}", lines::VERSION, config.scan.root.display());

    let report = lines_engine::run(&config.scan)?;
    presentation::print_report(&report, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
