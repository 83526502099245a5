use clap::{Parser, Subcommand};
use nix::sys::signal::Signal;
use std::process::ExitCode;
use trawl_core::cli::search::{SearchArgs, SearchOutcome, run_search};
use trawl_core::logging::init_logging;

/// Exit status when stdout is closed before all results were written.
const EXIT_OUTPUT_CLOSED: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "trawl",
    version,
    about = "trawl: search application and gateway request logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the requests that match every filter term
    Search(SearchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = ctrlc::set_handler(|| {
        std::process::exit(128 + Signal::SIGINT as i32);
    }) {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    match cli.command {
        Command::Search(args) => match run_search(&args) {
            Ok(SearchOutcome::Completed { matched }) => {
                tracing::debug!(matched, "search finished");
                ExitCode::SUCCESS
            }
            Ok(SearchOutcome::OutputClosed) => ExitCode::from(EXIT_OUTPUT_CLOSED),
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
