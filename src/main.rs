//! `pageweave` — page layout assembly for static site generation

use clap::Parser;

use pageweave::cli::args::Cli;
use pageweave::cli::commands;
use pageweave::error::ExitCode;
use pageweave::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
