//!
//! The benchmark plotter executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    let exit_code = match main_inner(arguments) {
        Ok(()) => benchmark_plotter::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_plotter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let config = arguments.into_config()?;
    let quiet = config.quiet;
    if !quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let run_time_start = Instant::now();
    let summary = match benchmark_plotter::Workflow::new(config).run() {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("{:>12} {error}", "Error".bright_red().bold());
            if error.is_missing_input() {
                eprintln!(
                    "{:>12} run the benchmark first to produce the results table",
                    "Hint".bright_yellow().bold()
                );
            }
            return Ok(());
        }
    };
    print!("{summary}");
    for failure in summary.failures().into_iter() {
        eprintln!("{failure}");
    }

    if !summary.is_successful() {
        anyhow::bail!("Some artifacts could not be produced");
    }
    if !quiet {
        println!(
            "    {} in {}.{:03}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs(),
            run_time_start.elapsed().subsec_millis(),
        );
    }
    Ok(())
}
