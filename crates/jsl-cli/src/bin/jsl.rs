#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use jsl_cli::args::{CliArgs, OutputFormat};
use jsl_cli::reporter::{Reporter, render_json};
use jsl_cli::{config, driver};

/// Exit status codes.
const EXIT_DIAGNOSTICS_REPORTED: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    // Initialize tracing if JSL_LOG or RUST_LOG is set (zero cost otherwise).
    jsl::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(EXIT_DIAGNOSTICS_REPORTED),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Returns whether any diagnostic was reported.
fn run(args: &CliArgs) -> Result<bool> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let config = config::load_run_config(args, &cwd)?;
    let result = driver::run(&config, &cwd)?;

    match args.format {
        OutputFormat::Json => println!("{}", render_json(&result)?),
        OutputFormat::Text => {
            let pretty = !args.no_color
                && args
                    .pretty
                    .unwrap_or_else(|| std::io::stdout().is_terminal());
            let reporter = Reporter::new(pretty).with_verbose(config.verbose);
            print!("{}", reporter.render(&result));
        }
    }
    Ok(result.has_diagnostics())
}
