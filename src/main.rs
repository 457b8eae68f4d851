use anyhow::Result;
use clap::{CommandFactory, Parser};
use passtretcher::config::{Cli, StretchConfig};
use passtretcher::transform;
use std::io::Write;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "warn,passtretcher=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose)
        .init();

    let (config, warnings) = match StretchConfig::from_cli(cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            let _ = Cli::command().print_help();
            eprintln!("\nError: {e}");
            std::process::exit(1);
        }
    };

    for warning in &warnings {
        eprintln!("{warning}");
    }

    if let Err(e) = run(config) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: StretchConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.verbose {
        writeln!(out, "Processing input string: '{}'", config.input)?;
        writeln!(
            out,
            "Generating output with {} characters...",
            config.output_length
        )?;
    }

    let result = transform(&config.input, config.output_length);
    debug!(len = result.len(), "transform complete");

    if config.verbose {
        writeln!(out, "\nResult:")?;
    }
    writeln!(out, "{result}")?;
    out.flush()?;
    Ok(())
}
