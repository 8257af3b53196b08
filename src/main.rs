//! backend-toggle CLI entry point.
//!
//! This binary provides the command-line interface for backend-toggle.

use backend_toggle::cli::Cli;
use backend_toggle::{BackendToggle, BackendToggleError, Document};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Parse CLI arguments; usage errors exit here before any file I/O
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");

            eprintln!("Error: {e}");

            // Print error chain (cause chain)
            let mut chain = e.chain().skip(1).peekable();
            if chain.peek().is_some() {
                eprintln!("\nCaused by:");
                for (i, cause) in chain.enumerate() {
                    eprintln!("  {i}: {cause}");
                }
            }

            let code = e
                .downcast_ref::<BackendToggleError>()
                .map_or(1, |err| {
                    if err.file_untouched() {
                        tracing::debug!(file = %cli.file.display(), "File left unchanged");
                    }
                    err.exit_code()
                });

            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        // First try to use RUST_LOG from environment, otherwise use verbose flag
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let base_level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            // backend_toggle at the requested level, everything else at warn
            EnvFilter::new(format!("warn,backend_toggle={base_level}"))
        })
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let toggle = BackendToggle::new(cli.mode);

    let mut doc = Document::load(&cli.file)?;
    let outcome = toggle.apply(&mut doc)?;

    if !cli.quiet {
        if outcome.removed_existing() {
            println!("Removed existing backend block");
        }
        println!("{}", outcome.switch_message());
    }

    doc.save()?;

    if !cli.quiet {
        println!(
            "Successfully updated {} for {} backend",
            cli.file.display(),
            outcome.mode
        );
    }

    Ok(())
}
