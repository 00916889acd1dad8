mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!(
        "🚀 polycrys CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;
    }

    let command_result = match cli.command {
        Commands::Powder(args) => {
            info!("Dispatching to 'powder' command.");
            commands::powder::run(args)
        }
        Commands::Couple(args) => {
            info!("Dispatching to 'couple' command.");
            commands::couple::run(args)
        }
        Commands::Dipole(args) => {
            info!("Dispatching to 'dipole' command.");
            commands::dipole::run(args)
        }
    };

    match &command_result {
        // Success stays off stdout so piped CSV output is not polluted.
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
