//! SelfErase workers entry point

use clap::Parser;
use selferase_workers::cli::{self, Cli, Commands};
use selferase_workers::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Some(Commands::Check(args)) => cli::check::execute(&args).await,
        Some(Commands::Brokers(args)) => cli::brokers::execute(&args).await,
        Some(Commands::Serve(args)) => cli::serve::execute(&args).await,
        // No subcommand - default to serve
        None => cli::serve::execute(&cli::serve::ServeArgs::default()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
