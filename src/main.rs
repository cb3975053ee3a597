use clap::Parser;
use log::debug;
use selcraft::cli::{self, Cli};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Initialize logger with error handling
    selcraft::logger::init(cli.log_level())
        .map_err(|e| format!("Failed to initialize logger: {}", e))?;
    debug!(target: "cli", "Parsed command: {:?}", cli.command);

    let output = cli::run(&cli)?;
    println!("{}", output);

    Ok(())
}
