//! Harrow CLI - inspect DSSAT input-record resolution.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Models { crop, json } => commands::models::run(crop, json),

        Commands::Genetics {
            crop,
            cultivar,
            model,
            var,
            json,
        } => commands::genetics::run(&cli.dssat, crop, cultivar, model, var, json),

        Commands::Weather { code, var, json } => {
            commands::weather::run(&cli.dssat, code, var, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
