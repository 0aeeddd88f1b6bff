//! Courier Rate - shipment rate quoting from the command line
//!
//! Validates the entered shipment details and prints an itemized
//! order summary, or the reason the quote was rejected.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
