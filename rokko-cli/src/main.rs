//! Rokko - Bitcoin key and address CLI tool.
//!
//! Generate keys, import and export WIF, and validate addresses.

mod commands;

use clap::Parser;
use commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
