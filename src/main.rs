use address_merger::cli::{args::Args, commands};
use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    // Parse command line arguments; clap exits on --help, --version and usage errors
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the document has already been written
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("{} {}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}
