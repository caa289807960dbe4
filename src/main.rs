//! CLI entry point for vinced-theme.

mod app;
mod cli;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    std::process::exit(app::entry::run(args));
}
