mod cmd;
mod logging;

use crate::cmd::cli::Cli;
use crate::cmd::config::Config;

use clap::Parser;
use std::process;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to set up logging: {e}");
    }

    let cli = Cli::parse();
    let cfg: Config = cli.into_config();
    if let Err(e) = cfg.run() {
        eprintln!("{e}");
        process::exit(1);
    }
}
