mod cli;
mod config;
mod logging;
mod model;
mod theme;
mod tui;

use std::process;

use clap::Parser;
use log::info;

use cli::Cli;
use config::Config;
use theme::Theme;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    let theme = match Theme::from_config(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to build theme: {e}");
            process::exit(1);
        }
    };

    // Held for the whole run; dropping the handle stops logging.
    let _logger = match logging::init(cli.verbose) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start logging: {e}");
            process::exit(1);
        }
    };

    info!("goals {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = tui::run(&theme) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
