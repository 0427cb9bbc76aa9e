//! Tic-tac-toe GUI
//!
//! A graphical interface for two players sharing one screen.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tictactoe::cli::Cli;
use tictactoe::config::{AppConfig, MIN_WINDOW_SIZE};
use tictactoe::ui::TicTacToeApp;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_default_config {
        return match AppConfig::default_toml() {
            Ok(toml) => {
                print!("{toml}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let loaded = match AppConfig::load_optional(&cli.config) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    // RUST_LOG wins over the command line, which wins over the config file
    let directive = cli.log_filter.as_deref().unwrap_or(&config.logging.filter);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .try_init();

    if found {
        info!(path = %cli.config.display(), "configuration loaded");
    } else {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    let settings = config.ui.clone();
    let result = eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, settings)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "window closed with error");
            ExitCode::FAILURE
        }
    }
}
