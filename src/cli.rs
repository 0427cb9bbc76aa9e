//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Tic-Tac-Toe - two players, one screen
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Hotseat tic-tac-toe with a native GUI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log filter directive, e.g. "tictactoe=debug" (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_default_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.log_filter, None);
        assert!(!cli.print_default_config);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "-c",
            "custom.toml",
            "--log-filter",
            "debug",
            "--print-default-config",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert!(cli.print_default_config);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
