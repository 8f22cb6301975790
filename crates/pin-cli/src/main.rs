//! pin CLI
//!
//! Command-line interface for managing pinboard.in tags.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use pin_core::{Config, PinboardClient, TagOrdering};

mod commands;
mod logging;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "pin")]
#[command(about = "pin - Manage your pinboard.in tags")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Your pinboard.in API token (required)
    #[arg(short, long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Retrieve all your tags along with their use counts
    GetTags {
        /// Sort alphabetically
        #[arg(short, long)]
        alphabetical: bool,
        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,
    },
    /// Rename a tag, or fold it into an existing tag
    RenameTags {
        /// Tag to rename
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        old: String,
        /// New name (merged into if it already exists)
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        new: String,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config = resolve_config(&cli.command, cli.config.as_ref())
        .context("Failed to load configuration")?;
    logging::init(cli.verbose, config.log_file.as_deref());

    match cli.command {
        Commands::GetTags {
            alphabetical,
            descending,
        } => {
            let client = connect(&config, cli.token)?;
            let ordering = TagOrdering::from_flags(alphabetical, descending);
            commands::tag::list(&client, ordering, &output)
        }
        Commands::RenameTags { old, new } => {
            let client = connect(&config, cli.token)?;
            commands::tag::rename(&client, &old, &new, &output)
        }
        Commands::Config => commands::config::show(&config, cli.config.as_ref(), &output),
    }
}

/// Configuration for a command
///
/// The API commands only read a file passed with `--config`; `pin config`
/// also falls back to the default location.
fn resolve_config(command: &Commands, path: Option<&PathBuf>) -> Result<Config> {
    match (command, path) {
        (Commands::Config, path) => Config::load_with_cli_override(path),
        (_, Some(path)) => Config::load_from_path(path),
        (_, None) => Ok(Config::default()),
    }
}

/// Build an API client, failing if no token was given
fn connect(config: &Config, token: Option<String>) -> Result<PinboardClient> {
    let token = require_token(token)?;
    Ok(PinboardClient::from_config(config, token)?)
}

fn require_token(token: Option<String>) -> Result<String> {
    token.ok_or_else(|| anyhow::anyhow!("required flag(s) \"token\" not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tags_defaults() {
        let cli = Cli::try_parse_from(["pin", "get-tags", "-t", "user:ABC"]).unwrap();

        assert_eq!(cli.token.as_deref(), Some("user:ABC"));
        match cli.command {
            Commands::GetTags {
                alphabetical,
                descending,
            } => {
                assert!(!alphabetical);
                assert!(!descending);
            }
            _ => panic!("Expected GetTags command"),
        }
    }

    #[test]
    fn test_get_tags_flags() {
        let cli = Cli::try_parse_from(["pin", "--token", "user:ABC", "get-tags", "-a", "-d"])
            .unwrap();

        match cli.command {
            Commands::GetTags {
                alphabetical,
                descending,
            } => {
                assert!(alphabetical);
                assert!(descending);
            }
            _ => panic!("Expected GetTags command"),
        }

        let cli = Cli::try_parse_from([
            "pin",
            "get-tags",
            "--alphabetical",
            "--descending",
            "--token=user:ABC",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::GetTags {
                alphabetical: true,
                descending: true
            }
        ));
    }

    #[test]
    fn test_rename_tags() {
        let cli =
            Cli::try_parse_from(["pin", "rename-tags", "c++", "cpp & c", "-t", "user:ABC"]).unwrap();

        match cli.command {
            Commands::RenameTags { old, new } => {
                assert_eq!(old, "c++");
                assert_eq!(new, "cpp & c");
            }
            _ => panic!("Expected RenameTags command"),
        }
    }

    #[test]
    fn test_rename_tags_requires_two_arguments() {
        let err = Cli::try_parse_from(["pin", "rename-tags", "only-one", "-t", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err =
            Cli::try_parse_from(["pin", "rename-tags", "a", "b", "c", "-t", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_rename_tags_rejects_empty_names() {
        let err = Cli::try_parse_from(["pin", "rename-tags", "", "b", "-t", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_missing_token() {
        let cli = Cli::try_parse_from(["pin", "get-tags"]).unwrap();
        assert!(cli.token.is_none());

        let err = require_token(cli.token).unwrap_err();
        assert_eq!(err.to_string(), "required flag(s) \"token\" not set");
    }

    #[test]
    fn test_global_output_flags() {
        let cli = Cli::try_parse_from(["pin", "-vv", "get-tags", "--json", "-q", "-t", "x"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_config_command_needs_no_token() {
        let cli = Cli::try_parse_from(["pin", "config", "--config", "/tmp/pin.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Config));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pin.toml")));
    }

    #[test]
    fn test_api_commands_ignore_default_config_and_environment() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "timeout_secs = \"never\"\n").unwrap();

        let vars = ["PIN_CONFIG", "PIN_API_URL", "PIN_TIMEOUT_SECS"];
        let saved: Vec<_> = vars.iter().map(|v| std::env::var(v).ok()).collect();
        std::env::set_var("PIN_CONFIG", &broken);
        std::env::set_var("PIN_API_URL", "http://elsewhere.example/v1");
        std::env::set_var("PIN_TIMEOUT_SECS", "soon");

        for args in [
            vec!["pin", "get-tags", "-t", "user:ABC"],
            vec!["pin", "rename-tags", "a", "b", "-t", "user:ABC"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            let config = resolve_config(&cli.command, cli.config.as_ref()).unwrap();
            assert_eq!(config.api_url, "https://api.pinboard.in/v1");
            assert_eq!(config.timeout_secs, 30);
        }

        // `pin config` still reads the default location
        let cli = Cli::try_parse_from(["pin", "config"]).unwrap();
        let shown = resolve_config(&cli.command, cli.config.as_ref());

        for (var, value) in vars.iter().zip(saved) {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
        assert!(shown.is_err());
    }

    #[test]
    fn test_explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pin.toml");
        std::fs::write(&path, "api_url = \"http://127.0.0.1:9/v1\"\n").unwrap();

        let path_arg = path.to_str().unwrap();
        let cli =
            Cli::try_parse_from(["pin", "get-tags", "-t", "x", "--config", path_arg]).unwrap();
        let config = resolve_config(&cli.command, cli.config.as_ref()).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9/v1");

        std::fs::write(&path, "timeout_secs = \"never\"\n").unwrap();
        assert!(resolve_config(&cli.command, cli.config.as_ref()).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
