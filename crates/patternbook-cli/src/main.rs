mod demo;

use clap::{Parser, Subcommand};
use patternbook_core::{Error, log};
use std::{fs, path::PathBuf, process::ExitCode};
use thiserror::Error as ThisError;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "patternbook", version, about = "Run GoF design pattern demonstrations")]
struct Cli {
    /// Optional TOML config (log level, payment amount, singleton prefix).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Demonstration to run; defaults to the command pattern.
    #[command(subcommand)]
    demo: Option<Demo>,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Demo {
    /// Light remote with single-level undo
    Command,
    /// Payment methods swapped at runtime
    Strategy,
    /// Computer assembled by a director
    Builder,
    /// Process-wide logger
    Singleton,
    /// Music player state machine
    State,
    /// News agency and its subscribers
    Observer,
    /// Vehicle factories
    FactoryMethod,
    /// Furniture families
    AbstractFactory,
    /// Document templates
    Prototype,
    /// Every demonstration in order
    All,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error("cannot read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] Error),
}

fn load_config(path: Option<&PathBuf>) -> Result<(), CliError> {
    let toml = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.clone(),
            source,
        })?,
        None => String::new(),
    };

    patternbook_core::init_config(&toml)?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = load_config(cli.config.as_ref()) {
        log!(Error, "{err}");
        return ExitCode::FAILURE;
    }

    match cli.demo.unwrap_or(Demo::Command) {
        Demo::Command => demo::command(),
        Demo::Strategy => demo::strategy(),
        Demo::Builder => demo::builder(),
        Demo::Singleton => demo::singleton(),
        Demo::State => demo::state(),
        Demo::Observer => demo::observer(),
        Demo::FactoryMethod => demo::factory_method(),
        Demo::AbstractFactory => demo::abstract_factory(),
        Demo::Prototype => demo::prototype(),
        Demo::All => demo::all(),
    }

    ExitCode::SUCCESS
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_demo() {
        let cli = Cli::try_parse_from(["patternbook"]).unwrap();

        assert!(cli.demo.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn subcommands_use_kebab_case() {
        let cli = Cli::try_parse_from(["patternbook", "abstract-factory", "--config", "x.toml"])
            .unwrap();

        assert!(matches!(cli.demo, Some(Demo::AbstractFactory)));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = load_config(Some(&PathBuf::from("/nonexistent/patternbook.toml"))).unwrap_err();

        assert!(matches!(err, CliError::ReadConfig { .. }));
    }
}
