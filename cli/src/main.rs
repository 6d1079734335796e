#[macro_use]
mod macros;
mod cmd;
mod core;
mod resources;

use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Publish contract addresses and ABIs to a remote store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish the deployment addresses of every contract in the manifest
    Addresses(cmd::Addresses),
    /// Publish the ABI of every contract in the manifest
    Abis(cmd::Abis),
}

/// Represents an error that can occur while running the CLI tool
#[derive(Error, Debug)]
enum CliError {
    /// Error related to the addresses command
    #[error("Addresses error: {0}")]
    AddressesError(cmd::addresses::PublishError),
    /// Error related to the abis command
    #[error("Abis error: {0}")]
    AbisError(cmd::abis::PublishError),
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // A missing or unknown command exits here with usage on stderr
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Addresses(addresses) => {
            addresses.run().await.map_err(CliError::AddressesError)?;
            Ok(())
        }
        Commands::Abis(abis) => {
            abis.run().await.map_err(CliError::AbisError)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory, Parser};
    use std::path::PathBuf;

    use super::{run, Cli, CliError, Commands};
    use crate::cmd::addresses::PublishError;
    use crate::core::config::DEFAULT_ENDPOINT;

    #[test]
    fn can_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn requires_a_command() {
        let err = Cli::try_parse_from(["publish"]).err().unwrap();
        assert!(matches!(
            err.kind(),
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ));
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn rejects_unknown_command() {
        let err = Cli::try_parse_from(["publish", "frobnicate"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn can_parse_addresses() {
        let cli = Cli::try_parse_from(["publish", "addresses"]).unwrap();
        let Commands::Addresses(addresses) = cli.command else {
            panic!("expected the addresses command");
        };
        assert_eq!(
            addresses.target.endpoint.as_str(),
            format!("{}/", DEFAULT_ENDPOINT)
        );
        assert!(addresses.target.contracts.is_empty());
    }

    #[test]
    fn can_parse_abis() {
        let cli = Cli::try_parse_from([
            "publish",
            "abis",
            "--endpoint",
            "http://localhost:9000",
            "--manifest",
            "deployment.json",
            "--build-dir",
            "out",
            "--contract",
            "Whitelist",
            "--contract",
            "StokrToken",
        ])
        .unwrap();
        let Commands::Abis(abis) = cli.command else {
            panic!("expected the abis command");
        };
        assert_eq!(abis.target.endpoint.as_str(), "http://localhost:9000/");
        assert_eq!(abis.target.manifest, PathBuf::from("deployment.json"));
        assert_eq!(abis.build_dir, PathBuf::from("out"));
        assert_eq!(abis.target.contracts, vec!["Whitelist", "StokrToken"]);
    }

    #[test]
    fn documents_relative_paths() {
        let mut command = Cli::command();
        let help = command
            .find_subcommand_mut("abis")
            .unwrap()
            .render_long_help()
            .to_string();
        assert!(help.contains("--manifest"));
        assert!(help.contains("--build-dir"));
        assert_eq!(help.matches("current working directory").count(), 2);
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let err = Cli::try_parse_from(["publish", "addresses", "--endpoint", "not a url"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[tokio::test]
    async fn run_fails_on_missing_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest = temp_dir.path().join("deployment.json");
        let cli = Cli::try_parse_from([
            "publish",
            "addresses",
            "--manifest",
            manifest.to_str().unwrap(),
        ])
        .unwrap();

        let result = run(cli).await;
        assert!(matches!(
            result,
            Err(CliError::AddressesError(PublishError::ManifestError(_)))
        ));
    }
}
