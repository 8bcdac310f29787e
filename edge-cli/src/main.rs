use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rst_common::with_logging::log::error;
use rst_common::with_tokio::tokio;

use verity_edge_cli::commands::message::{message_handler, MessageArgs};
use verity_edge_cli::commands::token::{token_handler, TokenArgs};
use verity_edge_cli::utils::logging;

#[derive(Parser)]
#[command(name = "verity-edge-cli")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
struct Cli {
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL, global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Provision token tools")]
    Token(TokenArgs),

    #[command(about = "Provisioning control message tools")]
    Message(MessageArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(&cli.log_level);

    let result = match cli.command {
        Commands::Token(args) => token_handler(args.commands).await,
        Commands::Message(args) => message_handler(args.commands).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let cli = Cli::parse_from(["verity-edge-cli", "token", "verify", "--token", "token.json"]);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_custom_log_level() {
        let cli = Cli::parse_from([
            "verity-edge-cli",
            "--log-level",
            "warn",
            "token",
            "verify",
            "--token",
            "token.json",
        ]);
        assert_eq!(cli.log_level, "warn");
    }
}
