mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_commands as token_handler;

#[derive(Args, Clone)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub commands: TokenCommands,
}

#[derive(Subcommand, Clone)]
#[command(subcommand_help_heading = "Provision Token")]
pub enum TokenCommands {
    /// Verify the sponsor signature of a provision token
    Verify {
        #[arg(short, long, value_name = "FILE")]
        token: String,
    },
}
