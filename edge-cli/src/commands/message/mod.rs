mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_commands as message_handler;

#[derive(Args, Clone)]
pub struct MessageArgs {
    #[command(subcommand)]
    pub commands: MessageCommands,
}

#[derive(Subcommand, Clone)]
#[command(subcommand_help_heading = "Control Message")]
pub enum MessageCommands {
    /// Build the `create-edge-agent` control message for a context
    Create {
        #[arg(short, long, value_name = "FILE")]
        context: String,

        #[arg(short, long, value_name = "FILE")]
        token: Option<String>,

        #[arg(long, value_name = "ID")]
        thread_id: Option<String>,

        #[arg(long, value_name = "FILE")]
        config: Option<String>,
    },
}
