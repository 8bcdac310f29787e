use rst_common::with_logging::log::{debug, info};

use verity_edge_core::provision::{verify_token, Ed25519Verifier};

use crate::types::CliError;
use crate::utils::files::load_token;

use super::TokenCommands;

pub async fn handle_commands(commands: TokenCommands) -> Result<(), CliError> {
    debug!("token command handler triggered...");

    match commands {
        TokenCommands::Verify { token } => {
            let provision_token = load_token(&token)?;
            verify_token(&Ed25519Verifier::new(), &provision_token).await?;

            info!(
                "[token:verify] valid token, sponsor: {} | sponsee: {}",
                provision_token.get_sponsor_id(),
                provision_token.get_sponsee_id()
            );
            println!("valid");
        }
    }

    Ok(())
}
