use rst_common::with_logging::log::{debug, info};

use rstdev_domain::entity::ToJSON;

use verity_edge_core::protocol::types::EVERNYM_MSG_QUALIFIER;
use verity_edge_core::protocol::ProtocolMeta;
use verity_edge_core::provision::types::{MSG_FAMILY, MSG_FAMILY_VERSION};
use verity_edge_core::provision::CreateEdgeAgent;

use verity_edge_http::{ConfigParser, TransportConfig};

use crate::types::CliError;
use crate::utils::files::{load_context, load_token};

use super::MessageCommands;

pub async fn handle_commands(commands: MessageCommands) -> Result<(), CliError> {
    debug!("message command handler triggered...");

    match commands {
        MessageCommands::Create {
            context,
            token,
            thread_id,
            config,
        } => {
            let ctx = load_context(&context)?;
            let provision_token = token.as_deref().map(load_token).transpose()?;

            let transport_config = match config {
                Some(conf_file) => ConfigParser::new(conf_file)
                    .parse()
                    .map_err(|err| CliError::ConfigError(err.to_string()))?
                    .transport()
                    .to_owned(),
                None => TransportConfig::default(),
            };

            let meta = ProtocolMeta::new(
                MSG_FAMILY,
                MSG_FAMILY_VERSION,
                EVERNYM_MSG_QUALIFIER,
                thread_id,
            );

            let msg = CreateEdgeAgent::build(&meta, &ctx, provision_token.as_ref());
            let msg_json = msg
                .to_json()
                .map_err(|err| CliError::JSONError(err.to_string()))?;

            info!(
                "[message:create] thread: {} | endpoint: {}",
                meta.get_thread_id(),
                transport_config.endpoint_url(ctx.get_verity_url())
            );
            println!("{}", msg_json);
        }
    }

    Ok(())
}
