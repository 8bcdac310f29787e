use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::{self, Value};
use rst_common::with_logging::log::debug;

use crate::protocol::types::EVERNYM_MSG_QUALIFIER;

use super::types::{ProvisionError, UnpackedMessage, WalletBuilder, WalletHandle};

pub const MSG_TYPE_FORWARD: &str = "spec/routing/1.0/FWD";

/// `ForwardMessage` wraps a packed message so the agency's routing agent knows which
/// DID the inner envelope is addressed to
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
pub struct ForwardMessage {
    #[serde(rename = "@type")]
    typ: String,

    #[serde(rename = "@fwd")]
    fwd: String,

    #[serde(rename = "@msg")]
    msg: Value,
}

impl ForwardMessage {
    pub fn new(recipient_did: String, msg: Value) -> Self {
        Self {
            typ: format!("{};{}", EVERNYM_MSG_QUALIFIER, MSG_TYPE_FORWARD),
            fwd: recipient_did,
            msg,
        }
    }

    pub fn get_fwd(&self) -> &String {
        &self.fwd
    }

    pub fn get_msg(&self) -> &Value {
        &self.msg
    }
}

/// `pack_message` authcrypts `message` for `recipient_verkey` as `sender_verkey`, then wraps the
/// envelope into a [`ForwardMessage`] for `recipient_did` anoncrypted for `routing_verkey`
///
/// Every failure is reported as [`ProvisionError::EncryptionError`]
pub async fn pack_message<TWallet>(
    wallet: &TWallet,
    handle: WalletHandle,
    message: Vec<u8>,
    recipient_did: &str,
    recipient_verkey: &str,
    sender_verkey: &str,
    routing_verkey: &str,
) -> Result<Vec<u8>, ProvisionError>
where
    TWallet: WalletBuilder + ?Sized,
{
    let as_encryption_err = |err: ProvisionError| match err {
        ProvisionError::EncryptionError(_) => err,
        other => ProvisionError::EncryptionError(other.to_string()),
    };

    debug!("[pack_message] recipient: {recipient_did} | routing key: {routing_verkey}");

    let packed = wallet
        .pack(
            handle,
            message,
            vec![recipient_verkey.to_string()],
            Some(sender_verkey.to_string()),
        )
        .await
        .map_err(as_encryption_err)?;

    let packed_value: Value = serde_json::from_slice(&packed)
        .map_err(|err| ProvisionError::EncryptionError(err.to_string()))?;

    let fwd = ForwardMessage::new(recipient_did.to_string(), packed_value);
    let fwd_bytes =
        serde_json::to_vec(&fwd).map_err(|err| ProvisionError::EncryptionError(err.to_string()))?;

    wallet
        .pack(handle, fwd_bytes, vec![routing_verkey.to_string()], None)
        .await
        .map_err(as_encryption_err)
}

/// `unpack_message` opens a packed envelope, every failure is reported as
/// [`ProvisionError::DecryptionError`]
pub async fn unpack_message<TWallet>(
    wallet: &TWallet,
    handle: WalletHandle,
    packed: Vec<u8>,
) -> Result<UnpackedMessage, ProvisionError>
where
    TWallet: WalletBuilder + ?Sized,
{
    wallet
        .unpack(handle, packed)
        .await
        .map_err(|err| match err {
            ProvisionError::DecryptionError(_) => err,
            other => ProvisionError::DecryptionError(other.to_string()),
        })
}
