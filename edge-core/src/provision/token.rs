use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::{self, Map, Value};

use super::types::ProvisionError;

/// `ProvisionToken` is a sponsor issued credential authorizing the provisioning of an agent
///
/// The sponsor signs `nonce + timestamp + sponseeId + sponsorId` with the key published as
/// `sponsorVerKey`. Any other field of the original token is kept untouched so the token can
/// be attached to the control message verbatim
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
#[serde(rename_all = "camelCase")]
pub struct ProvisionToken {
    nonce: String,
    timestamp: String,
    sponsee_id: String,
    sponsor_id: String,
    sig: String,
    sponsor_ver_key: String,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ProvisionToken {
    pub fn new(
        nonce: String,
        timestamp: String,
        sponsee_id: String,
        sponsor_id: String,
        sig: String,
        sponsor_verkey: String,
    ) -> Self {
        Self {
            nonce,
            timestamp,
            sponsee_id,
            sponsor_id,
            sig,
            sponsor_ver_key: sponsor_verkey,
            extra: Map::new(),
        }
    }

    /// `from_json` parses a JSON encoded token given by the sponsor
    pub fn from_json(token: &str) -> Result<Self, ProvisionError> {
        serde_json::from_str(token).map_err(|err| ProvisionError::MalformedInput(err.to_string()))
    }

    pub fn get_nonce(&self) -> &String {
        &self.nonce
    }

    pub fn get_timestamp(&self) -> &String {
        &self.timestamp
    }

    pub fn get_sponsee_id(&self) -> &String {
        &self.sponsee_id
    }

    pub fn get_sponsor_id(&self) -> &String {
        &self.sponsor_id
    }

    pub fn get_sig(&self) -> &String {
        &self.sig
    }

    pub fn get_sponsor_verkey(&self) -> &String {
        &self.sponsor_ver_key
    }

    /// `signed_data` is the exact byte sequence covered by the sponsor signature
    pub fn signed_data(&self) -> Vec<u8> {
        format!(
            "{}{}{}{}",
            self.nonce, self.timestamp, self.sponsee_id, self.sponsor_id
        )
        .into_bytes()
    }

    pub fn signature(&self) -> Result<Vec<u8>, ProvisionError> {
        BASE64
            .decode(self.sig.as_bytes())
            .map_err(|err| ProvisionError::InvalidToken(format!("invalid signature encoding: {}", err)))
    }
}
