use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH};

use rst_common::standard::async_trait::async_trait;
use rst_common::with_logging::log::{debug, warn};

use super::types::{ProvisionError, VerifierBuilder};
use super::ProvisionToken;

/// `Ed25519Verifier` verifies detached `Ed25519` signatures made by base58 encoded verkeys
#[derive(Debug, Clone, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    pub fn new() -> Self {
        Self
    }

    fn verifying_key(verkey: &str) -> Result<VerifyingKey, ProvisionError> {
        let bytes = bs58::decode(verkey)
            .into_vec()
            .map_err(|err| ProvisionError::InvalidToken(format!("invalid verkey: {}", err)))?;

        let key_bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            ProvisionError::InvalidToken("invalid verkey: unexpected length".to_string())
        })?;

        VerifyingKey::from_bytes(&key_bytes)
            .map_err(|err| ProvisionError::InvalidToken(format!("invalid verkey: {}", err)))
    }
}

#[async_trait]
impl VerifierBuilder for Ed25519Verifier {
    async fn verify(
        &self,
        verkey: String,
        message: Vec<u8>,
        signature: Vec<u8>,
    ) -> Result<bool, ProvisionError> {
        let key = Self::verifying_key(&verkey)?;
        let sig = Signature::from_slice(&signature)
            .map_err(|err| ProvisionError::InvalidToken(format!("invalid signature: {}", err)))?;

        Ok(key.verify(&message, &sig).is_ok())
    }
}

/// `verify_token` checks the sponsor signature of the given token
///
/// A signature that does not match and a key or signature that cannot be used are both
/// reported as [`ProvisionError::InvalidToken`]
pub async fn verify_token<TVerifier>(
    verifier: &TVerifier,
    token: &ProvisionToken,
) -> Result<(), ProvisionError>
where
    TVerifier: VerifierBuilder + ?Sized,
{
    debug!(
        "[verify_token] sponsor: {} | sponsee: {}",
        token.get_sponsor_id(),
        token.get_sponsee_id()
    );

    let signature = token.signature()?;
    let valid = verifier
        .verify(
            token.get_sponsor_verkey().to_owned(),
            token.signed_data(),
            signature,
        )
        .await
        .map_err(|err| match err {
            ProvisionError::InvalidToken(_) => err,
            other => ProvisionError::InvalidToken(other.to_string()),
        })?;

    if !valid {
        warn!(
            "[verify_token] signature does not validate, sponsor: {}",
            token.get_sponsor_id()
        );

        return Err(ProvisionError::InvalidToken(
            "signature does not validate".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;

    use ed25519_dalek::{Signer, SigningKey};

    use super::*;

    pub fn signing_key(seed: u8) -> SigningKey {
        SigningKey::from_bytes(&[seed; 32])
    }

    pub fn verkey(key: &SigningKey) -> String {
        bs58::encode(key.verifying_key().as_bytes()).into_string()
    }

    pub fn signed_token(
        key: &SigningKey,
        nonce: &str,
        timestamp: &str,
        sponsee_id: &str,
        sponsor_id: &str,
    ) -> ProvisionToken {
        let data = format!("{}{}{}{}", nonce, timestamp, sponsee_id, sponsor_id);
        let sig = key.sign(data.as_bytes());

        ProvisionToken::new(
            nonce.to_string(),
            timestamp.to_string(),
            sponsee_id.to_string(),
            sponsor_id.to_string(),
            BASE64.encode(sig.to_bytes()),
            verkey(key),
        )
    }
}
