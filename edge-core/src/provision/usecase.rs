use rst_common::standard::async_trait::async_trait;
use rst_common::with_logging::log::{debug, info, warn};

use crate::protocol::types::EVERNYM_MSG_QUALIFIER;
use crate::protocol::ProtocolMeta;

use super::types::{
    ProvisionAPI, ProvisionError, State, TransportBuilder, VerifierBuilder, WalletBuilder,
    MSG_FAMILY, MSG_FAMILY_VERSION,
};
use super::{
    pack_message, unpack_message, verify_token, Context, CreateEdgeAgent, ProvisionToken,
    ProvisionedResponse,
};

/// `Provision` is base logic implementation for the [`ProvisionAPI`]
///
/// This object depends on the implementation of [`WalletBuilder`], [`VerifierBuilder`] and
/// [`TransportBuilder`]. The optional token is parsed before building this object through
/// [`ProvisionToken::from_json`], so construction itself never fails
pub struct Provision<TWallet, TVerifier, TTransport>
where
    TWallet: WalletBuilder,
    TVerifier: VerifierBuilder,
    TTransport: TransportBuilder,
{
    meta: ProtocolMeta,
    token: Option<ProvisionToken>,
    wallet: TWallet,
    verifier: TVerifier,
    transport: TTransport,
}

impl<TWallet, TVerifier, TTransport> Provision<TWallet, TVerifier, TTransport>
where
    TWallet: WalletBuilder,
    TVerifier: VerifierBuilder,
    TTransport: TransportBuilder,
{
    pub fn new(
        thread_id: Option<String>,
        token: Option<ProvisionToken>,
        wallet: TWallet,
        verifier: TVerifier,
        transport: TTransport,
    ) -> Self {
        let meta = ProtocolMeta::new(
            MSG_FAMILY,
            MSG_FAMILY_VERSION,
            EVERNYM_MSG_QUALIFIER,
            thread_id,
        );

        Self {
            meta,
            token,
            wallet,
            verifier,
            transport,
        }
    }

    pub fn meta(&self) -> &ProtocolMeta {
        &self.meta
    }

    pub fn token(&self) -> Option<&ProvisionToken> {
        self.token.as_ref()
    }

    fn transition(&self, from: State, to: State) -> State {
        debug!(
            "[provision:{}] state: {:?} -> {:?}",
            self.meta.get_thread_id(),
            from,
            to
        );
        to
    }

    fn fail(&self, state: State, err: ProvisionError) -> ProvisionError {
        warn!(
            "[provision:{}] failed at {:?}: {}",
            self.meta.get_thread_id(),
            state,
            err
        );
        self.transition(state, State::Failed);
        err
    }
}

#[async_trait]
impl<TWallet, TVerifier, TTransport> ProvisionAPI for Provision<TWallet, TVerifier, TTransport>
where
    TWallet: WalletBuilder,
    TVerifier: VerifierBuilder,
    TTransport: TransportBuilder,
{
    async fn validate_token(&self, token: &ProvisionToken) -> Result<(), ProvisionError> {
        verify_token(&self.verifier, token).await
    }

    fn provision_msg(&self, context: &Context) -> CreateEdgeAgent {
        CreateEdgeAgent::build(&self.meta, context, self.token.as_ref())
    }

    async fn provision_msg_packed(&self, context: &Context) -> Result<Vec<u8>, ProvisionError> {
        let msg = self
            .provision_msg(context)
            .to_bytes()
            .map_err(|err| ProvisionError::EncryptionError(err.to_string()))?;

        pack_message(
            &self.wallet,
            context.get_wallet_handle(),
            msg,
            context.get_verity_public_did(),
            context.get_verity_public_verkey(),
            context.get_sdk_verkey(),
            context.get_verity_public_verkey(),
        )
        .await
    }

    async fn send_to_verity(
        &self,
        context: &Context,
        packed: Vec<u8>,
    ) -> Result<ProvisionedResponse, ProvisionError> {
        debug!(
            "[provision:{}] sending {} bytes to {}",
            self.meta.get_thread_id(),
            packed.len(),
            context.get_verity_url()
        );

        let raw_response = self
            .transport
            .send(context.get_verity_url().to_owned(), packed)
            .await
            .map_err(|err| match err {
                ProvisionError::TransportError(_) => err,
                other => ProvisionError::TransportError(other.to_string()),
            })?;

        let unpacked =
            unpack_message(&self.wallet, context.get_wallet_handle(), raw_response).await?;

        ProvisionedResponse::decode(&self.meta, &unpacked.message)
    }

    async fn provision(&self, context: &Context) -> Result<Context, ProvisionError> {
        let mut state = State::Start;

        if let Some(token) = self.token.as_ref() {
            state = self.transition(state, State::Validating);
            self.validate_token(token)
                .await
                .map_err(|err| self.fail(state, err))?;
        }

        state = self.transition(state, State::Sending);
        let packed = self
            .provision_msg_packed(context)
            .await
            .map_err(|err| self.fail(state, err))?;

        let response = self
            .send_to_verity(context, packed)
            .await
            .map_err(|err| self.fail(state, err))?;

        state = self.transition(state, State::Applying);
        let provisioned = context.provisioned(
            response.get_self_did().to_owned(),
            response.get_agent_verkey().to_owned(),
        );

        self.transition(state, State::Done);
        info!(
            "[provision:{}] agent provisioned, domain did: {}",
            self.meta.get_thread_id(),
            response.get_self_did()
        );

        Ok(provisioned)
    }
}
