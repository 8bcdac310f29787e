use rst_common::standard::async_trait::async_trait;
use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::with_errors::thiserror::{self, Error};

use super::{Context, CreateEdgeAgent, ProvisionToken, ProvisionedResponse};

pub const MSG_FAMILY: &str = "agent-provisioning";
pub const MSG_FAMILY_VERSION: &str = "0.7";

pub const MSG_CREATE_EDGE_AGENT: &str = "create-edge-agent";
pub const MSG_AGENT_PROVISIONED: &str = "AGENT_PROVISIONED";
pub const MSG_PROBLEM_REPORT: &str = "problem-report";

/// ProvisionError is a base error types for the `Provision` domain
#[derive(Debug, PartialEq, Error, Clone)]
pub enum ProvisionError {
    #[error("invalid provision token: {0}")]
    InvalidToken(String),

    #[error("encryption error: {0}")]
    EncryptionError(String),

    #[error("transport error: {0}")]
    TransportError(String),

    #[error("decryption error: {0}")]
    DecryptionError(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("problem report: {0}")]
    ProblemReport(String),

    #[error("json error: {0}")]
    JSONError(String),
}

/// `WalletHandle` references an opened wallet owned by the wallet subsystem
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(crate = "self::serde")]
pub struct WalletHandle(pub i32);

/// `UnpackedMessage` is the plain result of opening a packed envelope
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
pub struct UnpackedMessage {
    pub message: String,
    pub recipient_verkey: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_verkey: Option<String>,
}

/// State represent the steps of a single provisioning exchange
///
/// The machine is linear: [`State::Start`] goes through [`State::Validating`] only when a token
/// has been given, then [`State::Sending`] and [`State::Applying`] before reaching [`State::Done`].
/// Any failing step ends in [`State::Failed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Validating,
    Sending,
    Applying,
    Done,
    Failed,
}

/// `VerifierBuilder` is the signature verification primitive
///
/// It returns `Ok(false)` for a well formed signature that does not match, and an error
/// when the key or the signature cannot be used at all
#[async_trait]
pub trait VerifierBuilder: Send + Sync {
    async fn verify(
        &self,
        verkey: String,
        message: Vec<u8>,
        signature: Vec<u8>,
    ) -> Result<bool, ProvisionError>;
}

/// `WalletBuilder` is the authenticated encryption primitive provided by a wallet
///
/// When `sender_verkey` is `None` the message must be anonymously packed
#[async_trait]
pub trait WalletBuilder: Send + Sync {
    async fn pack(
        &self,
        handle: WalletHandle,
        message: Vec<u8>,
        recipient_verkeys: Vec<String>,
        sender_verkey: Option<String>,
    ) -> Result<Vec<u8>, ProvisionError>;

    async fn unpack(
        &self,
        handle: WalletHandle,
        packed: Vec<u8>,
    ) -> Result<UnpackedMessage, ProvisionError>;
}

/// `TransportBuilder` delivers a packed message to the agency located at `verity_url`
/// and returns the raw packed answer
#[async_trait]
pub trait TransportBuilder: Send + Sync {
    async fn send(&self, verity_url: String, packed: Vec<u8>) -> Result<Vec<u8>, ProvisionError>;
}

/// ProvisionAPI is main entrypoint to communicate with the `Provision` domain
#[async_trait]
pub trait ProvisionAPI {
    /// validate_token verifies the sponsor signature over the token's
    /// `nonce + timestamp + sponseeId + sponsorId` bytes
    async fn validate_token(&self, token: &ProvisionToken) -> Result<(), ProvisionError>;

    /// provision_msg creates the control message without packaging and sending it
    fn provision_msg(&self, context: &Context) -> CreateEdgeAgent;

    /// provision_msg_packed creates and packages the message without sending it
    async fn provision_msg_packed(&self, context: &Context) -> Result<Vec<u8>, ProvisionError>;

    /// send_to_verity sends a packed message and decodes the agency's answer
    async fn send_to_verity(
        &self,
        context: &Context,
        packed: Vec<u8>,
    ) -> Result<ProvisionedResponse, ProvisionError>;

    /// provision runs the whole exchange and returns the provisioned context
    ///
    /// The given context is never modified, on failure the caller keeps using it as is
    async fn provision(&self, context: &Context) -> Result<Context, ProvisionError>;
}
