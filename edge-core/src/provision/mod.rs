//! # Provision Module
//!
//! The `provision` module implements the `agent-provisioning 0.7` protocol. An edge device
//! uses it once to ask a `Verity` agency to create a cloud agent on its behalf.
//!
//! ## Workflow
//!
//! ```text
//! provision(context)
//!   -> validate_token        (only when a provision token was given)
//!   -> provision_msg         (build the `create-edge-agent` message)
//!   -> provision_msg_packed  (authcrypt for the agency, wrapped in a routing FWD)
//!   -> send_to_verity        (transport + unpack the agency's answer)
//!   -> provisioned Context   (domain DID and agent verkey set together)
//! ```
//!
//! ## Collaborators
//!
//! - [`types::VerifierBuilder`] verifies the sponsor signature of a [`ProvisionToken`]. The
//!   [`Ed25519Verifier`] implementation works with base58 encoded verkeys
//! - [`types::WalletBuilder`] packs and unpacks `DIDComm` envelopes with the keys held by a wallet
//! - [`types::TransportBuilder`] delivers the packed bytes to the agency and returns its answer
//!
//! ## Usage contract
//!
//! A single `provision` call runs its steps strictly in sequence and never retries. Concurrent
//! calls working on the same [`Context`] must be serialized by the caller. The caller's context
//! is only borrowed, a successful call returns a new provisioned copy of it.
pub mod types;

mod context;
pub use context::{Context, ContextBuilder};

mod token;
pub use token::ProvisionToken;

mod message;
pub use message::{CreateEdgeAgent, ProvisionedResponse};

mod verifier;
pub use verifier::{verify_token, Ed25519Verifier};

mod envelope;
pub use envelope::{pack_message, unpack_message, ForwardMessage};

mod usecase;
pub use usecase::Provision;
