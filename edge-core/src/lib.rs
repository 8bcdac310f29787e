//! `verity-edge-core` is the core domain logic used by an edge device to provision
//! its agent on a `Verity` agency.
//!
//! There are two domains in it:
//!
//! - `protocol`
//! - `provision`
//!
//! The `protocol` domain provides the message family metadata shared by every
//! `DIDComm` control message, something like the family name, version, qualifier
//! and thread identifier.
//!
//! The `provision` domain implements the `agent-provisioning 0.7` protocol. It builds
//! the `create-edge-agent` control message, optionally verifies the sponsor's
//! provision token, packs and sends the message to the agency and folds the
//! agency's answer back into the caller's [`provision::Context`].
pub mod protocol;
pub mod provision;
