//! `protocol` provides the message family metadata used to build `DIDComm` control messages
//!
//! Each protocol owns a [`ProtocolMeta`] value object instead of extending a base protocol
//! type. The meta object knows how to render a fully qualified message type and how to
//! build a [`BaseMessage`] that the protocol extends with its own fields.
pub mod types;

mod meta;
pub use meta::ProtocolMeta;

pub use types::{BaseMessage, Thread};
