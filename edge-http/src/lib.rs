//! `verity-edge-http` provides the network side of the provisioning protocol
//!
//! - [`HttpTransport`] posts packed messages to a `Verity` agency and returns its packed answer
//! - [`ConfigParser`] loads the transport settings from a `TOML` file
pub mod common;

mod config;
pub use config::{Config, Parser as ConfigParser, Transport as TransportConfig};

mod transport;
pub use transport::HttpTransport;
