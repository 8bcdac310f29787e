use rst_common::with_errors::thiserror::{self, Error};

use verity_edge_core::provision::types::ProvisionError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("file error: {0}")]
    FileError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("json error: {0}")]
    JSONError(String),

    #[error(transparent)]
    ProvisionError(#[from] ProvisionError),
}
