use rst_common::with_errors::thiserror::{self, Error};

#[derive(Debug, PartialEq, Error)]
pub enum CommonError {
    #[error("valdation error: {0}")]
    ValidationError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("client error: {0}")]
    ClientError(String),
}

pub trait ToValidate {
    fn validate(&self) -> Result<(), CommonError>;
}
