use rst_common::standard::serde::{self, Deserialize};

use crate::common::types::{CommonError, ToValidate};

use super::Transport;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(crate = "self::serde")]
pub struct Config {
    #[serde(default)]
    pub(super) transport: Transport,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl ToValidate for Config {
    fn validate(&self) -> Result<(), CommonError> {
        self.transport.validate()
    }
}
