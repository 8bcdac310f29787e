use std::time::Duration;

use rst_common::standard::serde::{self, Deserialize};

use crate::common::types::{CommonError, ToValidate};

pub const DEFAULT_ENDPOINT_PATH: &str = "/agency/msg";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "self::serde")]
pub struct Transport {
    pub(super) endpoint_path: String,
    pub(super) timeout_secs: u64,
}

impl Transport {
    pub fn new(endpoint_path: String, timeout_secs: u64) -> Self {
        Self {
            endpoint_path,
            timeout_secs,
        }
    }

    pub fn get_endpoint_path(&self) -> String {
        self.endpoint_path.to_owned()
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `endpoint_url` joins the agency url with the configured message endpoint path
    pub fn endpoint_url(&self, verity_url: &str) -> String {
        format!("{}{}", verity_url.trim_end_matches('/'), self.endpoint_path)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ToValidate for Transport {
    fn validate(&self) -> Result<(), CommonError> {
        if !self.endpoint_path.starts_with('/') {
            return Err(CommonError::ValidationError(
                "config: transport:endpoint_path must start with '/'".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(CommonError::ValidationError(
                "config: transport:timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
