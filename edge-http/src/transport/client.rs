use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use rst_common::standard::async_trait::async_trait;
use rst_common::with_logging::log::debug;

use verity_edge_core::provision::types::{ProvisionError, TransportBuilder};

use crate::common::types::CommonError;
use crate::config::Transport;

const CONTENT_TYPE_PACKED: &str = "application/octet-stream";

/// `HttpTransport` delivers packed messages to the agency's message endpoint
///
/// The request body is the packed message as is, the agency answers with its own packed
/// message in the response body. Any non success status is reported as a transport error
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: Transport,
}

impl HttpTransport {
    pub fn new(config: Transport) -> Result<Self, CommonError> {
        let client = Client::builder()
            .timeout(config.get_timeout())
            .build()
            .map_err(|err| CommonError::ClientError(err.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Transport {
        &self.config
    }
}

#[async_trait]
impl TransportBuilder for HttpTransport {
    async fn send(&self, verity_url: String, packed: Vec<u8>) -> Result<Vec<u8>, ProvisionError> {
        let url = self.config.endpoint_url(&verity_url);
        debug!("[http_transport] POST {} | {} bytes", url, packed.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_PACKED)
            .body(packed)
            .send()
            .await
            .map_err(|err| ProvisionError::TransportError(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProvisionError::TransportError(format!(
                "agency responded with status {}: {}",
                status, body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ProvisionError::TransportError(err.to_string()))?;

        debug!("[http_transport] response: {} bytes", body.len());
        Ok(body.to_vec())
    }
}
