//! HTTP implementation of the contact relay.

use folio::contact::{ContactRelay, RelayResponse, SubmissionPayload};
use folio::{Error, Result};

/// Posts contact messages as JSON to a form-relay endpoint.
pub struct HttpRelay {
    endpoint: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl HttpRelay {
    /// Create a relay for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Relay(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
            runtime,
        })
    }
}

impl ContactRelay for HttpRelay {
    fn send(&self, payload: &SubmissionPayload) -> Result<RelayResponse> {
        log::debug!("POST {}", self.endpoint);
        self.runtime.block_on(async {
            let response = self
                .client
                .post(self.endpoint.as_str())
                .header("Accept", "application/json")
                .json(payload)
                .send()
                .await
                .map_err(|e| Error::Relay(e.to_string()))?;

            let status = response.status();
            let body: RelayResponse = response
                .json()
                .await
                .map_err(|e| Error::Relay(format!("unreadable response ({}): {}", status, e)))?;
            log::debug!("Relay answered {} (success: {})", status, body.success);
            Ok(body)
        })
    }
}
