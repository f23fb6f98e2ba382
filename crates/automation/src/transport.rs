use crate::envelope::AutomationRequest;
use crate::error::AutomationError;
use crate::response::RawResponse;
use async_trait::async_trait;
use reqwest::Client;

/// Delivers a request to the automation service.
#[async_trait]
pub trait AutomationTransport: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &str,
        request: &AutomationRequest,
    ) -> Result<RawResponse, AutomationError>;
}

/// `reqwest`-backed transport. One attempt per call, client default timeouts.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutomationTransport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        request: &AutomationRequest,
    ) -> Result<RawResponse, AutomationError> {
        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AutomationError::unreachable(&e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AutomationError::unreachable(&e))?;

        Ok(RawResponse { status, body })
    }
}
