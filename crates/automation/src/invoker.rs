use crate::case::CaseName;
use crate::config::AutomationConfig;
use crate::envelope::AutomationRequest;
use crate::error::AutomationError;
use crate::response::RawResponse;
use crate::transport::{AutomationTransport, HttpTransport};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Triggers automation cases on the remote service.
///
/// Holds no mutable state; clones share the same config and transport.
#[derive(Clone)]
pub struct AutomationInvoker {
    config: Arc<AutomationConfig>,
    transport: Arc<dyn AutomationTransport>,
}

impl AutomationInvoker {
    pub fn new(config: Arc<AutomationConfig>) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(
        config: Arc<AutomationConfig>,
        transport: Arc<dyn AutomationTransport>,
    ) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AutomationConfig {
        &self.config
    }

    pub fn validate(&self, case_name: &str) -> Result<CaseName, AutomationError> {
        CaseName::validate(case_name)
    }

    pub fn build(&self, case_name: CaseName) -> AutomationRequest {
        AutomationRequest::new(case_name, &self.config)
    }

    pub async fn send(&self, request: &AutomationRequest) -> Result<RawResponse, AutomationError> {
        debug!(
            endpoint = %self.config.endpoint,
            id = %request.correlation_id(),
            "Posting automation request"
        );
        self.transport.post_json(&self.config.endpoint, request).await
    }

    pub fn interpret(&self, response: RawResponse) -> Result<String, AutomationError> {
        crate::response::interpret(response)
    }

    /// Full round trip for one case name.
    pub async fn invoke(&self, case_name: &str) -> Result<String, AutomationError> {
        let case_name = self.validate(case_name)?;
        let request = self.build(case_name);
        let id = request.correlation_id();
        info!(case = %case_name, id = %id, "Triggering automation case");

        let result = match self.send(&request).await {
            Ok(response) => {
                debug!(id = %id, status = response.status, "Automation service replied");
                self.interpret(response)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!(case = %case_name, id = %id, error = %e, "Automation case failed");
        }
        result
    }
}
