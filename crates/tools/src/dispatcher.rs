use crate::registry::ToolRegistry;
use crate::traits::{ToolError, ToolResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Routes agent tool calls to registered tools.
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub async fn dispatch(
        &self,
        tool_name: &str,
        args: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        info!("Dispatching tool: {}", tool_name);

        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| ToolError::Validation(format!("Tool not found: {}", tool_name)))?;

        if args.is_null() {
            return Err(ToolError::Validation(format!(
                "Missing arguments for tool: {}",
                tool_name
            )));
        }

        let result = tool.execute(args).await;
        match &result {
            Ok(r) => info!(tool = tool_name, success = r.success, "Tool finished"),
            Err(e) => warn!(tool = tool_name, error = %e, "Tool failed"),
        }
        result
    }
}
