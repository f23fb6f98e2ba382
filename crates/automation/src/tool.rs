use crate::case::CaseName;
use crate::config::AutomationConfig;
use crate::error::AutomationError;
use crate::invoker::AutomationInvoker;
use async_trait::async_trait;
use auto_agent_tools::{Tool, ToolError, ToolRegistry, ToolResult};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub const TOOL_NAME: &str = "trigger_automation_case";

#[derive(Deserialize)]
struct TriggerInput {
    #[serde(rename = "caseName")]
    case_name: String,
}

/// Lets the agent pick an automation case by name. Everything else in the
/// request is fixed.
#[derive(Clone)]
pub struct TriggerAutomationCaseTool {
    invoker: AutomationInvoker,
}

impl TriggerAutomationCaseTool {
    pub fn new(invoker: AutomationInvoker) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl Tool for TriggerAutomationCaseTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Invoke an automation program (not a test case). Provide only a caseName to select which automation case to run."
    }

    fn schema(&self) -> serde_json::Value {
        let options: Vec<&str> = CaseName::ALL.iter().map(CaseName::as_str).collect();
        json!({
            "type": "object",
            "properties": {
                "caseName": {
                    "type": "string",
                    "enum": options,
                    "description": format!("Use one of: {}", CaseName::valid_options())
                }
            },
            "required": ["caseName"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let input: TriggerInput = serde_json::from_value(args).map_err(|e| {
            ToolError::Validation(format!(
                "{}. Use one of: {}",
                e,
                CaseName::valid_options()
            ))
        })?;

        let output = self.invoker.invoke(&input.case_name).await?;
        Ok(ToolResult::ok(json!(output)))
    }
}

impl From<AutomationError> for ToolError {
    fn from(err: AutomationError) -> Self {
        match err {
            AutomationError::InvalidCaseName { .. } => ToolError::Validation(err.to_string()),
            AutomationError::UnreachableService(_) | AutomationError::ServiceError { .. } => {
                ToolError::Execution(err.to_string())
            }
        }
    }
}

/// Registry holding every tool this agent exposes.
pub fn automation_tools(config: Arc<AutomationConfig>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(TriggerAutomationCaseTool::new(
        AutomationInvoker::new(config),
    )));
    registry
}
