//! `trigger_automation_case`: an agent tool that starts a predefined
//! automation case on the automation service over HTTP.

pub mod case;
pub mod config;
pub mod envelope;
pub mod error;
pub mod invoker;
pub mod response;
pub mod tool;
pub mod transport;

pub use case::CaseName;
pub use config::AutomationConfig;
pub use envelope::{AutomationRequest, Credentials, RunConfig, UserData};
pub use error::AutomationError;
pub use invoker::AutomationInvoker;
pub use response::{interpret, RawResponse, ResponseBody};
pub use tool::{automation_tools, TriggerAutomationCaseTool, TOOL_NAME};
pub use transport::{AutomationTransport, HttpTransport};
