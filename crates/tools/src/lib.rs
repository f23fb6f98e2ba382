pub mod dispatcher;
pub mod registry;
pub mod traits;

pub use dispatcher::ToolDispatcher;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolError, ToolResult};
