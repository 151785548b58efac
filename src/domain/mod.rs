use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor for a callable tool: stable external name, human description
/// and the JSON Schema of its input. Immutable once registered.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Port for the tool registry: enumerate descriptors and run one invocation.
///
/// Each invocation is independent; the implementation validates `args`
/// against the tool's declared shape before anything reaches the upstream.
#[async_trait]
pub trait ToolPort: Send + Sync {
    async fn execute_tool(&self, name: &str, args: Value) -> anyhow::Result<Value>;
    async fn list_tools(&self) -> anyhow::Result<Vec<Tool>>;
}
