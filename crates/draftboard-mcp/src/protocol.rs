//! JSON-RPC 2.0 message types for the stdio transport
//!
//! One request or response per line on stdin/stdout. MCP field names are
//! camelCase on the wire (`inputSchema`, `protocolVersion`), so the structs
//! rename where Rust naming differs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An incoming request line
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Always `"2.0"`
    pub jsonrpc: String,
    /// Request id, echoed back in the response; absent for notifications
    pub id: Option<Value>,
    /// Method name (`initialize`, `tools/list`, `tools/call`)
    pub method: String,
    /// Method parameters, defaulting to null when omitted
    #[serde(default)]
    pub params: Value,
}

/// Success response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// Always `"2.0"`
    pub jsonrpc: String,
    /// Id of the request being answered
    pub id: Option<Value>,
    /// Tool or method result
    pub result: Value,
}

impl JsonRpcResponse {
    /// Success response for the given request id
    pub fn new(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// Always `"2.0"`
    pub jsonrpc: String,
    /// Id of the request being answered; `None` when the request line
    /// could not be parsed at all
    pub id: Option<Value>,
    /// Code and message
    pub error: ErrorDetail,
}

/// The `error` member of an error response
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// JSON-RPC error code (`-32700` parse, `-32601` not found,
    /// `-32602` invalid params, `-32000` server-side)
    pub code: i32,
    /// Human-readable description
    pub message: String,
}

impl JsonRpcError {
    /// Error response for the given request id
    pub fn new(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorDetail { code, message },
        }
    }
}

/// `tools/list` result
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    /// Every registered tool with its input schema
    pub tools: Vec<ToolDefinition>,
}

/// One entry in the `tools/list` result
#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name as passed to `tools/call`
    pub name: String,
    /// One-line description shown to the client
    pub description: String,
    /// JSON Schema for the tool's arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// `initialize` result
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    /// Protocol version this server speaks
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server name and version
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// What the server can do
    pub capabilities: Capabilities,
}

/// Server identity reported during initialize
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Crate version
    pub version: String,
}

/// Capability flags reported during initialize
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Tool support
    pub tools: ToolsCapability,
}

/// Tool capability flag
#[derive(Debug, Serialize)]
pub struct ToolsCapability {
    /// This server only does tools
    pub supported: bool,
}
