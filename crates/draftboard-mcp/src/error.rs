//! Error types for MCP server operations.

use thiserror::Error;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Invalid request format or parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] draftboard_store::StoreError),

    /// Research call error
    #[error("Research error: {0}")]
    Research(#[from] draftboard_research::ResearchError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32602,
            McpError::ToolNotFound(_) => -32601,
            McpError::Store(_) => -32000,
            McpError::Research(_) => -32000,
            McpError::JsonError(_) => -32700,
            McpError::IoError(_) => -32000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(McpError::ToolNotFound("x".to_string()).error_code(), -32601);
        assert_eq!(McpError::InvalidRequest("x".to_string()).error_code(), -32602);
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(McpError::JsonError(json_err).error_code(), -32700);
    }
}
