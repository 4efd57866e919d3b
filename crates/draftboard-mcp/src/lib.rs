//! Draftboard MCP Server
//!
//! Model Context Protocol server exposing business design frameworks to AI
//! clients (Claude Desktop, Cline, etc.).
//!
//! Provides tools for:
//! - Project CRUD (`create_project`, `get_project`, `update_project`,
//!   `delete_project`, `list_projects`)
//! - Framework entity CRUD (`create_entity`, `get_entity`, `update_entity`,
//!   `delete_entity`, `list_entities`)
//! - Entity linking (`link_entities`, `unlink_entities`,
//!   `get_linked_entities`)
//! - Export (`export_project` as JSON or Markdown)
//! - Deep research (`configure_openai`, `check_openai_config`,
//!   `deep_research`, `populate_framework`, `research_and_create`)
//!
//! # Example
//!
//! ```no_run
//! use draftboard_mcp::McpServer;
//! use draftboard_research::ResearchConfig;
//! use draftboard_store::FileStore;
//!
//! let store = FileStore::open_default().unwrap();
//! let mut server = McpServer::new(store, ResearchConfig::default()).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
pub mod protocol;
mod server;
mod tools;

pub use error::McpError;
pub use server::McpServer;
