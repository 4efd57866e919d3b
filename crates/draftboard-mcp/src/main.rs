//! Draftboard MCP Server - Main entry point

use draftboard_mcp::McpServer;
use draftboard_research::ResearchConfig;
use draftboard_store::FileStore;
use std::env;
use tracing::Level;

fn main() {
    // Log to stderr; stdout carries the JSON-RPC stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    // Research config from an optional TOML file, else defaults plus the
    // OPENAI_API_KEY environment variable at call time
    let config = match env::var("DRAFTBOARD_RESEARCH_CONFIG") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(toml_str) => match ResearchConfig::from_toml(&toml_str) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Invalid research config at {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Failed to read research config at {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => ResearchConfig::default(),
    };

    let store = match FileStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open data directory: {}", e);
            std::process::exit(1);
        }
    };

    let mut server = match McpServer::new(store, config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create MCP server: {}", e);
            std::process::exit(1);
        }
    };

    // Run server (blocks until stdin closes)
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}
