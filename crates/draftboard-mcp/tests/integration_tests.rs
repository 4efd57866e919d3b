//! Integration tests for the MCP server
//!
//! Drive `handle_request` directly with JSON-RPC values over a
//! tempdir-backed store, the way a stdio client would after line framing.

use draftboard_mcp::protocol::JsonRpcRequest;
use draftboard_mcp::McpServer;
use draftboard_research::ResearchConfig;
use draftboard_store::FileStore;
use serde_json::{json, Value};
use tempfile::TempDir;

fn server() -> (TempDir, McpServer) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let server = McpServer::new(store, ResearchConfig::default()).unwrap();
    (dir, server)
}

fn rpc(server: &mut McpServer, method: &str, params: Value) -> Value {
    let request: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    }))
    .unwrap();
    server.handle_request(request)
}

fn call_tool(server: &mut McpServer, name: &str, arguments: Value) -> Value {
    rpc(
        server,
        "tools/call",
        json!({"name": name, "arguments": arguments}),
    )
}

#[test]
fn test_initialize() {
    let (_dir, mut server) = server();
    let response = rpc(&mut server, "initialize", json!({}));
    assert_eq!(response["result"]["protocolVersion"], "0.1.0");
    assert_eq!(response["result"]["serverInfo"]["name"], "draftboard-mcp");
    assert_eq!(response["result"]["capabilities"]["tools"]["supported"], true);
}

#[test]
fn test_tools_list_names() {
    let (_dir, mut server) = server();
    let response = rpc(&mut server, "tools/list", json!({}));
    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    for expected in [
        "create_project",
        "get_project",
        "update_project",
        "delete_project",
        "list_projects",
        "create_entity",
        "get_entity",
        "update_entity",
        "delete_entity",
        "list_entities",
        "link_entities",
        "unlink_entities",
        "get_linked_entities",
        "export_project",
        "configure_openai",
        "check_openai_config",
        "deep_research",
        "populate_framework",
        "research_and_create",
    ] {
        assert!(names.contains(&expected), "missing tool {expected}");
    }
    assert_eq!(names.len(), 19);
}

#[test]
fn test_unknown_method_rejected() {
    let (_dir, mut server) = server();
    let response = rpc(&mut server, "resources/list", json!({}));
    assert_eq!(response["error"]["code"], -32601);
}

#[test]
fn test_unknown_tool_rejected() {
    let (_dir, mut server) = server();
    let response = call_tool(&mut server, "no_such_tool", json!({}));
    assert_eq!(response["error"]["code"], -32601);
}

#[test]
fn test_missing_tool_name_rejected() {
    let (_dir, mut server) = server();
    let response = rpc(&mut server, "tools/call", json!({"arguments": {}}));
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn test_malformed_params_rejected() {
    let (_dir, mut server) = server();
    // create_project requires a name
    let response = call_tool(&mut server, "create_project", json!({"tags": []}));
    assert_eq!(response["error"]["code"], -32700);
}

#[test]
fn test_project_lifecycle() {
    let (_dir, mut server) = server();

    let created = call_tool(
        &mut server,
        "create_project",
        json!({"name": "Acme Launch", "description": "Go-to-market work"}),
    );
    let project_id = created["result"]["id"].as_str().unwrap().to_string();

    let fetched = call_tool(&mut server, "get_project", json!({"project_id": project_id}));
    assert_eq!(fetched["result"]["name"], "Acme Launch");

    let updated = call_tool(
        &mut server,
        "update_project",
        json!({"project_id": project_id, "name": "Acme Relaunch"}),
    );
    assert_eq!(updated["result"]["name"], "Acme Relaunch");
    assert_eq!(updated["result"]["description"], "Go-to-market work");

    let listed = call_tool(&mut server, "list_projects", json!({}));
    assert_eq!(listed["result"].as_array().unwrap().len(), 1);

    let deleted = call_tool(
        &mut server,
        "delete_project",
        json!({"project_id": project_id}),
    );
    assert_eq!(deleted["result"]["project_id"], project_id);

    let listed = call_tool(&mut server, "list_projects", json!({}));
    assert!(listed["result"].as_array().unwrap().is_empty());
}

#[test]
fn test_entity_lifecycle_with_type_filter() {
    let (_dir, mut server) = server();
    let created = call_tool(&mut server, "create_project", json!({"name": "P"}));
    let project_id = created["result"]["id"].as_str().unwrap().to_string();

    let swot = call_tool(
        &mut server,
        "create_entity",
        json!({
            "project_id": project_id,
            "name": "Initial SWOT",
            "type": "swot-analysis",
            "strengths": [{"item": "Strong team"}]
        }),
    );
    let entity_id = swot["result"]["id"].as_str().unwrap().to_string();
    assert_eq!(swot["result"]["type"], "swot-analysis");

    call_tool(
        &mut server,
        "create_entity",
        json!({
            "project_id": project_id,
            "name": "Primary persona",
            "type": "user-persona"
        }),
    );

    let all = call_tool(
        &mut server,
        "list_entities",
        json!({"project_id": project_id}),
    );
    assert_eq!(all["result"].as_array().unwrap().len(), 2);

    let swots = call_tool(
        &mut server,
        "list_entities",
        json!({"project_id": project_id, "type": "swot-analysis"}),
    );
    assert_eq!(swots["result"].as_array().unwrap().len(), 1);

    let updated = call_tool(
        &mut server,
        "update_entity",
        json!({"entity_id": entity_id, "name": "Revised SWOT"}),
    );
    assert_eq!(updated["result"]["name"], "Revised SWOT");
    assert_eq!(updated["result"]["strengths"][0]["item"], "Strong team");

    let deleted = call_tool(&mut server, "delete_entity", json!({"entity_id": entity_id}));
    assert_eq!(deleted["result"]["entity_id"], entity_id);

    let fetched = call_tool(&mut server, "get_entity", json!({"entity_id": entity_id}));
    assert_eq!(fetched["error"]["code"], -32000);
}

#[test]
fn test_linking_round_trip() {
    let (_dir, mut server) = server();
    let created = call_tool(&mut server, "create_project", json!({"name": "P"}));
    let project_id = created["result"]["id"].as_str().unwrap().to_string();

    let make = |server: &mut McpServer, name: &str| {
        let response = call_tool(
            server,
            "create_entity",
            json!({"project_id": project_id, "name": name, "type": "swot-analysis"}),
        );
        response["result"]["id"].as_str().unwrap().to_string()
    };
    let a = make(&mut server, "A");
    let b = make(&mut server, "B");

    let linked = call_tool(
        &mut server,
        "link_entities",
        json!({"source_id": a, "target_id": b, "relationship": "informs"}),
    );
    assert_eq!(linked["result"]["linked_count"], 1);

    let targets = call_tool(&mut server, "get_linked_entities", json!({"entity_id": a}));
    assert_eq!(targets["result"][0]["name"], "B");

    let unlinked = call_tool(
        &mut server,
        "unlink_entities",
        json!({"source_id": a, "target_id": b}),
    );
    assert_eq!(unlinked["result"]["linked_count"], 0);
}

#[test]
fn test_export_project_both_formats() {
    let (_dir, mut server) = server();
    let created = call_tool(&mut server, "create_project", json!({"name": "Exported"}));
    let project_id = created["result"]["id"].as_str().unwrap().to_string();
    call_tool(
        &mut server,
        "create_entity",
        json!({
            "project_id": project_id,
            "name": "SWOT",
            "type": "swot-analysis",
            "strengths": [{"item": "Brand"}]
        }),
    );

    let exported = call_tool(
        &mut server,
        "export_project",
        json!({"project_id": project_id}),
    );
    assert_eq!(exported["result"]["format"], "json");
    assert_eq!(exported["result"]["export"]["project"]["name"], "Exported");
    assert_eq!(
        exported["result"]["export"]["entities"][0]["type"],
        "swot-analysis"
    );

    let markdown = call_tool(
        &mut server,
        "export_project",
        json!({"project_id": project_id, "format": "markdown"}),
    );
    assert_eq!(markdown["result"]["format"], "markdown");
    let content = markdown["result"]["content"].as_str().unwrap();
    assert!(content.contains("# Exported"));
    assert!(content.contains("Brand"));
}

#[test]
fn test_populate_framework_via_rpc() {
    let (_dir, mut server) = server();
    let created = call_tool(&mut server, "create_project", json!({"name": "P"}));
    let project_id = created["result"]["id"].as_str().unwrap().to_string();

    let content = "\
## TAM
The total addressable market is $4.5 billion annually [1].

## SAM
Roughly $900 million.

## SOM
We can capture $45 million.

## Growth Rate
The market grows at 12% CAGR.

Sources: [1] https://example.com/report
";
    let response = call_tool(
        &mut server,
        "populate_framework",
        json!({
            "project_id": project_id,
            "type": "market-sizing",
            "name": "Market sizing",
            "content": content,
            "citations": [{"title": "Industry Report", "url": "https://example.com/report"}]
        }),
    );
    assert_eq!(response["result"]["confidence"], 100);
    assert_eq!(response["result"]["entity"]["tam"]["value"], 4_500_000_000.0);
    assert_eq!(response["result"]["entity"]["growthRate"]["rate"], 12.0);
    assert_eq!(
        response["result"]["entity"]["researchMetadata"]["confidence"],
        100
    );
}

#[test]
fn test_populate_citation_offsets_map_to_fields() {
    let (_dir, mut server) = server();
    let created = call_tool(&mut server, "create_project", json!({"name": "P"}));
    let project_id = created["result"]["id"].as_str().unwrap().to_string();

    let content = "## TAM\nThe market is $2 billion.\n\n## SAM\nAbout $400 million.\n";
    let start = content.find("$2").unwrap();
    let response = call_tool(
        &mut server,
        "populate_framework",
        json!({
            "project_id": project_id,
            "type": "market-sizing",
            "name": "Market",
            "content": content,
            "citations": [{
                "title": "Report",
                "url": "https://t.example",
                "startIndex": start,
                "endIndex": start + 10
            }]
        }),
    );
    let citation = &response["result"]["entity"]["researchMetadata"]["citations"][0];
    assert_eq!(citation["relevantFields"][0], "tam");
}

#[test]
fn test_configure_and_check_config() {
    let (_dir, mut server) = server();

    let configured = call_tool(
        &mut server,
        "configure_openai",
        json!({"api_key": "sk-test", "use_full_model": true}),
    );
    assert_eq!(configured["result"]["configured"], true);
    assert_eq!(configured["result"]["use_full_model"], true);
    // the key itself is never echoed back
    assert!(configured["result"].get("api_key").is_none());

    let status = call_tool(&mut server, "check_openai_config", json!({}));
    assert_eq!(status["result"]["configured"], true);
    assert_eq!(status["result"]["use_full_model"], true);
}
