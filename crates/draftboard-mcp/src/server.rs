//! MCP server implementation

use draftboard_research::{OpenAiProvider, ResearchConfig};
use draftboard_store::FileStore;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport.
pub struct McpServer {
    store: FileStore,
    config: ResearchConfig,
    use_full_model: bool,
    runtime: Runtime,
}

impl McpServer {
    /// Create a new MCP server over the given store and research config
    pub fn new(store: FileStore, config: ResearchConfig) -> Result<Self, McpError> {
        let runtime = Runtime::new()?;
        Ok(Self {
            store,
            config,
            use_full_model: false,
            runtime,
        })
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&mut self) -> Result<(), McpError> {
        info!("MCP server started");

        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin);
        let mut stdout = std::io::stdout();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            debug!("Received request: {}", line);

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    let error_response =
                        JsonRpcError::new(None, -32700, format!("Parse error: {}", e));
                    let error_value = serde_json::to_value(&error_response)?;
                    self.write_response(&mut stdout, &error_value)?;
                    continue;
                }
            };

            let response = self.handle_request(request);
            self.write_response(&mut stdout, &response)?;
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle a JSON-RPC request
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            _ => {
                let error = JsonRpcError::new(
                    id,
                    -32601,
                    format!("Method not found: {}", request.method),
                );
                serde_json::to_value(error).unwrap_or_default()
            }
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Value {
        let response = InitializeResponse {
            protocol_version: "0.1.0".to_string(),
            server_info: ServerInfo {
                name: "draftboard-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ToolsCapability { supported: true },
            },
        };

        respond(id, serde_json::to_value(response))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Value {
        let response = ToolListResponse {
            tools: tool_definitions(),
        };
        respond(id, serde_json::to_value(response))
    }

    /// Handle tools/call request
    fn handle_tool_call(&mut self, id: Option<Value>, params: Value) -> Value {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name.to_string(),
            None => {
                let error = JsonRpcError::new(id, -32602, "Missing tool name".to_string());
                return serde_json::to_value(error).unwrap_or_default();
            }
        };

        let tool_params = match params.get("arguments") {
            Some(args) => args.clone(),
            None => json!({}),
        };

        let result = self.dispatch_tool(&tool_name, tool_params);

        match result {
            Ok(value) => {
                let response = JsonRpcResponse::new(id, value);
                serde_json::to_value(response).unwrap_or_default()
            }
            Err(e) => {
                let error = JsonRpcError::new(id, e.error_code(), e.to_string());
                serde_json::to_value(error).unwrap_or_default()
            }
        }
    }

    fn dispatch_tool(&mut self, tool_name: &str, params: Value) -> Result<Value, McpError> {
        match tool_name {
            "create_project" => {
                let params: tools::CreateProjectParams = serde_json::from_value(params)?;
                to_value(tools::handle_create_project(&self.store, params)?)
            }
            "get_project" => {
                let params: tools::ProjectIdParams = serde_json::from_value(params)?;
                to_value(tools::handle_get_project(&self.store, params)?)
            }
            "update_project" => {
                let params: tools::UpdateProjectParams = serde_json::from_value(params)?;
                to_value(tools::handle_update_project(&self.store, params)?)
            }
            "delete_project" => {
                let params: tools::ProjectIdParams = serde_json::from_value(params)?;
                to_value(tools::handle_delete_project(&self.store, params)?)
            }
            "list_projects" => to_value(tools::handle_list_projects(&self.store)?),
            "create_entity" => {
                let params: tools::CreateEntityParams = serde_json::from_value(params)?;
                to_value(tools::handle_create_entity(&self.store, params)?)
            }
            "get_entity" => {
                let params: tools::EntityIdParams = serde_json::from_value(params)?;
                to_value(tools::handle_get_entity(&self.store, params)?)
            }
            "update_entity" => {
                let params: tools::UpdateEntityParams = serde_json::from_value(params)?;
                to_value(tools::handle_update_entity(&self.store, params)?)
            }
            "delete_entity" => {
                let params: tools::EntityIdParams = serde_json::from_value(params)?;
                to_value(tools::handle_delete_entity(&self.store, params)?)
            }
            "list_entities" => {
                let params: tools::ListEntitiesParams = serde_json::from_value(params)?;
                to_value(tools::handle_list_project_entities(&self.store, params)?)
            }
            "link_entities" => {
                let params: tools::LinkParams = serde_json::from_value(params)?;
                to_value(tools::handle_link_entities(&self.store, params)?)
            }
            "unlink_entities" => {
                let params: tools::UnlinkParams = serde_json::from_value(params)?;
                to_value(tools::handle_unlink_entities(&self.store, params)?)
            }
            "get_linked_entities" => {
                let params: tools::EntityIdParams = serde_json::from_value(params)?;
                to_value(tools::handle_get_linked_entities(&self.store, params)?)
            }
            "export_project" => {
                let params: tools::ExportParams = serde_json::from_value(params)?;
                tools::handle_export_project(&self.store, params)
            }
            "configure_openai" => {
                let params: tools::ConfigureParams = serde_json::from_value(params)?;
                to_value(tools::handle_configure(
                    &mut self.config,
                    &mut self.use_full_model,
                    params,
                ))
            }
            "check_openai_config" => to_value(tools::handle_check_config(
                &self.config,
                self.use_full_model,
            )),
            "deep_research" => {
                let params: tools::DeepResearchParams = serde_json::from_value(params)?;
                let provider =
                    OpenAiProvider::with_model(self.config.clone(), self.use_full_model)?;
                let result = self
                    .runtime
                    .block_on(tools::handle_deep_research(&provider, params))?;
                to_value(result)
            }
            "populate_framework" => {
                let params: tools::PopulateParams = serde_json::from_value(params)?;
                tools::handle_populate_framework(&self.store, params)
            }
            "research_and_create" => {
                let params: tools::ResearchAndCreateParams = serde_json::from_value(params)?;
                let provider =
                    OpenAiProvider::with_model(self.config.clone(), self.use_full_model)?;
                self.runtime.block_on(tools::handle_research_and_create(
                    &provider,
                    &self.store,
                    params,
                ))
            }
            _ => Err(McpError::ToolNotFound(tool_name.to_string())),
        }
    }

    /// Write response to stdout
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }
}

fn to_value<T: serde::Serialize>(value: T) -> Result<Value, McpError> {
    Ok(serde_json::to_value(value)?)
}

fn respond(id: Option<Value>, result: Result<Value, serde_json::Error>) -> Value {
    match result {
        Ok(value) => {
            serde_json::to_value(JsonRpcResponse::new(id, value)).unwrap_or_default()
        }
        Err(e) => serde_json::to_value(JsonRpcError::new(id, -32603, e.to_string()))
            .unwrap_or_default(),
    }
}

// Tool definitions for the tools/list response

const FRAMEWORK_TAGS: [&str; 7] = [
    "market-sizing",
    "competitive-analysis",
    "user-persona",
    "swot-analysis",
    "business-model-canvas",
    "lean-canvas",
    "value-proposition-canvas",
];

fn tool_definitions() -> Vec<ToolDefinition> {
    let context_properties = json!({
        "business_description": {"type": "string", "description": "What the business does"},
        "industry": {"type": "string", "description": "Industry or vertical"},
        "geography": {"type": "string", "description": "Geographic focus"},
        "target_customers": {"type": "string", "description": "Target customer description"},
        "product_or_service": {"type": "string", "description": "The product or service offered"},
        "competitors": {"type": "array", "items": {"type": "string"}, "description": "Known competitors"}
    });

    vec![
        ToolDefinition {
            name: "create_project".to_string(),
            description: "Create a new business design project".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Project name"},
                    "description": {"type": "string", "description": "Project description"},
                    "tags": {"type": "array", "items": {"type": "string"}, "description": "Free-form tags"}
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "get_project".to_string(),
            description: "Fetch a project by id".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Project id (UUID)"}
                },
                "required": ["project_id"]
            }),
        },
        ToolDefinition {
            name: "update_project".to_string(),
            description: "Update a project's name, description, or tags".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Project id (UUID)"},
                    "name": {"type": "string", "description": "New name"},
                    "description": {"type": "string", "description": "New description"},
                    "tags": {"type": "array", "items": {"type": "string"}, "description": "Replacement tags"}
                },
                "required": ["project_id"]
            }),
        },
        ToolDefinition {
            name: "delete_project".to_string(),
            description: "Delete a project and all of its entities".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Project id (UUID)"}
                },
                "required": ["project_id"]
            }),
        },
        ToolDefinition {
            name: "list_projects".to_string(),
            description: "List all projects, most recently updated first".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        ToolDefinition {
            name: "create_entity".to_string(),
            description: "Create a framework entity (market sizing, SWOT, persona, canvas, ...) in a project"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Owning project id"},
                    "name": {"type": "string", "description": "Entity name"},
                    "description": {"type": "string", "description": "Entity description"},
                    "type": {"type": "string", "enum": FRAMEWORK_TAGS, "description": "Framework type"}
                },
                "required": ["project_id", "name", "type"],
                "additionalProperties": true
            }),
        },
        ToolDefinition {
            name: "get_entity".to_string(),
            description: "Fetch an entity by id".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entity_id": {"type": "string", "description": "Entity id (UUID)"}
                },
                "required": ["entity_id"]
            }),
        },
        ToolDefinition {
            name: "update_entity".to_string(),
            description: "Update an entity's name, description, or framework payload".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entity_id": {"type": "string", "description": "Entity id (UUID)"},
                    "name": {"type": "string", "description": "New name"},
                    "description": {"type": "string", "description": "New description"},
                    "type": {"type": "string", "enum": FRAMEWORK_TAGS, "description": "Framework type (must match the entity)"}
                },
                "required": ["entity_id"],
                "additionalProperties": true
            }),
        },
        ToolDefinition {
            name: "delete_entity".to_string(),
            description: "Delete an entity".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entity_id": {"type": "string", "description": "Entity id (UUID)"}
                },
                "required": ["entity_id"]
            }),
        },
        ToolDefinition {
            name: "list_entities".to_string(),
            description: "List a project's entities, optionally filtered by framework type".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Project id (UUID)"},
                    "type": {"type": "string", "enum": FRAMEWORK_TAGS, "description": "Filter by framework type"}
                },
                "required": ["project_id"]
            }),
        },
        ToolDefinition {
            name: "link_entities".to_string(),
            description: "Create a directed link between two entities".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "source_id": {"type": "string", "description": "Source entity id"},
                    "target_id": {"type": "string", "description": "Target entity id"},
                    "relationship": {"type": "string", "description": "Relationship label, e.g. 'informs'"}
                },
                "required": ["source_id", "target_id"]
            }),
        },
        ToolDefinition {
            name: "unlink_entities".to_string(),
            description: "Remove a link between two entities".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "source_id": {"type": "string", "description": "Source entity id"},
                    "target_id": {"type": "string", "description": "Target entity id"}
                },
                "required": ["source_id", "target_id"]
            }),
        },
        ToolDefinition {
            name: "get_linked_entities".to_string(),
            description: "List the entities an entity links to".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entity_id": {"type": "string", "description": "Entity id (UUID)"}
                },
                "required": ["entity_id"]
            }),
        },
        ToolDefinition {
            name: "export_project".to_string(),
            description: "Export a project and its entities as JSON or Markdown".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Project id (UUID)"},
                    "format": {"type": "string", "enum": ["json", "markdown"], "default": "json", "description": "Export format"}
                },
                "required": ["project_id"]
            }),
        },
        ToolDefinition {
            name: "configure_openai".to_string(),
            description: "Set the research API key and model preference".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "api_key": {"type": "string", "description": "API key for the research provider"},
                    "use_full_model": {"type": "boolean", "description": "Use the full (more expensive) research model"}
                }
            }),
        },
        ToolDefinition {
            name: "check_openai_config".to_string(),
            description: "Report research configuration status without exposing the key".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        ToolDefinition {
            name: "deep_research".to_string(),
            description: "Run web-backed deep research for one framework and return the raw findings"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": merged_properties(
                    json!({
                        "type": {"type": "string", "enum": FRAMEWORK_TAGS, "description": "Framework to research"}
                    }),
                    &context_properties,
                ),
                "required": ["type", "business_description"]
            }),
        },
        ToolDefinition {
            name: "populate_framework".to_string(),
            description: "Parse research findings and persist them as a framework entity with confidence scoring"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_id": {"type": "string", "description": "Owning project id"},
                    "type": {"type": "string", "enum": FRAMEWORK_TAGS, "description": "Framework type"},
                    "name": {"type": "string", "description": "Name for the created entity"},
                    "description": {"type": "string", "description": "Entity description"},
                    "content": {"type": "string", "description": "Research response body to parse"},
                    "citations": {
                        "type": "array",
                        "description": "Citations with optional character offsets",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": {"type": "string"},
                                "url": {"type": "string"},
                                "startIndex": {"type": "integer"},
                                "endIndex": {"type": "integer"}
                            },
                            "required": ["title", "url"]
                        }
                    },
                    "research_model": {"type": "string", "description": "Model that produced the content"}
                },
                "required": ["project_id", "type", "name", "content"]
            }),
        },
        ToolDefinition {
            name: "research_and_create".to_string(),
            description: "Deep research a framework and persist the parsed result in one step".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": merged_properties(
                    json!({
                        "project_id": {"type": "string", "description": "Owning project id"},
                        "type": {"type": "string", "enum": FRAMEWORK_TAGS, "description": "Framework to research"},
                        "name": {"type": "string", "description": "Name for the created entity"},
                        "description": {"type": "string", "description": "Entity description"}
                    }),
                    &context_properties,
                ),
                "required": ["project_id", "type", "name", "business_description"]
            }),
        },
    ]
}

fn merged_properties(mut base: Value, extra: &Value) -> Value {
    if let (Some(base_map), Some(extra_map)) = (base.as_object_mut(), extra.as_object()) {
        for (key, schema) in extra_map {
            base_map.insert(key.clone(), schema.clone());
        }
    }
    base
}
