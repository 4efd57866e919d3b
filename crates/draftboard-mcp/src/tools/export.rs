//! Project export tool

use draftboard_store::{export_project_json, export_project_markdown, FileStore};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::McpError;
use crate::tools::parse_project_id;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full JSON bundle of the project and its entities
    #[default]
    Json,
    /// Rendered Markdown document
    Markdown,
}

/// Parameters for exporting a project
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Project id
    pub project_id: String,
    /// Output format, `"json"` (default) or `"markdown"`
    #[serde(default)]
    pub format: ExportFormat,
}

/// Handle export_project tool invocation
pub fn handle_export_project(store: &FileStore, params: ExportParams) -> Result<Value, McpError> {
    let project_id = parse_project_id(&params.project_id)?;
    match params.format {
        ExportFormat::Json => Ok(json!({
            "format": "json",
            "export": export_project_json(store, project_id)?,
        })),
        ExportFormat::Markdown => Ok(json!({
            "format": "markdown",
            "content": export_project_markdown(store, project_id)?,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_both_formats() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let project = store.create_project("Acme", None, vec![]).unwrap();

        let json_export = handle_export_project(
            &store,
            ExportParams {
                project_id: project.id.to_string(),
                format: ExportFormat::Json,
            },
        )
        .unwrap();
        assert_eq!(json_export["export"]["project"]["name"], "Acme");

        let md_export = handle_export_project(
            &store,
            ExportParams {
                project_id: project.id.to_string(),
                format: ExportFormat::Markdown,
            },
        )
        .unwrap();
        assert!(md_export["content"].as_str().unwrap().starts_with("# Acme"));
    }

    #[test]
    fn test_format_defaults_to_json() {
        let params: ExportParams =
            serde_json::from_str(r#"{"project_id":"0192aaaa-0000-7000-8000-000000000000"}"#)
                .unwrap();
        assert_eq!(params.format, ExportFormat::Json);
    }
}
