//! Tool schema helpers.

use crate::ToolDefinition;

/// Build a definition from a name, description and JSON-schema properties.
///
/// `properties` is an object of parameter schemas; `required` lists the
/// mandatory parameter names.
pub fn tool_definition(
    name: &str,
    description: &str,
    properties: serde_json::Value,
    required: &[&str],
) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }),
    }
}

/// Convert a tool definition to the Gemini `functionDeclarations` format.
///
/// Parameterless tools omit `parameters`, which Gemini rejects when the
/// property map is empty.
pub fn to_gemini_tool(tool: &ToolDefinition) -> serde_json::Value {
    let has_params = tool.parameters["properties"]
        .as_object()
        .is_some_and(|p| !p.is_empty());
    if has_params {
        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters,
        })
    } else {
        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
        })
    }
}
