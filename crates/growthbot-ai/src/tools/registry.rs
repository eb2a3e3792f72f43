//! Name-to-handler lookup for declared tools.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, warn};

use crate::{ToolCall, ToolDefinition, ToolError};

/// Executes one tool with the model-provided arguments.
pub type ToolHandler = Box<dyn Fn(&serde_json::Value) -> Result<String, ToolError> + Send + Sync>;

/// A fixed set of tools, built once through [`ToolRegistryBuilder`].
pub struct ToolRegistry {
    schemas: Vec<ToolDefinition>,
    handlers: HashMap<String, ToolHandler>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Exact-match lookup by tool name.
    pub fn resolve(&self, name: &str) -> Result<&ToolHandler, ToolError> {
        self.handlers
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Schemas in registration order, as advertised to the model.
    pub fn list_schemas(&self) -> &[ToolDefinition] {
        &self.schemas
    }

    /// Resolve and run the handler for `call`. A panicking handler is
    /// reported as [`ToolError::Execution`] instead of unwinding the turn.
    pub fn dispatch(&self, call: &ToolCall) -> Result<String, ToolError> {
        let handler = self.resolve(&call.name)?;
        debug!(tool = %call.name, call_id = %call.id, "Executing tool");
        panic::catch_unwind(AssertUnwindSafe(|| handler(&call.arguments))).unwrap_or_else(
            |payload| {
                let message = panic_message(payload.as_ref());
                error!(tool = %call.name, "tool handler panicked: {message}");
                Err(ToolError::Execution {
                    tool: call.name.clone(),
                    message,
                })
            },
        )
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}

#[derive(Default)]
pub struct ToolRegistryBuilder {
    schemas: Vec<ToolDefinition>,
    handlers: HashMap<String, ToolHandler>,
}

impl ToolRegistryBuilder {
    /// Add a tool. A second tool with an already registered name is ignored.
    pub fn register(mut self, definition: ToolDefinition, handler: ToolHandler) -> Self {
        if self.handlers.contains_key(&definition.name) {
            warn!(tool = %definition.name, "duplicate tool registration ignored");
            return self;
        }
        self.handlers.insert(definition.name.clone(), handler);
        self.schemas.push(definition);
        self
    }

    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            schemas: self.schemas,
            handlers: self.handlers,
        }
    }
}
