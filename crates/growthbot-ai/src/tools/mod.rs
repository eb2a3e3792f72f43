//! Tools the assistant can call.
//!
//! The registry is assembled once at startup and shared read-only across
//! sessions. The catalog tools answer questions from the service catalog
//! and simulate lead capture; none of them persist or send anything.

mod catalog_tools;
mod definitions;
mod registry;


pub use catalog_tools::{catalog_registry, CatalogTool};
pub use definitions::{to_gemini_tool, tool_definition};
pub use registry::{ToolHandler, ToolRegistry, ToolRegistryBuilder};
