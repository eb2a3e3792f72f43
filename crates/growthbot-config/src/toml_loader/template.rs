//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    format!("# GrowthBot Configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n{TEMPLATE_BODY}")
}

const TEMPLATE_BODY: &str = r##"# Only override what you want to change -- missing fields use defaults.
# The model API key is read from GEMINI_API_KEY (or GOOGLE_API_KEY).

[model]
# model = "gemini-2.0-flash-001"
# max_tokens = 4096      # 1-65536
# temperature = 0.7      # 0.0-2.0
# timeout_secs = 120     # 5-600

[conversation]
# summarization_threshold = 6   # 1-100, pending turns before compaction
# max_tool_rounds = 10          # 1-50, tool round-trips per user message
# system_prompt = "You are ..."

[catalog]
# path = "data/info.json"   # relative to the working directory

[logging]
# level = "info"         # debug, info, warn, error
"##;
