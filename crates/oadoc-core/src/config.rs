use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Recursion budget shared by the flattener and the example synthesizer.
/// Schema graphs deeper than this (usually self-referential) degrade to
/// opaque leaves and `null` examples instead of exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Ceiling on fetched document size: 5 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Rendering options loaded from `.oadoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Largest remote document the fetch layer will accept, in bytes.
    pub max_document_bytes: u64,
    /// Recursion budget for schema flattening and example synthesis.
    pub max_depth: usize,
    /// Fabricate example values for schemas that carry none.
    pub synthesize_examples: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
            synthesize_examples: true,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oadoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<RenderConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: RenderConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# oadoc configuration
max_document_bytes: 5242880   # reject fetched documents larger than this
max_depth: 32                 # recursion budget for nested/self-referential schemas
synthesize_examples: true     # fabricate example values when the document has none
"#
}
