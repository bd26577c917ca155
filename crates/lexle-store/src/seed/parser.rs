//! Definition parser
//!
//! Definition files are JSON unless their extension says YAML.

use crate::errors::{definition_parse, io_error, Result};
use crate::seed::format::CategoryDefinition;
use std::fs;
use std::path::Path;

/// Encoding of a definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Pick the format from a file extension (`.yaml` / `.yml` → YAML, anything else → JSON)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DefinitionFormat::Yaml
            }
            _ => DefinitionFormat::Json,
        }
    }
}

/// Read and parse a definition file
pub fn parse_definition_file(path: &Path) -> Result<CategoryDefinition> {
    let bytes = fs::read(path).map_err(|e| io_error("read_definition", e))?;
    parse_definition_bytes(&bytes, DefinitionFormat::from_path(path))
}

/// Parse definition bytes in the given format
pub fn parse_definition_bytes(bytes: &[u8], format: DefinitionFormat) -> Result<CategoryDefinition> {
    match format {
        DefinitionFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| definition_parse(&format!("JSON parse error: {}", e))),
        DefinitionFormat::Yaml => serde_yaml::from_slice(bytes)
            .map_err(|e| definition_parse(&format!("YAML parse error: {}", e))),
    }
}
