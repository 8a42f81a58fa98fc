//! JSON and YAML output
//!
//! Both formats pass every attribute the API returned straight through.

use crate::cli::OutputFormat;
use crate::error::{Result, TfcError};

/// Serialize a document as pretty JSON or YAML
pub fn render_structured(value: &serde_json::Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yml::to_string(value)?),
        other => Err(TfcError::Config(format!(
            "{} is not a structured output format",
            other
        ))),
    }
}
