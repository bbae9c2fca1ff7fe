//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `generate`, `validate`, and `section`.

use phantom_backend_volume::{GenerationReport, TiltGeometry};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG_LOAD: &str = "CLI_001";
    /// Parameters failed validation
    pub const INVALID_PARAMS: &str = "CLI_002";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_003";
    /// Slice export error
    pub const EXPORT_ERROR: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Output of the `generate` command.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<GenerationReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ExportedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    pub duration_ms: u64,
}

/// One exported slice image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportedFile {
    /// Index along the exported axis.
    pub index: u32,
    /// Written file path.
    pub path: String,
}

/// Output of the `validate` command.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<TiltGeometry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_skipped() {
        let output = ValidateOutput {
            valid: false,
            params_hash: None,
            geometry: None,
            errors: vec![JsonError::new(error_codes::INVALID_PARAMS, "depth: bad")],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json.get("geometry").is_none());
        assert_eq!(json["errors"][0]["code"], "CLI_002");
    }
}
