//! CLI command implementations

pub mod defaults;
pub mod generate;
pub mod json_output;
pub mod section;
pub mod validate;

use phantom_backend_volume::GenerateError;
use std::process::ExitCode;

use json_output::{error_codes, JsonError};

/// A command failure with its stable code and process exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub code: &'static str,
    pub message: String,
    pub exit: u8,
}

impl Failure {
    pub fn config(err: &anyhow::Error) -> Self {
        Self {
            code: error_codes::CONFIG_LOAD,
            message: format!("{:#}", err),
            exit: 1,
        }
    }

    pub fn params(message: impl Into<String>) -> Self {
        Self {
            code: error_codes::INVALID_PARAMS,
            message: message.into(),
            exit: 1,
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self {
            code: error_codes::EXPORT_ERROR,
            message: message.into(),
            exit: 2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit)
    }

    pub fn to_json(&self) -> JsonError {
        JsonError::new(self.code, self.message.clone())
    }
}

impl From<GenerateError> for Failure {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::InvalidParameter(_) => Failure::params(err.to_string()),
            GenerateError::Resampling(_) => Failure {
                code: error_codes::GENERATION_ERROR,
                message: err.to_string(),
                exit: 2,
            },
        }
    }
}
