use std::io;

use thiserror::Error;

use crate::domain::proposal_request::FieldValidationErrors;
use crate::domain::settings::SettingsError;

/// Library-wide error type for consumer-chain-tool operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Wrong number of positional arguments.
    #[error("Unexpected number of arguments. Expected: {expected}, received: {received}.")]
    ArgumentCount { expected: usize, received: usize },

    /// One or more positional arguments failed validation.
    #[error(transparent)]
    InvalidArguments(#[from] FieldValidationErrors),

    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {0}")]
    SettingsFileMissing(String),

    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The verification script could not be started.
    #[error("Failed to execute '{program}': {source}")]
    ScriptLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The verification script ran and exited unsuccessfully.
    #[error("Verification script failed ({})", describe_exit(.code))]
    ScriptFailed { code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ScriptFailed { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }
}
