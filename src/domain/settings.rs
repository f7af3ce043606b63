//! Runtime settings for the verification script invocation.

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::constants::{
    CONSUMER_BINARY, COSMWASM_BINARY, DEFAULT_SHELL, PROVIDER_BINARY, VERIFY_PROPOSAL_SCRIPT,
};

/// Settings capability error.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Tool settings, usually loaded from `consumer-chain-tool.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    #[serde(default)]
    pub binaries: BinarySettings,
    #[serde(default)]
    pub script: ScriptSettings,
}

/// Chain binaries handed to the verification script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinarySettings {
    #[serde(default = "default_consumer")]
    pub consumer: String,
    #[serde(default = "default_cosmwasm")]
    pub cosmwasm: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for BinarySettings {
    fn default() -> Self {
        Self {
            consumer: default_consumer(),
            cosmwasm: default_cosmwasm(),
            provider: default_provider(),
        }
    }
}

/// Shell and script used for `verify-proposal`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptSettings {
    #[serde(default = "default_shell")]
    pub shell: String,
    #[serde(default = "default_verify_proposal")]
    pub verify_proposal: String,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self { shell: default_shell(), verify_proposal: default_verify_proposal() }
    }
}

fn default_consumer() -> String {
    CONSUMER_BINARY.to_string()
}

fn default_cosmwasm() -> String {
    COSMWASM_BINARY.to_string()
}

fn default_provider() -> String {
    PROVIDER_BINARY.to_string()
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

fn default_verify_proposal() -> String {
    VERIFY_PROPOSAL_SCRIPT.to_string()
}

impl ToolSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("binaries.consumer", &self.binaries.consumer),
            ("binaries.cosmwasm", &self.binaries.cosmwasm),
            ("binaries.provider", &self.binaries.provider),
            ("script.shell", &self.script.shell),
            ("script.verify_proposal", &self.script.verify_proposal),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(SettingsError::Invalid(format!("'{key}' must not be empty")));
            }
        }

        Ok(())
    }
}

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<ToolSettings, AppError> {
    let settings: ToolSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
