use std::path::{Path, PathBuf};

use crate::domain::ToolSettings;
use crate::ports::VerificationScript;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: VerificationScript> {
    cwd: PathBuf,
    settings: ToolSettings,
    script: S,
}

impl<S: VerificationScript> AppContext<S> {
    /// Create a new application context rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>, settings: ToolSettings, script: S) -> Self {
        Self { cwd: cwd.into(), settings, script }
    }

    /// Directory relative arguments and the script resolve against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the resolved tool settings.
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Get a reference to the verification script runner.
    pub fn script(&self) -> &S {
        &self.script
    }
}
