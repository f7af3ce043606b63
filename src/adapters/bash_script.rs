use std::process::Command;

use tracing::{info, warn};

use crate::domain::AppError;
use crate::ports::{ScriptInvocation, ScriptOutcome, VerificationScript};

/// Runs the verification script as a child process with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct BashScriptRunner;

impl BashScriptRunner {
    pub fn new() -> Self {
        Self
    }
}

impl VerificationScript for BashScriptRunner {
    fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, AppError> {
        info!(
            command = %invocation,
            working_dir = %invocation.working_dir.display(),
            "running verification script"
        );

        let status = Command::new(&invocation.program)
            .args(invocation.args())
            .current_dir(&invocation.working_dir)
            .status()
            .map_err(|source| AppError::ScriptLaunch {
                program: invocation.program.clone(),
                source,
            })?;

        let outcome = ScriptOutcome { code: status.code() };
        if !outcome.success() {
            warn!(code = ?outcome.code, "verification script exited unsuccessfully");
        }
        Ok(outcome)
    }
}
