use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::constants::CREATE_OUTPUT_SUBDIRECTORY;
use crate::domain::{ToolSettings, VerifiedProposalRequest};

/// A fully resolved call of the verification script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInvocation {
    /// Interpreter, e.g. `/bin/bash`.
    pub program: String,
    /// Script path passed as the interpreter's first argument.
    pub script: String,
    /// Positional parameters of the script, in order.
    pub params: Vec<String>,
    /// Directory the script runs in; relative paths resolve against it.
    pub working_dir: PathBuf,
}

impl ScriptInvocation {
    /// Build the ten-parameter `verify_proposal.sh` call for a validated request.
    pub fn verify_proposal(
        request: &VerifiedProposalRequest,
        settings: &ToolSettings,
        working_dir: &Path,
    ) -> Self {
        let params = vec![
            request.smart_contracts_location().to_string(),
            request.consumer_chain_id().to_string(),
            request.multisig_address().to_string(),
            settings.binaries.consumer.clone(),
            settings.binaries.cosmwasm.clone(),
            request.tool_output_location().to_string(),
            CREATE_OUTPUT_SUBDIRECTORY.to_string(),
            request.proposal_id().to_string(),
            request.provider_node_id().to_string(),
            settings.binaries.provider.clone(),
        ];

        Self {
            program: settings.script.shell.clone(),
            script: settings.script.verify_proposal.clone(),
            params,
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Arguments handed to `program`: the script followed by its parameters.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.script.as_str()).chain(self.params.iter().map(String::as_str))
    }
}

impl fmt::Display for ScriptInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// How the script process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ScriptOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the external verification script.
///
/// Implementations stream the script's output to the console and block until it exits.
pub trait VerificationScript {
    fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, AppError>;
}
