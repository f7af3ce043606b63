//! `verify-proposal`: validate the six arguments, then hand off to the script.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, VerifiedProposalRequest};
use crate::ports::{ScriptInvocation, VerificationScript};

#[derive(Debug, Clone, Default)]
pub struct VerifyProposalOptions {
    /// Raw positional arguments as received from the command line.
    pub args: Vec<String>,
    /// Print the resolved invocation instead of running it.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyProposalOutcome {
    /// The script ran and exited successfully.
    Verified { invocation: ScriptInvocation },
    /// Arguments were valid; nothing was executed.
    DryRun { invocation: ScriptInvocation },
}

impl VerifyProposalOutcome {
    pub fn invocation(&self) -> &ScriptInvocation {
        match self {
            VerifyProposalOutcome::Verified { invocation }
            | VerifyProposalOutcome::DryRun { invocation } => invocation,
        }
    }
}

pub fn execute<S: VerificationScript>(
    ctx: &AppContext<S>,
    options: VerifyProposalOptions,
) -> Result<VerifyProposalOutcome, AppError> {
    let request = VerifiedProposalRequest::from_args(&options.args, ctx.cwd())?;
    let invocation = ScriptInvocation::verify_proposal(&request, ctx.settings(), ctx.cwd());

    if options.dry_run {
        return Ok(VerifyProposalOutcome::DryRun { invocation });
    }

    info!(proposal_id = request.proposal_id(), "dispatching proposal verification");
    let outcome = ctx.script().run(&invocation)?;
    if !outcome.success() {
        return Err(AppError::ScriptFailed { code: outcome.code });
    }

    Ok(VerifyProposalOutcome::Verified { invocation })
}
