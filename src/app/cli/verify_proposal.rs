//! Verify-proposal command implementation.

use std::path::PathBuf;

use crate::app::api::{self, VerifyProposalOptions, VerifyProposalOutcome};
use crate::domain::AppError;

pub fn run_verify_proposal(
    args: Vec<String>,
    dry_run: bool,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let options = VerifyProposalOptions { args, dry_run };
    let outcome = api::verify_proposal(options, config.as_deref())?;

    match outcome {
        VerifyProposalOutcome::DryRun { invocation } => println!("{invocation}"),
        VerifyProposalOutcome::Verified { .. } => {
            println!("✅ Verification script completed");
        }
    }
    Ok(())
}
