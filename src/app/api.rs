//! API Facade for the application.
//!
//! Glues together settings loading, context creation and command execution.

use std::path::Path;

use crate::adapters::{BashScriptRunner, load_settings};
use crate::app::AppContext;
use crate::app::commands::verify_proposal;

pub use crate::app::commands::verify_proposal::{VerifyProposalOptions, VerifyProposalOutcome};
pub use crate::domain::AppError;

/// Run `verify-proposal` from the current directory.
pub fn verify_proposal(
    options: VerifyProposalOptions,
    config: Option<&Path>,
) -> Result<VerifyProposalOutcome, AppError> {
    verify_proposal_at(&std::env::current_dir()?, options, config)
}

/// Run `verify-proposal` rooted at `cwd`.
///
/// The default settings file, relative argument paths and the script are all
/// resolved against `cwd`, and the script runs there.
pub fn verify_proposal_at(
    cwd: &Path,
    options: VerifyProposalOptions,
    config: Option<&Path>,
) -> Result<VerifyProposalOutcome, AppError> {
    let settings = load_settings(config, cwd)?;
    let ctx = AppContext::new(cwd, settings, BashScriptRunner::new());
    verify_proposal::execute(&ctx, options)
}
