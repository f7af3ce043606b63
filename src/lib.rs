//! consumer-chain-tool: validate `verify-proposal` inputs and dispatch the
//! genesis-hash verification script for a consumer chain proposal.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{VerifyProposalOptions, VerifyProposalOutcome, verify_proposal, verify_proposal_at};
pub use domain::{AppError, ToolSettings, VerifiedProposalRequest};
pub use ports::{ScriptInvocation, ScriptOutcome, VerificationScript};
