pub mod constants;
pub mod error;
pub mod proposal_request;
pub mod settings;
pub mod validation;

pub use error::AppError;
pub use proposal_request::{
    FieldValidationError, FieldValidationErrors, ProposalField, VerifiedProposalRequest,
};
pub use settings::{BinarySettings, ScriptSettings, SettingsError, ToolSettings};
