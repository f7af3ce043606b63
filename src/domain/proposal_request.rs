//! Validated `verify-proposal` arguments.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::domain::constants::{
    CONSUMER_CHAIN_ID, MULTISIG_ADDRESS, PROPOSAL_ID, PROVIDER_NODE_ID, SMART_CONTRACTS_LOCATION,
    TOOL_OUTPUT_LOCATION, VERIFY_PROPOSAL_CMD_PARAMS_COUNT,
};
use crate::domain::validation::{
    is_valid_input_path, is_valid_output_path, is_valid_proposal_id, is_valid_string,
};
use crate::domain::AppError;

/// Positional fields of `verify-proposal`, in command-line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalField {
    SmartContractsLocation,
    ConsumerChainId,
    MultisigAddress,
    ToolOutputLocation,
    ProposalId,
    ProviderNodeId,
}

impl ProposalField {
    pub const ALL: [ProposalField; VERIFY_PROPOSAL_CMD_PARAMS_COUNT] = [
        ProposalField::SmartContractsLocation,
        ProposalField::ConsumerChainId,
        ProposalField::MultisigAddress,
        ProposalField::ToolOutputLocation,
        ProposalField::ProposalId,
        ProposalField::ProviderNodeId,
    ];

    /// Argument label used in usage and help text.
    pub fn label(self) -> &'static str {
        match self {
            ProposalField::SmartContractsLocation => SMART_CONTRACTS_LOCATION,
            ProposalField::ConsumerChainId => CONSUMER_CHAIN_ID,
            ProposalField::MultisigAddress => MULTISIG_ADDRESS,
            ProposalField::ToolOutputLocation => TOOL_OUTPUT_LOCATION,
            ProposalField::ProposalId => PROPOSAL_ID,
            ProposalField::ProviderNodeId => PROVIDER_NODE_ID,
        }
    }

    fn is_valid(self, base: &Path, value: &str) -> bool {
        match self {
            ProposalField::SmartContractsLocation => is_valid_input_path(base, value),
            ProposalField::ToolOutputLocation => is_valid_output_path(base, value),
            ProposalField::ProposalId => is_valid_proposal_id(value),
            // Node ids are passed through as-is; the script's chain binary parses them.
            ProposalField::ConsumerChainId
            | ProposalField::MultisigAddress
            | ProposalField::ProviderNodeId => is_valid_string(value),
        }
    }
}

impl fmt::Display for ProposalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rejected argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: ProposalField,
    pub value: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.value;
        match self.field {
            ProposalField::SmartContractsLocation => {
                write!(f, "Provided input path '{value}' is not a valid directory.")
            }
            ProposalField::ConsumerChainId => write!(f, "Provided chain-id '{value}' is not valid."),
            ProposalField::MultisigAddress => {
                write!(f, "Provided multisig address '{value}' is not valid.")
            }
            ProposalField::ToolOutputLocation => {
                write!(f, "Provided output path '{value}' is not a valid directory.")
            }
            ProposalField::ProposalId => write!(f, "Provided proposal id '{value}' is not valid."),
            ProposalField::ProviderNodeId => {
                write!(f, "Provided provider node id '{value}' is not valid.")
            }
        }
    }
}

/// Every rejected argument of one invocation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationErrors(Vec<FieldValidationError>);

impl FieldValidationErrors {
    pub fn errors(&self) -> &[FieldValidationError] {
        &self.0
    }

    pub fn fields(&self) -> Vec<ProposalField> {
        self.0.iter().map(|error| error.field).collect()
    }
}

impl fmt::Display for FieldValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("\n"))
    }
}

impl std::error::Error for FieldValidationErrors {}

/// Arguments of `verify-proposal` after every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedProposalRequest {
    smart_contracts_location: String,
    consumer_chain_id: String,
    multisig_address: String,
    tool_output_location: String,
    proposal_id: String,
    provider_node_id: String,
}

impl VerifiedProposalRequest {
    /// Validate raw positional arguments.
    ///
    /// The argument count is checked first. After that all six fields are
    /// checked and every failure is reported together. Relative paths are
    /// checked against `base`; the stored values keep their original form.
    pub fn from_args<S: AsRef<str>>(args: &[S], base: &Path) -> Result<Self, AppError> {
        if args.len() != VERIFY_PROPOSAL_CMD_PARAMS_COUNT {
            return Err(AppError::ArgumentCount {
                expected: VERIFY_PROPOSAL_CMD_PARAMS_COUNT,
                received: args.len(),
            });
        }

        let values: Vec<String> = args.iter().map(|arg| arg.as_ref().trim().to_string()).collect();

        let errors: Vec<FieldValidationError> = ProposalField::ALL
            .iter()
            .zip(&values)
            .filter(|(field, value)| !field.is_valid(base, value))
            .map(|(field, value)| FieldValidationError { field: *field, value: value.clone() })
            .collect();

        if !errors.is_empty() {
            debug!(rejected = errors.len(), "verify-proposal arguments rejected");
            return Err(AppError::InvalidArguments(FieldValidationErrors(errors)));
        }

        let [
            smart_contracts_location,
            consumer_chain_id,
            multisig_address,
            tool_output_location,
            proposal_id,
            provider_node_id,
        ]: [String; VERIFY_PROPOSAL_CMD_PARAMS_COUNT] =
            values.try_into().map_err(|_| AppError::ArgumentCount {
                expected: VERIFY_PROPOSAL_CMD_PARAMS_COUNT,
                received: args.len(),
            })?;

        debug!(
            consumer_chain_id = consumer_chain_id.as_str(),
            proposal_id = proposal_id.as_str(),
            "verify-proposal arguments accepted"
        );

        Ok(Self {
            smart_contracts_location,
            consumer_chain_id,
            multisig_address,
            tool_output_location,
            proposal_id,
            provider_node_id,
        })
    }

    pub fn smart_contracts_location(&self) -> &str {
        &self.smart_contracts_location
    }

    pub fn consumer_chain_id(&self) -> &str {
        &self.consumer_chain_id
    }

    pub fn multisig_address(&self) -> &str {
        &self.multisig_address
    }

    pub fn tool_output_location(&self) -> &str {
        &self.tool_output_location
    }

    pub fn proposal_id(&self) -> &str {
        &self.proposal_id
    }

    pub fn provider_node_id(&self) -> &str {
        &self.provider_node_id
    }
}
