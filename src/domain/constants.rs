//! Named constants for the `verify-proposal` command surface.

/// Binary name of this tool.
pub const TOOL_NAME: &str = "consumer-chain-tool";

/// Subcommand name.
pub const VERIFY_PROPOSAL_CMD_NAME: &str = "verify-proposal";

/// Number of positional arguments `verify-proposal` accepts.
pub const VERIFY_PROPOSAL_CMD_PARAMS_COUNT: usize = 6;

pub const SMART_CONTRACTS_LOCATION: &str = "smart-contracts-location";
pub const CONSUMER_CHAIN_ID: &str = "consumer-chain-id";
pub const MULTISIG_ADDRESS: &str = "multisig-address";
pub const TOOL_OUTPUT_LOCATION: &str = "tool-output-location";
pub const PROPOSAL_ID: &str = "proposal-id";
pub const PROVIDER_NODE_ID: &str = "provider-node-id";

/// Default consumer chain binary handed to the verification script.
pub const CONSUMER_BINARY: &str = "wasmd_consumer";

/// Default CosmWasm binary handed to the verification script.
pub const COSMWASM_BINARY: &str = "wasmd";

/// Default provider chain binary handed to the verification script.
pub const PROVIDER_BINARY: &str = "interchain-security-pd";

/// Default shell used to run the verification script.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Default verification script, resolved relative to the working directory.
pub const VERIFY_PROPOSAL_SCRIPT: &str = "verify_proposal.sh";

/// Flag telling the script to create a subdirectory inside the output location.
pub const CREATE_OUTPUT_SUBDIRECTORY: &str = "true";

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "consumer-chain-tool.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "CONSUMER_CHAIN_TOOL_LOG";

pub const VERIFY_PROPOSAL_SHORT_DESC: &str = "Verify that genesis and binary hashes created from the provided inputs match the hashes from the 'create consumer chain' proposal with the given proposal ID";

/// Positional argument labels in command-line order.
pub const VERIFY_PROPOSAL_ARG_LABELS: [&str; VERIFY_PROPOSAL_CMD_PARAMS_COUNT] = [
    SMART_CONTRACTS_LOCATION,
    CONSUMER_CHAIN_ID,
    MULTISIG_ADDRESS,
    TOOL_OUTPUT_LOCATION,
    PROPOSAL_ID,
    PROVIDER_NODE_ID,
];

/// `verify-proposal [smart-contracts-location] [consumer-chain-id] ...`
pub fn verify_proposal_usage() -> String {
    let labels = VERIFY_PROPOSAL_ARG_LABELS
        .iter()
        .map(|label| format!("[{label}]"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{VERIFY_PROPOSAL_CMD_NAME} {labels}")
}

pub fn verify_proposal_example() -> String {
    [
        TOOL_NAME,
        VERIFY_PROPOSAL_CMD_NAME,
        "$HOME/wasm_contracts",
        "wasm",
        "wasm1243cuuy98lxaf7ufgav0w76xt5es93afr8a3ya",
        "$HOME/tool_output_step2",
        "1",
        "tcp://localhost:26657",
    ]
    .join(" ")
}

pub fn verify_proposal_long_desc() -> String {
    format!(
        "This command takes the same inputs and goes through the same process as 'prepare-proposal' command to create the genesis.json file and calculate its hash.
It then queries the 'create consumer chain' proposal from the provider chain to obtain the hashes. If the hashes from the proposal match the recalculated ones, then the resulting genesis.json file contains the smart contracts provided to the input of this command.
Command arguments:
    {SMART_CONTRACTS_LOCATION} - The location of the directory that contains CosmWasm smart contracts source code.
    {CONSUMER_CHAIN_ID} - The chain ID of the consumer chain.
    {MULTISIG_ADDRESS} - The multi-signature address that will have the permission to instantiate contracts from the set of predeployed codes.
    {TOOL_OUTPUT_LOCATION} - The location of the directory where the resulting genesis.json and sha256hashes.json files will be saved.
    {PROPOSAL_ID} - The ID of the 'create consumer chain' proposal submitted to the provider chain, whose data will be used to verify if the inputs of this command match the ones from the proposal.
    {PROVIDER_NODE_ID} - The address of the provider chain node in the following format: tcp://IP_ADDRESS:PORT_NUMBER. This address is used to query the provider chain to obtain the proposal information."
    )
}
