use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn verify_proposal_help_shows_usage_and_example() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["verify-proposal", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "verify-proposal [smart-contracts-location] [consumer-chain-id] [multisig-address] \
             [tool-output-location] [proposal-id] [provider-node-id]",
        ))
        .stdout(predicate::str::contains(
            "consumer-chain-tool verify-proposal $HOME/wasm_contracts wasm",
        ))
        .stdout(predicate::str::contains("provider-node-id - The address of the provider chain node"));
}

#[test]
fn top_level_help_lists_verify_proposal() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify-proposal"))
        .stdout(predicate::str::contains("Verify interchain-security consumer chain proposals"))
        .stdout(predicate::str::contains("Prepare").not());
}
