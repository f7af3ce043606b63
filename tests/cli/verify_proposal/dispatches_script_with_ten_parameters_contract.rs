use crate::harness::TestContext;
use crate::harness::test_context::MULTISIG;
use predicates::prelude::*;

#[test]
fn verify_proposal_dispatches_script_with_ten_parameters() {
    let ctx = TestContext::new();
    ctx.write_recording_script();

    ctx.cli()
        .arg("verify-proposal")
        .args(ctx.valid_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification script completed"));

    assert_eq!(
        ctx.received_args(),
        vec![
            "./contracts",
            "consumer-1",
            MULTISIG,
            "wasmd_consumer",
            "wasmd",
            "./out",
            "true",
            "7",
            "tcp://localhost:26657",
            "interchain-security-pd",
        ]
    );
}

#[test]
fn verify_proposal_trims_arguments_before_dispatch() {
    let ctx = TestContext::new();
    ctx.write_recording_script();
    let padded: Vec<String> = ctx.valid_args().iter().map(|arg| format!(" {arg} ")).collect();

    ctx.cli().arg("verify-proposal").args(padded).assert().success();

    let received = ctx.received_args();
    assert_eq!(received[0], "./contracts");
    assert_eq!(received[2], MULTISIG);
    assert_eq!(received[7], "7");
}

#[test]
fn verify_proposal_streams_script_output() {
    let ctx = TestContext::new();
    ctx.write_script("echo \"checking proposal $8\"\necho 'hash mismatch warning' >&2\n");

    ctx.cli()
        .arg("verify-proposal")
        .args(ctx.valid_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("checking proposal 7"))
        .stderr(predicate::str::contains("hash mismatch warning"));
}
