use crate::harness::TestContext;
use crate::harness::test_context::MULTISIG;
use predicates::prelude::*;

#[test]
fn verify_proposal_dry_run_prints_invocation_without_running() {
    let ctx = TestContext::new();
    ctx.write_recording_script();

    let expected = format!(
        "/bin/bash verify_proposal.sh ./contracts consumer-1 {MULTISIG} wasmd_consumer wasmd \
         ./out true 7 tcp://localhost:26657 interchain-security-pd"
    );

    ctx.cli()
        .args(["verify-proposal", "--dry-run"])
        .args(ctx.valid_args())
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));

    assert!(!ctx.script_ran());
    assert!(!ctx.work_dir().join("out").exists());
}

#[test]
fn verify_proposal_dry_run_still_validates() {
    let ctx = TestContext::new();
    let mut args = ctx.valid_args();
    args[1] = String::new();

    ctx.cli()
        .args(["verify-proposal", "--dry-run"])
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provided chain-id '' is not valid."));
}
