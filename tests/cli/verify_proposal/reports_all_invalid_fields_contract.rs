use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn verify_proposal_reports_single_invalid_field() {
    let ctx = TestContext::new();
    ctx.write_recording_script();
    let mut args = ctx.valid_args();
    args[4] = "abc".to_string();

    ctx.cli()
        .arg("verify-proposal")
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Provided proposal id 'abc' is not valid."))
        .stderr(predicate::str::contains("chain-id").not())
        .stderr(predicate::str::contains("path").not());

    assert!(!ctx.script_ran());
}

#[test]
fn verify_proposal_reports_every_invalid_field_together() {
    let ctx = TestContext::new();
    ctx.write_recording_script();
    std::fs::write(ctx.work_dir().join("genesis.json"), "{}").unwrap();

    ctx.cli()
        .args([
            "verify-proposal",
            "./missing-contracts",
            " ",
            "wasm1abc",
            "./genesis.json",
            "0",
            "",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Provided input path './missing-contracts' is not a valid directory.",
        ))
        .stderr(predicate::str::contains("Provided chain-id '' is not valid."))
        .stderr(predicate::str::contains(
            "Provided output path './genesis.json' is not a valid directory.",
        ))
        .stderr(predicate::str::contains("Provided proposal id '0' is not valid."))
        .stderr(predicate::str::contains("Provided provider node id '' is not valid."))
        .stderr(predicate::str::contains("multisig").not());

    assert!(!ctx.script_ran());
}
