use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn verify_proposal_uses_settings_file_in_working_directory() {
    let ctx = TestContext::new();
    ctx.write_recording_script();
    ctx.write_settings(
        "consumer-chain-tool.toml",
        "[binaries]\nconsumer = \"neutrond\"\nprovider = \"gaiad\"\n",
    );

    ctx.cli().arg("verify-proposal").args(ctx.valid_args()).assert().success();

    let received = ctx.received_args();
    assert_eq!(received[3], "neutrond");
    assert_eq!(received[4], "wasmd");
    assert_eq!(received[9], "gaiad");
}

#[test]
fn verify_proposal_uses_explicit_settings_file() {
    let ctx = TestContext::new();
    std::fs::create_dir(ctx.work_dir().join("scripts")).unwrap();
    std::fs::write(
        ctx.work_dir().join("scripts").join("verify.sh"),
        "printf '%s\\n' \"$@\" > received_args.txt\n",
    )
    .unwrap();
    let settings = ctx.write_settings(
        "custom.toml",
        "[script]\nverify_proposal = \"scripts/verify.sh\"\n\n[binaries]\ncosmwasm = \"wasmd-v0.45\"\n",
    );

    ctx.cli()
        .arg("--config")
        .arg(settings)
        .arg("verify-proposal")
        .args(ctx.valid_args())
        .assert()
        .success();

    assert_eq!(ctx.received_args()[4], "wasmd-v0.45");
}

#[test]
fn verify_proposal_rejects_missing_explicit_settings_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "absent.toml", "verify-proposal"])
        .args(ctx.valid_args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Settings file not found: absent.toml"));
}

#[test]
fn verify_proposal_rejects_empty_binary_setting() {
    let ctx = TestContext::new();
    ctx.write_settings("consumer-chain-tool.toml", "[binaries]\nprovider = \"\"\n");

    ctx.cli()
        .arg("verify-proposal")
        .args(ctx.valid_args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'binaries.provider' must not be empty"));
}
