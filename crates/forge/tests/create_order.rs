//! Integration tests for [`ForgeScript`] against a stub order script.
//!
//! The stub is a small shell script standing in for `forge`; each test
//! points the launch configuration at a different stub to exercise one leg
//! of the subprocess contract.
#![cfg(unix)]

use alloy::primitives::{address, b256, bytes, U256};
use lh_forge::{ForgeScript, ForgeScriptError};
use lh_types::OrderRequest;
use serde_json::json;
use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

const HASH: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";

fn request() -> OrderRequest {
    OrderRequest::new(
        137,
        address!("0x50015A452E644F5511fbeeac6B2aD2bf154E40E4"),
        address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
        address!("0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
        U256::from(2_500_000_000u64),
        U256::from(1_000_000_000_000_000_000u64),
    )
}

/// Write an executable stub that stands in for the runner binary.
fn stub_tool(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("forge-stub");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

#[tokio::test(flavor = "current_thread")]
async fn stub_output_becomes_a_signed_order() {
    let dir = TempDir::new().unwrap();
    let document = json!({
        "returns": {
            "encoded": { "internal_type": "bytes", "value": "0xabcd" },
            "hash": { "internal_type": "bytes32", "value": HASH },
            "permitData": { "internal_type": "string", "value": "{\"a\":1}" },
        }
    })
    .to_string();
    let tool = stub_tool(dir.path(), &format!("printf '%s' '{document}'"));

    let script = ForgeScript::new(dir.path()).with_program(&tool);
    let order = script.create_order(&request()).await.unwrap();

    assert_eq!(order.encoded(), &bytes!("0xabcd"));
    assert_eq!(
        order.hash(),
        b256!("0x2222222222222222222222222222222222222222222222222222222222222222")
    );
    assert_eq!(order.permit_data().as_value(), &json!({"a": 1}));
}

#[tokio::test(flavor = "current_thread")]
async fn request_fields_reach_the_script_environment() {
    let dir = TempDir::new().unwrap();
    // The stub reflects its environment back through the permit payload.
    let body = format!(
        r#"cat <<EOF
{{"returns":{{"encoded":{{"value":"0xabcd"}},"hash":{{"value":"{HASH}"}},"permitData":{{"value":"{{\"chain\":\"$CHAIN\",\"swapper\":\"$LH_SWAPPER\",\"inToken\":\"$LH_INTOKEN\",\"outToken\":\"$LH_OUTTOKEN\",\"inAmount\":\"$LH_INAMOUNT\",\"outAmount\":\"$LH_OUTAMOUNT\",\"timestamp\":\"$FOUNDRY_BLOCK_TIMESTAMP\"}}"}}}}}}
EOF"#
    );
    let tool = stub_tool(dir.path(), &body);

    let script = ForgeScript::new(dir.path()).with_program(&tool).with_timestamp(1_700_000_000);
    let order = script.create_order(&request()).await.unwrap();

    assert_eq!(
        order.permit_data().as_value(),
        &json!({
            "chain": "137",
            "swapper": "0x50015a452e644f5511fbeeac6b2ad2bf154e40e4",
            "inToken": "0x2791bca1f2de4661ed88a30c99a7a9449aa84174",
            "outToken": "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619",
            "inAmount": "2500000000",
            "outAmount": "1000000000000000000",
            "timestamp": "1700000000",
        })
    );
}

#[tokio::test(flavor = "current_thread")]
async fn stderr_wins_over_stdout() {
    let dir = TempDir::new().unwrap();
    let body = "printf '%s' '{\"returns\":{}}'\necho 'vm.envAddress: environment variable not found' >&2";
    let tool = stub_tool(dir.path(), body);

    let script = ForgeScript::new(dir.path()).with_program(&tool);
    let err = script.create_order(&request()).await.unwrap_err();

    match err {
        ForgeScriptError::Script(text) => {
            assert_eq!(text, "vm.envAddress: environment variable not found\n");
        }
        other => panic!("expected script error, got {other:?}"),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn script_runs_in_the_project_root() {
    let dir = TempDir::new().unwrap();
    let document = json!({
        "returns": {
            "encoded": { "value": "0x" },
            "hash": { "value": HASH },
            "permitData": { "value": "{}" },
        }
    })
    .to_string();
    let body = format!("touch ran-here\nprintf '%s' '{document}'");
    let tool = stub_tool(dir.path(), &body);

    let script = ForgeScript::new(dir.path()).with_program(&tool);
    script.create_order(&request()).await.unwrap();

    assert!(dir.path().join("ran-here").exists());
}

#[tokio::test(flavor = "current_thread")]
async fn garbage_stdout_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let tool = stub_tool(dir.path(), "printf '%s' 'Compiling 14 files with Solc 0.8.23'");

    let script = ForgeScript::new(dir.path()).with_program(&tool);
    let err = script.create_order(&request()).await.unwrap_err();

    assert!(matches!(err, ForgeScriptError::Json(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn missing_runner_is_a_spawn_error() {
    let dir = TempDir::new().unwrap();

    let script = ForgeScript::new(dir.path()).with_program(dir.path().join("no-such-binary"));
    let err = script.create_order(&request()).await.unwrap_err();

    assert!(matches!(err, ForgeScriptError::Spawn(_)));
}
