// crates/wasm_to_base64/tests/integration_cli.rs

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// --- Test: Default Paths ---
/// Reads scripts/tint.wasm and writes src/tint/tintWasmBase64.ts.
#[test]
fn test_default_paths() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("scripts").create_dir_all().unwrap();
    temp.child("src/tint").create_dir_all().unwrap();
    temp.child("scripts/tint.wasm").write_binary(b"\0asm").unwrap();

    Command::cargo_bin("wasm_to_base64")
        .unwrap()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(8 base64 chars)"));

    temp.child("src/tint/tintWasmBase64.ts")
        .assert("\nexport const tintWasmBase64 = `AGFzbQ==`\n");
}

/// --- Test: Custom Name and Paths ---
#[test]
fn test_custom_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("mod.wasm").write_binary(b"\0asm").unwrap();

    Command::cargo_bin("wasm_to_base64")
        .unwrap()
        .current_dir(temp.path())
        .args(["--input", "mod.wasm", "--output", "mod.ts", "--name", "modWasm"])
        .assert()
        .success();

    let module = std::fs::read_to_string(temp.child("mod.ts").path()).unwrap();
    assert!(module.contains("export const modWasm = `AGFzbQ==`"));
}

/// --- Test: Missing Input ---
#[test]
fn test_missing_input_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("wasm_to_base64")
        .unwrap()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading wasm file scripts/tint.wasm"));
}
