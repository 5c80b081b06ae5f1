//! End-to-end tests for `kitbox hash`.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Path to the kitbox binary
fn kitbox_bin() -> &'static str {
    env!("CARGO_BIN_EXE_kitbox")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(kitbox_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_md5_empty_string() {
    let output = run(&["hash", "--text", "", "--algorithm", "md5"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("d41d8cd98f00b204e9800998ecf8427e"),
        "output: {stdout}"
    );
}

#[test]
fn test_md5_abc() {
    let output = run(&["hash", "--text", "abc", "--algorithm", "md5"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("900150983cd24fb0d6963f7d28e17f72"),
        "output: {stdout}"
    );
}

#[test]
fn test_sha256_abc() {
    let output = run(&["hash", "--text", "abc", "--algorithm", "sha256", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let entries = result.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["algorithm"], "sha256");
    assert_eq!(
        entries[0]["digest"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_sha1_abc() {
    let output = run(&["hash", "--text", "abc", "--algorithm", "sha1", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        result[0]["digest"],
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn test_all_algorithms() {
    let output = run(&["hash", "--text", "abc", "--algorithm", "all", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = result.as_array().unwrap();
    assert_eq!(entries.len(), 4);

    let algorithms: Vec<&str> = entries
        .iter()
        .map(|e| e["algorithm"].as_str().unwrap())
        .collect();
    assert_eq!(algorithms, vec!["md5", "sha1", "sha256", "sha512"]);
}

#[test]
fn test_hash_from_file_matches_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.bin");
    fs::write(&path, b"abc").unwrap();

    let from_file = run(&[
        "hash",
        "--file",
        path.to_str().unwrap(),
        "--algorithm",
        "md5",
    ]);
    let from_text = run(&["hash", "--text", "abc", "--algorithm", "md5"]);

    assert_eq!(from_file.stdout, from_text.stdout);
}

#[test]
fn test_hash_missing_file_fails() {
    let output = run(&["hash", "--file", "/nonexistent/input.bin"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_hash_digests_are_lowercase_hex() {
    let output = run(&["hash", "--text", "KitBox", "--algorithm", "all", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    for entry in result.as_array().unwrap() {
        let digest = entry["digest"].as_str().unwrap();
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn test_hash_text_and_file_conflict() {
    let output = run(&["hash", "--text", "abc", "--file", "/tmp/x"]);
    assert_eq!(output.status.code(), Some(2));
}
