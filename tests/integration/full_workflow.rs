//! Integration test: full end-to-end persistence lifecycle.
//!
//! Tests the complete workflow against a real (temporary) directory tree:
//! 1. Save a record in each format
//! 2. Load it back and compare
//! 3. Back it up and remove the backup
//! 4. Remove it and observe the store emptying out

use serde::{Deserialize, Serialize};
use stowage::{
    backup_with, exists_with, load_with, remove_backup_with, remove_with, save_with,
    BaseDirectory, CodecOverrides, FileFormat, JsonCodec, StoreOptions,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    username: String,
    age: u32,
}

fn alice() -> Record {
    Record {
        username: "alice".to_string(),
        age: 30,
    }
}

#[test]
fn full_workflow_save_to_remove() {
    let dir = tempfile::tempdir().unwrap();
    let options =
        StoreOptions::new().directory(BaseDirectory::Custom(dir.path().to_path_buf()));

    // ── Step 1: Save in every format ────────────────────────────────────
    for format in [FileFormat::Json, FileFormat::Toml, FileFormat::Binary] {
        assert!(
            !exists_with("Record", format, &options).unwrap(),
            "nothing should exist before the first save ({format})"
        );
        save_with(&alice(), "Record", format, &options, None)
            .unwrap_or_else(|e| panic!("save as {format} failed: {e}"));
        assert!(exists_with("Record", format, &options).unwrap());
    }
    assert!(dir.path().join("Record.json").exists());
    assert!(dir.path().join("Record.toml").exists());
    assert!(dir.path().join("Record.bin").exists());

    // ── Step 2: Load back and compare ───────────────────────────────────
    for format in [FileFormat::Json, FileFormat::Toml, FileFormat::Binary] {
        let loaded: Option<Record> = load_with("Record", format, &options, None)
            .unwrap_or_else(|e| panic!("load as {format} failed: {e}"));
        assert_eq!(loaded, Some(alice()), "round trip mismatch for {format}");
    }

    // ── Step 3: Backup lifecycle ────────────────────────────────────────
    assert!(backup_with("Record", FileFormat::Json, &options).unwrap());
    assert!(dir.path().join("Record.json.bak").exists());

    // Overwriting the backup succeeds as long as the source exists.
    assert!(backup_with("Record", FileFormat::Json, &options).unwrap());

    assert!(remove_backup_with("Record", FileFormat::Json, &options).unwrap());
    assert!(!dir.path().join("Record.json.bak").exists());
    assert!(
        dir.path().join("Record.json").exists(),
        "removing the backup must leave the original"
    );
    assert!(
        !remove_backup_with("Record", FileFormat::Json, &options).unwrap(),
        "second backup removal finds nothing"
    );

    // ── Step 4: Remove everything ───────────────────────────────────────
    for format in [FileFormat::Json, FileFormat::Toml, FileFormat::Binary] {
        assert!(remove_with("Record", format, &options).unwrap());
        assert!(!remove_with("Record", format, &options).unwrap());
        assert!(!exists_with("Record", format, &options).unwrap());

        let gone: Option<Record> = load_with("Record", format, &options, None).unwrap();
        assert_eq!(gone, None, "load after remove must be None ({format})");
    }
}

#[test]
fn full_workflow_nested_account_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let options = StoreOptions::new()
        .directory(BaseDirectory::Custom(dir.path().to_path_buf()))
        .sub_directory("users")
        .file_name("acct");

    // Save with a custom name under a sub-directory that does not exist yet.
    save_with(&alice(), "Record", FileFormat::Toml, &options, None).unwrap();
    let file = dir.path().join("users").join("acct.toml");
    assert!(file.exists());

    // Backup lands next to the original.
    assert!(backup_with("Record", FileFormat::Toml, &options).unwrap());
    assert!(dir.path().join("users").join("acct.toml.bak").exists());

    let loaded: Option<Record> = load_with("Record", FileFormat::Toml, &options, None).unwrap();
    assert_eq!(loaded, Some(alice()));
}

#[test]
fn full_workflow_codec_overrides_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let options =
        StoreOptions::new().directory(BaseDirectory::Custom(dir.path().to_path_buf()));
    let overrides = CodecOverrides::json(JsonCodec::compact());

    save_with(&alice(), "Record", FileFormat::Json, &options, Some(&overrides)).unwrap();

    // A file written by the compact codec loads fine without the override.
    let loaded: Option<Record> =
        load_with("Record", FileFormat::Json, &options, None).unwrap();
    assert_eq!(loaded, Some(alice()));
}
