//! The six store operations: save, load, remove, exists, backup,
//! remove-backup.
//!
//! Each operation resolves its path through [`crate::location`] and then
//! performs whole-buffer filesystem calls. Operations are synchronous and
//! share no state across calls; nothing is cached or locked, so concurrent
//! callers hitting the same resolved path can race. Callers needing
//! cross-process safety must serialize externally.
//!
//! Every operation comes in two forms: the plain form using
//! [`StoreOptions::default`], and a `_with` form taking explicit options
//! (plus [`CodecOverrides`] where a codec is involved). The plain form is
//! exactly equivalent to the `_with` form with defaulted arguments.
//!
//! Absence is not failure: loading a value that was never saved yields
//! `Ok(None)`, and removing or backing up a missing file yields
//! `Ok(false)`. Errors are reserved for operations that tried and failed.

use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::format::{self, CodecOverrides, FileFormat};
use crate::location::{self, StoreOptions};

// ── Codec dispatch ────────────────────────────────────────────────────────────

/// Encode `value` in `format`, honoring overrides where the format allows.
fn encode<T: Serialize>(
    value: &T,
    format: FileFormat,
    overrides: Option<&CodecOverrides>,
) -> Result<Vec<u8>> {
    match format {
        FileFormat::Json => overrides
            .and_then(|o| o.json)
            .unwrap_or_default()
            .encode(value),
        FileFormat::Toml => overrides
            .and_then(|o| o.toml)
            .unwrap_or_default()
            .encode(value),
        FileFormat::Binary => {
            if overrides.is_some_and(|o| o.json.is_some() || o.toml.is_some()) {
                log::debug!("codec overrides ignored for the binary format");
            }
            format::encode_binary(value)
        }
    }
}

/// Decode `bytes` from `format`, honoring overrides where the format allows.
fn decode<T: DeserializeOwned>(
    bytes: &[u8],
    format: FileFormat,
    overrides: Option<&CodecOverrides>,
) -> Result<T> {
    match format {
        FileFormat::Json => overrides
            .and_then(|o| o.json)
            .unwrap_or_default()
            .decode(bytes),
        FileFormat::Toml => overrides
            .and_then(|o| o.toml)
            .unwrap_or_default()
            .decode(bytes),
        FileFormat::Binary => {
            if overrides.is_some_and(|o| o.json.is_some() || o.toml.is_some()) {
                log::debug!("codec overrides ignored for the binary format");
            }
            format::decode_binary(bytes)
        }
    }
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Save `value` under `name` in `format` with default options.
///
/// # Errors
///
/// See [`save_with`].
pub fn save<T: Serialize>(value: &T, name: &str, format: FileFormat) -> Result<()> {
    save_with(value, name, format, &StoreOptions::default(), None)
}

/// Save `value` under `name` in `format`.
///
/// Encodes the value, creates missing directories when
/// `options.create_dirs` is set, and writes the whole buffer, overwriting
/// any existing file at the resolved path.
///
/// # Errors
///
/// Returns `StoreError::Encode` if the codec rejects the value,
/// `StoreError::DirectoryCreation` if directory creation fails, or
/// `StoreError::Write` for filesystem errors (including a missing
/// directory when `create_dirs` is false).
pub fn save_with<T: Serialize>(
    value: &T,
    name: &str,
    format: FileFormat,
    options: &StoreOptions,
    overrides: Option<&CodecOverrides>,
) -> Result<()> {
    let path = location::prepare(name, format, options)?;
    let bytes = encode(value, format, overrides)?;

    log::debug!("saving {} bytes to {}", bytes.len(), path.display());
    std::fs::write(&path, &bytes).map_err(|source| StoreError::Write { path, source })
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Load the value saved under `name` in `format` with default options.
///
/// # Errors
///
/// See [`load_with`].
pub fn load<T: DeserializeOwned>(name: &str, format: FileFormat) -> Result<Option<T>> {
    load_with(name, format, &StoreOptions::default(), None)
}

/// Load the value saved under `name` in `format`.
///
/// Returns `Ok(None)` when no file exists at the resolved path; a missing
/// file is the normal first-run case, not an error.
///
/// # Errors
///
/// Returns `StoreError::Read` for filesystem errors other than absence, or
/// `StoreError::Decode` if the bytes do not decode as `T`.
pub fn load_with<T: DeserializeOwned>(
    name: &str,
    format: FileFormat,
    options: &StoreOptions,
    overrides: Option<&CodecOverrides>,
) -> Result<Option<T>> {
    let path = location::resolve(name, format, options)?;

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(StoreError::Read { path, source }),
    };

    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
    decode(&bytes, format, overrides).map(Some)
}

// ── Remove ────────────────────────────────────────────────────────────────────

/// Delete the file for `name` in `format` with default options.
///
/// # Errors
///
/// See [`remove_with`].
pub fn remove(name: &str, format: FileFormat) -> Result<bool> {
    remove_with(name, format, &StoreOptions::default())
}

/// Delete the file at the resolved path.
///
/// Returns `true` if a file was actually removed, `false` if none existed.
///
/// # Errors
///
/// Returns `StoreError::Delete` for filesystem errors other than absence.
pub fn remove_with(name: &str, format: FileFormat, options: &StoreOptions) -> Result<bool> {
    let path = location::resolve(name, format, options)?;
    delete_file(path)
}

// ── Exists ────────────────────────────────────────────────────────────────────

/// Check whether a file exists for `name` in `format` with default options.
///
/// # Errors
///
/// See [`exists_with`].
pub fn exists(name: &str, format: FileFormat) -> Result<bool> {
    exists_with(name, format, &StoreOptions::default())
}

/// Check whether a file exists at the resolved path.
///
/// # Errors
///
/// Returns `StoreError::BaseDirUnavailable` if the base directory cannot
/// be determined.
pub fn exists_with(name: &str, format: FileFormat, options: &StoreOptions) -> Result<bool> {
    let path = location::resolve(name, format, options)?;
    Ok(path.exists())
}

// ── Backup ────────────────────────────────────────────────────────────────────

/// Copy the file for `name` in `format` to its backup path, with default
/// options.
///
/// # Errors
///
/// See [`backup_with`].
pub fn backup(name: &str, format: FileFormat) -> Result<bool> {
    backup_with(name, format, &StoreOptions::default())
}

/// Copy the file at the resolved path to its `.bak` sibling, overwriting
/// any prior backup.
///
/// Returns `true` if the copy was made, `false` if the source file does
/// not exist.
///
/// # Errors
///
/// Returns `StoreError::Copy` if the copy fails.
pub fn backup_with(name: &str, format: FileFormat, options: &StoreOptions) -> Result<bool> {
    let source = location::resolve(name, format, options)?;
    if !source.exists() {
        return Ok(false);
    }

    let target = location::backup_path(&source);
    log::debug!("backing up {} to {}", source.display(), target.display());
    std::fs::copy(&source, &target).map_err(|error| StoreError::Copy {
        from: source,
        to: target,
        source: error,
    })?;
    Ok(true)
}

// ── Remove backup ─────────────────────────────────────────────────────────────

/// Delete the backup file for `name` in `format` with default options.
///
/// # Errors
///
/// See [`remove_backup_with`].
pub fn remove_backup(name: &str, format: FileFormat) -> Result<bool> {
    remove_backup_with(name, format, &StoreOptions::default())
}

/// Delete the `.bak` sibling of the resolved path.
///
/// Returns `true` if a backup was removed, `false` if none existed. The
/// primary file is never touched.
///
/// # Errors
///
/// Returns `StoreError::Delete` for filesystem errors other than absence.
pub fn remove_backup_with(name: &str, format: FileFormat, options: &StoreOptions) -> Result<bool> {
    let path = location::resolve(name, format, options)?;
    delete_file(location::backup_path(&path))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Delete a file, mapping absence to `false` rather than an error.
fn delete_file(path: std::path::PathBuf) -> Result<bool> {
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StoreError::Delete { path, source }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
