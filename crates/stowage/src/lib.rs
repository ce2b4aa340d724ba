//! Stowage — filesystem persistence for serde-serializable values.
//!
//! Given any `serde`-serializable value, stowage resolves a deterministic
//! file path, encodes the value in one of three formats (JSON, TOML, or a
//! compact binary archive), and performs the basic file lifecycle
//! operations: save, load, remove, existence check, backup, and backup
//! removal.
//!
//! # Path layout
//!
//! By default a value named `Record` saved as JSON lands at
//! `{platform data dir}/Record.json`. Every component can be overridden
//! per call through [`StoreOptions`]:
//!
//! ```text
//! {base directory}/          — platform data dir, cache dir, or custom
//! └── {sub directory}/       — optional, created on save
//!     └── {file name}.{ext}  — value name + format extension by default
//!         {file name}.{ext}.bak
//! ```
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use stowage::FileFormat;
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Record {
//!     username: String,
//!     age: u32,
//! }
//!
//! # fn main() -> stowage::Result<()> {
//! let record = Record { username: "alice".into(), age: 30 };
//! stowage::save(&record, "Record", FileFormat::Json)?;
//!
//! let loaded: Option<Record> = stowage::load("Record", FileFormat::Json)?;
//! assert_eq!(loaded, Some(record));
//! # Ok(())
//! # }
//! ```
//!
//! # What stowage is not
//!
//! Not a database: no indexing, no locking or cross-process coordination,
//! no schema migration, no partial I/O. Concurrent callers operating on
//! the same resolved path can race; serialize externally if that matters.
//!
//! # Modules
//!
//! - [`format`] — the [`FileFormat`] enum, codec configurations, and
//!   [`CodecOverrides`].
//! - [`location`] — [`BaseDirectory`], [`StoreOptions`], and path
//!   resolution.
//! - [`store`] — the six store operations.
//! - [`error`] — [`StoreError`] and the [`Result`] alias.

pub mod error;
pub mod format;
pub mod location;
pub mod store;

// Re-export primary types
pub use error::{Result, StoreError};
pub use format::{CodecOverrides, FileFormat, JsonCodec, TomlCodec};
pub use location::{backup_path, resolve, BaseDirectory, StoreOptions};

// Re-export the operation surface
pub use store::{
    backup, backup_with, exists, exists_with, load, load_with, remove, remove_backup,
    remove_backup_with, remove_with, save, save_with,
};
