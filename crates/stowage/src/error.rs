//! Error types for stowage.
//!
//! Every failure is strongly typed and propagated without panicking or
//! retrying. Variants distinguish each stage of an operation (path
//! resolution, directory creation, encoding, the individual filesystem
//! calls) so callers can tell exactly what went wrong.
//!
//! "Nothing to do" outcomes — loading a file that was never saved,
//! removing a file that does not exist — are *not* errors; the store
//! operations report those through their `Option`/`bool` return values.

use std::path::PathBuf;

use crate::format::FileFormat;

/// Store error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The platform provides no location for the requested base directory.
    #[error("No platform {0} directory available")]
    BaseDirUnavailable(&'static str),

    /// A target directory was missing and could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The codec rejected the value during encoding.
    #[error("Failed to encode value as {format}: {reason}")]
    Encode { format: FileFormat, reason: String },

    /// The bytes on disk were malformed or did not match the target type.
    #[error("Failed to decode {format} data: {reason}")]
    Decode { format: FileFormat, reason: String },

    /// Writing the encoded bytes failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the file failed for a reason other than absence.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying the file to its backup location failed.
    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting the file failed for a reason other than absence.
    #[error("Failed to delete {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, StoreError>;
