//! Path resolution — where a value lives on disk.
//!
//! Every store operation first computes the absolute location of its data
//! file from the value's name, the requested [`FileFormat`], and the
//! per-call [`StoreOptions`]:
//!
//! ```text
//! {base directory}/{sub directory?}/{file name}.{extension}
//! ```
//!
//! Resolution is a pure function of its inputs: the same (name, format,
//! options) triple always yields the same path, nothing is cached, and the
//! target file is never required to exist. Only [`prepare`] touches the
//! filesystem, and only to create missing directories before a save.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Result, StoreError};
use crate::format::FileFormat;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Suffix appended to a resolved path to form its backup path. Fixed;
/// callers never supply it themselves.
const BACKUP_SUFFIX: &str = ".bak";

// ── BaseDirectory ─────────────────────────────────────────────────────────────

/// The root under which data files are placed.
///
/// `Data` and `Cache` map to the platform's standard per-user locations and
/// are looked up freshly on every call. `Custom` pins an explicit root,
/// which tests and embedders use to own their storage tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BaseDirectory {
    /// The platform per-user data directory.
    #[default]
    Data,
    /// The platform per-user cache directory.
    Cache,
    /// An explicit root path.
    Custom(PathBuf),
}

impl BaseDirectory {
    /// Resolve this base directory to an absolute path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BaseDirUnavailable` if the platform exposes no
    /// home directory to derive the standard locations from.
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            BaseDirectory::Data => BaseDirs::new()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or(StoreError::BaseDirUnavailable("data")),
            BaseDirectory::Cache => BaseDirs::new()
                .map(|dirs| dirs.cache_dir().to_path_buf())
                .ok_or(StoreError::BaseDirUnavailable("cache")),
            BaseDirectory::Custom(path) => Ok(path.clone()),
        }
    }
}

// ── StoreOptions ──────────────────────────────────────────────────────────────

/// Per-call overrides for path resolution.
///
/// Constructed fresh for each operation and never persisted. The default
/// value places `{name}.{format extension}` directly in the platform data
/// directory and creates missing directories on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Root to resolve under.
    pub directory: BaseDirectory,
    /// Sub-directory appended to the root, if any.
    pub sub_directory: Option<String>,
    /// File name replacing the value's name, if any.
    pub file_name: Option<String>,
    /// Extension replacing the format's default, if any (without the dot).
    pub extension: Option<String>,
    /// Create missing directories before a save.
    pub create_dirs: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            directory: BaseDirectory::Data,
            sub_directory: None,
            file_name: None,
            extension: None,
            create_dirs: true,
        }
    }
}

impl StoreOptions {
    /// Options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory.
    pub fn directory(mut self, directory: BaseDirectory) -> Self {
        self.directory = directory;
        self
    }

    /// Set the sub-directory under the base directory.
    pub fn sub_directory(mut self, sub: impl Into<String>) -> Self {
        self.sub_directory = Some(sub.into());
        self
    }

    /// Replace the value's name as the file name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Replace the format's default extension.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Control directory creation on save.
    pub fn create_dirs(mut self, create: bool) -> Self {
        self.create_dirs = create;
        self
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Compute the absolute path for a value's data file.
///
/// Pure: performs no filesystem access and does not require the file (or
/// its directory) to exist.
///
/// # Errors
///
/// Returns `StoreError::BaseDirUnavailable` if the platform base directory
/// cannot be determined.
pub fn resolve(name: &str, format: FileFormat, options: &StoreOptions) -> Result<PathBuf> {
    let mut dir = options.directory.resolve()?;

    if let Some(sub) = &options.sub_directory {
        dir.push(sub);
    }

    let file_name = options.file_name.as_deref().unwrap_or(name);
    let extension = options
        .extension
        .as_deref()
        .unwrap_or_else(|| format.default_extension());

    Ok(dir.join(format!("{file_name}.{extension}")))
}

/// Resolve a path and create its directory if needed.
///
/// Used by save only; all other operations resolve purely. When
/// `options.create_dirs` is false a missing directory is left absent and
/// the subsequent write fails with its own I/O error.
///
/// # Errors
///
/// Returns `StoreError::BaseDirUnavailable` if the base directory cannot
/// be determined, or `StoreError::DirectoryCreation` if creation was
/// requested and failed.
pub(crate) fn prepare(name: &str, format: FileFormat, options: &StoreOptions) -> Result<PathBuf> {
    let path = resolve(name, format, options)?;

    if options.create_dirs {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                log::trace!("creating directory {}", parent.display());
                std::fs::create_dir_all(parent).map_err(|source| {
                    StoreError::DirectoryCreation {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }
    }

    Ok(path)
}

/// The backup location for a resolved path: the same file name with the
/// fixed `.bak` suffix appended after the extension.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut full = path.as_os_str().to_os_string();
    full.push(BACKUP_SUFFIX);
    PathBuf::from(full)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
