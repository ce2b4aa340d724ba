//! File formats and their codecs.
//!
//! Three encodings are supported, each fixing a default file extension and
//! an encode/decode routine:
//!
//! - [`FileFormat::Json`] — human-readable JSON via `serde_json`,
//!   pretty-printed by default.
//! - [`FileFormat::Toml`] — structured key-value documents via `toml`,
//!   plain formatting by default. Requires the value to serialize as a
//!   table at the top level.
//! - [`FileFormat::Binary`] — compact binary archives via `bincode`. One
//!   canonical configuration; accepts no overrides.
//!
//! The JSON and TOML codecs can be replaced per call through
//! [`CodecOverrides`]. The binary codec is deliberately fixed: a
//! [`CodecOverrides`] supplied alongside [`FileFormat::Binary`] is ignored.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};

// ── FileFormat ────────────────────────────────────────────────────────────────

/// The set of supported on-disk encodings.
///
/// Chosen per call; a format determines both the default file extension and
/// the codec used for encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Pretty-printed JSON document.
    Json,
    /// TOML key-value document.
    Toml,
    /// Compact binary archive.
    Binary,
}

impl FileFormat {
    /// The file extension used when [`StoreOptions`](crate::StoreOptions)
    /// does not override it.
    pub fn default_extension(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
            FileFormat::Binary => "bin",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
            FileFormat::Binary => "binary",
        };
        write!(f, "{name}")
    }
}

// ── JSON codec ────────────────────────────────────────────────────────────────

/// JSON encoder/decoder configuration.
///
/// The default prints human-readable output with keys exactly as the value
/// names them. Use [`JsonCodec::compact`] for single-line output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    /// Pretty-print with indentation and newlines.
    pub pretty: bool,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonCodec {
    /// A codec producing single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Encode `value` as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Encode` if the value cannot be represented as
    /// JSON.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        let out = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        out.map_err(|e| StoreError::Encode {
            format: FileFormat::Json,
            reason: e.to_string(),
        })
    }

    /// Decode a value from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` if the bytes are not valid JSON for the
    /// target type.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Decode {
            format: FileFormat::Json,
            reason: e.to_string(),
        })
    }
}

// ── TOML codec ────────────────────────────────────────────────────────────────

/// TOML encoder/decoder configuration.
///
/// The default uses `toml`'s plain formatting; set `pretty` for the
/// multi-line array/table style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TomlCodec {
    /// Use `toml`'s pretty formatting.
    pub pretty: bool,
}

impl TomlCodec {
    /// A codec producing pretty multi-line output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode `value` as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Encode` if the value does not serialize as a
    /// top-level table (TOML cannot represent bare scalars or sequences).
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        let out = if self.pretty {
            toml::to_string_pretty(value)
        } else {
            toml::to_string(value)
        };
        out.map(String::into_bytes).map_err(|e| StoreError::Encode {
            format: FileFormat::Toml,
            reason: e.to_string(),
        })
    }

    /// Decode a value from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` if the bytes are not UTF-8 or not valid
    /// TOML for the target type.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let text = std::str::from_utf8(bytes).map_err(|e| StoreError::Decode {
            format: FileFormat::Toml,
            reason: e.to_string(),
        })?;
        toml::from_str(text).map_err(|e| StoreError::Decode {
            format: FileFormat::Toml,
            reason: e.to_string(),
        })
    }
}

// ── Binary codec ──────────────────────────────────────────────────────────────

/// Encode `value` with the canonical binary configuration.
///
/// # Errors
///
/// Returns `StoreError::Encode` if the value cannot be serialized.
pub fn encode_binary<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| StoreError::Encode {
        format: FileFormat::Binary,
        reason: e.to_string(),
    })
}

/// Decode a value from canonical binary bytes.
///
/// # Errors
///
/// Returns `StoreError::Decode` if the bytes are malformed or do not match
/// the target type.
pub fn decode_binary<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Decode {
        format: FileFormat::Binary,
        reason: e.to_string(),
    })
}

// ── CodecOverrides ────────────────────────────────────────────────────────────

/// Per-call replacement codecs for the JSON and TOML formats.
///
/// Only the codec matching the requested format is consulted; the other is
/// ignored. No override exists for [`FileFormat::Binary`] — supplying
/// overrides alongside the binary format is a no-op, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOverrides {
    /// Replacement JSON codec, if any.
    pub json: Option<JsonCodec>,
    /// Replacement TOML codec, if any.
    pub toml: Option<TomlCodec>,
}

impl CodecOverrides {
    /// Overrides carrying only a JSON codec.
    pub fn json(codec: JsonCodec) -> Self {
        Self {
            json: Some(codec),
            toml: None,
        }
    }

    /// Overrides carrying only a TOML codec.
    pub fn toml(codec: TomlCodec) -> Self {
        Self {
            json: None,
            toml: Some(codec),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
