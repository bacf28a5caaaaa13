//! Error types for textnote-core

use thiserror::Error;

use crate::document::TextEncoding;

/// Errors raised while turning raw file bytes into document text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum DocumentError {
    /// No supported encoding could decode the bytes
    #[error("Could not detect the text encoding of the document")]
    UnknownEncoding,

    /// The bytes claim an encoding but do not decode under it
    #[error("Malformed {encoding:?} data: {reason}")]
    Malformed {
        encoding: TextEncoding,
        reason: String,
    },

    /// The text holds a character the target encoding cannot store
    #[error("{character:?} cannot be saved as {encoding:?}")]
    Unencodable {
        encoding: TextEncoding,
        character: String,
    },
}

/// Result type for document operations
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Errors raised while reading, validating or persisting settings.
#[derive(Error, Debug)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum SettingsError {
    /// Highlight color is not an `RRGGBB` hex string
    #[error("Invalid highlight color: {0}")]
    InvalidColor(String),

    /// A setting holds a value outside its allowed set
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// The host settings store refused a write
    #[error("Settings store error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
