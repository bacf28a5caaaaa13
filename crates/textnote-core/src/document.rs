//! Plain-text document codec
//!
//! The host's document subsystem hands over raw file bytes on open and
//! writes raw bytes on save. This module detects which encoding the bytes
//! use, decodes them, and encodes edited text back with the same encoding
//! so a round trip never silently converts a file.
//!
//! Detection order:
//! 1. byte-order mark (`EF BB BF`, `FF FE`, `FE FF`)
//! 2. valid UTF-8 (this includes plain ASCII and empty files)
//! 3. NUL bytes without a BOM: binary or BOM-less UTF-16, the open fails
//! 4. anything else is legacy single-byte text, read as Windows-1252

use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, DocumentResult};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Encodings a document can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// UTF-8 without a byte-order mark
    Utf8,
    /// UTF-8 with a leading byte-order mark
    Utf8Bom,
    /// Little-endian UTF-16 with a byte-order mark; new documents use this
    #[default]
    Utf16Le,
    /// Big-endian UTF-16 with a byte-order mark
    Utf16Be,
    /// Legacy Windows-1252 (a superset of printable ISO-8859-1)
    Windows1252,
}

impl TextEncoding {
    /// Byte-order mark written before the text, if any.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 | TextEncoding::Windows1252 => &[],
            TextEncoding::Utf8Bom => &UTF8_BOM,
            TextEncoding::Utf16Le => &UTF16_LE_BOM,
            TextEncoding::Utf16Be => &UTF16_BE_BOM,
        }
    }
}

/// Text decoded from a file together with the encoding it was stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DecodedDocument {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Detect the encoding of raw document bytes.
pub fn detect_encoding(bytes: &[u8]) -> DocumentResult<TextEncoding> {
    if bytes.starts_with(&UTF8_BOM) {
        Ok(TextEncoding::Utf8Bom)
    } else if bytes.starts_with(&UTF16_LE_BOM) {
        Ok(TextEncoding::Utf16Le)
    } else if bytes.starts_with(&UTF16_BE_BOM) {
        Ok(TextEncoding::Utf16Be)
    } else if std::str::from_utf8(bytes).is_ok() {
        Ok(TextEncoding::Utf8)
    } else if bytes.contains(&0) {
        Err(DocumentError::UnknownEncoding)
    } else {
        Ok(TextEncoding::Windows1252)
    }
}

/// Detect the encoding of `bytes` and decode them.
pub fn decode_document(bytes: &[u8]) -> DocumentResult<DecodedDocument> {
    let encoding = detect_encoding(bytes)?;
    let text = decode_with(bytes, encoding)?;
    tracing::debug!(?encoding, bytes = bytes.len(), "decoded document");
    Ok(DecodedDocument { text, encoding })
}

/// Decode `bytes` that are known to use `encoding`.
///
/// A leading byte-order mark matching the encoding is skipped.
pub fn decode_with(bytes: &[u8], encoding: TextEncoding) -> DocumentResult<String> {
    let body = bytes.strip_prefix(encoding.bom()).unwrap_or(bytes);
    match encoding {
        TextEncoding::Utf8 | TextEncoding::Utf8Bom => String::from_utf8(body.to_vec())
            .map_err(|e| malformed(encoding, e.to_string())),
        TextEncoding::Utf16Le => decode_utf16(body, encoding, u16::from_le_bytes),
        TextEncoding::Utf16Be => decode_utf16(body, encoding, u16::from_be_bytes),
        TextEncoding::Windows1252 => WINDOWS_1252
            .decode_without_bom_handling_and_without_replacement(body)
            .map(|text| text.into_owned())
            .ok_or_else(|| malformed(encoding, "unmapped byte".to_string())),
    }
}

fn decode_utf16(
    body: &[u8],
    encoding: TextEncoding,
    unit: fn([u8; 2]) -> u16,
) -> DocumentResult<String> {
    if body.len() % 2 != 0 {
        return Err(malformed(
            encoding,
            format!("odd byte length {}", body.len()),
        ));
    }
    let units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| malformed(encoding, e.to_string()))
}

fn malformed(encoding: TextEncoding, reason: String) -> DocumentError {
    DocumentError::Malformed { encoding, reason }
}

/// Encode `text` for saving, including the encoding's byte-order mark.
///
/// Unicode encodings always succeed. Windows-1252 fails with
/// [`DocumentError::Unencodable`] when the text holds a character the code
/// page cannot represent, naming the first such character.
pub fn encode_document(text: &str, encoding: TextEncoding) -> DocumentResult<Vec<u8>> {
    let mut bytes = encoding.bom().to_vec();
    match encoding {
        TextEncoding::Utf8 | TextEncoding::Utf8Bom => bytes.extend_from_slice(text.as_bytes()),
        TextEncoding::Utf16Le => {
            bytes.reserve(text.len() * 2);
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
        }
        TextEncoding::Utf16Be => {
            bytes.reserve(text.len() * 2);
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
        }
        TextEncoding::Windows1252 => {
            if let Some(character) = text.chars().find(|&c| !fits_windows_1252(c)) {
                return Err(DocumentError::Unencodable {
                    encoding,
                    character: character.to_string(),
                });
            }
            let (encoded, _, _) = WINDOWS_1252.encode(text);
            bytes.extend_from_slice(&encoded);
        }
    }
    Ok(bytes)
}

fn fits_windows_1252(c: char) -> bool {
    if c.is_ascii() {
        return true;
    }
    let mut buf = [0u8; 4];
    let (_, _, unmappable) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
    !unmappable
}

/// An open plain-text document: its text and the encoding to save it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocument {
    pub text: String,
    encoding: TextEncoding,
}

impl TextDocument {
    /// A new, unsaved document in the default encoding.
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            text: initial_text.into(),
            encoding: TextEncoding::default(),
        }
    }

    /// Open a document from raw file contents.
    pub fn from_bytes(bytes: &[u8]) -> DocumentResult<Self> {
        let DecodedDocument { text, encoding } = decode_document(bytes)?;
        Ok(Self { text, encoding })
    }

    /// The encoding this document was loaded with (and will be saved in).
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// File contents for saving.
    pub fn to_bytes(&self) -> DocumentResult<Vec<u8>> {
        encode_document(&self.text, self.encoding)
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new(String::new())
    }
}
