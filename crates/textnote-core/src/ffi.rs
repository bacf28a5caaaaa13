//! UniFFI bindings for textnote-core.
//!
//! The pure functions (`count_words`, `find_occurrences`, `find_urls`,
//! `describe_results`, `highlight`) are exported where they are defined.
//! This module adds the editor object the Swift host keeps per open
//! document, plus byte-oriented wrappers for the document codec.

use std::sync::{Mutex, MutexGuard};

use crate::document::{self, DecodedDocument, TextEncoding};
use crate::error::{DocumentError, SettingsError};
use crate::editor::TextEditor;
use crate::highlight::{HighlightSnapshot, HighlightStyle};
use crate::occurrences::PATTERN_SIZE_LIMIT;
use crate::session::{EditorEvent, SearchState};
use crate::settings::{EngineConfig, HighlightColor};
use crate::span::{CoordinateSpace, MatchSpan};

/// FFI-safe highlight style.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FfiHighlightStyle {
    /// Foreground color as `RRGGBB` hex
    Foreground { color_hex: String },
    Underline,
}

impl From<HighlightStyle> for FfiHighlightStyle {
    fn from(style: HighlightStyle) -> Self {
        match style {
            HighlightStyle::Foreground { color } => FfiHighlightStyle::Foreground {
                color_hex: color.to_hex(),
            },
            HighlightStyle::Underline => FfiHighlightStyle::Underline,
        }
    }
}

/// FFI-safe styled span.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiStyledSpan {
    pub span: MatchSpan,
    pub style: FfiHighlightStyle,
}

/// Engine options passed in by the host at startup.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEngineConfig {
    pub coordinate_space: CoordinateSpace,
    pub highlight_color_hex: String,
    pub undo_limit: u32,
}

impl TryFrom<FfiEngineConfig> for EngineConfig {
    type Error = SettingsError;

    fn try_from(config: FfiEngineConfig) -> Result<Self, Self::Error> {
        let engine = EngineConfig {
            coordinate_space: config.coordinate_space,
            highlight_color: config.highlight_color_hex.parse::<HighlightColor>()?,
            undo_limit: config.undo_limit,
            pattern_size_limit: PATTERN_SIZE_LIMIT,
        };
        engine.validate()?;
        Ok(engine)
    }
}

/// FFI wrapper for one open document's search session and undo history.
#[derive(uniffi::Object)]
pub struct FfiTextEditor {
    editor: Mutex<TextEditor>,
}

impl FfiTextEditor {
    // A panic in one host callback must not wedge the editor for good.
    fn lock(&self) -> MutexGuard<'_, TextEditor> {
        self.editor.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[uniffi::export]
impl FfiTextEditor {
    /// Create an editor with default settings.
    #[uniffi::constructor]
    pub fn new(text: String) -> Self {
        Self {
            editor: Mutex::new(TextEditor::new(EngineConfig::default(), text)),
        }
    }

    /// Create an editor with host-provided settings.
    #[uniffi::constructor]
    pub fn with_config(config: FfiEngineConfig, text: String) -> Result<Self, SettingsError> {
        Ok(Self {
            editor: Mutex::new(TextEditor::new(config.try_into()?, text)),
        })
    }

    /// Current search state.
    pub fn state(&self) -> SearchState {
        self.lock().state()
    }

    /// Current document text.
    pub fn text(&self) -> String {
        self.lock().text().to_string()
    }

    /// Current snapshot without recomputing.
    pub fn snapshot(&self) -> HighlightSnapshot {
        self.lock().snapshot().clone()
    }

    /// Forward an edit event; text changes are recorded for undo.
    pub fn handle_event(&self, event: EditorEvent) -> HighlightSnapshot {
        self.lock().handle_event(event).clone()
    }

    /// Spans with their styles, ready for the text view.
    pub fn styled_spans(&self) -> Vec<FfiStyledSpan> {
        self.lock()
            .styled_spans()
            .into_iter()
            .map(|styled| FfiStyledSpan {
                span: styled.span,
                style: styled.style.into(),
            })
            .collect()
    }

    /// Restore the text before the last edit; `None` when there is nothing to undo.
    pub fn undo(&self) -> Option<HighlightSnapshot> {
        self.lock().undo().cloned()
    }

    /// Re-apply the last undone edit.
    pub fn redo(&self) -> Option<HighlightSnapshot> {
        self.lock().redo().cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.lock().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.lock().can_redo()
    }
}

/// Detect the encoding of raw file contents.
#[uniffi::export]
pub fn detect_encoding_ffi(bytes: Vec<u8>) -> Result<TextEncoding, DocumentError> {
    document::detect_encoding(&bytes)
}

/// Decode raw file contents into text plus encoding.
#[uniffi::export]
pub fn decode_document_ffi(bytes: Vec<u8>) -> Result<DecodedDocument, DocumentError> {
    document::decode_document(&bytes)
}

/// Encode text for saving in the given encoding.
#[uniffi::export]
pub fn encode_document_ffi(text: String, encoding: TextEncoding) -> Result<Vec<u8>, DocumentError> {
    document::encode_document(&text, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MAX_UNDO_LIMIT;

    fn host_config(undo_limit: u32) -> FfiEngineConfig {
        FfiEngineConfig {
            coordinate_space: CoordinateSpace::Utf16,
            highlight_color_hex: "#34C759".to_string(),
            undo_limit,
        }
    }

    #[test]
    fn host_config_converts() {
        let config = EngineConfig::try_from(host_config(25)).unwrap();
        assert_eq!(config.undo_limit, 25);
        assert_eq!(config.highlight_color.to_hex(), "34C759");
    }

    #[test]
    fn host_config_rejects_oversized_undo_limit() {
        let result = EngineConfig::try_from(host_config(MAX_UNDO_LIMIT + 1));
        assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));
        assert!(FfiTextEditor::with_config(host_config(MAX_UNDO_LIMIT + 1), "x".to_string()).is_err());
    }

    #[test]
    fn legacy_documents_round_trip_through_ffi() {
        let decoded = decode_document_ffi(vec![b'f', 0xFC, b'r']).unwrap();
        assert_eq!(decoded.text, "für");
        assert_eq!(decoded.encoding, TextEncoding::Windows1252);
        assert_eq!(
            encode_document_ffi(decoded.text, decoded.encoding).unwrap(),
            vec![b'f', 0xFC, b'r']
        );
    }
}
