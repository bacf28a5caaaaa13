//! textnote-core: search, highlight and document core for the textnote editor
//!
//! This crate holds the logic behind the editor's search bar and status
//! line, kept free of any UI so it can be driven from Swift via UniFFI:
//! - Word counting for the status line
//! - Case-insensitive, literal, non-overlapping occurrence search
//! - URL detection for underline highlighting
//! - Status text ("Found 3 repeats" / "Words count: 12")
//! - An idle/searching session driven by explicit editor events
//! - Snapshot undo/redo
//! - Encoding detection and round-tripping for plain-text files
//! - Settings persisted through a host-provided store
//!
//! Spans are reported in UTF-16 code units by default so they can be used
//! as `NSRange` values directly; see [`CoordinateSpace`].

pub mod describe;
pub mod document;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod history;
pub mod occurrences;
pub mod session;
pub mod settings;
pub mod span;
pub mod urls;
pub mod words;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use describe::*;
pub use document::*;
pub use editor::*;
pub use error::*;
pub use highlight::*;
pub use history::*;
pub use occurrences::*;
pub use session::*;
pub use settings::*;
pub use span::*;
pub use urls::*;
pub use words::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
