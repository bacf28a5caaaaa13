//! User settings and the engine configuration derived from them
//!
//! Settings are an explicit object handed to the engine at startup. The
//! host persists them through a [`SettingsStore`], one string value per
//! key, so the library never reaches into global storage itself.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};
use crate::occurrences::PATTERN_SIZE_LIMIT;
use crate::span::CoordinateSpace;

/// Settings key for the search highlight color.
pub const KEY_HIGHLIGHT_COLOR: &str = "highlight_color";
/// Settings key for the span coordinate space.
pub const KEY_COORDINATE_SPACE: &str = "coordinate_space";
/// Settings key for the maximum undo depth.
pub const KEY_UNDO_LIMIT: &str = "undo_limit";

/// Largest undo depth accepted from persisted settings.
pub const MAX_UNDO_LIMIT: u32 = 10_000;

/// An opaque RGB color, persisted as `RRGGBB` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HighlightColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HighlightColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Upper-case `RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        // System red, the color search matches have always used
        HighlightColor::rgb(0xFF, 0x3B, 0x30)
    }
}

impl FromStr for HighlightColor {
    type Err = SettingsError;

    /// Accepts `RRGGBB` with an optional leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SettingsError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| SettingsError::InvalidColor(s.to_string()))
        };
        Ok(HighlightColor::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl TryFrom<String> for HighlightColor {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HighlightColor> for String {
    fn from(color: HighlightColor) -> Self {
        color.to_hex()
    }
}

/// Configuration passed into the engine, session and undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Unit for every span the engine reports
    pub coordinate_space: CoordinateSpace,
    /// Foreground color applied to search matches
    pub highlight_color: HighlightColor,
    /// Maximum undo snapshots kept (0 = unbounded)
    pub undo_limit: u32,
    /// Compiled-size ceiling for search patterns; a query over it matches nothing
    pub pattern_size_limit: usize,
}

impl EngineConfig {
    /// Check limits that the type system does not enforce.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.undo_limit > MAX_UNDO_LIMIT {
            return Err(SettingsError::InvalidValue {
                key: KEY_UNDO_LIMIT.to_string(),
                value: self.undo_limit.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Settings::default().engine_config()
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub highlight_color: HighlightColor,
    pub coordinate_space: CoordinateSpace,
    pub undo_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_color: HighlightColor::default(),
            coordinate_space: CoordinateSpace::default(),
            undo_limit: 100,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine configuration these settings describe.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            coordinate_space: self.coordinate_space,
            highlight_color: self.highlight_color,
            undo_limit: self.undo_limit,
            pattern_size_limit: PATTERN_SIZE_LIMIT,
        }
    }

    /// Load settings from a JSON string
    pub fn from_json(json_str: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a TOML string
    pub fn from_toml(toml_str: &str) -> SettingsResult<Self> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to TOML
    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate setting values
    pub fn validate(&self) -> SettingsResult<()> {
        self.engine_config().validate()
    }

    /// Read settings from the host store.
    ///
    /// Missing keys keep their defaults. Values that do not parse are
    /// logged and replaced by the default, so a corrupt entry never keeps
    /// the editor from opening.
    pub fn load_from(store: &dyn SettingsStore) -> Self {
        let mut settings = Settings::default();

        if let Some(raw) = store.load(KEY_HIGHLIGHT_COLOR) {
            match raw.parse() {
                Ok(color) => settings.highlight_color = color,
                Err(e) => tracing::warn!("Ignoring stored highlight color: {}", e),
            }
        }

        if let Some(raw) = store.load(KEY_COORDINATE_SPACE) {
            match CoordinateSpace::from_name(&raw) {
                Some(space) => settings.coordinate_space = space,
                None => tracing::warn!("Ignoring stored coordinate space: {:?}", raw),
            }
        }

        if let Some(raw) = store.load(KEY_UNDO_LIMIT) {
            match raw.trim().parse::<u32>() {
                Ok(limit) if limit <= MAX_UNDO_LIMIT => settings.undo_limit = limit,
                _ => tracing::warn!("Ignoring stored undo limit: {:?}", raw),
            }
        }

        settings
    }

    /// Write every setting back through the host store.
    pub fn persist(&self, store: &mut dyn SettingsStore) -> SettingsResult<()> {
        store.save_setting(KEY_HIGHLIGHT_COLOR, &self.highlight_color.to_hex())?;
        store.save_setting(KEY_COORDINATE_SPACE, self.coordinate_space.as_str())?;
        store.save_setting(KEY_UNDO_LIMIT, &self.undo_limit.to_string())?;
        tracing::debug!("Persisted settings");
        Ok(())
    }

    /// Change the highlight color and write just that key back.
    pub fn set_highlight_color(
        &mut self,
        color: HighlightColor,
        store: &mut dyn SettingsStore,
    ) -> SettingsResult<()> {
        store.save_setting(KEY_HIGHLIGHT_COLOR, &color.to_hex())?;
        self.highlight_color = color;
        Ok(())
    }
}

/// Host-provided key/value persistence for settings.
pub trait SettingsStore {
    /// Stored value for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn save_setting(&mut self, key: &str, value: &str) -> SettingsResult<()>;
}

/// In-memory settings store for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save_setting(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
