//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timing: TimingSettings,
    pub indicator: IndicatorSettings,
    pub feedback: FeedbackSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingSettings {
    /// Debounce window in milliseconds: presses closer together than this
    /// merge into one chord.
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorSettings {
    /// Show accumulated dot numbers while a chord is pending.
    pub show_pending: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    /// Play a sound on mode toggle, in hosts that support it.
    pub enabled: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if !(10..=2000).contains(&s.timing.debounce_ms) {
        return Err(SettingsError::InvalidValue {
            field: "timing.debounce_ms".to_string(),
            reason: format!("must be in 10..=2000, got {}", s.timing.debounce_ms),
        });
    }
    Ok(())
}
