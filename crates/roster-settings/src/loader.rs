//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`RosterSettings::default()`]
//! 2. If the settings file exists, deep-merge its values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::{LogFormat, RosterSettings};

/// Resolve the default settings file path (`~/.roster/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".roster").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<RosterSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. An unreadable file, invalid JSON, or an
/// out-of-range value is an error.
pub fn load_settings_from_path(path: &Path) -> Result<RosterSettings> {
    let defaults = serde_json::to_value(RosterSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: RosterSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = match target_map.remove(&key) {
                    Some(target_val) => deep_merge(target_val, source_val),
                    None => source_val,
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(settings: &mut RosterSettings) {
    apply_env_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Apply overrides using `lookup` to read variables.
///
/// Empty values are treated as unset. Invalid values are ignored with a
/// warning, leaving the file/default value in place.
pub fn apply_env_overrides_from<F>(settings: &mut RosterSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    // ── Server ──────────────────────────────────────────────────────
    if let Some(val) = read("PORT") {
        match parse_u16_range(&val, 1, 65535) {
            Some(port) => settings.server.port = port,
            None => warn!(key = "PORT", value = %val, "invalid port env var, ignoring"),
        }
    }
    if let Some(val) = read("ROSTER_HOST") {
        settings.server.host = val;
    }

    // ── Database ────────────────────────────────────────────────────
    if let Some(val) = read("ROSTER_DB_PATH") {
        settings.database.path = val;
    }

    // ── Logging ─────────────────────────────────────────────────────
    if let Some(val) = read("ROSTER_LOG_LEVEL") {
        settings.logging.level = val;
    }
    if let Some(val) = read("ROSTER_LOG_FORMAT") {
        match val.parse::<LogFormat>() {
            Ok(format) => settings.logging.format = format,
            Err(_) => {
                warn!(key = "ROSTER_LOG_FORMAT", value = %val, "invalid log format env var, ignoring");
            }
        }
    }
}

/// Parse a string as a `u16` within an inclusive range.
pub fn parse_u16_range(val: &str, min: u16, max: u16) -> Option<u16> {
    let n: u16 = val.trim().parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
