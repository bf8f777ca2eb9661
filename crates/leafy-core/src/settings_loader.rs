//! Settings loading from TOML files and the environment.
//!
//! ## Loading Order
//!
//! 1. Start with [`Settings::default`].
//! 2. Merge a TOML file over the defaults (keys absent from the file keep
//!    their default value).
//! 3. Apply `LEAFY_*` environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `LEAFY_DEBUG` | `debug` |
//! | `LEAFY_LOG_LEVEL` | `log_level` |
//! | `LEAFY_API_BASE_URL` | `api_base_url` |
//! | `LEAFY_FETCH_LIMIT` | `fetch_limit` |
//! | `LEAFY_LISTEN_ADDR` | `listen_addr` |
//! | `LEAFY_ROOT_URL` | `root_url` |
//! | `LEAFY_DEFAULT_LOCALE` | `default_locale` |
//! | `LEAFY_ITEMS_PER_PAGE` | `items_per_page` |
//! | `LEAFY_TRUNCATE_LENGTH` | `truncate_length` |
//! | `LEAFY_NULL_PLACEHOLDER` | `null_placeholder` |
//! | `LEAFY_BRAND_NAME` | `brand_name` |
//! | `LEAFY_APP_NAME` | `app_name` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use leafy_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("leafy.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::LeafyError;
use crate::settings::Settings;

/// Loads settings from a TOML string, keeping defaults for missing keys.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or a value has the wrong type.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, LeafyError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| LeafyError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        LeafyError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, toml_to_json(toml_value));
    serde_json::from_value(merged).map_err(|e| {
        LeafyError::ConfigurationError(format!("Failed to deserialize settings from TOML: {e}"))
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, LeafyError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        LeafyError::ConfigurationError(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, LeafyError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from environment variables only, starting from defaults.
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `LEAFY_*` environment variable overrides to `settings`.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Applies overrides using `lookup` to resolve variable names.
///
/// Numeric variables that fail to parse are ignored and the previous value is
/// kept, with a warning.
pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("LEAFY_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }
    if let Some(val) = lookup("LEAFY_LOG_LEVEL") {
        settings.log_level = val;
    }
    if let Some(val) = lookup("LEAFY_API_BASE_URL") {
        settings.api_base_url = val.trim_end_matches('/').to_string();
    }
    if let Some(val) = lookup("LEAFY_LISTEN_ADDR") {
        settings.listen_addr = val;
    }
    if let Some(val) = lookup("LEAFY_ROOT_URL") {
        settings.root_url = val;
    }
    if let Some(val) = lookup("LEAFY_DEFAULT_LOCALE") {
        settings.default_locale = val;
    }
    if let Some(val) = lookup("LEAFY_NULL_PLACEHOLDER") {
        settings.null_placeholder = val;
    }
    if let Some(val) = lookup("LEAFY_BRAND_NAME") {
        settings.brand_name = val;
    }
    if let Some(val) = lookup("LEAFY_APP_NAME") {
        settings.app_name = val;
    }

    for (key, target) in [
        ("LEAFY_FETCH_LIMIT", &mut settings.fetch_limit),
        ("LEAFY_ITEMS_PER_PAGE", &mut settings.items_per_page),
        ("LEAFY_TRUNCATE_LENGTH", &mut settings.truncate_length),
    ] {
        if let Some(val) = lookup(key) {
            match val.parse::<usize>() {
                Ok(n) => *target = n,
                Err(_) => tracing::warn!(key, value = %val, "ignoring non-numeric override"),
            }
        }
    }
}

// ── TOML layering ───────────────────────────────────────────────────

/// Mirrors a parsed settings file as JSON so it can be laid over the
/// serialized [`Settings::default`]. TOML datetimes have no `Settings` field
/// to land in and are kept as their string form.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Lays the keys of a settings file over the defaults.
///
/// Tables merge key by key. Any other value from the file replaces the
/// default outright, so a file listing `items_per_page` alone leaves every
/// other default untouched.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = match base_map.remove(&key) {
                    Some(base_v) => merge_json(base_v, override_v),
                    None => override_v,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
