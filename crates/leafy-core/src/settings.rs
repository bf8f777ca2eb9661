//! Back-office settings.
//!
//! [`Settings`] holds everything the admin needs at startup: where the catalog
//! REST API lives, how the dashboard presents itself, and how list views are
//! paginated and shortened. Settings are built once and passed explicitly to
//! whatever needs them; there is no global instance.

use serde::{Deserialize, Serialize};

/// The complete set of back-office settings.
///
/// # Examples
///
/// ```
/// use leafy_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.api_base_url, "http://localhost:8000");
/// assert_eq!(settings.items_per_page, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log filter directive (e.g. "info", "`leafy_client=debug`").
    pub log_level: String,

    // ── Backend ──────────────────────────────────────────────────────

    /// Base URL of the catalog REST API, without trailing slash.
    pub api_base_url: String,
    /// Maximum number of entities requested from the backend for a list view.
    pub fetch_limit: usize,

    // ── Dashboard ────────────────────────────────────────────────────

    /// Address the dashboard router binds to.
    pub listen_addr: String,
    /// URL prefix under which CRUD pages live.
    pub root_url: String,
    /// Brand shown in the dashboard header.
    pub brand_name: String,
    /// Application name shown next to the brand.
    pub app_name: String,
    /// Default UI locale.
    pub default_locale: String,

    // ── List views ───────────────────────────────────────────────────

    /// Number of rows per list page.
    pub items_per_page: usize,
    /// Character budget for long text columns in list views.
    pub truncate_length: usize,
    /// Display string substituted for null values in list views.
    pub null_placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            api_base_url: "http://localhost:8000".to_string(),
            fetch_limit: 100,
            listen_addr: "127.0.0.1:8080".to_string(),
            root_url: "/admin".to_string(),
            brand_name: "Leafy ILS".to_string(),
            app_name: "Admin".to_string(),
            default_locale: "fr".to_string(),
            items_per_page: 10,
            truncate_length: 200,
            null_placeholder: "-".to_string(),
        }
    }
}
