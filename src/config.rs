//! Dashboard Configuration
//!
//! Settings come from a JSON block in the host page, falling back to
//! values baked in at build time and then to defaults:
//!
//! ```html
//! <script id="forms-dashboard-config" type="application/json">
//!   { "apiBaseUrl": "https://forms.example.com/api", "toastDurationMs": 4000 }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

/// Id of the `<script type="application/json">` element holding runtime config
pub const CONFIG_ELEMENT_ID: &str = "forms-dashboard-config";

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the forms REST API, without trailing slash
    pub api_base_url: String,
    /// How long success/error notifications stay visible
    pub toast_duration_ms: u32,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(build_env)
    }
}

/// Values provided through the build environment (`FORMS_*`)
fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "FORMS_API_URL" => option_env!("FORMS_API_URL"),
        "FORMS_TOAST_MS" => option_env!("FORMS_TOAST_MS"),
        "FORMS_LOG_LEVEL" => option_env!("FORMS_LOG_LEVEL"),
        _ => None,
    }
}

impl AppConfig {
    /// Build a config from a key lookup, using defaults for missing or bad values
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let toast_duration_ms = match lookup("FORMS_TOAST_MS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("[CONFIG] Invalid FORMS_TOAST_MS {:?}, using {}", raw, DEFAULT_TOAST_DURATION_MS);
                DEFAULT_TOAST_DURATION_MS
            }),
            None => DEFAULT_TOAST_DURATION_MS,
        };

        Self {
            api_base_url: lookup("FORMS_API_URL").unwrap_or(DEFAULT_API_BASE_URL).to_string(),
            toast_duration_ms,
            log_level: lookup("FORMS_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
        }
        .normalized()
    }

    /// Parse the runtime JSON block; absent fields keep their build-time value
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<AppConfig>(text).map(AppConfig::normalized)
    }

    /// Load config from the host page, falling back to build-time values
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or_else(|_| {
            log::warn!("[CONFIG] Unknown log level {:?}, using {}", self.log_level, DEFAULT_LOG_LEVEL);
            LevelFilter::Info
        })
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() && !self.api_base_url.trim().is_empty() {
            // "/" means same-origin root
            String::new()
        } else {
            trimmed.to_string()
        };
        self
    }
}
