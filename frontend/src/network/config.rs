use std::collections::HashMap;

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::{DEV_API_ORIGIN, DEV_HOSTNAMES};

/// API route configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Local development backend.  Only meant for unit-tests and the short
    /// window before `ApiConfig::detect()` runs during start-up.
    fn default() -> Self {
        Self::from_url(DEV_API_ORIGIN)
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Pick the backend origin for a page served from `hostname` at `origin`:
    /// dev hosts talk to the fixed local backend, anything else is same-origin.
    pub fn for_location(hostname: &str, origin: &str) -> Self {
        if DEV_HOSTNAMES.contains(&hostname) {
            Self::from_url(DEV_API_ORIGIN)
        } else {
            Self::from_url(origin)
        }
    }

    /// Resolve the configuration for the running page.  A runtime override
    /// wins over the build-time `API_BASE_URL`, which wins over detection
    /// from `window.location`.
    pub fn detect(runtime_override: Option<&str>) -> Self {
        if let Some(url) = runtime_override.filter(|u| !u.trim().is_empty()) {
            return Self::from_url(url);
        }
        if let Some(url) = option_env!("API_BASE_URL").filter(|u| !u.trim().is_empty()) {
            return Self::from_url(url);
        }
        let location = web_sys::window().map(|w| w.location());
        match location {
            Some(loc) => {
                let hostname = loc.hostname().unwrap_or_default();
                let origin = loc.origin().unwrap_or_default();
                Self::for_location(&hostname, &origin)
            }
            None => Self::default(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full API URL for a given path
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Absolute URL of a server-relative resource (response media).
    pub fn resource_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Shape of the optional `window.DATAR_CONFIG` object the host page may
/// define before loading the bundle.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub agent_icons: HashMap<String, String>,
}

impl ClientConfig {
    pub fn from_js(value: JsValue) -> Result<Self, serde_wasm_bindgen::Error> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
    }

    /// Read `window.DATAR_CONFIG`.  A malformed object is logged and ignored.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str("DATAR_CONFIG"))
            .unwrap_or(JsValue::UNDEFINED);
        match Self::from_js(raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                crate::warn_log!("Ignoring malformed DATAR_CONFIG: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_hosts_target_local_backend() {
        let cfg = ApiConfig::for_location("localhost", "http://localhost:5500");
        assert_eq!(cfg.base_url(), "http://localhost:8000");
        let cfg = ApiConfig::for_location("127.0.0.1", "http://127.0.0.1:3000");
        assert_eq!(cfg.base_url(), "http://localhost:8000");
    }

    #[test]
    fn other_hosts_are_same_origin() {
        let cfg = ApiConfig::for_location("datar.example.org", "https://datar.example.org/");
        assert_eq!(cfg.base_url(), "https://datar.example.org");
        assert_eq!(cfg.url("/agents"), "https://datar.example.org/api/agents");
    }

    #[test]
    fn runtime_override_wins() {
        let cfg = ApiConfig::detect(Some("https://api.example.org/"));
        assert_eq!(cfg.base_url(), "https://api.example.org");
    }

    #[test]
    fn resource_urls_resolve_against_base() {
        let cfg = ApiConfig::from_url("http://localhost:8000");
        assert_eq!(cfg.resource_url("/outputs/a.png"), "http://localhost:8000/outputs/a.png");
        assert_eq!(cfg.resource_url("outputs/a.png"), "http://localhost:8000/outputs/a.png");
        assert_eq!(cfg.resource_url("https://cdn.example.org/a.png"), "https://cdn.example.org/a.png");
    }
}
