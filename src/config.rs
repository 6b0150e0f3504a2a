//! Backend connection settings.
//!
//! The base URL depends on the build mode: `production` reads
//! `VITE_API_BASE_URL_PROD`, every other mode reads `VITE_API_BASE_URL`.
//! These are the same variables the web front end is built with, so a
//! shared `.env` works for both.

use thiserror::Error;

pub const MODE_VAR: &str = "MODE";
pub const BASE_URL_VAR: &str = "VITE_API_BASE_URL";
pub const BASE_URL_PROD_VAR: &str = "VITE_API_BASE_URL_PROD";
pub const CATALOG_PREFIX_VAR: &str = "API_CATALOG_PREFIX";
pub const MEDIA_PREFIX_VAR: &str = "API_MEDIA_PREFIX";

pub const PRODUCTION_MODE: &str = "production";
pub const DEFAULT_MODE: &str = "development";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default namespace for places, categories and tags.
pub const DEFAULT_CATALOG_PREFIX: &str = "/base";
/// Default namespace for place images and social media records.
pub const DEFAULT_MEDIA_PREFIX: &str = "/admin";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyPrefix(&'static str),
}

/// Path namespaces for the resource endpoints.
///
/// The backend has served the same operations under both `/base` and
/// `/admin`; each group's prefix can be set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespaces {
    pub catalog: String,
    pub media: String,
}

impl Namespaces {
    /// Path under the catalog namespace, e.g. `/base` + `/places/`.
    pub fn catalog_path(&self, rest: &str) -> String {
        format!("{}{}", self.catalog, rest)
    }

    /// Path under the media namespace, e.g. `/admin` + `/images/3/`.
    pub fn media_path(&self, rest: &str) -> String {
        format!("{}{}", self.media, rest)
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG_PREFIX.to_string(),
            media: DEFAULT_MEDIA_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub mode: String,
    pub base_url: String,
    pub namespaces: Namespaces,
}

impl ApiConfig {
    /// Config for an explicit base URL with default namespaces.
    pub fn new(base_url: &str) -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            base_url: base_url.to_string(),
            namespaces: Namespaces::default(),
        }
    }

    /// Read settings from the process environment.
    ///
    /// `mode` overrides `MODE` when given.
    pub fn from_env(mode: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_lookup(mode, |key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(mode: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = mode
            .map(str::to_string)
            .or_else(|| lookup(MODE_VAR))
            .unwrap_or_else(|| DEFAULT_MODE.to_string());

        let url_var = if mode == PRODUCTION_MODE {
            BASE_URL_PROD_VAR
        } else {
            BASE_URL_VAR
        };
        let base_url = match lookup(url_var).filter(|v| !v.trim().is_empty()) {
            Some(url) => url,
            None => {
                log::warn!("{} is not set, using {}", url_var, DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        };

        let catalog = match lookup(CATALOG_PREFIX_VAR) {
            Some(raw) => normalize_prefix(&raw, CATALOG_PREFIX_VAR)?,
            None => DEFAULT_CATALOG_PREFIX.to_string(),
        };
        let media = match lookup(MEDIA_PREFIX_VAR) {
            Some(raw) => normalize_prefix(&raw, MEDIA_PREFIX_VAR)?,
            None => DEFAULT_MEDIA_PREFIX.to_string(),
        };

        Ok(Self {
            mode,
            base_url,
            namespaces: Namespaces { catalog, media },
        })
    }

    pub fn is_production(&self) -> bool {
        self.mode == PRODUCTION_MODE
    }
}

/// `admin/` -> `/admin`, `/base` -> `/base`.
fn normalize_prefix(raw: &str, var: &'static str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyPrefix(var));
    }
    Ok(format!("/{}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_development_mode_uses_dev_url() {
        let config = ApiConfig::from_lookup(
            None,
            lookup(&[
                (BASE_URL_VAR, "http://dev.local"),
                (BASE_URL_PROD_VAR, "https://api.example.com"),
            ]),
        )
        .unwrap();
        assert_eq!(config.mode, DEFAULT_MODE);
        assert_eq!(config.base_url, "http://dev.local");
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_mode_uses_prod_url() {
        let config = ApiConfig::from_lookup(
            None,
            lookup(&[
                (MODE_VAR, "production"),
                (BASE_URL_VAR, "http://dev.local"),
                (BASE_URL_PROD_VAR, "https://api.example.com"),
            ]),
        )
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_explicit_mode_overrides_env() {
        let config = ApiConfig::from_lookup(
            Some("production"),
            lookup(&[
                (MODE_VAR, "staging"),
                (BASE_URL_VAR, "http://dev.local"),
                (BASE_URL_PROD_VAR, "https://api.example.com"),
            ]),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_unknown_mode_falls_back_to_dev_url() {
        let config = ApiConfig::from_lookup(
            Some("staging"),
            lookup(&[(BASE_URL_VAR, "http://dev.local")]),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://dev.local");
    }

    #[test]
    fn test_missing_url_uses_default() {
        let config = ApiConfig::from_lookup(None, lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.namespaces, Namespaces::default());
    }

    #[test]
    fn test_prefixes_are_normalized() {
        let config = ApiConfig::from_lookup(
            None,
            lookup(&[(CATALOG_PREFIX_VAR, "admin/"), (MEDIA_PREFIX_VAR, " /base ")]),
        )
        .unwrap();
        assert_eq!(config.namespaces.catalog, "/admin");
        assert_eq!(config.namespaces.media, "/base");
    }

    #[test]
    fn test_namespace_paths() {
        let ns = Namespaces::default();
        assert_eq!(ns.catalog_path("/places/"), "/base/places/");
        assert_eq!(ns.media_path("/images/3/"), "/admin/images/3/");
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let result = ApiConfig::from_lookup(None, lookup(&[(MEDIA_PREFIX_VAR, "/")]));
        assert_eq!(result, Err(ConfigError::EmptyPrefix(MEDIA_PREFIX_VAR)));
    }
}
