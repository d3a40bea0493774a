//! # Params Loading Module
//!
//! Loads [`SiteParams`] from layered sources: a TOML or YAML params file,
//! environment variables sharing a prefix, and programmatic overrides, in
//! that order. Later layers win.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docsmith::core::config::ParamsLoader;
//!
//! let params = ParamsLoader::new()
//!     .with_file("site.toml")
//!     .with_env_prefix("DOCSMITH_")
//!     .with_override("show_nav_items", "false")
//!     .load()
//!     .unwrap();
//!
//! assert!(!params.show_nav_items);
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::error::{DocsmithError, Result};
use crate::params::SiteParams;

/// Serialization format of a params file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsFormat {
    /// TOML, the default.
    Toml,
    /// YAML, chosen for `.yml` and `.yaml` files.
    Yaml,
}

impl ParamsFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext)
                if ext.eq_ignore_ascii_case("yml")
                    || ext.eq_ignore_ascii_case("yaml") =>
            {
                ParamsFormat::Yaml
            }
            _ => ParamsFormat::Toml,
        }
    }
}

/// Builds a [`SiteParams`] value from a file, the environment and overrides.
#[derive(Debug, Default)]
pub struct ParamsLoader {
    params_file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: BTreeMap<String, String>,
}

impl ParamsLoader {
    /// Initialises a new `ParamsLoader` with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a params file.
    ///
    /// # Parameters
    /// - `path`: The path to the TOML or YAML params file.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.params_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a prefix for environment variables to override params.
    ///
    /// `DOCSMITH_SHOW_NAV_ITEMS=false` with prefix `DOCSMITH_` sets
    /// `show_nav_items`.
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Adds a key-value pair to override a param.
    ///
    /// # Parameters
    /// - `key`: The snake_case param name.
    /// - `value`: The new value, parsed according to the param type.
    pub fn with_override<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        _ = self.overrides.insert(key.into(), value.into());
        self
    }

    /// Loads the params by applying every configured source in order.
    ///
    /// The result is not validated; validation belongs to the site
    /// configuration builder.
    pub fn load(self) -> Result<SiteParams> {
        let mut params = if let Some(path) = &self.params_file {
            load_from_file(path)?
        } else {
            SiteParams::default()
        };

        if let Some(prefix) = &self.env_prefix {
            if prefix.is_empty() {
                return Err(DocsmithError::config_error(
                    "Environment prefix must not be empty",
                    None,
                ));
            }
            apply_env_overrides(&mut params, prefix)?;
        }

        for (key, value) in &self.overrides {
            apply_param_value(&mut params, key, value)?;
        }

        Ok(params)
    }
}

fn load_from_file(path: &Path) -> Result<SiteParams> {
    debug!("Loading site params from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        DocsmithError::config_error(
            format!("Failed to read params file: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    let parsed = match ParamsFormat::from_path(path) {
        ParamsFormat::Toml => {
            toml::from_str(&content).map_err(|e| e.to_string())
        }
        ParamsFormat::Yaml => {
            serde_yml::from_str(&content).map_err(|e| e.to_string())
        }
    };

    parsed.map_err(|e| {
        DocsmithError::config_error(
            format!("Failed to parse params file: {}", e),
            Some(path.to_path_buf()),
        )
    })
}

fn apply_env_overrides(params: &mut SiteParams, prefix: &str) -> Result<()> {
    for (key, value) in env::vars() {
        if let Some(stripped) = key.strip_prefix(prefix) {
            let param_key = stripped.trim_start_matches('_').to_lowercase();
            debug!("Applying environment override for '{}'", param_key);
            apply_param_value(params, &param_key, &value)?;
        }
    }
    Ok(())
}

fn apply_param_value(
    params: &mut SiteParams,
    key: &str,
    value: &str,
) -> Result<()> {
    match key {
        "title" => params.title = value.to_string(),
        "tagline" => params.tagline = value.to_string(),
        "url" => params.url = value.to_string(),
        "project_name" => params.project_name = value.to_string(),
        "seo_keywords" => params.seo_keywords = value.to_string(),
        "google_tracking_id" => {
            params.google_tracking_id = value.to_string()
        }
        "facebook_app_id" => params.facebook_app_id = value.to_string(),
        "algolia_app_id" => params.algolia_app_id = optional(value),
        "algolia_api_key" => params.algolia_api_key = optional(value),
        "algolia_index_name" => {
            params.algolia_index_name = optional(value)
        }
        "show_content_footer_ebook_wrapper" => {
            params.show_content_footer_ebook_wrapper =
                parse_bool(key, value)?
        }
        "show_nav_items" => params.show_nav_items = parse_bool(key, value)?,
        _ => {
            return Err(DocsmithError::config_error(
                format!("Unknown site param: {}", key),
                None,
            ));
        }
    }
    Ok(())
}

// An empty override clears an optional param.
fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|e| {
        DocsmithError::config_error(
            format!("Invalid {} value '{}': {}", key, value, e),
            None,
        )
    })
}

/// Tests for the params loading module.
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ParamsFormat::from_path(Path::new("site.toml")),
            ParamsFormat::Toml
        );
        assert_eq!(
            ParamsFormat::from_path(Path::new("site.YAML")),
            ParamsFormat::Yaml
        );
        assert_eq!(
            ParamsFormat::from_path(Path::new("site.yml")),
            ParamsFormat::Yaml
        );
        assert_eq!(
            ParamsFormat::from_path(Path::new("site")),
            ParamsFormat::Toml
        );
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let params_file = temp_dir.path().join("site.toml");
        fs::write(
            &params_file,
            "title = 'Go'\nurl = 'https://go.example'\nshow_nav_items = false\n",
        )
        .unwrap();

        let params = load_from_file(&params_file).unwrap();
        assert_eq!(params.title, "Go");
        assert_eq!(params.url, "https://go.example");
        assert!(!params.show_nav_items);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let params_file = temp_dir.path().join("site.yaml");
        fs::write(
            &params_file,
            "title: Go\nprojectName: go-book\nalgoliaAppID: APP\n",
        )
        .unwrap();

        let params = load_from_file(&params_file).unwrap();
        assert_eq!(params.title, "Go");
        assert_eq!(params.project_name, "go-book");
        assert_eq!(params.algolia_app_id.as_deref(), Some("APP"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ParamsLoader::new()
            .with_file("does/not/exist.toml")
            .load()
            .unwrap_err();
        match err {
            DocsmithError::ConfigError { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("does/not/exist.toml")))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let params_file = temp_dir.path().join("site.toml");
        fs::write(&params_file, "title = ").unwrap();
        assert!(ParamsLoader::new().with_file(&params_file).load().is_err());
    }

    #[test]
    fn test_overrides() {
        let params = ParamsLoader::new()
            .with_override("title", "Overridden")
            .with_override("show_content_footer_ebook_wrapper", "false")
            .with_override("algolia_app_id", "APP")
            .load()
            .unwrap();
        assert_eq!(params.title, "Overridden");
        assert!(!params.show_content_footer_ebook_wrapper);
        assert_eq!(params.algolia_app_id.as_deref(), Some("APP"));
    }

    #[test]
    fn test_override_empty_clears_optional() {
        let mut params = SiteParams::default();
        params.algolia_app_id = Some("APP".to_string());
        apply_param_value(&mut params, "algolia_app_id", "").unwrap();
        assert!(params.algolia_app_id.is_none());
    }

    #[test]
    fn test_unknown_override_key() {
        let result = ParamsLoader::new()
            .with_override("colour", "blue")
            .load();
        assert!(matches!(result, Err(DocsmithError::ConfigError { .. })));
    }

    #[test]
    fn test_invalid_bool_override() {
        let result = ParamsLoader::new()
            .with_override("show_nav_items", "maybe")
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_env_prefix_is_rejected() {
        let result = ParamsLoader::new().with_env_prefix("").load();
        match result {
            Err(DocsmithError::ConfigError { message, .. }) => {
                assert!(message.contains("prefix must not be empty"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("DOCSMITH_TEST_ENV_TAGLINE", "from env");
        let mut params = SiteParams::default();

        apply_env_overrides(&mut params, "DOCSMITH_TEST_ENV").unwrap();
        assert_eq!(params.tagline, "from env");
        env::remove_var("DOCSMITH_TEST_ENV_TAGLINE");
    }
}
