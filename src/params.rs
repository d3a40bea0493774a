// Copyright © 2024 Docsmith. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Site Parameters
//!
//! [`SiteParams`] is the input of the site configuration builder: the
//! identity of one deployed documentation site plus its feature flags.
//!
//! Params files may spell keys in snake_case or in the camelCase used by
//! existing site definitions (`projectName`, `googleTrackingID`, ...).
//! Required fields that are missing from a file are read as empty strings,
//! so that [`SiteParams::validate`] reports them by name.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::error::{DocsmithError, Result};

/// Identity and feature flags of one documentation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteParams {
    /// Site title, shown in the navbar and the logo alt text.
    #[serde(default)]
    pub title: String,

    /// One-line tagline.
    #[serde(default)]
    pub tagline: String,

    /// Canonical site URL, without a trailing slash.
    #[serde(default)]
    pub url: String,

    /// Deployment project name.
    #[serde(default, alias = "projectName")]
    pub project_name: String,

    /// Value of the `keywords` metadata entry.
    #[serde(default, alias = "seoKeywords")]
    pub seo_keywords: String,

    /// Analytics tracking ID wired into the classic preset.
    #[serde(default, alias = "googleTrackingID")]
    pub google_tracking_id: String,

    /// Value of the `fb:app_id` metadata entry.
    #[serde(default, alias = "facebookAppID")]
    pub facebook_app_id: String,

    /// Search application ID. Search is enabled only when this is set and
    /// non-empty.
    #[serde(default, alias = "algoliaAppID")]
    pub algolia_app_id: Option<String>,

    /// Search API key.
    #[serde(default, alias = "algoliaApiKey")]
    pub algolia_api_key: Option<String>,

    /// Search index name.
    #[serde(default, alias = "algoliaIndexName")]
    pub algolia_index_name: Option<String>,

    /// Whether the theme shows the ebook promotion below each page.
    #[serde(default = "default_true", alias = "showContentFooterEbookWrapper")]
    pub show_content_footer_ebook_wrapper: bool,

    /// Whether the navbar carries the cross-promotion menus.
    #[serde(default = "default_true", alias = "showNavItems")]
    pub show_nav_items: bool,
}

impl Default for SiteParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: String::new(),
            project_name: String::new(),
            seo_keywords: String::new(),
            google_tracking_id: String::new(),
            facebook_app_id: String::new(),
            algolia_app_id: None,
            algolia_api_key: None,
            algolia_index_name: None,
            show_content_footer_ebook_wrapper: true,
            show_nav_items: true,
        }
    }
}

impl SiteParams {
    /// Creates params with the required identity fields set and every
    /// optional field at its default.
    pub fn new<S: Into<String>>(
        title: S,
        tagline: S,
        url: S,
        project_name: S,
    ) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            url: url.into(),
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Sets the `keywords` metadata value.
    pub fn with_seo_keywords<S: Into<String>>(mut self, keywords: S) -> Self {
        self.seo_keywords = keywords.into();
        self
    }

    /// Sets the analytics tracking ID.
    pub fn with_google_tracking_id<S: Into<String>>(mut self, id: S) -> Self {
        self.google_tracking_id = id.into();
        self
    }

    /// Sets the `fb:app_id` metadata value.
    pub fn with_facebook_app_id<S: Into<String>>(mut self, id: S) -> Self {
        self.facebook_app_id = id.into();
        self
    }

    /// Sets all three search credentials.
    pub fn with_algolia<S: Into<String>>(
        mut self,
        app_id: S,
        api_key: S,
        index_name: S,
    ) -> Self {
        self.algolia_app_id = Some(app_id.into());
        self.algolia_api_key = Some(api_key.into());
        self.algolia_index_name = Some(index_name.into());
        self
    }

    /// Toggles the ebook promotion footer.
    pub fn with_content_footer_ebook_wrapper(mut self, show: bool) -> Self {
        self.show_content_footer_ebook_wrapper = show;
        self
    }

    /// Toggles the navbar cross-promotion menus.
    pub fn with_nav_items(mut self, show: bool) -> Self {
        self.show_nav_items = show;
        self
    }

    /// Returns the search application ID if search should be enabled.
    ///
    /// An empty ID counts as absent.
    pub fn search_app_id(&self) -> Option<&str> {
        self.algolia_app_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Checks that every required field is present and that `url` can be
    /// used as a prefix for derived URLs.
    ///
    /// # Errors
    ///
    /// - [`DocsmithError::MissingField`] for the first empty required field.
    /// - [`DocsmithError::InvalidUrl`] when `url` does not parse, is not
    ///   http(s), or ends with a slash.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("url", &self.url),
            ("project_name", &self.project_name),
            ("seo_keywords", &self.seo_keywords),
            ("google_tracking_id", &self.google_tracking_id),
            ("facebook_app_id", &self.facebook_app_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DocsmithError::MissingField { field });
            }
        }
        validate_url(&self.url)
    }
}

fn validate_url(raw: &str) -> Result<()> {
    if raw != raw.trim() {
        return Err(DocsmithError::invalid_url(
            raw,
            "must not have surrounding whitespace",
        ));
    }

    if raw.ends_with('/') {
        return Err(DocsmithError::invalid_url(
            raw,
            "must not end with a slash",
        ));
    }

    let parsed = Url::parse(raw)
        .map_err(|e| DocsmithError::invalid_url(raw, e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(DocsmithError::invalid_url(
                raw,
                format!("unsupported scheme `{scheme}`"),
            ))
        }
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(DocsmithError::invalid_url(
            raw,
            "must not carry a query or fragment",
        ));
    }

    // Derived URLs are built by appending paths to the raw string.
    if parsed.as_str().trim_end_matches('/') != raw {
        return Err(DocsmithError::invalid_url(
            raw,
            format!("is not in canonical form `{}`", parsed.as_str()),
        ));
    }

    Ok(())
}

fn default_true() -> bool {
    true
}
