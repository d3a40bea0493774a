// Copyright © 2024 Docsmith. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Docsmith Library
//!
//! Docsmith turns the identity of a documentation site (title, tagline,
//! URL, analytics and search credentials, feature flags) into the complete
//! configuration object of a Docusaurus-style site engine.
//!
//! The library is organised as:
//! - [`params`]: the [`SiteParams`] input record and its validation,
//! - [`builder`]: the [`ConfigBuilder`] that produces a [`SiteConfig`],
//! - [`model`]: the output shape,
//! - [`profile`]: the maintainer identity injected into every site,
//! - [`emit`]: JSON and CommonJS output,
//! - [`core`](crate::core): params loading, errors and the clock capability.

#![doc = include_str!("../README.md")]
#![crate_name = "docsmith"]
#![crate_type = "lib"]

/// Module containing core utilities, such as params loading and error handling.
pub mod core {
    /// Loads site params from files, the environment and overrides.
    pub mod config;
    /// Contains error types and handling for Docsmith.
    pub mod error;
    /// Capabilities injected into the builder.
    pub mod traits;
}

/// Site configuration builder.
pub mod builder;

/// Provides command-line interface utilities.
pub mod cli;

/// Rendering and writing of built configurations.
pub mod emit;

/// Output shape consumed by the site engine.
pub mod model;

/// Input record describing one site.
pub mod params;

/// Maintainer identity shared by all sites.
pub mod profile;

pub use crate::builder::ConfigBuilder;
pub use crate::core::error::{DocsmithError, Result};
pub use crate::model::SiteConfig;
pub use crate::params::SiteParams;

/// Builds the configuration of one site with the built-in profile, the
/// system clock and strict validation.
///
/// # Errors
///
/// Returns [`DocsmithError::MissingField`] or [`DocsmithError::InvalidUrl`]
/// when `params` fail validation.
pub fn build_config(params: &SiteParams) -> Result<SiteConfig> {
    ConfigBuilder::new().build(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_with_defaults() -> Result<()> {
        let params = SiteParams::new(
            "How To",
            "Tips",
            "https://howto.novalagung.com",
            "howto",
        )
        .with_seo_keywords("howto")
        .with_google_tracking_id("G-1")
        .with_facebook_app_id("1");

        let config = build_config(&params)?;
        assert_eq!(config.title, "How To");
        assert!(config.theme_config.algolia.is_none());
        assert_eq!(config.theme_config.navbar.items[0].items.len(), 3);
        Ok(())
    }

    #[test]
    fn test_build_config_rejects_missing_url() {
        let params = SiteParams::default();
        assert!(build_config(&params).is_err());
    }
}
