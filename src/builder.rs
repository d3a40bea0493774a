// Copyright © 2024 Docsmith. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Site Configuration Builder
//!
//! Maps [`SiteParams`] onto a complete [`SiteConfig`]. Identity fields are
//! copied into every place the engine expects them, constants fill the
//! rest, and two pieces of the output are conditional:
//!
//! - the navbar menus are empty when `show_nav_items` is off, and the ebook
//!   menu never links to the site being built;
//! - the search widget exists only when a search application ID is given.
//!
//! ```
//! use docsmith::builder::ConfigBuilder;
//! use docsmith::core::traits::FixedClock;
//! use docsmith::SiteParams;
//!
//! let params = SiteParams::new("My Site", "T", "https://example.com", "p")
//!     .with_seo_keywords("k")
//!     .with_google_tracking_id("g")
//!     .with_facebook_app_id("f");
//!
//! let config = ConfigBuilder::new()
//!     .with_clock(FixedClock::from_year(2024).unwrap())
//!     .build(&params)
//!     .unwrap();
//!
//! assert!(config.theme_config.algolia.is_none());
//! assert_eq!(config.theme_config.footer.copyright, "2024 | Maintained by Noval Agung Prayogo");
//! ```

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::core::error::Result;
use crate::core::traits::{Clock, SystemClock};
use crate::model::{
    AlgoliaConfig, AuthorProfile, CodeTheme, ContactPoint, DocsOptions,
    Footer, GtagOptions, I18nConfig, ImageDimensions, ImageObject,
    LanguageNode, Logo, MetaTag, NavItem, NavLink, Navbar, Organization,
    Preset, PresetOptions, PresetTheme, PrismConfig, SiteConfig,
    SitemapOptions, StructuredData, ThemeConfig,
};
use crate::params::SiteParams;
use crate::profile::{Link, MaintainerProfile};

/// Name of the only preset.
pub const CLASSIC_PRESET: &str = "classic";
/// Structured data plugin module.
pub const STRUCTURED_DATA_PLUGIN: &str =
    "@stackql/docusaurus-plugin-structured-data";
/// Content-transform plugin that marks the largest image as high priority.
pub const FETCH_PRIORITY_PLUGIN: &str = "./components/lcp-fetchpriority";
/// Sidebar definition module.
pub const SIDEBAR_PATH: &str = "./sidebars.js";
/// Stylesheets shared by the family, then the site's own.
pub const CUSTOM_CSS: [&str; 2] =
    ["./src/css/global.css", "./src-local/css/custom.css"];
/// Languages highlighted on top of the engine defaults.
pub const ADDITIONAL_LANGUAGES: [&str; 7] =
    ["bash", "rust", "python", "toml", "yaml", "log", "hcl"];
/// Route of the search results page.
pub const SEARCH_PAGE_PATH: &str = "search";
/// Routes left out of the sitemap.
pub const SITEMAP_IGNORE_PATTERNS: [&str; 2] = ["/tags/**", "/wip/**"];
/// Featured image size used by structured data.
pub const FEATURED_IMAGE: ImageDimensions = ImageDimensions {
    width: 1200,
    height: 627,
};

const EBOOK_MENU_LABEL: &str = "📖 Webbook/Ebook";
const COURSE_MENU_LABEL: &str = "▶️ Udemy courses";

/// Builds [`SiteConfig`] values from [`SiteParams`].
///
/// The builder holds only injected constants: the maintainer profile, the
/// clock and the validation switch. It can be shared freely and reused for
/// any number of sites.
#[derive(Debug)]
pub struct ConfigBuilder {
    profile: MaintainerProfile,
    clock: Box<dyn Clock>,
    strict: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            profile: MaintainerProfile::default(),
            clock: Box::new(SystemClock),
            strict: true,
        }
    }
}

impl ConfigBuilder {
    /// Creates a builder with the built-in profile, the system clock and
    /// strict validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the maintainer profile.
    pub fn with_profile(mut self, profile: MaintainerProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Replaces the clock used for the copyright year.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Turns input validation on or off.
    ///
    /// With validation off, empty required fields and malformed URLs flow
    /// into the output unchanged.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The injected maintainer profile.
    pub fn profile(&self) -> &MaintainerProfile {
        &self.profile
    }

    /// Builds the configuration for one site.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the error of [`SiteParams::validate`].
    /// Never fails otherwise.
    pub fn build(&self, params: &SiteParams) -> Result<SiteConfig> {
        if self.strict {
            params.validate()?;
        } else if let Err(e) = params.validate() {
            warn!("Building with invalid site params: {}", e);
        }

        debug!("Building site configuration for '{}'", params.url);

        Ok(SiteConfig {
            title: params.title.clone(),
            tagline: params.tagline.clone(),
            url: params.url.clone(),
            base_url: "/".to_string(),
            trailing_slash: false,
            on_broken_links: "throw".to_string(),
            on_broken_markdown_links: "warn".to_string(),
            favicon: "img/favicon.png".to_string(),
            organization_name: self.profile.github_organization.clone(),
            project_name: params.project_name.clone(),
            deployment_branch: "gh-pages".to_string(),
            i18n: I18nConfig {
                default_locale: self.profile.locale.clone(),
                locales: vec![self.profile.locale.clone()],
            },
            presets: vec![classic_preset(params)],
            plugins: vec![STRUCTURED_DATA_PLUGIN.to_string()],
            theme_config: self.theme_config(params),
        })
    }

    fn theme_config(&self, params: &SiteParams) -> ThemeConfig {
        let share_image = format!("{}/img/cover_media_share.png", params.url);

        ThemeConfig {
            metadata: vec![
                MetaTag::name("keywords", params.seo_keywords.as_str()),
                MetaTag::name("author", self.profile.author_name.as_str()),
                MetaTag::property("og:image", share_image.as_str()),
                MetaTag::property("og:type", "article"),
                MetaTag::property(
                    "fb:app_id",
                    params.facebook_app_id.as_str(),
                ),
            ],
            image: share_image,
            navbar: Navbar {
                title: params.title.clone(),
                logo: Logo {
                    alt: format!("{} - {}", params.title, params.tagline),
                    src: format!("{}/img/logo_small_dark.png", params.url),
                    src_dark: format!(
                        "{}/img/logo_small_light.png",
                        params.url
                    ),
                },
                items: self.nav_items(params),
            },
            footer: Footer {
                style: "dark".to_string(),
                links: Vec::new(),
                copyright: format!(
                    "{} | Maintained by {}",
                    self.clock.year(),
                    self.profile.author_name
                ),
            },
            prism: PrismConfig {
                theme: CodeTheme::Github,
                dark_theme: CodeTheme::Dracula,
                additional_languages: strings(&ADDITIONAL_LANGUAGES),
            },
            show_content_footer_ebook_wrapper: params
                .show_content_footer_ebook_wrapper,
            algolia: algolia(params),
            structured_data: self.structured_data(),
        }
    }

    fn nav_items(&self, params: &SiteParams) -> Vec<NavItem> {
        if !params.show_nav_items {
            return Vec::new();
        }

        let ebooks = self
            .profile
            .ebooks
            .iter()
            .filter(|link| link.href != params.url)
            .map(nav_link)
            .collect();

        vec![
            NavItem {
                position: "left".to_string(),
                label: EBOOK_MENU_LABEL.to_string(),
                items: ebooks,
            },
            NavItem {
                position: "left".to_string(),
                label: COURSE_MENU_LABEL.to_string(),
                items: self.profile.courses.iter().map(nav_link).collect(),
            },
        ]
    }

    fn structured_data(&self) -> StructuredData {
        let profile = &self.profile;
        let logo = &profile.organization_logo;

        let mut authors = BTreeMap::new();
        _ = authors.insert(
            profile.author_name.clone(),
            AuthorProfile {
                author_id: profile.author_id.clone(),
                url: profile.author_url.clone(),
                image_url: profile.author_image_url.clone(),
                same_as: profile.author_same_as.clone(),
            },
        );

        StructuredData {
            excluded_routes: Vec::new(),
            verbose: true,
            featured_image_dimensions: FEATURED_IMAGE,
            authors,
            organization: Organization {
                same_as: profile.organization_same_as.clone(),
                contact_point: ContactPoint {
                    kind: "ContactPoint".to_string(),
                    email: profile.contact_email.clone(),
                },
                logo: ImageObject {
                    kind: "ImageObject".to_string(),
                    in_language: profile.locale.clone(),
                    id: logo.id.clone(),
                    url: logo.url.clone(),
                    content_url: logo.url.clone(),
                    width: logo.width,
                    height: logo.height,
                    caption: logo.caption.clone(),
                },
            },
            website: LanguageNode {
                in_language: profile.locale.clone(),
            },
            webpage: LanguageNode {
                in_language: profile.locale.clone(),
            },
            breadcrumb_label_map: BTreeMap::new(),
        }
    }
}

fn classic_preset(params: &SiteParams) -> Preset {
    Preset(
        CLASSIC_PRESET.to_string(),
        PresetOptions {
            docs: DocsOptions {
                sidebar_path: SIDEBAR_PATH.to_string(),
                sidebar_collapsible: false,
                route_base_path: "/".to_string(),
                rehype_plugins: vec![FETCH_PRIORITY_PLUGIN.to_string()],
            },
            blog: false,
            theme: PresetTheme {
                custom_css: strings(&CUSTOM_CSS),
            },
            gtag: GtagOptions {
                tracking_id: params.google_tracking_id.clone(),
            },
            sitemap: SitemapOptions {
                changefreq: "weekly".to_string(),
                priority: 0.5,
                ignore_patterns: strings(&SITEMAP_IGNORE_PATTERNS),
                filename: "sitemap.xml".to_string(),
            },
        },
    )
}

fn algolia(params: &SiteParams) -> Option<AlgoliaConfig> {
    let app_id = params.search_app_id()?;
    Some(AlgoliaConfig {
        app_id: app_id.to_string(),
        api_key: params.algolia_api_key.clone(),
        index_name: params.algolia_index_name.clone(),
        contextual_search: true,
        search_page_path: SEARCH_PAGE_PATH.to_string(),
    })
}

fn nav_link(link: &Link) -> NavLink {
    NavLink {
        label: link.label.clone(),
        href: link.href.clone(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DocsmithError;
    use crate::core::traits::FixedClock;
    use serde_json::json;

    const GO_BOOK: &str = "https://dasarpemrogramangolang.novalagung.com";

    fn builder() -> ConfigBuilder {
        ConfigBuilder::new().with_clock(FixedClock::from_year(2024).unwrap())
    }

    fn params(url: &str) -> SiteParams {
        SiteParams::new("My Site", "T", url, "p")
            .with_seo_keywords("k")
            .with_google_tracking_id("g")
            .with_facebook_app_id("f")
    }

    fn ebook_hrefs(config: &SiteConfig) -> Vec<String> {
        config.theme_config.navbar.items[0]
            .items
            .iter()
            .map(|l| l.href.clone())
            .collect()
    }

    #[test]
    fn test_identity_fields_are_copied() {
        let config = builder().build(&params("https://example.com")).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.tagline, "T");
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.project_name, "p");
        assert_eq!(config.organization_name, "novalagung");
        assert_eq!(config.theme_config.navbar.title, "My Site");
        assert_eq!(config.theme_config.navbar.logo.alt, "My Site - T");
        assert_eq!(
            config.theme_config.image,
            "https://example.com/img/cover_media_share.png"
        );
        assert_eq!(
            config.theme_config.navbar.logo.src_dark,
            "https://example.com/img/logo_small_light.png"
        );
    }

    #[test]
    fn test_metadata_entries() {
        let config = builder().build(&params("https://example.com")).unwrap();
        let metadata = &config.theme_config.metadata;
        let keys: Vec<&str> = metadata.iter().map(MetaTag::key).collect();
        assert_eq!(
            keys,
            ["keywords", "author", "og:image", "og:type", "fb:app_id"]
        );
        assert_eq!(metadata[0].content(), "k");
        assert_eq!(metadata[1].content(), "Noval Agung Prayogo");
        assert_eq!(metadata[4].content(), "f");
    }

    #[test]
    fn test_preset_carries_tracking_id() {
        let config = builder().build(&params("https://example.com")).unwrap();
        assert_eq!(config.presets.len(), 1);
        let Preset(name, options) = &config.presets[0];
        assert_eq!(name, "classic");
        assert_eq!(options.gtag.tracking_id, "g");
        assert!(!options.blog);
        assert_eq!(options.sitemap.filename, "sitemap.xml");
    }

    #[test]
    fn test_ebook_menu_skips_current_site() {
        let config = builder().build(&params(GO_BOOK)).unwrap();
        assert_eq!(
            ebook_hrefs(&config),
            [
                "https://dasarpemrogramanpython.novalagung.com",
                "https://dasarpemrogramanrust.novalagung.com",
                "https://howto.novalagung.com",
            ]
        );
        assert_eq!(config.theme_config.navbar.items[1].items.len(), 1);
    }

    #[test]
    fn test_ebook_menu_filter_is_exact_match() {
        let config = builder()
            .build(&params("https://dasarpemrogramangolang.novalagung.com/v2"))
            .unwrap();
        assert_eq!(ebook_hrefs(&config).len(), 4);
    }

    #[test]
    fn test_nav_items_disabled() {
        let config = builder()
            .build(&params(GO_BOOK).with_nav_items(false))
            .unwrap();
        assert!(config.theme_config.navbar.items.is_empty());
    }

    #[test]
    fn test_algolia_requires_app_id() {
        let mut partial = params("https://example.com");
        partial.algolia_api_key = Some("key".to_string());
        partial.algolia_index_name = Some("idx".to_string());
        let config = builder().build(&partial).unwrap();
        assert!(config.theme_config.algolia.is_none());

        partial.algolia_app_id = Some(String::new());
        let config = builder().build(&partial).unwrap();
        assert!(config.theme_config.algolia.is_none());
    }

    #[test]
    fn test_algolia_present_with_app_id() {
        let config = builder()
            .build(&params("https://example.com").with_algolia(
                "APP", "KEY", "IDX",
            ))
            .unwrap();
        assert_eq!(
            config.theme_config.algolia,
            Some(AlgoliaConfig {
                app_id: "APP".to_string(),
                api_key: Some("KEY".to_string()),
                index_name: Some("IDX".to_string()),
                contextual_search: true,
                search_page_path: SEARCH_PAGE_PATH.to_string(),
            })
        );
    }

    #[test]
    fn test_footer_uses_clock_year() {
        let config = ConfigBuilder::new()
            .with_clock(FixedClock::from_year(1999).unwrap())
            .build(&params("https://example.com"))
            .unwrap();
        assert_eq!(
            config.theme_config.footer.copyright,
            "1999 | Maintained by Noval Agung Prayogo"
        );
    }

    #[test]
    fn test_ebook_wrapper_flag_copied() {
        let config = builder()
            .build(
                &params("https://example.com")
                    .with_content_footer_ebook_wrapper(false),
            )
            .unwrap();
        assert!(!config.theme_config.show_content_footer_ebook_wrapper);
    }

    #[test]
    fn test_strict_mode_rejects_invalid_params() {
        let mut invalid = params("https://example.com");
        invalid.title = String::new();
        assert!(matches!(
            builder().build(&invalid),
            Err(DocsmithError::MissingField { field: "title" })
        ));
    }

    #[test]
    fn test_lenient_mode_passes_values_through() {
        let invalid = SiteParams::default();
        let config = builder().with_strict(false).build(&invalid).unwrap();
        assert_eq!(config.title, "");
        assert_eq!(config.theme_config.image, "/img/cover_media_share.png");
    }

    #[test]
    fn test_custom_profile_is_used() {
        let mut profile = MaintainerProfile::default();
        profile.author_name = "Jane Doe".to_string();
        profile.locale = "en".to_string();
        profile.ebooks = vec![Link::new("Only", "https://only.example")];

        let config = builder()
            .with_profile(profile)
            .build(&params("https://example.com"))
            .unwrap();
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.theme_config.metadata[1].content(), "Jane Doe");
        assert!(config
            .theme_config
            .structured_data
            .authors
            .contains_key("Jane Doe"));
        assert_eq!(ebook_hrefs(&config), ["https://only.example"]);
    }

    #[test]
    fn test_profile_accessor_reflects_injected_profile() {
        assert_eq!(builder().profile(), &MaintainerProfile::default());

        let mut profile = MaintainerProfile::default();
        profile.github_organization = "acme".to_string();
        let builder = builder().with_profile(profile);
        assert_eq!(builder.profile().github_organization, "acme");
    }

    #[test]
    fn test_builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigBuilder>();
        assert_send_sync::<SiteConfig>();
    }

    #[test]
    fn test_serialized_shape() {
        let config = builder().build(&params("https://example.com")).unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["baseUrl"], "/");
        assert_eq!(value["i18n"], json!({"defaultLocale": "id", "locales": ["id"]}));
        assert_eq!(value["presets"][0][0], "classic");
        assert_eq!(value["presets"][0][1]["gtag"]["trackingID"], "g");
        assert_eq!(
            value["presets"][0][1]["docs"]["rehypePlugins"],
            json!([FETCH_PRIORITY_PLUGIN])
        );
        assert!(value["themeConfig"].get("algolia").is_none());
        assert_eq!(
            value["themeConfig"]["prism"]["theme"],
            "prism-react-renderer/themes/github"
        );
        assert_eq!(
            value["themeConfig"]["structuredData"]["organization"]["logo"]
                ["@id"],
            "adamstudio"
        );
        assert_eq!(
            value["themeConfig"]["structuredData"]["featuredImageDimensions"],
            json!({"width": 1200, "height": 627})
        );
        assert_eq!(
            value["themeConfig"]["structuredData"]["breadcrumbLabelMap"],
            json!({})
        );
    }
}
