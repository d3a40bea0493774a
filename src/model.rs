//! # Site Configuration Model
//!
//! The output shape handed to the documentation-site engine. Every struct
//! serializes with the engine's camelCase keys; the only key that can be
//! missing from the serialized form is `themeConfig.algolia`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete configuration of one documentation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site tagline.
    pub tagline: String,
    /// Canonical site URL.
    pub url: String,
    /// Path the site is served under.
    pub base_url: String,
    /// Whether generated routes end with a slash.
    pub trailing_slash: bool,
    /// Engine reaction to broken links.
    pub on_broken_links: String,
    /// Engine reaction to broken markdown links.
    pub on_broken_markdown_links: String,
    /// Favicon path relative to the static directory.
    pub favicon: String,
    /// Deployment organization.
    pub organization_name: String,
    /// Deployment project.
    pub project_name: String,
    /// Branch the built site is pushed to.
    pub deployment_branch: String,
    /// Locale settings.
    pub i18n: I18nConfig,
    /// Preset list, one classic preset.
    pub presets: Vec<Preset>,
    /// Plugin module names.
    pub plugins: Vec<String>,
    /// Theme configuration.
    pub theme_config: ThemeConfig,
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    /// Locale used when none is requested.
    pub default_locale: String,
    /// Every published locale.
    pub locales: Vec<String>,
}

/// A named preset with its options, serialized as `[name, options]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset(pub String, pub PresetOptions);

/// Options of the classic documentation preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetOptions {
    /// Docs plugin options.
    pub docs: DocsOptions,
    /// Blog plugin switch; always off.
    pub blog: bool,
    /// Classic theme options.
    pub theme: PresetTheme,
    /// Analytics options.
    pub gtag: GtagOptions,
    /// Sitemap generation options.
    pub sitemap: SitemapOptions,
}

/// Docs plugin options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOptions {
    /// Sidebar definition module.
    pub sidebar_path: String,
    /// Whether sidebar categories can collapse.
    pub sidebar_collapsible: bool,
    /// Route the docs are mounted at.
    pub route_base_path: String,
    /// Content-transform plugins, passed through untouched.
    pub rehype_plugins: Vec<String>,
}

/// Classic theme options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetTheme {
    /// Stylesheets appended to the theme.
    pub custom_css: Vec<String>,
}

/// Analytics options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtagOptions {
    /// Tracking ID.
    #[serde(rename = "trackingID")]
    pub tracking_id: String,
}

/// Sitemap options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapOptions {
    /// Change frequency hint.
    pub changefreq: String,
    /// Page priority hint.
    pub priority: f64,
    /// Routes left out of the sitemap.
    pub ignore_patterns: Vec<String>,
    /// Output file name.
    pub filename: String,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Page-level meta tags.
    pub metadata: Vec<MetaTag>,
    /// Social share image.
    pub image: String,
    /// Navbar.
    pub navbar: Navbar,
    /// Footer.
    pub footer: Footer,
    /// Syntax highlighting.
    pub prism: PrismConfig,
    /// Whether pages end with the ebook promotion block.
    pub show_content_footer_ebook_wrapper: bool,
    /// Search widget, absent unless a search application ID was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaConfig>,
    /// Structured data emitted on every page.
    pub structured_data: StructuredData,
}

/// A `<meta>` tag keyed either by `name` or by `property`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaTag {
    /// `<meta name=... content=...>`
    Name {
        /// Tag name.
        name: String,
        /// Tag content.
        content: String,
    },
    /// `<meta property=... content=...>`
    Property {
        /// Open Graph style property.
        property: String,
        /// Tag content.
        content: String,
    },
}

impl MetaTag {
    /// Creates a `name` keyed tag.
    pub fn name<N: Into<String>, C: Into<String>>(name: N, content: C) -> Self {
        MetaTag::Name {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Creates a `property` keyed tag.
    pub fn property<P: Into<String>, C: Into<String>>(
        property: P,
        content: C,
    ) -> Self {
        MetaTag::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    /// The `name` or `property` of the tag.
    pub fn key(&self) -> &str {
        match self {
            MetaTag::Name { name, .. } => name,
            MetaTag::Property { property, .. } => property,
        }
    }

    /// The tag content.
    pub fn content(&self) -> &str {
        match self {
            MetaTag::Name { content, .. }
            | MetaTag::Property { content, .. } => content,
        }
    }
}

/// Navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navbar {
    /// Title next to the logo.
    pub title: String,
    /// Logo images.
    pub logo: Logo,
    /// Dropdown menus, empty when navigation items are turned off.
    pub items: Vec<NavItem>,
}

/// Navbar logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    /// Alt text.
    pub alt: String,
    /// Logo for the light color mode.
    pub src: String,
    /// Logo for the dark color mode.
    pub src_dark: String,
}

/// A navbar dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Navbar side.
    pub position: String,
    /// Dropdown label.
    pub label: String,
    /// Dropdown entries.
    pub items: Vec<NavLink>,
}

/// A dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Entry label.
    pub label: String,
    /// Entry target.
    pub href: String,
}

/// Footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer color style.
    pub style: String,
    /// Footer link columns.
    pub links: Vec<NavLink>,
    /// Copyright line.
    pub copyright: String,
}

/// Syntax highlighting themes, referenced by module path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeTheme {
    /// Light theme.
    #[serde(rename = "prism-react-renderer/themes/github")]
    Github,
    /// Dark theme.
    #[serde(rename = "prism-react-renderer/themes/dracula")]
    Dracula,
}

/// Syntax highlighting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismConfig {
    /// Light mode theme.
    pub theme: CodeTheme,
    /// Dark mode theme.
    pub dark_theme: CodeTheme,
    /// Languages enabled on top of the engine defaults.
    pub additional_languages: Vec<String>,
}

/// Search widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgoliaConfig {
    /// Application ID.
    pub app_id: String,
    /// API key, omitted when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Index name, omitted when not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Whether results are filtered by version and language.
    pub contextual_search: bool,
    /// Route of the search results page.
    pub search_page_path: String,
}

/// Structured data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    /// Routes without structured data.
    pub excluded_routes: Vec<String>,
    /// Whether the plugin logs what it emits.
    pub verbose: bool,
    /// Size of featured images.
    pub featured_image_dimensions: ImageDimensions,
    /// Authors keyed by display name.
    pub authors: BTreeMap<String, AuthorProfile>,
    /// Publishing organization.
    pub organization: Organization,
    /// `WebSite` node settings.
    pub website: LanguageNode,
    /// `WebPage` node settings.
    pub webpage: LanguageNode,
    /// Breadcrumb label overrides.
    pub breadcrumb_label_map: BTreeMap<String, String>,
}

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

/// Structured-data author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    /// Author id.
    pub author_id: String,
    /// Home page.
    pub url: String,
    /// Portrait.
    pub image_url: String,
    /// Social profiles.
    pub same_as: Vec<String>,
}

/// Structured-data organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Social profiles.
    pub same_as: Vec<String>,
    /// Contact point.
    pub contact_point: ContactPoint,
    /// Logo.
    pub logo: ImageObject,
}

/// Schema.org `ContactPoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPoint {
    /// Always `ContactPoint`.
    #[serde(rename = "@type")]
    pub kind: String,
    /// Contact email.
    pub email: String,
}

/// Schema.org `ImageObject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    /// Always `ImageObject`.
    #[serde(rename = "@type")]
    pub kind: String,
    /// Language of the caption.
    pub in_language: String,
    /// Node id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Image URL.
    pub url: String,
    /// Content URL.
    pub content_url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Caption.
    pub caption: String,
}

/// A structured-data node that only carries a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageNode {
    /// Content language.
    pub in_language: String,
}
