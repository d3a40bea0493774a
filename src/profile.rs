//! # Maintainer Profile
//!
//! Identity data shared by every site a maintainer publishes: the author
//! and organization used for structured data, the locale of the site
//! family, and the catalogue of sibling sites and courses promoted in the
//! navbar.
//!
//! The builder never derives any of this from [`SiteParams`](crate::SiteParams).
//! [`MaintainerProfile::default`] is the built-in profile; another
//! deployment supplies its own through
//! [`ConfigBuilder::with_profile`](crate::builder::ConfigBuilder::with_profile).

use serde::{Deserialize, Serialize};

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Text shown in the menu.
    pub label: String,
    /// Absolute link target.
    pub href: String,
}

impl Link {
    /// Creates a link.
    pub fn new<L: Into<String>, H: Into<String>>(label: L, href: H) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The organization logo published in structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationLogo {
    /// Schema.org `@id` of the logo.
    pub id: String,
    /// Image URL.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Caption, usually the organization name.
    pub caption: String,
}

/// Constant identity record injected into the site configuration builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainerProfile {
    /// Author name, used for the `author` meta tag, the footer and as the
    /// structured-data author key.
    pub author_name: String,
    /// Structured-data author id.
    pub author_id: String,
    /// Author home page.
    pub author_url: String,
    /// Author portrait.
    pub author_image_url: String,
    /// Author social profiles.
    pub author_same_as: Vec<String>,
    /// Organization social profiles.
    pub organization_same_as: Vec<String>,
    /// Organization contact email.
    pub contact_email: String,
    /// Organization logo.
    pub organization_logo: OrganizationLogo,
    /// GitHub organization that hosts the deployed sites.
    pub github_organization: String,
    /// The single locale every site of the family is published in.
    pub locale: String,
    /// Sibling ebook sites. A site never lists itself.
    pub ebooks: Vec<Link>,
    /// Courses promoted next to the ebooks.
    pub courses: Vec<Link>,
}

impl Default for MaintainerProfile {
    fn default() -> Self {
        Self {
            author_name: "Noval Agung Prayogo".to_string(),
            author_id: "1".to_string(),
            author_url: "https://www.linkedin.com/in/novalagung".to_string(),
            author_image_url: "https://i.stack.imgur.com/99yxf.jpg"
                .to_string(),
            author_same_as: strings(&[
                "https://stackoverflow.com/users/1467988/novalagung",
                "https://www.udemy.com/user/noval-agung-prayogo",
                "https://apps.apple.com/id/developer/noval-agung-prayogo/id1163677873?l=id",
                "https://novalagung.medium.com",
                "https://adplist.org/mentors/noval-agung-prayogo",
                "https://novalagung.com",
                "https://linktr.ee/novalagung",
                "https://www.instagram.com/novalagung",
                "https://www.facebook.com/novalagungprayogo",
                "https://www.codementor.io/@novalagung",
            ]),
            organization_same_as: strings(&[
                "https://web.facebook.com/adamstudio.page",
                "https://www.instagram.com/adamstudio.ig",
                "https://github.com/adamstudiogh",
                "https://github.com/novalagung",
            ]),
            contact_email: "hello@novalagung.com".to_string(),
            organization_logo: OrganizationLogo {
                id: "adamstudio".to_string(),
                url: "https://avatars.githubusercontent.com/u/65223287"
                    .to_string(),
                width: 1440,
                height: 900,
                caption: "Adam Studio".to_string(),
            },
            github_organization: "novalagung".to_string(),
            locale: "id".to_string(),
            ebooks: vec![
                Link::new(
                    "Dasar Pemrograman Golang ",
                    "https://dasarpemrogramangolang.novalagung.com",
                ),
                Link::new(
                    "Dasar Pemrograman Python ",
                    "https://dasarpemrogramanpython.novalagung.com",
                ),
                Link::new(
                    "Dasar Pemrograman Rust ",
                    "https://dasarpemrogramanrust.novalagung.com",
                ),
                Link::new("How To ", "https://howto.novalagung.com"),
            ],
            courses: vec![Link::new(
                "Udemy Course: Praktis Belajar Docker dan Kubernetes ",
                "https://www.udemy.com/course/praktis-belajar-docker-dan-kubernetes-untuk-pemula/?couponCode=",
            )],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
