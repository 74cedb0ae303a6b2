use serde::Serialize;
use std::fmt;

/// Branding metadata consumed by page titles, social previews and font loading.
///
/// Serializes with camelCase keys (`companyName`, `fontFamily`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    /// Display name of the company.
    pub company_name: &'static str,
    /// Free-text description, used for `<meta name="description">` and previews.
    pub description: &'static str,
    /// Preview image, as a site-relative path or an absolute URL.
    pub image: &'static str,
    /// Canonical absolute URL of the site.
    pub url: &'static str,
    /// Typeface family name.
    pub font_family: &'static str,
}

/// The site's branding record.
pub const CONFIG: BrandConfig = BrandConfig {
    company_name: "Figma",
    description: "Figma provides a collaborative, cloud-based platform that enables design and development teams to create, prototype, and build digital products together, offering a comprehensive suite of tools for UI/UX design, whiteboarding, presentation creation, illustration, and AI-powered asset generation and code prompting.",
    image: "/og.png",
    url: "https://figma.com",
    font_family: "Inter Variable",
};

/// Returns the branding record. Always the same value for the life of the process.
#[must_use]
pub const fn config() -> &'static BrandConfig {
    &CONFIG
}

impl BrandConfig {
    /// Serialized key names, in declaration order.
    pub const FIELD_NAMES: [&'static str; 5] =
        ["companyName", "description", "image", "url", "fontFamily"];

    /// Key/value pairs in declaration order. Values are returned verbatim.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, &'static str); 5] {
        let [company_name, description, image, url, font_family] = Self::FIELD_NAMES;
        [
            (company_name, self.company_name),
            (description, self.description),
            (image, self.image),
            (url, self.url),
            (font_family, self.font_family),
        ]
    }
}

impl fmt::Display for BrandConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_returns_the_constant() {
        assert_eq!(*config(), CONFIG);
    }

    #[test]
    fn entries_follow_field_names() {
        let keys: Vec<_> = CONFIG.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, BrandConfig::FIELD_NAMES);
    }

    #[test]
    fn display_is_company_name() {
        assert_eq!(CONFIG.to_string(), "Figma");
    }

    #[test]
    fn record_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<BrandConfig>();
    }
}
