//! Content served by `/dynamic/{slug}`.

/// One entry of the dynamic-page catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Theme name, used as a CSS class suffix.
    pub color: &'static str,
    pub features: &'static [&'static str],
}

pub const CATALOG: &[DynamicPage] = &[
    DynamicPage {
        slug: "test",
        title: "Test Page",
        description: "A test page for trying out dynamic rendering",
        color: "purple",
        features: &["Dynamic rendering", "No cache", "Real time"],
    },
    DynamicPage {
        slug: "demo",
        title: "Demo Page",
        description: "Demonstration of server-side rendering per request",
        color: "indigo",
        features: &["Personalised data", "Dynamic URL", "Edge headers"],
    },
    DynamicPage {
        slug: "cloudflare",
        title: "Cloudflare Test",
        description: "Checks aimed at a Cloudflare-fronted deployment",
        color: "orange",
        features: &["Edge computing", "Global CDN", "Security features"],
    },
];

pub fn find(slug: &str) -> Option<&'static DynamicPage> {
    CATALOG.iter().find(|page| page.slug == slug)
}

pub fn slugs() -> Vec<&'static str> {
    CATALOG.iter().map(|page| page.slug).collect()
}
