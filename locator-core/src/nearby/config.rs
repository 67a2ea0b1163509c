pub const DEFAULT_ENDPOINT: &str = "https://liveapi.yext.com/v2/accounts/me/entities/geosearch";
pub const DEFAULT_API_VERSION: &str = "20220927";
pub const DEFAULT_ENTITY_TYPES: &str = "location";
pub const DEFAULT_LIMIT: usize = 4;
/// Search radius in miles.
pub const DEFAULT_RADIUS: u32 = 50;

/// Used as search page path if the site does not define one.
pub const FALLBACK_SEARCH_PATH: &str = "locator";

/// Settings of the geosearch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub entity_types: String,
    pub limit: usize,
    pub radius: u32,
    pub saved_filter_id: Option<String>,
    pub api_version: String,
}

impl NearbyConfig {
    /// The API key, if a non-empty one is configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }

    #[must_use]
    pub fn saved_filter_id(&self) -> Option<&str> {
        non_empty(self.saved_filter_id.as_deref())
    }
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            entity_types: DEFAULT_ENTITY_TYPES.to_string(),
            limit: DEFAULT_LIMIT,
            radius: DEFAULT_RADIUS,
            saved_filter_id: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

/// Settings of the static map images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapsConfig {
    pub api_key: Option<String>,
    pub marker_label: Option<String>,
}

impl MapsConfig {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

/// What the site entity tells about the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    pub search_page_slug: Option<String>,
}

/// Per-page data available while rendering a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    /// Prefix that turns a site-relative path into a path relative to the page,
    /// e.g. `"../../"`.
    pub relative_prefix_to_root: String,
    pub site: Option<SiteSettings>,
}

impl TemplateContext {
    /// Path of the search page relative to the current page.
    #[must_use]
    pub fn search_path(&self) -> String {
        let slug = self
            .site
            .as_ref()
            .and_then(|s| non_empty(s.search_page_slug.as_deref()))
            .unwrap_or(FALLBACK_SEARCH_PATH);
        format!("{}{slug}", self.relative_prefix_to_root)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_counts_as_missing() {
        let cfg = NearbyConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(cfg.api_key().is_none());
        let cfg = NearbyConfig {
            api_key: Some("secret".into()),
            ..Default::default()
        };
        assert_eq!(cfg.api_key(), Some("secret"));
    }

    #[test]
    fn search_path_from_site_slug() {
        let ctx = TemplateContext {
            relative_prefix_to_root: "../".into(),
            site: Some(SiteSettings {
                search_page_slug: Some("search".into()),
            }),
        };
        assert_eq!(ctx.search_path(), "../search");
    }

    #[test]
    fn fallback_search_path() {
        let ctx = TemplateContext::default();
        assert_eq!(ctx.search_path(), FALLBACK_SEARCH_PATH);

        let ctx = TemplateContext {
            relative_prefix_to_root: "../../".into(),
            site: Some(SiteSettings::default()),
        };
        assert_eq!(ctx.search_path(), format!("../../{FALLBACK_SEARCH_PATH}"));
    }
}
