use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("locator.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub nearby: Option<Nearby>,
    pub maps: Option<Maps>,
    pub site: Option<Site>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nearby {
    pub endpoint: String,
    pub api_version: String,
    pub entity_types: String,
    pub limit: usize,
    pub radius: u32,
    pub api_key: Option<String>,
    pub saved_filter_id: Option<String>,
}

impl Default for Nearby {
    fn default() -> Self {
        Config::default().nearby.expect("Nearby configuration")
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Maps {
    pub api_key: Option<String>,
    pub marker_label: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Site {
    pub search_page_slug: Option<String>,
    pub relative_prefix_to_root: String,
}

impl Default for Site {
    fn default() -> Self {
        Config::default().site.expect("Site configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.nearby.is_some());
        assert!(cfg.maps.is_some());
        assert!(cfg.site.is_some());
    }

    #[test]
    fn default_nearby_config() {
        let cfg = Nearby::default();
        assert_eq!(cfg.limit, 4);
        assert_eq!(cfg.radius, 50);
        assert_eq!(cfg.api_version, "20220927");
        assert!(cfg.api_key.is_none());
        assert!(cfg.saved_filter_id.is_none());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/locator.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let site = cfg.site.unwrap();
        assert_eq!(site.search_page_slug.as_deref(), Some("search"));
    }
}
