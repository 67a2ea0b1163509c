use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

use locator_core::nearby::{MapsConfig, NearbyConfig};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "locator.toml";

const ENV_NAME_NEARBY_API_KEY: &str = "NEARBY_API_KEY";
const ENV_NAME_NEARBY_SAVED_FILTER_ID: &str = "NEARBY_SAVED_FILTER_ID";
const ENV_NAME_MAPS_API_KEY: &str = "MAPS_API_KEY";

pub struct Config {
    pub nearby: NearbyConfig,
    pub maps: MapsConfig,
    pub site: Site,
}

pub struct Site {
    pub search_page_slug: Option<String>,
    pub relative_prefix_to_root: String,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = env::var(ENV_NAME_NEARBY_API_KEY) {
            self.nearby.api_key = Some(key);
        }
        if let Ok(id) = env::var(ENV_NAME_NEARBY_SAVED_FILTER_ID) {
            self.nearby.saved_filter_id = Some(id);
        }
        if let Ok(key) = env::var(ENV_NAME_MAPS_API_KEY) {
            self.maps.api_key = Some(key);
        }
        if self.nearby.api_key().is_none() {
            log::warn!("No nearby API key found");
        }
        if self.maps.api_key().is_none() {
            log::warn!("No maps API key found");
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { nearby, maps, site } = from;

        let raw::Nearby {
            endpoint,
            api_version,
            entity_types,
            limit,
            radius,
            api_key,
            saved_filter_id,
        } = nearby.unwrap_or_default();

        url::Url::parse(&endpoint)
            .map_err(|err| anyhow!("Invalid nearby endpoint '{endpoint}': {err}"))?;
        if limit == 0 {
            return Err(anyhow!("The nearby limit must be greater than 0"));
        }
        let nearby = NearbyConfig {
            endpoint,
            api_key,
            entity_types,
            limit,
            radius,
            saved_filter_id,
            api_version,
        };

        let raw::Maps {
            api_key,
            marker_label,
        } = maps.unwrap_or_default();
        let maps = MapsConfig {
            api_key,
            marker_label,
        };

        let raw::Site {
            search_page_slug,
            relative_prefix_to_root,
        } = site.unwrap_or_default();
        let site = Site {
            search_page_slug,
            relative_prefix_to_root,
        };

        Ok(Self { nearby, maps, site })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.nearby.limit, 4);
        assert_eq!(cfg.site.relative_prefix_to_root, "");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let raw: raw::Config = toml::from_str("[maps]\napi-key = \"maps\"").unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(cfg.nearby, NearbyConfig::default());
        assert_eq!(cfg.maps.api_key.as_deref(), Some("maps"));
        assert!(cfg.site.search_page_slug.is_none());
    }

    #[test]
    fn reject_zero_limit() {
        let toml = r#"
            [nearby]
            endpoint = "https://example.com/geosearch"
            api-version = "20220927"
            entity-types = "location"
            limit = 0
            radius = 50
        "#;
        let raw: raw::Config = toml::from_str(toml).unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn reject_invalid_endpoint() {
        let toml = r#"
            [nearby]
            endpoint = "geosearch"
            api-version = "20220927"
            entity-types = "location"
            limit = 4
            radius = 50
        "#;
        let raw: raw::Config = toml::from_str(toml).unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
