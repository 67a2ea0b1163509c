use url::Url;

use crate::{filter::Filter, geo::GeoPoint, nearby::NearbyConfig, Error, Result};

/// A single geosearch request for locations around a point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    endpoint: String,
    api_key: String,
    entity_types: String,
    limit: usize,
    radius: u32,
    saved_filter_id: Option<String>,
    api_version: String,
    location: GeoPoint,
    exclude_id: String,
    filter: Filter,
}

impl NearbyQuery {
    pub fn new(config: &NearbyConfig, location: GeoPoint, exclude_id: &str) -> Result<Self> {
        let api_key = config.api_key().ok_or(Error::MissingApiKey)?.to_string();
        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key,
            entity_types: config.entity_types.clone(),
            limit: config.limit,
            radius: config.radius,
            saved_filter_id: config.saved_filter_id().map(ToString::to_string),
            api_version: config.api_version.clone(),
            location,
            exclude_id: exclude_id.to_string(),
            filter: Filter::exclude_entity(exclude_id),
        })
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    #[must_use]
    pub fn exclude_id(&self) -> &str {
        &self.exclude_id
    }

    /// The query parameters in the order they are sent.
    pub fn params(&self) -> Result<Vec<(&'static str, String)>> {
        let Self {
            api_key,
            entity_types,
            limit,
            radius,
            saved_filter_id,
            api_version,
            location,
            filter,
            ..
        } = self;
        let mut params = vec![
            ("api_key", api_key.clone()),
            ("entityTypes", entity_types.clone()),
            ("limit", limit.to_string()),
            ("radius", radius.to_string()),
        ];
        if let Some(id) = saved_filter_id {
            params.push(("savedFilterIds", id.clone()));
        }
        params.push(("v", api_version.clone()));
        params.push(("location", location.to_string()));
        params.push(("filter", filter.to_json_string()?));
        Ok(params)
    }

    pub fn url(&self) -> Result<Url> {
        let params = self.params()?;
        Ok(Url::parse_with_params(&self.endpoint, params)?)
    }
}
