use gloo_net::http::Request;

use locator_boundary::{GeoSearchResponse, LiveApiResponse, LocationProfile};
use locator_core::nearby::NearbyQuery;

use crate::into_json;

/// Geosearch API used from within the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoSearchApi;

impl GeoSearchApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Invalid queries fail with the error of building the URL,
    /// everything else with the converted request error.
    pub async fn geosearch(
        &self,
        query: &NearbyQuery,
    ) -> locator_core::Result<Vec<LocationProfile>> {
        let url = query.url()?;
        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(crate::Error::from)?;
        let res: LiveApiResponse<GeoSearchResponse> = into_json(response).await?;
        Ok(res.response.entities.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use locator_core::{geo::GeoPoint, nearby::NearbyConfig, Error};

    use super::*;

    #[tokio::test]
    async fn keep_cause_of_invalid_query() {
        let config = NearbyConfig {
            endpoint: "not a url".into(),
            api_key: Some("secret".into()),
            ..Default::default()
        };
        let pos = GeoPoint::try_from_lat_lng_deg(40.7, -74.0).unwrap();
        let query = NearbyQuery::new(&config, pos, "123").unwrap();
        let err = GeoSearchApi::new().geosearch(&query).await.unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }
}
