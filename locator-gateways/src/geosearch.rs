use locator_boundary::{ErrorResponse, GeoSearchResponse, LiveApiResponse, LocationProfile};
use locator_core::{gateways::GeoSearchGateway, nearby::NearbyQuery, Error, Result};
use reqwest::blocking::Client;

/// Geosearch through the live API of the content delivery network.
#[derive(Debug, Clone, Default)]
pub struct LiveApiGeoSearch {
    client: Client,
}

impl LiveApiGeoSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl GeoSearchGateway for LiveApiGeoSearch {
    fn geosearch(&self, query: &NearbyQuery) -> Result<Vec<LocationProfile>> {
        let url = query.url()?;
        // The query string contains the API key.
        log::debug!("Search locations around {} ({})", query.location(), url.path());
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| Error::Fetch(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| Error::Fetch(err.to_string()))?;
        parse_response(status, &body)
    }
}

/// Extracts the entities from a geosearch response body.
pub fn parse_response(status: u16, body: &str) -> Result<Vec<LocationProfile>> {
    // ensure we've got 2xx status
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|res| res.meta.errors.into_iter().next())
            .map_or_else(|| format!("HTTP status {status}"), |err| err.message);
        return Err(Error::Api { status, message });
    }
    let res: LiveApiResponse<GeoSearchResponse> =
        serde_json::from_str(body).map_err(|err| Error::Decode(err.to_string()))?;
    Ok(res.response.entities.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use locator_core::{geo::GeoPoint, nearby::NearbyConfig};
    use serde_json::json;
    use std::time::Duration;

    use super::*;

    const PATH: &str = "/v2/accounts/me/entities/geosearch";

    fn query(server: &MockServer) -> NearbyQuery {
        let config = NearbyConfig {
            endpoint: server.url(PATH),
            api_key: Some("secret".into()),
            ..Default::default()
        };
        let pos = GeoPoint::try_from_lat_lng_deg(40.7, -74.0).unwrap();
        NearbyQuery::new(&config, pos, "123").unwrap()
    }

    #[test]
    fn fetch_entities() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(PATH)
                .query_param("api_key", "secret")
                .query_param("entityTypes", "location")
                .query_param("limit", "4")
                .query_param("radius", "50");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "meta": { "uuid": "1", "errors": [] },
                    "response": {
                        "count": 2,
                        "entities": [
                            { "meta": { "id": "456" }, "name": "Uptown" },
                            { "meta": { "id": "789" }, "name": "Midtown" }
                        ]
                    }
                }));
        });
        let entities = LiveApiGeoSearch::new().geosearch(&query(&server)).unwrap();
        mock.assert();
        let ids: Vec<_> = entities.iter().map(|e| e.meta.id.as_str()).collect();
        assert_eq!(ids, ["456", "789"]);
    }

    #[test]
    fn response_without_entities() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).json_body(json!({ "response": { "count": 0 } }));
        });
        let entities = LiveApiGeoSearch::new().geosearch(&query(&server)).unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(401).json_body(json!({
                "meta": {
                    "errors": [{ "code": 4, "type": "FATAL_ERROR", "message": "Invalid API key" }]
                }
            }));
        });
        let err = LiveApiGeoSearch::new()
            .geosearch(&query(&server))
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("<html>");
        });
        let err = LiveApiGeoSearch::new()
            .geosearch(&query(&server))
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn unreachable_endpoint() {
        let config = NearbyConfig {
            endpoint: "http://127.0.0.1:9/geosearch".into(),
            api_key: Some("secret".into()),
            ..Default::default()
        };
        let pos = GeoPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap();
        let query = NearbyQuery::new(&config, pos, "1").unwrap();
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let err = LiveApiGeoSearch::with_client(client)
            .geosearch(&query)
            .unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[test]
    fn error_status_without_body() {
        let err = parse_response(503, "").unwrap_err();
        assert!(matches!(err, Error::Api { status: 503, .. }));
        assert!(err.to_string().contains("HTTP status 503"));
    }
}
