use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// A location entity as delivered by the content API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(
        rename = "yextDisplayCoordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct GeoSearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<LocationProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// The envelope around every response of the content API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LiveApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    pub response: T,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// The body of a failed request, e.g. `{"meta":{"errors":[..]}}`.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorResponse {
    #[serde(default)]
    pub meta: ResponseMeta,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub message: String,
}

/// The stream document a page template is rendered from.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<EntityMeta>,
    #[serde(
        rename = "yextDisplayCoordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_coordinate: Option<Coordinate>,
    #[serde(rename = "_site", skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteEntity>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SiteEntity {
    #[serde(rename = "c_searchPage", skip_serializing_if = "Option::is_none")]
    pub search_page: Option<SearchPage>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SearchPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
