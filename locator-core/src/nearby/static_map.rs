use locator_boundary::LocationProfile;
use url::form_urlencoded;

use crate::nearby::MapsConfig;

pub const STATIC_MAP_BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

const ZOOM: u8 = 13;
const SIZE: &str = "600x300";
const MAP_TYPE: &str = "roadmap";
const MARKER_COLOR: &str = "blue";

/// URL of a static map image centered on the address of a location.
#[must_use]
pub fn static_map_url(profile: &LocationProfile, maps: &MapsConfig) -> String {
    let address = &profile.address;
    let center = [&address.city, &address.line1, &address.postal_code]
        .into_iter()
        .filter_map(Option::as_deref)
        .collect::<Vec<_>>()
        .join(",");

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("center", &center)
        .append_pair("zoom", &ZOOM.to_string())
        .append_pair("size", SIZE)
        .append_pair("maptype", MAP_TYPE);
    if let Some(pos) = profile.display_coordinate {
        let mut marker = format!("color:{MARKER_COLOR}");
        if let Some(label) = &maps.marker_label {
            marker.push_str(&format!("|label:{label}"));
        }
        marker.push_str(&format!("|{},{}", pos.latitude, pos.longitude));
        query.append_pair("markers", &marker);
    }
    if let Some(key) = maps.api_key() {
        query.append_pair("key", key);
    }
    format!("{STATIC_MAP_BASE_URL}?{}", query.finish())
}
