use leptos::*;
use wasm_bindgen::JsCast;

use locator_boundary::Coordinate;
use locator_core::nearby::{MapsConfig, NearbyConfig, SiteSettings, TemplateContext};

mod components;

use components::NearbyLocations;

/// Id of the element the widget is mounted into.
const MOUNT_POINT_ID: &str = "nearby-locations";

/// Everything the page hands over to the widget via `data-*` attributes.
#[derive(Debug, Clone)]
struct PageData {
    id: String,
    coordinate: Option<Coordinate>,
    nearby: NearbyConfig,
    maps: MapsConfig,
    ctx: TemplateContext,
}

impl PageData {
    fn from_element(el: &web_sys::Element) -> Option<Self> {
        let attr = |name: &str| {
            el.get_attribute(&format!("data-{name}"))
                .filter(|v| !v.trim().is_empty())
        };
        let Some(id) = attr("id") else {
            log::error!("Missing entity id at #{MOUNT_POINT_ID}");
            return None;
        };
        let coordinate = attr("lat")
            .zip(attr("lng"))
            .and_then(|(lat, lng)| Some((lat.parse::<f64>().ok()?, lng.parse::<f64>().ok()?)))
            .map(|(latitude, longitude)| Coordinate {
                latitude,
                longitude,
            });
        let mut nearby = NearbyConfig {
            api_key: attr("api-key"),
            saved_filter_id: attr("saved-filter-id"),
            ..Default::default()
        };
        if let Some(endpoint) = attr("endpoint") {
            nearby.endpoint = endpoint;
        }
        let maps = MapsConfig {
            api_key: attr("maps-api-key"),
            marker_label: attr("marker-label"),
        };
        let ctx = TemplateContext {
            relative_prefix_to_root: attr("prefix").unwrap_or_default(),
            site: attr("search-page-slug").map(|slug| SiteSettings {
                search_page_slug: Some(slug),
            }),
        };
        Some(Self {
            id,
            coordinate,
            nearby,
            maps,
            ctx,
        })
    }
}

pub fn run() {
    let Some(el) = document().get_element_by_id(MOUNT_POINT_ID) else {
        log::warn!("No #{MOUNT_POINT_ID} element found");
        return;
    };
    let Some(data) = PageData::from_element(&el) else {
        return;
    };
    let PageData {
        id,
        coordinate,
        nearby,
        maps,
        ctx,
    } = data;
    let parent = el.unchecked_into::<web_sys::HtmlElement>();
    mount_to(parent, move || {
        view! {
          <NearbyLocations
            id=id
            coordinate=coordinate
            config=nearby
            maps=maps
            ctx=ctx
          />
        }
    });
}
