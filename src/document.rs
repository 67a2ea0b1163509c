use anyhow::{anyhow, Context, Result};
use std::{fs, path::Path};

use locator_boundary::{Coordinate, TemplateDocument};
use locator_core::nearby::{NearbyProps, SiteSettings, TemplateContext};

use crate::config::Site;

/// Values given on the command line that take precedence over the document.
#[derive(Debug, Default)]
pub struct Overrides {
    pub id: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub title: Option<String>,
    pub no_locator_link: bool,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub relative_prefix_to_root: Option<String>,
}

pub fn read_document(path: &Path) -> Result<TemplateDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Unable to read document {}", path.display()))?;
    let doc = serde_json::from_str(&json)
        .with_context(|| format!("Invalid document {}", path.display()))?;
    Ok(doc)
}

pub fn nearby_props(doc: Option<&TemplateDocument>, overrides: &Overrides) -> Result<NearbyProps> {
    let id = overrides
        .id
        .clone()
        .or_else(|| doc.and_then(|d| d.meta.as_ref()).map(|m| m.id.clone()))
        .or_else(|| doc.and_then(|d| d.id.clone()))
        .ok_or_else(|| anyhow!("Missing entity id"))?;

    let coordinate = match (overrides.lat, overrides.lng) {
        (Some(latitude), Some(longitude)) => Some(Coordinate {
            latitude,
            longitude,
        }),
        (None, None) => doc.and_then(|d| d.display_coordinate),
        _ => return Err(anyhow!("Latitude and longitude must be given together")),
    };

    let mut props = NearbyProps::new(id, coordinate);
    if let Some(title) = &overrides.title {
        props.title = title.clone();
    }
    if let Some(text) = &overrides.button_text {
        props.button_text = text.clone();
    }
    props.button_link = overrides.button_link.clone();
    props.link_to_locator = !overrides.no_locator_link;
    Ok(props)
}

pub fn template_context(
    doc: Option<&TemplateDocument>,
    overrides: &Overrides,
    site: &Site,
) -> TemplateContext {
    let relative_prefix_to_root = overrides
        .relative_prefix_to_root
        .clone()
        .unwrap_or_else(|| site.relative_prefix_to_root.clone());
    let search_page_slug = doc
        .and_then(|d| d.site.as_ref())
        .and_then(|s| s.search_page.as_ref())
        .and_then(|p| p.slug.clone())
        .or_else(|| site.search_page_slug.clone());
    TemplateContext {
        relative_prefix_to_root,
        site: search_page_slug.map(|slug| SiteSettings {
            search_page_slug: Some(slug),
        }),
    }
}
