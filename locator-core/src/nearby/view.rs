use locator_boundary::LocationProfile;

use crate::nearby::{static_map_url, MapsConfig, NearbyProps, ResultList, TemplateContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub href: String,
    pub label: String,
}

/// The link to the locator, if the widget should show one.
#[must_use]
pub fn call_to_action(props: &NearbyProps, ctx: &TemplateContext) -> Option<CallToAction> {
    if !props.link_to_locator {
        return None;
    }
    let href = props
        .button_link
        .clone()
        .unwrap_or_else(|| ctx.search_path());
    Some(CallToAction {
        href,
        label: props.button_text.clone(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyCard<'a> {
    /// Stable identity of the card within the list.
    pub key: &'a str,
    pub map_image_url: String,
    pub profile: &'a LocationProfile,
}

/// Everything needed to render the nearby locations section.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyView<'a> {
    pub title: &'a str,
    pub call_to_action: Option<CallToAction>,
    pub cards: Vec<NearbyCard<'a>>,
}

impl<'a> NearbyView<'a> {
    #[must_use]
    pub fn new(
        props: &'a NearbyProps,
        results: &'a ResultList,
        ctx: &TemplateContext,
        maps: &MapsConfig,
    ) -> Self {
        let cards = results
            .iter()
            .map(|profile| NearbyCard {
                key: &profile.meta.id,
                map_image_url: static_map_url(profile, maps),
                profile,
            })
            .collect();
        Self {
            title: &props.title,
            call_to_action: call_to_action(props, ctx),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearby::{results::tests::profile, SiteSettings, FALLBACK_SEARCH_PATH};

    fn ctx_with_slug(slug: &str) -> TemplateContext {
        TemplateContext {
            relative_prefix_to_root: "../".into(),
            site: Some(SiteSettings {
                search_page_slug: Some(slug.into()),
            }),
        }
    }

    #[test]
    fn link_to_search_page_of_site() {
        let props = NearbyProps::new("123", None);
        let cta = call_to_action(&props, &ctx_with_slug("search")).unwrap();
        assert_eq!(cta.href, "../search");
        assert_eq!(cta.label, "Find a Location");
    }

    #[test]
    fn link_to_fallback_without_site() {
        let props = NearbyProps::new("123", None);
        let cta = call_to_action(&props, &TemplateContext::default()).unwrap();
        assert_eq!(cta.href, FALLBACK_SEARCH_PATH);
    }

    #[test]
    fn explicit_button_link() {
        let props = NearbyProps {
            button_link: Some("https://example.com/find".into()),
            button_text: "Search".into(),
            ..NearbyProps::new("123", None)
        };
        let cta = call_to_action(&props, &ctx_with_slug("search")).unwrap();
        assert_eq!(cta.href, "https://example.com/find");
        assert_eq!(cta.label, "Search");
    }

    #[test]
    fn no_link_to_locator() {
        let props = NearbyProps {
            link_to_locator: false,
            ..NearbyProps::new("123", None)
        };
        assert!(call_to_action(&props, &ctx_with_slug("search")).is_none());
    }

    #[test]
    fn cards_keyed_by_entity_id() {
        let props = NearbyProps::new("123", None);
        let results =
            ResultList::from_entities(vec![profile("456"), profile("789")], "123", 4);
        let view = NearbyView::new(
            &props,
            &results,
            &TemplateContext::default(),
            &MapsConfig::default(),
        );
        assert_eq!(view.title, "Nearby Locations");
        let keys: Vec<_> = view.cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["456", "789"]);
        assert!(view.cards[0].map_image_url.contains("456+Main+St"));
    }
}
