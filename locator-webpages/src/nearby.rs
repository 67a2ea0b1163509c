use maud::{html, Markup};

use locator_core::nearby::{CallToAction, NearbyView};

use crate::directory_card;

/// The nearby locations section.
///
/// The link to the locator appears twice: next to the heading on wide
/// screens and below the list on narrow ones.
pub fn nearby_locations(view: &NearbyView<'_>, relative_prefix_to_root: &str) -> Markup {
    html! {
        div class="py-8 sm:py-16" {
            div class="container" {
                div class="flex justify-between items-center mb-8" {
                    h2 class="Heading Heading--head" { (view.title) }
                    @if let Some(cta) = &view.call_to_action {
                        (locator_link(cta, "hidden sm:flex"))
                    }
                }
                ul class="flex flex-wrap -m-4" {
                    @for card in &view.cards {
                        li class="p-4 w-full sm:w-1/2 lg:w-1/2 flex flex-raw" data-id=(card.key) {
                            img class="sm:w-1/4 w-full"
                                src=(card.map_image_url)
                                alt=(card.profile.name.as_deref().unwrap_or_default())
                                loading="lazy";
                            (directory_card(card.profile, relative_prefix_to_root))
                        }
                    }
                }
                @if let Some(cta) = &view.call_to_action {
                    (locator_link(cta, "sm:hidden"))
                }
            }
        }
    }
}

pub fn locator_link(cta: &CallToAction, class: &str) -> Markup {
    html! {
        a href=(cta.href) class=(format!("Button Button--primary mt-8 sm:mt-0 {class}")) {
            (cta.label)
        }
    }
}
