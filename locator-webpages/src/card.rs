use maud::{html, Markup};

use locator_boundary::{Address, LocationProfile};

/// A compact presentation of a location.
pub fn directory_card(profile: &LocationProfile, relative_prefix_to_root: &str) -> Markup {
    let name = profile.name.as_deref().unwrap_or(&profile.meta.id);
    html! {
        div class="DirectoryCard" {
            h3 class="DirectoryCard-title" {
                @if let Some(slug) = &profile.slug {
                    a class="Link" href=(format!("{relative_prefix_to_root}{slug}")) { (name) }
                } @else {
                    (name)
                }
            }
            (address(&profile.address))
            @if let Some(phone) = &profile.main_phone {
                div class="DirectoryCard-phone" {
                    a class="Link" href=(format!("tel:{phone}")) { (phone) }
                }
            }
        }
    }
}

fn address(addr: &Address) -> Markup {
    let locality = [addr.city.as_deref(), addr.region.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    html! {
        address class="DirectoryCard-address" {
            @if let Some(ref l) = addr.line1 {
                (l) br;
            }
            @if let Some(ref l) = addr.line2 {
                (l) br;
            }
            (locality)
            @if let Some(ref z) = addr.postal_code {
                " " (z)
            }
        }
    }
}
