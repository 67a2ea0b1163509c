use leptos::*;

use locator_boundary::LocationProfile;

#[component]
pub fn DirectoryCard(profile: LocationProfile, relative_prefix_to_root: String) -> impl IntoView {
    let LocationProfile {
        meta,
        name,
        address,
        main_phone,
        slug,
        ..
    } = profile;
    let name = name.unwrap_or(meta.id);
    let locality = [address.city, address.region]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    view! {
      <div class="DirectoryCard">
        <h3 class="DirectoryCard-title">
        {
          match slug {
            Some(slug) => view! {
              <a class="Link" href=format!("{relative_prefix_to_root}{slug}")>{ name }</a>
            }.into_view(),
            None => name.into_view(),
          }
        }
        </h3>
        <address class="DirectoryCard-address">
          { address.line1.map(|l| view! { { l }<br/> }) }
          { address.line2.map(|l| view! { { l }<br/> }) }
          { locality }
          { address.postal_code.map(|z| format!(" {z}")) }
        </address>
        {
          main_phone.map(|phone| view! {
            <div class="DirectoryCard-phone">
              <a class="Link" href=format!("tel:{phone}")>{ phone.clone() }</a>
            </div>
          })
        }
      </div>
    }
}
