use leptos::*;

use locator_boundary::{Coordinate, LocationProfile};
use locator_core::{
    gateways::LogDiagnostics,
    nearby::{
        call_to_action, CallToAction, MapsConfig, NearbyConfig, NearbyLocations as Widget,
        NearbyProps, NearbyView, TemplateContext, DEFAULT_BUTTON_TEXT, DEFAULT_TITLE,
    },
};
use locator_frontend_api::GeoSearchApi;

use crate::components::DirectoryCard;

#[component]
pub fn NearbyLocations(
    #[prop(into)] id: MaybeSignal<String>,
    #[prop(into)] coordinate: MaybeSignal<Option<Coordinate>>,
    config: NearbyConfig,
    maps: MapsConfig,
    ctx: TemplateContext,
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(default = true)] link_to_locator: bool,
    #[prop(into, default = DEFAULT_BUTTON_TEXT.to_string())] button_text: String,
    #[prop(optional, into)] button_link: Option<String>,
) -> impl IntoView {
    // -- signals -- //

    let widget = create_rw_signal(Widget::new());
    let config = store_value(config);

    let props = move || NearbyProps {
        coordinate: coordinate.get(),
        id: id.get(),
        title: title.clone(),
        link_to_locator,
        button_text: button_text.clone(),
        button_link: button_link.clone(),
    };

    // -- effects -- //

    // Re-runs whenever the id or the coordinate changes.
    let props_for_sync = props.clone();
    create_effect(move |_| {
        let props = props_for_sync();
        let ticket = widget
            .try_update(|w| config.with_value(|cfg| w.sync(cfg, &props, &LogDiagnostics)))
            .flatten();
        let Some(ticket) = ticket else {
            return;
        };
        spawn_local(async move {
            let outcome = GeoSearchApi::new().geosearch(ticket.query()).await;
            widget.update(|w| {
                let completion = w.complete(&ticket, outcome, &LogDiagnostics);
                log::debug!("Query #{} completed: {completion:?}", ticket.seq());
            });
        });
    });

    // -- derived -- //

    let props = store_value(props());
    let cta: Option<CallToAction> = props.with_value(|props| call_to_action(props, &ctx));
    let prefix = ctx.relative_prefix_to_root.clone();
    let cards = move || {
        widget.with(|w| {
            props.with_value(|props| {
                NearbyView::new(props, w.results(), &ctx, &maps)
                    .cards
                    .into_iter()
                    .map(|card| {
                        (
                            card.key.to_string(),
                            card.map_image_url,
                            card.profile.clone(),
                        )
                    })
                    .collect::<Vec<(String, String, LocationProfile)>>()
            })
        })
    };
    let heading = props.with_value(|props| props.title.clone());
    let cta_below = cta.clone();

    view! {
      <div class="py-8 sm:py-16">
        <div class="container">
          <div class="flex justify-between items-center mb-8">
            <h2 class="Heading Heading--head">{ heading }</h2>
            { cta.map(|cta| view! { <LocatorLink cta=cta visibility="hidden sm:flex" /> }) }
          </div>
          <ul class="flex flex-wrap -m-4">
            <For
              each=cards
              key=|(key, _, _)| key.clone()
              children=move |(key, map_image_url, profile)| {
                let alt = profile.name.clone().unwrap_or_default();
                view! {
                  <li class="p-4 w-full sm:w-1/2 lg:w-1/2 flex flex-raw" data-id=key>
                    <img class="sm:w-1/4 w-full" src=map_image_url alt=alt loading="lazy" />
                    <DirectoryCard profile=profile relative_prefix_to_root=prefix.clone() />
                  </li>
                }
              }
            />
          </ul>
          { cta_below.map(|cta| view! { <LocatorLink cta=cta visibility="sm:hidden" /> }) }
        </div>
      </div>
    }
}

#[component]
fn LocatorLink(cta: CallToAction, visibility: &'static str) -> impl IntoView {
    view! {
      <a href=cta.href class=format!("Button Button--primary mt-8 sm:mt-0 {visibility}")>
        { cta.label }
      </a>
    }
}
