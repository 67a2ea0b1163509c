use crate::{
    gateways::{DiagnosticsGateway, GeoSearchGateway},
    nearby::{Completion, NearbyConfig, NearbyLocations, NearbyProps},
};

/// Runs one query cycle to completion.
///
/// Returns `None` if no query was necessary.
pub fn refresh_nearby_locations<G, D>(
    widget: &mut NearbyLocations,
    config: &NearbyConfig,
    props: &NearbyProps,
    gateway: &G,
    diagnostics: &D,
) -> Option<Completion>
where
    G: GeoSearchGateway + ?Sized,
    D: DiagnosticsGateway + ?Sized,
{
    let ticket = widget.sync(config, props, diagnostics)?;
    let outcome = gateway.geosearch(ticket.query());
    Some(widget.complete(&ticket, outcome, diagnostics))
}
