use locator_boundary::{Coordinate, LocationProfile};

use crate::{
    gateways::DiagnosticsGateway,
    geo::GeoPoint,
    nearby::{NearbyConfig, NearbyProps, NearbyQuery, ResultList},
    Result,
};

/// The values a query depends on.
#[derive(Debug, Clone)]
struct Dependencies {
    coordinate: Option<Coordinate>,
    id: String,
    api_key: Option<String>,
}

// Coordinates are compared bitwise, so an invalid (NaN) coordinate
// equals itself and does not count as a change.
impl PartialEq for Dependencies {
    fn eq(&self, other: &Self) -> bool {
        let bits = |c: Option<Coordinate>| c.map(|c| (c.latitude.to_bits(), c.longitude.to_bits()));
        bits(self.coordinate) == bits(other.coordinate)
            && self.id == other.id
            && self.api_key == other.api_key
    }
}

/// A query that has been issued but not completed yet.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    seq: u64,
    query: NearbyQuery,
}

impl QueryTicket {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub const fn query(&self) -> &NearbyQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result list has been replaced.
    Applied { count: usize },
    /// The query failed and the result list is unchanged.
    Failed,
    /// A newer query has been issued in the meantime.
    Stale,
}

/// State of the nearby locations widget.
///
/// Queries are numbered in the order they are issued. Only the completion
/// of the latest one is applied, so a slow response can never overwrite the
/// answer to a newer request.
#[derive(Debug, Default)]
pub struct NearbyLocations {
    deps: Option<Dependencies>,
    latest_seq: u64,
    results: ResultList,
}

impl NearbyLocations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn results(&self) -> &ResultList {
        &self.results
    }

    /// Issues a new query if the coordinate, the id or the API key changed.
    pub fn sync<D>(
        &mut self,
        config: &NearbyConfig,
        props: &NearbyProps,
        diagnostics: &D,
    ) -> Option<QueryTicket>
    where
        D: DiagnosticsGateway + ?Sized,
    {
        let deps = Dependencies {
            coordinate: props.coordinate,
            id: props.id.clone(),
            api_key: config.api_key().map(ToString::to_string),
        };
        if self.deps.as_ref() == Some(&deps) {
            return None;
        }
        if self.deps.as_ref().is_some_and(|d| d.id != deps.id) {
            // The list must never show the entity itself, even if no new
            // query succeeds.
            self.results.retain_excluding(&deps.id);
        }
        self.deps = Some(deps);
        // Anything still in flight is outdated from now on.
        self.latest_seq += 1;

        if config.api_key().is_none() {
            diagnostics.missing_api_key();
            return None;
        }
        let Some(coordinate) = props.coordinate else {
            log::debug!("No coordinate for entity {}: skip nearby query", props.id);
            return None;
        };
        let query = GeoPoint::try_from(coordinate)
            .and_then(|pos| NearbyQuery::new(config, pos, &props.id));
        match query {
            Ok(query) => {
                log::debug!(
                    "Issue nearby query #{} around {}",
                    self.latest_seq,
                    query.location()
                );
                Some(QueryTicket {
                    seq: self.latest_seq,
                    query,
                })
            }
            Err(err) => {
                diagnostics.query_failed(&err);
                None
            }
        }
    }

    /// Applies the outcome of an issued query.
    pub fn complete<D>(
        &mut self,
        ticket: &QueryTicket,
        outcome: Result<Vec<LocationProfile>>,
        diagnostics: &D,
    ) -> Completion
    where
        D: DiagnosticsGateway + ?Sized,
    {
        if ticket.seq != self.latest_seq {
            match outcome {
                Ok(_) => log::debug!("Discard stale response of nearby query #{}", ticket.seq),
                Err(err) => log::debug!("Stale nearby query #{} failed: {err}", ticket.seq),
            }
            return Completion::Stale;
        }
        match outcome {
            Ok(entities) => {
                let query = &ticket.query;
                self.results =
                    ResultList::from_entities(entities, query.exclude_id(), query.limit());
                let count = self.results.len();
                log::debug!("Found {count} nearby locations");
                Completion::Applied { count }
            }
            Err(err) => {
                diagnostics.query_failed(&err);
                Completion::Failed
            }
        }
    }
}
