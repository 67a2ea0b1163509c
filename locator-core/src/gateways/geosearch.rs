use locator_boundary::LocationProfile;

use crate::{nearby::NearbyQuery, Result};

pub trait GeoSearchGateway {
    /// The entities of the response in the order they were delivered.
    /// A response without entities yields an empty list.
    fn geosearch(&self, query: &NearbyQuery) -> Result<Vec<LocationProfile>>;
}
