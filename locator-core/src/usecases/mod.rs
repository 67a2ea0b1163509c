mod refresh_nearby_locations;

pub use self::refresh_nearby_locations::*;
