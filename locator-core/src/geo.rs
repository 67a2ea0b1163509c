use std::fmt;

use locator_boundary::Coordinate;

use crate::Error;

/// A validated point on earth in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(Error::InvalidCoordinate);
        }
        Ok(Self { lat, lng })
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<Coordinate> for GeoPoint {
    type Error = Error;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate {
            latitude,
            longitude,
        } = from;
        Self::try_from_lat_lng_deg(latitude, longitude)
    }
}

impl From<GeoPoint> for Coordinate {
    fn from(from: GeoPoint) -> Self {
        Self {
            latitude: from.lat,
            longitude: from.lng,
        }
    }
}

/// Formats as `<lat>,<lng>`, the form expected by the `location` parameter.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_as_location_parameter() {
        let p = GeoPoint::try_from_lat_lng_deg(40.7, -74.0).unwrap();
        assert_eq!(p.to_string(), "40.7,-74");
        let p = GeoPoint::try_from_lat_lng_deg(-33.8688, 151.2093).unwrap();
        assert_eq!(p.to_string(), "-33.8688,151.2093");
    }

    #[test]
    fn reject_non_finite_values() {
        assert!(GeoPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_err());
        let c = Coordinate {
            latitude: f64::NEG_INFINITY,
            longitude: 1.0,
        };
        assert!(GeoPoint::try_from(c).is_err());
    }

    #[test]
    fn convert_from_coordinate() {
        let c = Coordinate {
            latitude: 52.52,
            longitude: 13.405,
        };
        let p = GeoPoint::try_from(c).unwrap();
        assert_eq!(p.lat(), 52.52);
        assert_eq!(p.lng(), 13.405);
        assert_eq!(Coordinate::from(p), c);
    }
}
