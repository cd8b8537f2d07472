//! Geographic point value type.

use std::fmt;
use std::str::FromStr;

use geo::Coord;

use crate::error::MeasureError;

/// A (latitude, longitude) pair in degrees.
///
/// `new` accepts any value; range checks happen in [`GeoPoint::try_new`]
/// and [`GeoPoint::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a point, rejecting coordinates outside the valid ranges (and NaN).
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, MeasureError> {
        let p = Self::new(latitude, longitude);
        p.validate()?;
        Ok(p)
    }

    pub fn validate(&self) -> Result<(), MeasureError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(MeasureError::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(MeasureError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    /// Latitude and longitude in radians.
    pub fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Parses `"lat,lon"` without checking ranges.
    pub fn parse_unchecked(s: &str) -> Result<Self, MeasureError> {
        let parse_err = || MeasureError::Parse(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(parse_err)?;
        let lat: f64 = lat.trim().parse().map_err(|_| parse_err())?;
        let lon: f64 = lon.trim().parse().map_err(|_| parse_err())?;
        Ok(GeoPoint::new(lat, lon))
    }
}

/// `geo` uses x = longitude, y = latitude.
impl From<GeoPoint> for Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        Coord { x: p.longitude, y: p.latitude }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"`. Ranges are checked.
impl FromStr for GeoPoint {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p = GeoPoint::parse_unchecked(s)?;
        p.validate()?;
        Ok(p)
    }
}
