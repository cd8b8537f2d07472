use std::fmt;
use std::str::FromStr;

use crate::distance::EARTH_RADIUS_KM;
use crate::error::MeasureError;

/// All measurement parameters in one struct.
/// Hosts start from `Default` and override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureConfig {
    /// Sphere radius in kilometres. Used for distances and for the
    /// spherical and planar area methods.
    pub earth_radius_km: f64,
    /// Formula used for polygon surface area.
    pub area_method: AreaMethod,
    /// Decimal places in the formatted report.
    pub decimals: usize,
    /// Reject out-of-range coordinates before measuring.
    pub strict: bool,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            area_method: AreaMethod::Spherical,
            decimals: 2,
            strict: true,
        }
    }
}

/// Polygon area formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaMethod {
    /// Spherical excess on a sphere of `earth_radius_km`.
    #[default]
    Spherical,
    /// Shoelace over an equirectangular projection about the mean latitude.
    /// Only sensible for small (city-scale) rings.
    Planar,
    /// Ellipsoidal (WGS84) area. Ignores `earth_radius_km`.
    Geodesic,
}

impl AreaMethod {
    pub const ALL: [AreaMethod; 3] = [
        AreaMethod::Spherical,
        AreaMethod::Planar,
        AreaMethod::Geodesic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AreaMethod::Spherical => "spherical",
            AreaMethod::Planar => "planar",
            AreaMethod::Geodesic => "geodesic",
        }
    }
}

impl fmt::Display for AreaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AreaMethod {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AreaMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeasureError::UnknownAreaMethod(s.to_string()))
    }
}
