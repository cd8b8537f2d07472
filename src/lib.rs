//! mapmeasure: path length and enclosed area for sequences of map points.
//!
//! A map UI collects points from taps; this crate turns them into the
//! total distance along the polyline through them, or the surface area
//! of the polygon closed over them, ready for display.
//!
//! # Example
//!
//! ```
//! use mapmeasure::{measure, GeoPoint, LineType, MeasureConfig};
//!
//! let points = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
//! let m = measure(&points, LineType::Polyline, &MeasureConfig::default())?;
//! assert_eq!(m.to_string(), "Total distance: 111.19 km");
//! # Ok::<(), mapmeasure::MeasureError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod point;

pub mod area;
pub mod distance;
pub mod error;
pub mod format;

pub use area::{surface_area_m2, surface_area_m2_with};
pub use config::{AreaMethod, MeasureConfig};
pub use distance::{path_length_km, path_length_km_with_radius, EARTH_RADIUS_KM};
pub use error::MeasureError;
pub use format::format_value;
pub use point::GeoPoint;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

/// What to draw over the points, and therefore what to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    /// Open path through the points; measured as a length.
    Polyline,
    /// Ring closed over the points; measured as an area.
    Polygon,
}

impl LineType {
    pub const ALL: [LineType; 2] = [LineType::Polyline, LineType::Polygon];

    fn name(self) -> &'static str {
        match self {
            LineType::Polyline => "POLYLINE",
            LineType::Polygon => "POLYGON",
        }
    }

    /// Unit of the measurement this line type produces.
    pub fn unit(self) -> &'static str {
        match self {
            LineType::Polyline => "km",
            LineType::Polygon => "sq. mtrs",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::capitalise(self.name()))
    }
}

impl FromStr for LineType {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeasureError::UnknownLineType(s.to_string()))
    }
}

/// A measured value, kilometres for polylines and square metres for polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub line_type: LineType,
    pub value: f64,
    /// Decimal places used by [`Measurement::formatted`] and `Display`.
    pub decimals: usize,
}

impl Measurement {
    pub fn unit(&self) -> &'static str {
        self.line_type.unit()
    }

    /// The value without its unit.
    pub fn formatted(&self) -> String {
        format::format_value_with(self.value, self.decimals)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.line_type {
            LineType::Polyline => "Total distance",
            LineType::Polygon => "Total surface area",
        };
        write!(f, "{}: {} {}", label, self.formatted(), self.unit())
    }
}

/// Measure `points` as a polyline length or polygon area.
///
/// With `config.strict`, every point is range-checked first and the
/// first offending index is reported. The calculation itself cannot fail.
pub fn measure(
    points: &[GeoPoint],
    line_type: LineType,
    config: &MeasureConfig,
) -> Result<Measurement, MeasureError> {
    if config.strict {
        for (index, p) in points.iter().enumerate() {
            p.validate().map_err(|e| MeasureError::InvalidPoint {
                index,
                source: Box::new(e),
            })?;
        }
    }

    let value = match line_type {
        LineType::Polyline => {
            let km = path_length_km_with_radius(points, config.earth_radius_km);
            debug!("Polyline over {} points: {} km", points.len(), km);
            km
        }
        LineType::Polygon => {
            if points.len() < 3 {
                warn!("polygon needs at least 3 points, got {}", points.len());
            }
            let m2 = surface_area_m2_with(points, config.area_method, config.earth_radius_km);
            debug!(
                "Polygon over {} points ({} area): {} sq. mtrs",
                points.len(),
                config.area_method,
                m2
            );
            m2
        }
    };

    Ok(Measurement {
        line_type,
        value,
        decimals: config.decimals,
    })
}
