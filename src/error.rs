use thiserror::Error;

/// Errors that can occur while building or measuring a point sequence.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MeasureError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("point {index}: {source}")]
    InvalidPoint {
        index: usize,
        #[source]
        source: Box<MeasureError>,
    },

    #[error("malformed point {0:?}, expected \"lat,lon\"")]
    Parse(String),

    #[error("unknown line type {0:?}")]
    UnknownLineType(String),

    #[error("unknown area method {0:?}")]
    UnknownAreaMethod(String),
}
