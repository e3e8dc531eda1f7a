use thiserror::Error;

#[derive(Debug, Error)]
pub enum CstError {
    /// Segment start or length given as something other than a length measure.
    #[error("Unsupported curve measure type: {0}")]
    UnsupportedMeasure(String),

    /// Placement location that is not an `IfcCartesianPoint`.
    #[error("Only IfcCartesianPoint is supported as placement location, got {0}")]
    UnsupportedPointType(String),

    /// Parent curve outside the set of supported curve types.
    #[error("{0} not implemented")]
    UnsupportedCurveType(String),

    #[error("Invalid polyline: {0}")]
    InvalidPolyline(String),

    #[error("Parameter {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, CstError>;
