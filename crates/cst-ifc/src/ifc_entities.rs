//! IFC entity views consumed by curve segment mapping.
//!
//! These mirror the attribute accessors of the IFC 4.3 alignment geometry
//! entities. Parsing the STEP file that produces them happens elsewhere.

use cst_core::{CstError, Result};
use cst_math::DVec2;
use serde::{Deserialize, Serialize};

/// `IfcCartesianPoint`: ordered coordinate list `[x, y, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcCartesianPoint {
    pub coordinates: Vec<f64>,
}

impl IfcCartesianPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coordinates: vec![x, y],
        }
    }

    pub fn x(&self) -> Result<f64> {
        self.coordinate(0)
    }

    pub fn y(&self) -> Result<f64> {
        self.coordinate(1)
    }

    pub fn xy(&self) -> Result<DVec2> {
        Ok(DVec2::new(self.x()?, self.y()?))
    }

    fn coordinate(&self, i: usize) -> Result<f64> {
        self.coordinates.get(i).copied().ok_or_else(|| {
            CstError::Geometry(format!(
                "IfcCartesianPoint has {} coordinates, expected at least 2",
                self.coordinates.len()
            ))
        })
    }
}

/// `IfcPoint` and the subtypes that can appear as a placement location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IfcPoint {
    CartesianPoint(IfcCartesianPoint),
    PointByDistanceExpression,
    PointOnCurve,
    PointOnSurface,
}

impl IfcPoint {
    pub fn type_name(&self) -> &'static str {
        match self {
            IfcPoint::CartesianPoint(_) => "IfcCartesianPoint",
            IfcPoint::PointByDistanceExpression => "IfcPointByDistanceExpression",
            IfcPoint::PointOnCurve => "IfcPointOnCurve",
            IfcPoint::PointOnSurface => "IfcPointOnSurface",
        }
    }

    pub fn as_cartesian_point(&self) -> Option<&IfcCartesianPoint> {
        match self {
            IfcPoint::CartesianPoint(p) => Some(p),
            _ => None,
        }
    }
}

impl From<IfcCartesianPoint> for IfcPoint {
    fn from(p: IfcCartesianPoint) -> Self {
        IfcPoint::CartesianPoint(p)
    }
}

/// `IfcDirection`: direction ratios `[rx, ry, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcDirection {
    pub direction_ratios: Vec<f64>,
}

impl IfcDirection {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            direction_ratios: vec![dx, dy],
        }
    }

    /// The first two direction ratios.
    pub fn ratios_2d(&self) -> Result<(f64, f64)> {
        match self.direction_ratios.as_slice() {
            [dx, dy, ..] => Ok((*dx, *dy)),
            other => Err(CstError::Geometry(format!(
                "IfcDirection has {} ratios, expected at least 2",
                other.len()
            ))),
        }
    }
}

/// `IfcVector`: orientation plus magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcVector {
    pub orientation: IfcDirection,
    pub magnitude: f64,
}

/// `IfcAxis2Placement2D`: location and optional X-axis reference direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcAxis2Placement2D {
    pub location: IfcPoint,
    #[serde(default)]
    pub ref_direction: Option<IfcDirection>,
}

impl IfcAxis2Placement2D {
    pub fn new(x: f64, y: f64, ref_direction: Option<IfcDirection>) -> Self {
        Self {
            location: IfcCartesianPoint::new(x, y).into(),
            ref_direction,
        }
    }

    /// Placement at the origin with no reference direction.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcLine {
    pub pnt: IfcCartesianPoint,
    pub dir: IfcVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcCircle {
    pub radius: f64,
    pub position: IfcAxis2Placement2D,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcPolyline {
    pub points: Vec<IfcCartesianPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcClothoid {
    pub clothoid_constant: f64,
    pub position: IfcAxis2Placement2D,
}

/// Parent curve of a curve segment.
///
/// Curve types without an evaluator are carried as `Other` with their
/// declared entity name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IfcCurve {
    Line(IfcLine),
    Circle(IfcCircle),
    Polyline(IfcPolyline),
    Clothoid(IfcClothoid),
    Other { type_name: String },
}

impl IfcCurve {
    pub fn type_name(&self) -> &str {
        match self {
            IfcCurve::Line(_) => "IfcLine",
            IfcCurve::Circle(_) => "IfcCircle",
            IfcCurve::Polyline(_) => "IfcPolyline",
            IfcCurve::Clothoid(_) => "IfcClothoid",
            IfcCurve::Other { type_name } => type_name,
        }
    }

    pub fn as_line(&self) -> Option<&IfcLine> {
        match self {
            IfcCurve::Line(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&IfcCircle> {
        match self {
            IfcCurve::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&IfcPolyline> {
        match self {
            IfcCurve::Polyline(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_clothoid(&self) -> Option<&IfcClothoid> {
        match self {
            IfcCurve::Clothoid(c) => Some(c),
            _ => None,
        }
    }
}

/// `IfcCurveMeasureSelect`: a length measure or a curve parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IfcCurveMeasureSelect {
    LengthMeasure(f64),
    ParameterValue(f64),
}

impl IfcCurveMeasureSelect {
    pub fn type_name(&self) -> &'static str {
        match self {
            IfcCurveMeasureSelect::LengthMeasure(_) => "IfcLengthMeasure",
            IfcCurveMeasureSelect::ParameterValue(_) => "IfcParameterValue",
        }
    }

    pub fn as_length_measure(&self) -> Option<f64> {
        match self {
            IfcCurveMeasureSelect::LengthMeasure(v) => Some(*v),
            IfcCurveMeasureSelect::ParameterValue(_) => None,
        }
    }
}

/// `IfcCurveSegment`: a bounded piece of a parent curve, placed in the
/// frame of the composite curve it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcCurveSegment {
    pub placement: IfcAxis2Placement2D,
    pub segment_start: IfcCurveMeasureSelect,
    pub segment_length: IfcCurveMeasureSelect,
    pub parent_curve: IfcCurve,
}

/// `IfcCompositeCurve` restricted to curve segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfcCompositeCurve {
    pub segments: Vec<IfcCurveSegment>,
}
