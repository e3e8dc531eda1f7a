//! Curve segment evaluation: resolves an `IfcCurveSegment`'s parent curve
//! into an arc-length evaluator.

use cst_core::{CstError, Result};
use cst_geometry::{Circle, Clothoid, Curve, CurveEvaluator, Line, Polyline};
use cst_math::{Point3, Transform2D, Vector2, Vector3};

use crate::ifc_entities::{
    IfcAxis2Placement2D, IfcCircle, IfcClothoid, IfcCurve, IfcCurveMeasureSelect, IfcLine,
    IfcPolyline,
};
use crate::settings::SamplingSettings;

/// Evaluator for one curve segment.
///
/// `start` and `length` are kept in source units; evaluation at local arc
/// length `u` calls the parent curve at `(u + start) * length_unit`.
#[derive(Debug, Clone)]
pub struct CurveSegmentEvaluator {
    length_unit: f64,
    start: f64,
    length: f64,
    curve: CurveEvaluator,
}

impl CurveSegmentEvaluator {
    pub fn new(
        length_unit: f64,
        curve: &IfcCurve,
        start: &IfcCurveMeasureSelect,
        length: &IfcCurveMeasureSelect,
    ) -> Result<Self> {
        Self::with_settings(&SamplingSettings::default(), length_unit, curve, start, length)
    }

    pub fn with_settings(
        settings: &SamplingSettings,
        length_unit: f64,
        curve: &IfcCurve,
        start: &IfcCurveMeasureSelect,
        length: &IfcCurveMeasureSelect,
    ) -> Result<Self> {
        // Parameter values stay unsupported until every spiral type has a
        // defined parametrisation.
        let start = resolve_length_measure(start)?;
        let length = resolve_length_measure(length)?;
        let curve = build_evaluator(settings, curve, start, length)?;
        tracing::debug!(
            kind = curve.kind(),
            start,
            length,
            length_unit,
            "Built curve segment evaluator"
        );
        Ok(Self {
            length_unit,
            start,
            length,
            curve,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn length_unit(&self) -> f64 {
        self.length_unit
    }

    pub fn curve(&self) -> &CurveEvaluator {
        &self.curve
    }

    /// Point at local arc length `u`, in the parent curve's frame.
    pub fn point_at(&self, u: f64) -> Result<Point3> {
        self.curve.point_at((u + self.start) * self.length_unit)
    }

    /// Tangent at local arc length `u`, in the parent curve's frame.
    pub fn tangent_at(&self, u: f64) -> Result<Vector3> {
        self.curve.tangent_at((u + self.start) * self.length_unit)
    }

    /// Like [`point_at`](Self::point_at), but rejects distances outside the
    /// segment's extent.
    pub fn point_at_distance(&self, distance: f64) -> Result<Point3> {
        let (min, max) = if self.length < 0.0 {
            (self.length, 0.0)
        } else {
            (0.0, self.length)
        };
        if !(min <= distance && distance <= max) {
            return Err(CstError::ParameterOutOfRange {
                value: distance,
                min,
                max,
            });
        }
        self.point_at(distance)
    }
}

/// Extract a length measure; parameter values are rejected.
pub fn resolve_length_measure(measure: &IfcCurveMeasureSelect) -> Result<f64> {
    measure.as_length_measure().ok_or_else(|| {
        CstError::UnsupportedMeasure(format!(
            "expected IfcLengthMeasure, got {}",
            measure.type_name()
        ))
    })
}

/// Resolve an `IfcAxis2Placement2D` into a planar transform.
pub fn resolve_placement(placement: &IfcAxis2Placement2D) -> Result<Transform2D> {
    let location = placement
        .location
        .as_cartesian_point()
        .ok_or_else(|| CstError::UnsupportedPointType(placement.location.type_name().into()))?;
    let ref_direction = placement
        .ref_direction
        .as_ref()
        .map(|d| d.ratios_2d())
        .transpose()?;
    Ok(Transform2D::from_ref_direction(location.xy()?, ref_direction))
}

/// Pick the evaluator builder matching the curve's runtime type.
pub fn build_evaluator(
    settings: &SamplingSettings,
    curve: &IfcCurve,
    start: f64,
    length: f64,
) -> Result<CurveEvaluator> {
    match curve {
        IfcCurve::Line(c) => build_line(c),
        IfcCurve::Circle(c) => build_circle(c),
        IfcCurve::Polyline(c) => build_polyline(settings, c),
        IfcCurve::Clothoid(c) => build_clothoid(c, start, length),
        IfcCurve::Other { type_name } => Err(CstError::UnsupportedCurveType(type_name.clone())),
    }
}

fn build_line(line: &IfcLine) -> Result<CurveEvaluator> {
    let (rx, ry) = line.dir.orientation.ratios_2d()?;
    let line = Line::new(line.pnt.xy()?, Vector2::new(rx, ry), line.dir.magnitude)?;
    Ok(line.into())
}

fn build_circle(circle: &IfcCircle) -> Result<CurveEvaluator> {
    let position = resolve_placement(&circle.position)?;
    Ok(Circle::new(circle.radius, position)?.into())
}

fn build_polyline(settings: &SamplingSettings, polyline: &IfcPolyline) -> Result<CurveEvaluator> {
    let points = polyline
        .points
        .iter()
        .map(|p| p.xy())
        .collect::<Result<Vec<_>>>()?;
    let polyline =
        Polyline::with_tolerance(&points, settings.point_tolerance, settings.polyline_end_slack)?;
    Ok(polyline.into())
}

fn build_clothoid(clothoid: &IfcClothoid, start: f64, length: f64) -> Result<CurveEvaluator> {
    let position = resolve_placement(&clothoid.position)?;
    Ok(Clothoid::from_segment(clothoid.clothoid_constant, start, length, position).into())
}
