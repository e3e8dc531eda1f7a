//! IFC curve segment mapping - discretises curve segments into point lists.

use cst_core::{Result, Validate};
use cst_math::{DVec3, Transform2D};
use rayon::prelude::*;

use crate::ifc_curve_segment::{resolve_placement, CurveSegmentEvaluator};
use crate::ifc_entities::{
    IfcAxis2Placement2D, IfcCompositeCurve, IfcCurve, IfcCurveMeasureSelect, IfcCurveSegment,
};
use crate::settings::SamplingSettings;

/// Distance below which the first point of a segment is merged with the
/// last point of the previous one when stitching a composite curve.
const JOIN_TOLERANCE: f64 = 1e-9;

/// Sample a curve segment with the default [`SamplingSettings`].
///
/// Returns `num_segments + 1` points uniformly spaced in arc length, placed
/// by `placement`, or no points when `|length|` is at or below the minimum
/// segment length.
pub fn sample(
    length_unit: f64,
    curve: &IfcCurve,
    start: &IfcCurveMeasureSelect,
    length: &IfcCurveMeasureSelect,
    placement: &IfcAxis2Placement2D,
) -> Result<Vec<DVec3>> {
    sample_with(&SamplingSettings::default(), length_unit, curve, start, length, placement)
}

pub fn sample_with(
    settings: &SamplingSettings,
    length_unit: f64,
    curve: &IfcCurve,
    start: &IfcCurveMeasureSelect,
    length: &IfcCurveMeasureSelect,
    placement: &IfcAxis2Placement2D,
) -> Result<Vec<DVec3>> {
    settings.validate()?;
    let evaluator =
        CurveSegmentEvaluator::with_settings(settings, length_unit, curve, start, length)?;
    let frame = resolve_placement(placement)?;
    sample_evaluator(settings, &evaluator, &frame)
}

/// Sample a built evaluator and apply the segment placement `frame`.
pub fn sample_evaluator(
    settings: &SamplingSettings,
    evaluator: &CurveSegmentEvaluator,
    frame: &Transform2D,
) -> Result<Vec<DVec3>> {
    let length = evaluator.length();
    if length.abs() <= settings.min_segment_length {
        tracing::debug!(length, "Skipping curve segment below minimum length");
        return Ok(Vec::new());
    }

    let n = settings.num_segments;
    let points = (0..=n)
        .map(|i| {
            let u = length * i as f64 / n as f64;
            let p = evaluator.point_at(u)?;
            Ok(frame.transform_point(p))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(kind = evaluator.curve().kind(), count = points.len(), "Sampled curve segment");
    Ok(points)
}

/// Sample an `IfcCurveSegment` entity.
pub fn map_curve_segment(segment: &IfcCurveSegment, length_unit: f64) -> Result<Vec<DVec3>> {
    sample(
        length_unit,
        &segment.parent_curve,
        &segment.segment_start,
        &segment.segment_length,
        &segment.placement,
    )
}

/// Sample independent curve segments in parallel.
///
/// Results keep the input order; a failing segment does not affect the others.
pub fn map_curve_segments(
    segments: &[IfcCurveSegment],
    length_unit: f64,
) -> Vec<Result<Vec<DVec3>>> {
    segments
        .par_iter()
        .enumerate()
        .map(|(index, segment)| {
            let result = map_curve_segment(segment, length_unit);
            if let Err(e) = &result {
                tracing::warn!(
                    index,
                    curve = segment.parent_curve.type_name(),
                    error = %e,
                    "Curve segment mapping failed"
                );
            }
            result
        })
        .collect()
}

/// Sample every segment of a composite curve and stitch them into one
/// polyline.
///
/// Zero-length segments contribute nothing, and a segment's first point is
/// dropped when it coincides with the previous segment's last point. The
/// first failing segment aborts the whole curve.
pub fn map_composite_curve(curve: &IfcCompositeCurve, length_unit: f64) -> Result<Vec<DVec3>> {
    let sampled = curve
        .segments
        .par_iter()
        .map(|segment| map_curve_segment(segment, length_unit))
        .collect::<Result<Vec<_>>>()?;

    let mut points: Vec<DVec3> = Vec::with_capacity(sampled.iter().map(Vec::len).sum());
    for segment_points in sampled {
        let joined = match (points.last(), segment_points.first()) {
            (Some(last), Some(first)) => (*first - *last).length() <= JOIN_TOLERANCE,
            _ => false,
        };
        points.extend(segment_points.into_iter().skip(usize::from(joined)));
    }
    tracing::debug!(
        segments = curve.segments.len(),
        count = points.len(),
        "Mapped composite curve"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ifc_entities::{
        IfcCartesianPoint, IfcCircle, IfcDirection, IfcLine, IfcPoint, IfcVector,
    };
    use cst_core::CstError;
    use cst_math::dvec3;

    fn length(v: f64) -> IfcCurveMeasureSelect {
        IfcCurveMeasureSelect::LengthMeasure(v)
    }

    fn line_along(dx: f64, dy: f64) -> IfcCurve {
        IfcCurve::Line(IfcLine {
            pnt: IfcCartesianPoint::new(0.0, 0.0),
            dir: IfcVector {
                orientation: IfcDirection::new(dx, dy),
                magnitude: 1.0,
            },
        })
    }

    fn line_segment(x: f64, y: f64, len: f64) -> IfcCurveSegment {
        IfcCurveSegment {
            placement: IfcAxis2Placement2D::new(x, y, Some(IfcDirection::new(1.0, 0.0))),
            segment_start: length(0.0),
            segment_length: length(len),
            parent_curve: line_along(1.0, 0.0),
        }
    }

    #[test]
    fn test_sample_count() {
        let pts = sample(
            1.0,
            &line_along(1.0, 0.0),
            &length(0.0),
            &length(10.0),
            &IfcAxis2Placement2D::origin(),
        )
        .unwrap();
        assert_eq!(pts.len(), 65);
    }

    #[test]
    fn test_custom_segment_count() {
        let settings = SamplingSettings::default().with_num_segments(4);
        let pts = sample_with(
            &settings,
            1.0,
            &line_along(1.0, 0.0),
            &length(0.0),
            &length(8.0),
            &IfcAxis2Placement2D::origin(),
        )
        .unwrap();
        assert_eq!(pts.len(), 5);
        assert!((pts[1] - dvec3(2.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let pts = sample(
            1.0,
            &line_along(1.0, 0.0),
            &length(0.0),
            &length(-1e-3),
            &IfcAxis2Placement2D::origin(),
        )
        .unwrap();
        assert!(pts.is_empty());
    }

    #[test]
    fn test_outer_placement_applied() {
        let placement = IfcAxis2Placement2D::new(100.0, 50.0, Some(IfcDirection::new(0.0, 1.0)));
        let pts =
            sample(1.0, &line_along(1.0, 0.0), &length(0.0), &length(10.0), &placement).unwrap();
        assert!((pts[0] - dvec3(100.0, 50.0, 0.0)).length() < 1e-12);
        assert!((pts[64] - dvec3(100.0, 60.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_outer_placement_must_be_cartesian() {
        let placement = IfcAxis2Placement2D {
            location: IfcPoint::PointOnCurve,
            ref_direction: None,
        };
        let err = sample(1.0, &line_along(1.0, 0.0), &length(0.0), &length(10.0), &placement)
            .unwrap_err();
        assert!(matches!(err, CstError::UnsupportedPointType(_)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = SamplingSettings::default().with_num_segments(0);
        let err = sample_with(
            &settings,
            1.0,
            &line_along(1.0, 0.0),
            &length(0.0),
            &length(1.0),
            &IfcAxis2Placement2D::origin(),
        )
        .unwrap_err();
        assert!(matches!(err, CstError::InvalidSettings(_)));
    }

    #[test]
    fn test_map_curve_segments_keeps_order_and_errors() {
        let mut bad = line_segment(0.0, 0.0, 5.0);
        bad.segment_start = IfcCurveMeasureSelect::ParameterValue(0.0);
        let segments = vec![line_segment(0.0, 0.0, 5.0), bad, line_segment(10.0, 0.0, 5.0)];

        let results = map_curve_segments(&segments, 1.0);
        assert_eq!(results.len(), 3);
        assert!((results[0].as_ref().unwrap()[0] - dvec3(0.0, 0.0, 0.0)).length() < 1e-12);
        assert!(matches!(results[1], Err(CstError::UnsupportedMeasure(_))));
        assert!((results[2].as_ref().unwrap()[0] - dvec3(10.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_composite_curve_stitching() {
        let zero = line_segment(10.0, 0.0, 0.0);
        let circle = IfcCurveSegment {
            placement: IfcAxis2Placement2D::new(10.0, 0.0, Some(IfcDirection::new(1.0, 0.0))),
            segment_start: length(0.0),
            segment_length: length(5.0),
            parent_curve: IfcCurve::Circle(IfcCircle {
                radius: 20.0,
                position: IfcAxis2Placement2D::new(0.0, 20.0, Some(IfcDirection::new(0.0, -1.0))),
            }),
        };
        let composite = IfcCompositeCurve {
            segments: vec![line_segment(0.0, 0.0, 10.0), zero, circle],
        };

        let pts = map_composite_curve(&composite, 1.0).unwrap();
        // 65 line points, nothing for the zero-length segment, 64 new arc points
        assert_eq!(pts.len(), 65 + 64);
        assert!((pts[64] - dvec3(10.0, 0.0, 0.0)).length() < 1e-12);
        for p in &pts[65..] {
            assert!(((*p - dvec3(10.0, 20.0, 0.0)).length() - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_composite_curve_propagates_error() {
        let mut bad = line_segment(0.0, 0.0, 5.0);
        bad.parent_curve = IfcCurve::Other {
            type_name: "IfcSecondOrderPolynomialSpiral".into(),
        };
        let composite = IfcCompositeCurve {
            segments: vec![line_segment(0.0, 0.0, 5.0), bad],
        };
        let err = map_composite_curve(&composite, 1.0).unwrap_err();
        assert!(matches!(err, CstError::UnsupportedCurveType(_)));
    }
}
