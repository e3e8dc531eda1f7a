//! Piecewise-linear curve through an ordered list of points.

use cst_core::{CstError, Result, Tolerance};
use cst_math::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// One straight piece of a polyline covering the arc-length range
/// `[u_start, u_end)`, or `[u_start, u_end + slack]` for the final piece.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Span {
    u_start: f64,
    u_end: f64,
    start: Point2,
    direction: Vector2,
    last: bool,
}

impl Span {
    fn accepts(&self, u: f64, end_slack: f64) -> bool {
        if self.last {
            self.u_start <= u && u <= self.u_end + end_slack
        } else {
            self.u_start <= u && u < self.u_end
        }
    }

    fn point_at(&self, offset: f64) -> Point2 {
        Point2::new(
            self.start.x + offset * self.direction.x,
            self.start.y + offset * self.direction.y,
        )
    }
}

/// Polyline parametrised by cumulative arc length from its first point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    spans: Vec<Span>,
    end_slack: f64,
}

impl Polyline {
    /// Absolute slack accepted past the end of the final span.
    pub const END_SLACK: f64 = 1e-3;

    /// Build with exact coincidence checks and the default end slack.
    pub fn new(points: &[Point2]) -> Result<Self> {
        Self::with_tolerance(points, Tolerance::exact(), Self::END_SLACK)
    }

    /// Build with an explicit coincidence tolerance and end slack.
    ///
    /// Fails with fewer than two points or when two consecutive points lie
    /// within `tolerance` of each other.
    pub fn with_tolerance(points: &[Point2], tolerance: Tolerance, end_slack: f64) -> Result<Self> {
        if points.len() < 2 {
            return Err(CstError::InvalidPolyline(format!(
                "must have at least 2 points, got {}",
                points.len()
            )));
        }

        let count = points.len() - 1;
        let mut spans = Vec::with_capacity(count);
        let mut u = 0.0;
        for (i, pair) in points.windows(2).enumerate() {
            let (p1, p2) = (pair[0], pair[1]);
            let delta = p2 - p1;
            let l = delta.length();
            if tolerance.is_zero(l) {
                return Err(CstError::InvalidPolyline(format!(
                    "points {} and {} must not be coincident",
                    i,
                    i + 1
                )));
            }
            spans.push(Span {
                u_start: u,
                u_end: u + l,
                start: p1,
                direction: delta / l,
                last: i + 1 == count,
            });
            u += l;
        }

        Ok(Self { spans, end_slack })
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.spans.last().map_or(0.0, |s| s.u_end)
    }

    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    fn span_at(&self, u: f64) -> Result<&Span> {
        self.spans
            .iter()
            .find(|s| s.accepts(u, self.end_slack))
            .ok_or_else(|| CstError::ParameterOutOfRange {
                value: u,
                min: 0.0,
                max: self.length() + self.end_slack,
            })
    }
}

impl Curve for Polyline {
    fn point_at(&self, u: f64) -> Result<Point3> {
        let span = self.span_at(u)?;
        Ok(span.point_at(u - span.u_start).extend(0.0))
    }

    fn tangent_at(&self, u: f64) -> Result<Vector3> {
        Ok(self.span_at(u)?.direction.extend(0.0))
    }
}
