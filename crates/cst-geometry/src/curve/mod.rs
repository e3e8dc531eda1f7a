//! Arc-length parametrised planar curves used by alignment curve segments.

mod line;
mod circle;
mod polyline;
mod clothoid;

use cst_core::Result;
use cst_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use line::Line;
pub use circle::Circle;
pub use polyline::Polyline;
pub use clothoid::Clothoid;

/// Trait for planar curves parametrised by arc length.
///
/// Points are returned in the curve's parent frame with `z = 0`.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at arc length `u`.
    fn point_at(&self, u: f64) -> Result<Point3>;

    /// Evaluate the tangent (derivative with respect to arc length) at `u`.
    fn tangent_at(&self, u: f64) -> Result<Vector3>;
}

/// Closed set of curve evaluators a curve segment can be built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CurveEvaluator {
    Line(Line),
    Circle(Circle),
    Polyline(Polyline),
    Clothoid(Clothoid),
}

impl CurveEvaluator {
    pub fn kind(&self) -> &'static str {
        match self {
            CurveEvaluator::Line(_) => "line",
            CurveEvaluator::Circle(_) => "circle",
            CurveEvaluator::Polyline(_) => "polyline",
            CurveEvaluator::Clothoid(_) => "clothoid",
        }
    }
}

impl Curve for CurveEvaluator {
    fn point_at(&self, u: f64) -> Result<Point3> {
        match self {
            CurveEvaluator::Line(c) => c.point_at(u),
            CurveEvaluator::Circle(c) => c.point_at(u),
            CurveEvaluator::Polyline(c) => c.point_at(u),
            CurveEvaluator::Clothoid(c) => c.point_at(u),
        }
    }

    fn tangent_at(&self, u: f64) -> Result<Vector3> {
        match self {
            CurveEvaluator::Line(c) => c.tangent_at(u),
            CurveEvaluator::Circle(c) => c.tangent_at(u),
            CurveEvaluator::Polyline(c) => c.tangent_at(u),
            CurveEvaluator::Clothoid(c) => c.tangent_at(u),
        }
    }
}

impl From<Line> for CurveEvaluator {
    fn from(c: Line) -> Self {
        CurveEvaluator::Line(c)
    }
}

impl From<Circle> for CurveEvaluator {
    fn from(c: Circle) -> Self {
        CurveEvaluator::Circle(c)
    }
}

impl From<Polyline> for CurveEvaluator {
    fn from(c: Polyline) -> Self {
        CurveEvaluator::Polyline(c)
    }
}

impl From<Clothoid> for CurveEvaluator {
    fn from(c: Clothoid) -> Self {
        CurveEvaluator::Clothoid(c)
    }
}
