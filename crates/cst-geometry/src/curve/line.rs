//! Unbounded straight line.

use cst_core::{CstError, Result};
use cst_math::{Point2, Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A line through `origin` along `direction`, parametrised by arc length.
///
/// No intrinsic placement: the base point is the origin of the parametrisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Line {
    /// Build from a base point, direction ratios and the vector magnitude.
    ///
    /// The direction is `ratios / magnitude`.
    pub fn new(origin: Point2, ratios: Vector2, magnitude: f64) -> Result<Self> {
        if magnitude == 0.0 {
            return Err(CstError::Geometry(
                "line direction vector has zero magnitude".into(),
            ));
        }
        if ratios.length() == 0.0 {
            return Err(CstError::Geometry(
                "line direction ratios have zero length".into(),
            ));
        }
        Ok(Self {
            origin,
            direction: ratios / magnitude,
        })
    }
}

impl Curve for Line {
    fn point_at(&self, u: f64) -> Result<Point3> {
        let x = self.origin.x + u * self.direction.x;
        let y = self.origin.y + u * self.direction.y;
        Ok(Point3::new(x, y, 0.0))
    }

    fn tangent_at(&self, _u: f64) -> Result<Vector3> {
        Ok(self.direction.extend(0.0))
    }
}
