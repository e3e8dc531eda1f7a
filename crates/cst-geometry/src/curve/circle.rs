//! Circle curve.

use cst_core::{CstError, Result};
use cst_math::{Point3, Transform2D, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A circle of `radius` placed by `position`, parametrised by arc length.
///
/// `u = 0` lies on the placement's local X axis; the arc runs
/// counter-clockwise with subtended angle `u / radius`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub position: Transform2D,
}

impl Circle {
    pub fn new(radius: f64, position: Transform2D) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(CstError::Geometry(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { radius, position })
    }
}

impl Curve for Circle {
    fn point_at(&self, u: f64) -> Result<Point3> {
        let angle = u / self.radius;
        let local = Point3::new(self.radius * angle.cos(), self.radius * angle.sin(), 0.0);
        Ok(self.position.transform_point(local))
    }

    fn tangent_at(&self, u: f64) -> Result<Vector3> {
        let angle = u / self.radius;
        let local = Vector3::new(-angle.sin(), angle.cos(), 0.0);
        Ok(self.position.transform_vector(local))
    }
}
