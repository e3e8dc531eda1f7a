use crate::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid planar transform (rotation about Z + translation in XY).
///
/// Maps a local point `(xl, yl, z)` to
/// `(xl·cos θ − yl·sin θ + Cx, xl·sin θ + yl·cos θ + Cy, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Placement", into = "Placement")]
pub struct Transform2D {
    pub origin: Point2,
    pub angle: f64,
    cos: f64,
    sin: f64,
}

/// Serialized form; the cached rotation terms are recomputed on load.
#[derive(Serialize, Deserialize)]
struct Placement {
    origin: Point2,
    angle: f64,
}

impl From<Placement> for Transform2D {
    fn from(p: Placement) -> Self {
        Self::new(p.origin, p.angle)
    }
}

impl From<Transform2D> for Placement {
    fn from(t: Transform2D) -> Self {
        Self {
            origin: t.origin,
            angle: t.angle,
        }
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Self::new(Point2::ZERO, 0.0)
    }

    pub fn new(origin: Point2, angle: f64) -> Self {
        Self {
            origin,
            angle,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    pub fn from_translation(origin: Point2) -> Self {
        Self::new(origin, 0.0)
    }

    /// Build from an origin and an optional reference direction `(dx, dy)`.
    ///
    /// The rotation is `atan2(dy, dx)`, or zero without a reference direction.
    pub fn from_ref_direction(origin: Point2, ref_direction: Option<(f64, f64)>) -> Self {
        let angle = ref_direction.map_or(0.0, |(dx, dy)| dy.atan2(dx));
        Self::new(origin, angle)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        let x = p.x * self.cos - p.y * self.sin + self.origin.x;
        let y = p.x * self.sin + p.y * self.cos + self.origin.y;
        Point3::new(x, y, p.z)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            v.x * self.cos - v.y * self.sin,
            v.x * self.sin + v.y * self.cos,
            v.z,
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
