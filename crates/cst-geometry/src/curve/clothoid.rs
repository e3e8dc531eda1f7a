//! Clothoid (Euler spiral) approximated by a truncated Fresnel series.

use cst_core::Result;
use cst_math::{Point3, Transform2D, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A clothoid with signed scale `RL = sign(A)·R·L`, placed by `position`.
///
/// Curvature grows linearly from zero at the placement origin, where the
/// curve is tangent to the local X axis. Coordinates come from the first
/// four terms of the Fresnel expansion in arc length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clothoid {
    pub scale: f64,
    pub position: Transform2D,
}

fn sign(v: f64) -> i32 {
    if v < 0.0 {
        -1
    } else if v > 0.0 {
        1
    } else {
        0
    }
}

impl Clothoid {
    pub fn new(scale: f64, position: Transform2D) -> Self {
        Self { scale, position }
    }

    /// Build from the clothoid constant `A` and the segment's start and length.
    ///
    /// The length that fixes the radius scale depends on the signs of
    /// `start` and `length`:
    ///
    /// | case                         | L                 |
    /// |------------------------------|-------------------|
    /// | `start == 0`                 | `|length|`        |
    /// | same sign                    | `|start + length|`|
    /// | opposite signs               | `|start|`         |
    ///
    /// With `L == 0` the scale is infinite and the series reduces to the
    /// tangent line.
    pub fn from_segment(constant: f64, start: f64, length: f64, position: Transform2D) -> Self {
        let sign_s = sign(start);
        let sign_l = sign(length);
        let l = if sign_s == 0 {
            length.abs()
        } else if sign_s == sign_l {
            (start + length).abs()
        } else {
            start.abs()
        };

        let a_sign = if constant < 0.0 { -1.0 } else { 1.0 };
        let scale = if l == 0.0 {
            a_sign * f64::INFINITY
        } else {
            let r = constant * constant / l;
            a_sign * r * l
        };
        Self::new(scale, position)
    }

    fn local_point(&self, u: f64) -> (f64, f64) {
        let rl = self.scale;
        let xl = u - u.powi(5) / (40.0 * rl.powi(2)) + u.powi(9) / (3456.0 * rl.powi(4))
            - u.powi(13) / (599_040.0 * rl.powi(6));
        let yl = u.powi(3) / (6.0 * rl) - u.powi(7) / (336.0 * rl.powi(3))
            + u.powi(11) / (42_240.0 * rl.powi(5))
            - u.powi(15) / (9_676_800.0 * rl.powi(7));
        (xl, yl)
    }

    fn local_tangent(&self, u: f64) -> (f64, f64) {
        let rl = self.scale;
        let dx = 1.0 - u.powi(4) / (8.0 * rl.powi(2)) + u.powi(8) / (384.0 * rl.powi(4))
            - u.powi(12) / (46_080.0 * rl.powi(6));
        let dy = u.powi(2) / (2.0 * rl) - u.powi(6) / (48.0 * rl.powi(3))
            + u.powi(10) / (3840.0 * rl.powi(5))
            - u.powi(14) / (645_120.0 * rl.powi(7));
        (dx, dy)
    }
}

impl Curve for Clothoid {
    fn point_at(&self, u: f64) -> Result<Point3> {
        let (xl, yl) = self.local_point(u);
        Ok(self.position.transform_point(Point3::new(xl, yl, 0.0)))
    }

    fn tangent_at(&self, u: f64) -> Result<Vector3> {
        let (dx, dy) = self.local_tangent(u);
        Ok(self.position.transform_vector(Vector3::new(dx, dy, 0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cst_math::{dvec2, DVec3};

    fn series(u: f64, rl: f64) -> (f64, f64) {
        let x = u - u.powi(5) / (40.0 * rl * rl) + u.powi(9) / (3456.0 * rl.powi(4))
            - u.powi(13) / (599040.0 * rl.powi(6));
        let y = u.powi(3) / (6.0 * rl) - u.powi(7) / (336.0 * rl.powi(3))
            + u.powi(11) / (42240.0 * rl.powi(5))
            - u.powi(15) / (9676800.0 * rl.powi(7));
        (x, y)
    }

    #[test]
    fn test_scale_cases() {
        let id = Transform2D::identity();
        // start == 0 -> L = |length|, R·L = A²
        let c = Clothoid::from_segment(100.0, 0.0, 50.0, id);
        assert_relative_eq!(c.scale, 10_000.0, max_relative = 1e-12);
        // same sign -> L = |start + length|
        let c = Clothoid::from_segment(-20.0, 10.0, 30.0, id);
        assert_relative_eq!(c.scale, -400.0, max_relative = 1e-12);
        // opposite signs -> L = |start|
        let c = Clothoid::from_segment(20.0, -10.0, 30.0, id);
        assert_relative_eq!(c.scale, 400.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_length_scale_is_straight() {
        let c = Clothoid::from_segment(50.0, 0.0, 0.0, Transform2D::identity());
        assert!(c.scale.is_infinite());
        let p = c.point_at(3.0).unwrap();
        assert_eq!(p, DVec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_clothoid_matches_series() {
        let c = Clothoid::from_segment(100.0, 0.0, 50.0, Transform2D::identity());
        let p = c.point_at(50.0).unwrap();
        let (x, y) = series(50.0, 10_000.0);
        assert_relative_eq!(p.x, x, max_relative = 1e-12);
        assert_relative_eq!(p.y, y, max_relative = 1e-12);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_negative_constant_mirrors() {
        let pos = Clothoid::from_segment(100.0, 0.0, 50.0, Transform2D::identity());
        let neg = Clothoid::from_segment(-100.0, 0.0, 50.0, Transform2D::identity());
        let a = pos.point_at(40.0).unwrap();
        let b = neg.point_at(40.0).unwrap();
        assert_relative_eq!(a.x, b.x, max_relative = 1e-12);
        assert_relative_eq!(a.y, -b.y, max_relative = 1e-12);
    }

    #[test]
    fn test_tangent_at_origin_is_local_x() {
        let frame = Transform2D::new(dvec2(5.0, 5.0), 0.6);
        let c = Clothoid::from_segment(80.0, 0.0, 60.0, frame);
        let t = c.tangent_at(0.0).unwrap();
        assert_relative_eq!(t.x, 0.6_f64.cos(), max_relative = 1e-12);
        assert_relative_eq!(t.y, 0.6_f64.sin(), max_relative = 1e-12);
        assert_eq!(c.point_at(0.0).unwrap(), DVec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let c = Clothoid::from_segment(60.0, 0.0, 40.0, Transform2D::identity());
        let h = 1e-5;
        let u = 30.0;
        let fd = (c.point_at(u + h).unwrap() - c.point_at(u - h).unwrap()) / (2.0 * h);
        let t = c.tangent_at(u).unwrap();
        assert!((fd - t).length() < 1e-6);
        // arc-length parametrisation: unit speed up to series truncation
        assert!((t.length() - 1.0).abs() < 1e-6);
    }
}
