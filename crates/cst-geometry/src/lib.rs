//! CSTEngine geometry: arc-length parametrised alignment curves.

pub mod curve;

pub use curve::{Circle, Clothoid, Curve, CurveEvaluator, Line, Polyline};
