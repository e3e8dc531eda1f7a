//! CSTEngine IFC alignment geometry: curve segment evaluation and sampling.

pub mod ifc_curve_segment;
pub mod ifc_entities;
pub mod ifc_geometry;
pub mod settings;

pub use ifc_curve_segment::CurveSegmentEvaluator;
pub use ifc_geometry::{
    map_composite_curve, map_curve_segment, map_curve_segments, sample, sample_with,
};
pub use settings::SamplingSettings;
