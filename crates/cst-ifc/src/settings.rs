//! Sampling policy for curve segment discretisation.

use cst_core::{CstError, Result, Tolerance, Validate};
use serde::{Deserialize, Serialize};

/// Controls how a curve segment is turned into a polyline.
///
/// The defaults sample every segment with 64 uniform arc-length steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Number of intervals; a segment yields `num_segments + 1` points.
    pub num_segments: usize,
    /// Segments with `|length|` at or below this produce no points.
    pub min_segment_length: f64,
    /// Absolute slack accepted past the end of a polyline.
    pub polyline_end_slack: f64,
    /// Closeness tolerance for consecutive polyline points.
    pub point_tolerance: Tolerance,
}

impl SamplingSettings {
    pub const NUM_SEGMENTS: usize = 64;
    pub const MIN_SEGMENT_LENGTH: f64 = 1e-3;
    pub const POLYLINE_END_SLACK: f64 = 1e-3;

    pub fn with_num_segments(mut self, num_segments: usize) -> Self {
        self.num_segments = num_segments;
        self
    }

    pub fn with_point_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.point_tolerance = tolerance;
        self
    }
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            num_segments: Self::NUM_SEGMENTS,
            min_segment_length: Self::MIN_SEGMENT_LENGTH,
            polyline_end_slack: Self::POLYLINE_END_SLACK,
            point_tolerance: Tolerance::exact(),
        }
    }
}

impl Validate for SamplingSettings {
    fn validate(&self) -> Result<()> {
        if self.num_segments == 0 {
            return Err(CstError::InvalidSettings(
                "num_segments must be at least 1".into(),
            ));
        }
        if !(self.min_segment_length >= 0.0) {
            return Err(CstError::InvalidSettings(format!(
                "min_segment_length must be non-negative, got {}",
                self.min_segment_length
            )));
        }
        if !(self.polyline_end_slack >= 0.0) {
            return Err(CstError::InvalidSettings(format!(
                "polyline_end_slack must be non-negative, got {}",
                self.polyline_end_slack
            )));
        }
        if !(self.point_tolerance.linear >= 0.0) {
            return Err(CstError::InvalidSettings(format!(
                "point tolerance must be non-negative, got {}",
                self.point_tolerance.linear
            )));
        }
        Ok(())
    }
}
