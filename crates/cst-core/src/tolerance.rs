/// Closeness tolerance for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// Only exactly equal values compare equal.
    pub fn exact() -> Self {
        Self { linear: 0.0 }
    }

    /// Check if a value is zero within linear tolerance.
    ///
    /// Inclusive, so that [`Tolerance::exact`] still accepts `0.0`.
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
