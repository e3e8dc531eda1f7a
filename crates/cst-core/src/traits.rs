use crate::error::Result;

/// Validate structural integrity of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
