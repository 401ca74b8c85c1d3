//! Slider domain: the cyclic range `[min, max)` and its step hint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wrap;

/// Immutable configuration of one cyclic slider.
///
/// `min` is inclusive, `max` is exclusive and is the point where values wrap
/// back to `min`. `step` scales the drag mapping and drives increments and
/// text formatting; output values are not hard-quantized to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawDomain", into = "RawDomain")]
pub struct SliderDomain {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderDomain {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 360.0;
    pub const DEFAULT_STEP: f64 = 1.0;

    /// Validate and build a domain.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, DomainError> {
        for (field, value) in [("min", min), ("max", max), ("step", step)] {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { field, value });
            }
        }
        if max <= min {
            return Err(DomainError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(DomainError::NonPositiveStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Domain with default step.
    pub fn with_bounds(min: f64, max: f64) -> Result<Self, DomainError> {
        Self::new(min, max, Self::DEFAULT_STEP)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// `max - min`, always positive.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` already lies in `[min, max)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Map any finite value back into `[min, max)`.
    pub fn wrap(&self, raw: f64) -> f64 {
        wrap::wrap(raw, self.min, self.max)
    }
}

impl Default for SliderDomain {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// Unvalidated wire form, so deserialization goes through [`SliderDomain::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDomain {
    #[serde(default = "default_min")]
    min: f64,
    #[serde(default = "default_max")]
    max: f64,
    #[serde(default = "default_step")]
    step: f64,
}

fn default_min() -> f64 {
    SliderDomain::DEFAULT_MIN
}

fn default_max() -> f64 {
    SliderDomain::DEFAULT_MAX
}

fn default_step() -> f64 {
    SliderDomain::DEFAULT_STEP
}

impl TryFrom<RawDomain> for SliderDomain {
    type Error = DomainError;

    fn try_from(raw: RawDomain) -> Result<Self, Self::Error> {
        SliderDomain::new(raw.min, raw.max, raw.step)
    }
}

impl From<SliderDomain> for RawDomain {
    fn from(domain: SliderDomain) -> Self {
        Self {
            min: domain.min,
            max: domain.max,
            step: domain.step,
        }
    }
}

/// Errors from building a domain or seeding a slider.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("max ({max}) must be greater than min ({min})")]
    EmptyRange { min: f64, max: f64 },

    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
}
