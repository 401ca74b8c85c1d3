//! Serializable slider configuration.
//!
//! ```toml
//! value = 45.0
//! min = 0.0        # optional, default 0
//! max = 360.0      # optional, default 360
//! step = 1.0       # optional, default 1
//! label = "Heading"
//! unit = "°"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::{DomainError, SliderDomain};
use crate::field::format_value;
use crate::model::CyclicSlider;
use crate::surface::PointerSurface;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid slider config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Everything needed to mount one slider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Initial authoritative value.
    pub value: f64,

    #[serde(default = "default_min")]
    pub min: f64,

    #[serde(default = "default_max")]
    pub max: f64,

    #[serde(default = "default_step")]
    pub step: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Suffix shown after the value, e.g. `°` or `h`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
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

impl SliderConfig {
    /// Config with default bounds around `value`.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            min: default_min(),
            max: default_max(),
            step: default_step(),
            label: None,
            unit: None,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn domain(&self) -> Result<SliderDomain, DomainError> {
        SliderDomain::new(self.min, self.max, self.step)
    }

    /// Check bounds and seed value without building anything.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.domain()?;
        if !self.value.is_finite() {
            return Err(DomainError::NonFinite {
                field: "value",
                value: self.value,
            });
        }
        Ok(())
    }

    /// Mount a slider on `surface`. Callbacks are attached by the caller.
    pub fn build<S: PointerSurface>(&self, surface: S) -> Result<CyclicSlider<S>, ConfigError> {
        let domain = self.domain()?;
        Ok(CyclicSlider::new(self.value, domain, surface)?)
    }

    /// `"Heading: 45°"` style text for `value`.
    pub fn readout(&self, value: f64) -> String {
        let number = format_value(value, self.step);
        let unit = self.unit.as_deref().unwrap_or("");
        match &self.label {
            Some(label) => format!("{label}: {number}{unit}"),
            None => format!("{number}{unit}"),
        }
    }
}
