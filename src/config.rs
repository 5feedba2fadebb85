//! # Viewer Configuration
//!
//! Optional YAML settings for the transcript viewer. Every key may be left
//! out.
//!
//! ```yaml
//! container-height: 100
//! row-height: 25
//! gap-policy: keep-last   # or: clear
//! lookup: linear          # or: binary
//! default-base: Sa1
//! ```

use serde::Deserialize;

use crate::alphabet::TonalBase;
use crate::error::SwaraError;
use crate::playback::Lookup;
use crate::render::{GapPolicy, Layout};

/// Configuration as written in the file, before validation.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawViewerConfig {
    pub container_height: Option<f64>,
    pub row_height: Option<f64>,
    pub gap_policy: Option<GapPolicy>,
    pub lookup: Option<Lookup>,
    pub default_base: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerConfig {
    pub layout: Layout,
    pub gap_policy: GapPolicy,
    pub lookup: Lookup,
    pub default_base: TonalBase,
}

impl ViewerConfig {
    /// Parse and validate YAML. An empty document gives the defaults.
    ///
    /// # Example
    /// ```
    /// use swara::{ViewerConfig, TonalBase};
    /// use swara::render::GapPolicy;
    ///
    /// let config = ViewerConfig::from_yaml("gap-policy: clear\ndefault-base: Pa\n")?;
    /// assert_eq!(config.gap_policy, GapPolicy::Clear);
    /// assert_eq!(config.default_base, TonalBase::Pa);
    /// # Ok::<(), swara::SwaraError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, SwaraError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawViewerConfig = serde_yaml::from_str(content)
            .map_err(|e| SwaraError::ConfigError(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawViewerConfig) -> Result<Self, SwaraError> {
        let defaults = Layout::default();
        let layout = Layout {
            container_height: positive("container-height", raw.container_height, defaults.container_height)?,
            row_height: positive("row-height", raw.row_height, defaults.row_height)?,
        };

        let default_base = match raw.default_base.as_deref() {
            Some(key) => TonalBase::from_key(key).ok_or_else(|| {
                SwaraError::ConfigError(format!(
                    "default-base '{}' is not one of Sa1, Ri1, Ri2, Ga1, Ga2, Ma1, Ma2, Pa, Da1, Da2, Ni1, Ni2",
                    key
                ))
            })?,
            None => TonalBase::default(),
        };

        Ok(Self {
            layout,
            gap_policy: raw.gap_policy.unwrap_or_default(),
            lookup: raw.lookup.unwrap_or_default(),
            default_base,
        })
    }
}

fn positive(key: &str, value: Option<f64>, default: f64) -> Result<f64, SwaraError> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(SwaraError::ConfigError(format!(
            "{} must be a positive number, got {}",
            key, v
        ))),
    }
}
