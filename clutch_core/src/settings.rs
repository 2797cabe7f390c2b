//! # Design Settings
//!
//! Tunable knobs for a clutch calculation: advisory thresholds, the torque
//! curve sampling, and the recommended friction coefficient range.
//!
//! Every field has a default matching the reference calculator, and
//! deserialization fills missing fields from those defaults, so a settings
//! file only needs to mention what it overrides.
//!
//! ## Example
//!
//! ```rust
//! use clutch_core::settings::DesignSettings;
//!
//! let json = r#"{ "advisory": { "max_pressure_pa": 250000.0 } }"#;
//! let settings = DesignSettings::from_json_str(json).unwrap();
//! assert_eq!(settings.advisory.max_pressure_pa, 250000.0);
//! assert_eq!(settings.curve.samples, 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Root settings container for a clutch calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Thresholds for the design advisory rules
    pub advisory: AdvisoryThresholds,

    /// Torque-vs-axial-force curve sampling
    pub curve: CurveSettings,

    /// Friction coefficients outside this range are accepted with a warning
    pub recommended_friction: FrictionRange,
}

impl DesignSettings {
    /// Parse settings from JSON, filling omitted fields with defaults, and validate.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        self.curve.validate()?;
        self.recommended_friction.validate()
    }
}

/// Thresholds for the advisory rules.
///
/// Comparisons are strict: a value exactly at a threshold does not fire its rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// Friction coefficients below this suggest better lining material
    pub min_friction_coefficient: f64,
    /// Outer radii below this (m) limit torque transmission
    pub min_outer_radius_m: f64,
    /// Friction widths (Ro - Ri) below this (m) limit heat dissipation
    pub min_friction_width_m: f64,
    /// Allowable pressures above this (Pa) risk lining wear and heat
    pub max_pressure_pa: f64,
    /// Torque capacities below this (N·m) are considered low
    pub min_torque_nm: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        AdvisoryThresholds {
            min_friction_coefficient: 0.3,
            min_outer_radius_m: 0.1,
            min_friction_width_m: 0.03,
            max_pressure_pa: 300_000.0,
            min_torque_nm: 200.0,
        }
    }
}

/// Sampling of the torque-vs-axial-force curve.
///
/// The curve spans `[start_factor·W, end_factor·W]` inclusive, where `W` is the
/// design axial force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Number of points, including both endpoints
    pub samples: usize,
    /// Fraction of the design axial force at the first point
    pub start_factor: f64,
    /// Fraction of the design axial force at the last point
    pub end_factor: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            samples: 50,
            start_factor: 0.1,
            end_factor: 2.0,
        }
    }
}

impl CurveSettings {
    /// Validate curve sampling values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.samples < 2 {
            return Err(CalcError::invalid_parameter(
                "curve.samples",
                self.samples.to_string(),
                "Curve needs at least 2 samples to span its range",
            ));
        }
        if !self.start_factor.is_finite() || self.start_factor < 0.0 {
            return Err(CalcError::invalid_parameter(
                "curve.start_factor",
                self.start_factor.to_string(),
                "Start factor must be a finite, non-negative number",
            ));
        }
        if !self.end_factor.is_finite() || self.end_factor <= self.start_factor {
            return Err(CalcError::invalid_parameter(
                "curve.end_factor",
                self.end_factor.to_string(),
                "End factor must be finite and greater than the start factor",
            ));
        }
        Ok(())
    }
}

/// Closed range of friction coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionRange {
    pub min: f64,
    pub max: f64,
}

impl Default for FrictionRange {
    fn default() -> Self {
        FrictionRange { min: 0.2, max: 0.6 }
    }
}

impl FrictionRange {
    /// Check if a friction coefficient lies inside the range (inclusive)
    pub fn contains(&self, mu: f64) -> bool {
        mu >= self.min && mu <= self.max
    }

    /// Validate that the range is well formed.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min > self.max {
            return Err(CalcError::invalid_parameter(
                "recommended_friction",
                format!("[{}, {}]", self.min, self.max),
                "Range bounds must be finite with min <= max",
            ));
        }
        Ok(())
    }
}
