//! # Multi-Plate Clutch Calculation
//!
//! Runs the full design pipeline for a multi-plate friction clutch:
//! geometry/force → torque → curve → advisories.
//!
//! ## Assumptions
//!
//! - Flat annular friction faces, identical on every surface
//! - One friction coefficient for all surfaces
//! - The allowable pressure is reached over the whole face
//! - SI units throughout (m, Pa, N, N·m)
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use clutch_core::calculations::clutch::{calculate, ClutchInput};
//! use clutch_core::calculations::torque::Theory;
//!
//! let input = ClutchInput {
//!     friction_coefficient: 0.35,
//!     surface_count: 2,
//!     outer_radius_m: 0.12,
//!     inner_radius_m: 0.06,
//!     allowable_pressure_pa: 200_000.0,
//!     theory: Theory::UniformWear,
//! };
//!
//! let design = calculate(&input).unwrap();
//!
//! println!("Contact area: {:.4} m²", design.derived.contact_area_m2);
//! println!("Axial force: {:.1} N", design.derived.axial_force_n);
//! println!("Torque capacity: {:.1} N·m", design.derived.torque_nm);
//! assert_eq!(design.curve.len(), 50);
//! assert_eq!(design.advisories.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::advisories::{evaluate_advisories, Advisory};
use crate::calculations::force::{compute_force, validate_geometry};
use crate::calculations::torque::{compute_torque, compute_torque_curve, Theory, TorqueCurvePoint};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

/// Input parameters for a multi-plate friction clutch.
///
/// ## JSON Example
///
/// ```json
/// {
///   "friction_coefficient": 0.35,
///   "surface_count": 2,
///   "outer_radius_m": 0.12,
///   "inner_radius_m": 0.06,
///   "allowable_pressure_pa": 200000.0,
///   "theory": "UniformWear"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchInput {
    /// Coefficient of friction μ, in (0, 1]
    pub friction_coefficient: f64,

    /// Number of friction surfaces n (at least 1)
    pub surface_count: u32,

    /// Outer radius of the friction face in meters
    pub outer_radius_m: f64,

    /// Inner radius of the friction face in meters
    pub inner_radius_m: f64,

    /// Allowable contact pressure in pascals
    pub allowable_pressure_pa: f64,

    /// Design theory used for the torque capacity
    #[serde(default)]
    pub theory: Theory,
}

impl Default for ClutchInput {
    /// Reference design: μ = 0.35, two surfaces, 60-120 mm face, 200 kPa.
    fn default() -> Self {
        ClutchInput {
            friction_coefficient: 0.35,
            surface_count: 2,
            outer_radius_m: 0.12,
            inner_radius_m: 0.06,
            allowable_pressure_pa: 200_000.0,
            theory: Theory::UniformWear,
        }
    }
}

impl ClutchInput {
    /// Validate input parameters.
    ///
    /// Geometry is checked first, so a degenerate face always reports
    /// `InvalidGeometry` even when other fields are also bad.
    pub fn validate(&self) -> CalcResult<()> {
        validate_geometry(self.outer_radius_m, self.inner_radius_m)?;
        if !self.allowable_pressure_pa.is_finite() || self.allowable_pressure_pa <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "allowable_pressure_pa",
                self.allowable_pressure_pa.to_string(),
                "Allowable pressure must be a positive, finite number",
            ));
        }
        if !self.friction_coefficient.is_finite() || self.friction_coefficient <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "friction_coefficient",
                self.friction_coefficient.to_string(),
                "Friction coefficient must be positive",
            ));
        }
        if self.friction_coefficient > 1.0 {
            return Err(CalcError::invalid_parameter(
                "friction_coefficient",
                self.friction_coefficient.to_string(),
                "Friction coefficient above 1.0 is not physical for clutch linings",
            ));
        }
        if self.surface_count == 0 {
            return Err(CalcError::invalid_parameter(
                "surface_count",
                self.surface_count.to_string(),
                "At least one friction surface is required",
            ));
        }
        Ok(())
    }

    /// Radial width of the friction face, Ro - Ri (m)
    pub fn friction_width_m(&self) -> f64 {
        self.outer_radius_m - self.inner_radius_m
    }

    /// Non-fatal notes about values outside their recommended ranges.
    pub fn warnings(&self, settings: &DesignSettings) -> Vec<InputWarning> {
        let range = settings.recommended_friction;
        let mut warnings = Vec::new();
        if !range.contains(self.friction_coefficient) {
            warnings.push(InputWarning {
                field: "friction_coefficient".to_string(),
                value: self.friction_coefficient.to_string(),
                message: format!(
                    "Friction coefficient is outside the recommended range {}-{}",
                    range.min, range.max
                ),
            });
        }
        warnings
    }
}

/// Quantities derived from a [`ClutchInput`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "contact_area_m2": 0.0339,
///   "axial_force_n": 6785.8,
///   "effective_radius_m": 0.09,
///   "torque_nm": 427.5,
///   "theory": "UniformWear"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedResult {
    /// Annular contact area π(Ro² - Ri²) (m²)
    pub contact_area_m2: f64,

    /// Axial clamping force W = p·A (N)
    pub axial_force_n: f64,

    /// Mean friction radius of the selected theory (m), T = μ·W·n·r
    pub effective_radius_m: f64,

    /// Torque capacity T (N·m)
    pub torque_nm: f64,

    /// Theory the torque was computed with
    pub theory: Theory,
}

/// A value accepted outside its recommended range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputWarning {
    pub field: String,
    pub value: String,
    pub message: String,
}

/// Complete result of a clutch calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchDesign {
    /// Area, force and torque
    pub derived: DerivedResult,

    /// Torque vs axial force, increasing force
    pub curve: Vec<TorqueCurvePoint>,

    /// Design recommendations in rule order (never empty)
    pub advisories: Vec<Advisory>,

    /// Inputs accepted outside their recommended range
    pub warnings: Vec<InputWarning>,

    /// Equations that produced the derived values, in evaluation order
    pub equations_used: Vec<Equation>,
}

/// Derive area, force and torque without the curve or advisories.
pub fn derive(input: &ClutchInput) -> CalcResult<DerivedResult> {
    input.validate()?;

    let force = compute_force(
        input.outer_radius_m,
        input.inner_radius_m,
        input.allowable_pressure_pa,
    )?;
    let torque_nm = compute_torque(
        input.friction_coefficient,
        force.axial_force_n,
        input.surface_count,
        input.outer_radius_m,
        input.inner_radius_m,
        input.theory,
    );
    if !torque_nm.is_finite() {
        return Err(CalcError::invalid_parameter(
            "torque_nm",
            torque_nm.to_string(),
            "Torque capacity μ·W·n·r_m overflows for these inputs",
        ));
    }

    Ok(DerivedResult {
        contact_area_m2: force.contact_area_m2,
        axial_force_n: force.axial_force_n,
        effective_radius_m: input.theory.mean_radius(input.outer_radius_m, input.inner_radius_m),
        torque_nm,
        theory: input.theory,
    })
}

/// Calculate a clutch design with default settings.
///
/// # Arguments
///
/// * `input` - Clutch parameters
///
/// # Returns
///
/// * `Ok(ClutchDesign)` - Derived values, curve, advisories and warnings
/// * `Err(CalcError)` - If inputs are invalid; nothing partial is returned
pub fn calculate(input: &ClutchInput) -> CalcResult<ClutchDesign> {
    calculate_with_settings(input, &DesignSettings::default())
}

/// Calculate a clutch design with custom thresholds and curve sampling.
pub fn calculate_with_settings(
    input: &ClutchInput,
    settings: &DesignSettings,
) -> CalcResult<ClutchDesign> {
    settings.validate()?;
    let derived = derive(input)?;

    let warnings = input.warnings(settings);
    for warning in &warnings {
        tracing::debug!(field = %warning.field, value = %warning.value, "{}", warning.message);
    }

    let curve = compute_torque_curve(input, derived.axial_force_n, &settings.curve);
    if let Some(point) = curve
        .iter()
        .find(|p| !p.axial_force_n.is_finite() || !p.torque_nm.is_finite())
    {
        return Err(CalcError::invalid_parameter(
            "curve.end_factor",
            settings.curve.end_factor.to_string(),
            format!("Torque curve overflows at axial force {} N", point.axial_force_n),
        ));
    }
    let advisories = evaluate_advisories(input, &derived, &settings.advisory);

    let mut equations_used = vec![Equation::ContactArea, Equation::AxialForce];
    equations_used.extend(input.theory.equations());

    tracing::debug!(
        theory = %input.theory,
        torque_nm = derived.torque_nm,
        advisories = advisories.len(),
        "clutch design calculated"
    );

    Ok(ClutchDesign {
        derived,
        curve,
        advisories,
        warnings,
        equations_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisories::AdvisoryRule;
    use approx::assert_relative_eq;

    fn reference_clutch() -> ClutchInput {
        ClutchInput::default()
    }

    #[test]
    fn test_reference_design_uniform_wear() {
        let design = calculate(&reference_clutch()).unwrap();
        assert_relative_eq!(design.derived.contact_area_m2, 0.0339292, max_relative = 1e-5);
        assert_relative_eq!(design.derived.axial_force_n, 6785.84, max_relative = 1e-5);
        assert_relative_eq!(design.derived.torque_nm, 427.508, max_relative = 1e-5);
        assert_relative_eq!(design.derived.effective_radius_m, 0.09, max_relative = 1e-12);
        assert_eq!(design.derived.theory, Theory::UniformWear);
    }

    #[test]
    fn test_reference_design_uniform_pressure() {
        let input = ClutchInput {
            theory: Theory::UniformPressure,
            ..reference_clutch()
        };
        let design = calculate(&input).unwrap();
        assert_relative_eq!(design.derived.torque_nm, 443.342, max_relative = 1e-5);
        assert_relative_eq!(design.derived.effective_radius_m, 0.28 / 3.0, max_relative = 1e-12);
        assert_eq!(
            design.equations_used,
            vec![
                Equation::ContactArea,
                Equation::AxialForce,
                Equation::UniformPressureMeanRadius,
                Equation::UniformPressureTorque,
            ]
        );
    }

    #[test]
    fn test_reference_design_is_balanced() {
        let design = calculate(&reference_clutch()).unwrap();
        assert_eq!(design.advisories.len(), 1);
        assert_eq!(design.advisories[0].rule, AdvisoryRule::Balanced);
        assert!(design.warnings.is_empty());
        assert_eq!(design.curve.len(), 50);
    }

    #[test]
    fn test_torque_is_mu_w_n_r() {
        let design = calculate(&reference_clutch()).unwrap();
        let d = &design.derived;
        let expected = 0.35 * d.axial_force_n * 2.0 * d.effective_radius_m;
        assert_relative_eq!(d.torque_nm, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_curve_spans_design_force() {
        let design = calculate(&reference_clutch()).unwrap();
        let w = design.derived.axial_force_n;
        assert_eq!(design.curve.first().unwrap().axial_force_n, 0.1 * w);
        assert_eq!(design.curve.last().unwrap().axial_force_n, 2.0 * w);
    }

    #[test]
    fn test_idempotent() {
        let input = ClutchInput {
            friction_coefficient: 0.27,
            surface_count: 6,
            outer_radius_m: 0.085,
            inner_radius_m: 0.061,
            allowable_pressure_pa: 350_000.0,
            theory: Theory::UniformPressure,
        };
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.derived.torque_nm.to_bits(),
            second.derived.torque_nm.to_bits()
        );
    }

    #[test]
    fn test_equal_radii_rejected() {
        let input = ClutchInput {
            inner_radius_m: 0.12,
            ..reference_clutch()
        };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_geometry_checked_before_parameters() {
        let input = ClutchInput {
            inner_radius_m: 0.2,
            allowable_pressure_pa: -1.0,
            surface_count: 0,
            ..reference_clutch()
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_invalid_parameters() {
        let with = |edit: fn(&mut ClutchInput)| {
            let mut input = reference_clutch();
            edit(&mut input);
            input
        };
        let cases = [
            (with(|i| i.allowable_pressure_pa = 0.0), "allowable_pressure_pa"),
            (with(|i| i.friction_coefficient = 0.0), "friction_coefficient"),
            (with(|i| i.friction_coefficient = -0.2), "friction_coefficient"),
            (with(|i| i.friction_coefficient = 1.2), "friction_coefficient"),
            (with(|i| i.friction_coefficient = f64::NAN), "friction_coefficient"),
            (with(|i| i.surface_count = 0), "surface_count"),
        ];
        for (input, field) in cases {
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_PARAMETER", "{}", field);
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_friction_outside_recommended_range_warns() {
        let input = ClutchInput {
            friction_coefficient: 0.15,
            ..reference_clutch()
        };
        let design = calculate(&input).unwrap();
        assert_eq!(design.warnings.len(), 1);
        assert_eq!(design.warnings[0].field, "friction_coefficient");
        assert_eq!(design.advisories[0].rule, AdvisoryRule::LowFriction);
    }

    #[test]
    fn test_custom_settings() {
        let settings = DesignSettings::from_json_str(
            r#"{ "curve": { "samples": 11 }, "advisory": { "min_torque_nm": 500.0 } }"#,
        )
        .unwrap();
        let design = calculate_with_settings(&reference_clutch(), &settings).unwrap();
        assert_eq!(design.curve.len(), 11);
        let rules: Vec<AdvisoryRule> = design.advisories.iter().map(|a| a.rule).collect();
        assert_eq!(rules, vec![AdvisoryRule::LowTorque]);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = DesignSettings::default();
        settings.curve.samples = 0;
        assert!(calculate_with_settings(&reference_clutch(), &settings).is_err());
    }

    #[test]
    fn test_input_json_roundtrip_and_default_theory() {
        let json = r#"{
            "friction_coefficient": 0.4,
            "surface_count": 4,
            "outer_radius_m": 0.15,
            "inner_radius_m": 0.1,
            "allowable_pressure_pa": 150000.0
        }"#;
        let input: ClutchInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.theory, Theory::UniformWear);
        assert_eq!(input.surface_count, 4);

        let design = calculate(&input).unwrap();
        let out = serde_json::to_string(&design).unwrap();
        let back: ClutchDesign = serde_json::from_str(&out).unwrap();
        assert_eq!(back.advisories, design.advisories);
    }

    #[test]
    fn test_degenerate_float_geometry_rejected() {
        for (outer, inner) in [(1e-170, 5e-171), (1e160, 1.0)] {
            let input = ClutchInput {
                outer_radius_m: outer,
                inner_radius_m: inner,
                theory: Theory::UniformPressure,
                ..reference_clutch()
            };
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_GEOMETRY", "Ro = {}", outer);
        }
    }

    #[test]
    fn test_overflowing_torque_rejected() {
        // Area and W stay finite, Ro³ does not
        for theory in Theory::ALL {
            let input = ClutchInput {
                outer_radius_m: 1e110,
                inner_radius_m: 1.0,
                theory,
                ..reference_clutch()
            };
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_PARAMETER");
            assert_eq!(err.field(), Some("torque_nm"));
        }
    }

    #[test]
    fn test_overflowing_curve_rejected() {
        let mut settings = DesignSettings::default();
        settings.curve.end_factor = 1e306;
        let err = calculate_with_settings(&reference_clutch(), &settings).unwrap_err();
        assert_eq!(err.field(), Some("curve.end_factor"));
    }

    #[test]
    fn test_results_are_finite() {
        let design = calculate(&reference_clutch()).unwrap();
        let json = serde_json::to_string(&design).unwrap();
        assert!(!json.contains("null"));
        assert!(design.curve.iter().all(|p| p.torque_nm.is_finite() && p.torque_nm >= 0.0));
    }
}
