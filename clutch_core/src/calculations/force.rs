//! # Geometry and Axial Force
//!
//! First stage of the clutch pipeline: turns the friction face radii and the
//! allowable pressure into the contact area and the axial clamping force.
//!
//! Degenerate faces (`Ri >= Ro`, or a non-positive radius) are rejected here
//! with [`CalcError::InvalidGeometry`], before any torque formula can divide
//! by `Ro² - Ri²`.
//!
//! ## Example
//!
//! ```rust
//! use clutch_core::calculations::force::compute_force;
//!
//! let force = compute_force(0.12, 0.06, 200_000.0).unwrap();
//! assert!((force.contact_area_m2 - 0.033929).abs() < 1e-6);
//! assert!((force.axial_force_n - 6785.8).abs() < 0.1);
//!
//! assert!(compute_force(0.06, 0.06, 200_000.0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::clutch::{annular_contact_area, axial_force};
use crate::errors::{CalcError, CalcResult};

/// Contact area and axial force for one friction face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceResult {
    /// Annular contact area π(Ro² - Ri²) in m²
    pub contact_area_m2: f64,

    /// Axial clamping force p·A in N
    pub axial_force_n: f64,
}

/// Check that the radii describe a proper annulus (`Ro > Ri > 0`).
pub fn validate_geometry(outer_radius_m: f64, inner_radius_m: f64) -> CalcResult<()> {
    if !outer_radius_m.is_finite() || outer_radius_m <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "outer_radius_m",
            outer_radius_m.to_string(),
            "Outer radius must be a positive, finite number",
        ));
    }
    if !inner_radius_m.is_finite() || inner_radius_m <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "inner_radius_m",
            inner_radius_m.to_string(),
            "Inner radius must be a positive, finite number",
        ));
    }
    if inner_radius_m >= outer_radius_m {
        return Err(CalcError::invalid_geometry(
            "inner_radius_m",
            inner_radius_m.to_string(),
            format!("Inner radius must be less than outer radius ({} m)", outer_radius_m),
        ));
    }
    Ok(())
}

/// Compute the contact area and axial force.
///
/// # Arguments
///
/// * `outer_radius_m` - Outer radius of the friction face (m)
/// * `inner_radius_m` - Inner radius of the friction face (m)
/// * `allowable_pressure_pa` - Allowable contact pressure (Pa)
///
/// # Returns
///
/// * `Ok(ForceResult)` - Area and force, both strictly positive and finite
/// * `Err(CalcError::InvalidGeometry)` - Radii do not form an annulus, or the
///   area underflows to zero or overflows
/// * `Err(CalcError::InvalidParameter)` - Pressure is not positive, or the
///   axial force overflows
pub fn compute_force(
    outer_radius_m: f64,
    inner_radius_m: f64,
    allowable_pressure_pa: f64,
) -> CalcResult<ForceResult> {
    validate_geometry(outer_radius_m, inner_radius_m)?;
    if !allowable_pressure_pa.is_finite() || allowable_pressure_pa <= 0.0 {
        return Err(CalcError::invalid_parameter(
            "allowable_pressure_pa",
            allowable_pressure_pa.to_string(),
            "Allowable pressure must be a positive, finite number",
        ));
    }

    let area = annular_contact_area(outer_radius_m, inner_radius_m);
    if !area.is_finite() || area <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "outer_radius_m",
            outer_radius_m.to_string(),
            format!("Contact area {} m² is not a positive, finite number", area),
        ));
    }

    let force = axial_force(allowable_pressure_pa, area);
    if !force.is_finite() {
        return Err(CalcError::invalid_parameter(
            "allowable_pressure_pa",
            allowable_pressure_pa.to_string(),
            "Axial force p·A overflows",
        ));
    }

    tracing::trace!(contact_area_m2 = area, axial_force_n = force, "computed clutch face force");

    Ok(ForceResult {
        contact_area_m2: area,
        axial_force_n: force,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_reference_design() {
        let result = compute_force(0.12, 0.06, 200_000.0).unwrap();
        let expected_area = PI * (0.12_f64.powi(2) - 0.06_f64.powi(2));
        assert_relative_eq!(result.contact_area_m2, expected_area, max_relative = 1e-9);
        assert_relative_eq!(result.contact_area_m2, 0.0339292, max_relative = 1e-5);
        assert_relative_eq!(result.axial_force_n, 6785.84, max_relative = 1e-5);
    }

    #[test]
    fn test_force_is_pressure_times_area() {
        for (ro, ri, p) in [(0.2, 0.1, 1.0e5), (0.05, 0.01, 5.0e5), (0.3, 0.29, 2.5e5)] {
            let result = compute_force(ro, ri, p).unwrap();
            let expected = p * result.contact_area_m2;
            assert_relative_eq!(result.axial_force_n, expected, max_relative = 1e-12);
            assert!(result.axial_force_n > 0.0);
        }
    }

    #[test]
    fn test_equal_radii_is_invalid_geometry() {
        let err = compute_force(0.1, 0.1, 200_000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert_eq!(err.field(), Some("inner_radius_m"));
    }

    #[test]
    fn test_inverted_radii_is_invalid_geometry() {
        let err = compute_force(0.06, 0.12, 200_000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_non_positive_radius_is_invalid_geometry() {
        assert_eq!(compute_force(0.0, -0.1, 1.0).unwrap_err().field(), Some("outer_radius_m"));
        assert_eq!(compute_force(0.1, 0.0, 1.0).unwrap_err().field(), Some("inner_radius_m"));
        let err = compute_force(f64::NAN, 0.05, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_non_positive_pressure_is_invalid_parameter() {
        let err = compute_force(0.12, 0.06, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert_eq!(err.field(), Some("allowable_pressure_pa"));
        assert!(compute_force(0.12, 0.06, f64::INFINITY).is_err());
    }

    #[test]
    fn test_underflowing_area_is_invalid_geometry() {
        // Ro² and Ri² both flush to zero
        let err = compute_force(1e-170, 5e-171, 200_000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert_eq!(err.field(), Some("outer_radius_m"));
    }

    #[test]
    fn test_overflowing_area_is_invalid_geometry() {
        let err = compute_force(1e160, 1.0, 200_000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_overflowing_force_is_invalid_parameter() {
        // Area ≈ 3.1e300 is finite, p·A is not
        let err = compute_force(1e150, 1.0, 1e300).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert_eq!(err.field(), Some("allowable_pressure_pa"));
    }
}
