//! # Axial Friction Clutch Formulas
//!
//! Closed-form equations for a multi-plate (disc) clutch whose friction faces
//! are flat annuli between an inner radius `Ri` and an outer radius `Ro`.
//!
//! ## Notation
//!
//! - `Ro` = Outer radius of the friction face
//! - `Ri` = Inner radius of the friction face
//! - `A` = Contact area of one face
//! - `p` = Allowable (maximum) contact pressure
//! - `W` = Axial clamping force
//! - `μ` = Coefficient of friction
//! - `n` = Number of friction surfaces (pairs of faces in contact)
//! - `r_m` = Mean friction radius
//! - `T` = Torque capacity
//!
//! ```text
//!        ┌──────── Ro ────────┐
//!        │    ┌─── Ri ───┐    │
//!   ─────┼────┼────●─────┼────┼─────  axis
//!        │    └──────────┘    │
//!        └────────────────────┘
//!             ↑ annulus ↑
//! ```
//!
//! Every torque formula has the shape `T = μ·W·n·r_m`; the two theories only
//! disagree on the mean radius.
//!
//! None of these functions validate their inputs. Callers go through
//! [`crate::calculations::force`] first, which rejects `Ri >= Ro`.
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 10th Edition, Section 16-5
//! - Juvinall & Marshek, Fundamentals of Machine Component Design, Ch. 18

use std::f64::consts::PI;

use crate::units::{Pascals, SquareMeters};

// =============================================================================
// GEOMETRY AND FORCE
// =============================================================================

/// Contact area of one annular friction face.
///
/// # Formula
/// A = π(Ro² - Ri²)
///
/// # Example
/// ```rust
/// use clutch_core::equations::clutch::annular_contact_area;
///
/// let area = annular_contact_area(0.12, 0.06);
/// assert!((area - 0.033929).abs() < 1e-6);
/// ```
#[inline]
pub fn annular_contact_area(ro: f64, ri: f64) -> f64 {
    PI * (ro.powi(2) - ri.powi(2))
}

/// Axial force that loads the face to the allowable pressure everywhere.
///
/// # Formula
/// W = p·A
#[inline]
pub fn axial_force(p: f64, area: f64) -> f64 {
    (Pascals(p) * SquareMeters(area)).value()
}

// =============================================================================
// MEAN FRICTION RADIUS
// =============================================================================

/// Mean friction radius under the uniform-wear assumption.
///
/// With `p·r = constant` the wear rate is the same across the lining and the
/// friction force acts at the arithmetic mean radius.
///
/// # Formula
/// r_m = (Ro + Ri) / 2
#[inline]
pub fn uniform_wear_mean_radius(ro: f64, ri: f64) -> f64 {
    (ro + ri) / 2.0
}

/// Mean friction radius under the uniform-pressure assumption.
///
/// Constant pressure places the resultant friction force at the
/// pressure-weighted centroid of the annulus.
///
/// # Formula
/// r_m = (2/3)·(Ro³ - Ri³) / (Ro² - Ri²)
///
/// Divides by zero when `Ro == Ri`.
#[inline]
pub fn uniform_pressure_mean_radius(ro: f64, ri: f64) -> f64 {
    (2.0 / 3.0) * (ro.powi(3) - ri.powi(3)) / (ro.powi(2) - ri.powi(2))
}

// =============================================================================
// TORQUE CAPACITY
// =============================================================================

/// Torque capacity under the uniform-wear theory.
///
/// # Formula
/// T = μ·W·n·(Ro + Ri) / 2
///
/// # Arguments
/// * `mu` - Coefficient of friction
/// * `w` - Axial force (N)
/// * `n` - Number of friction surfaces
/// * `ro` - Outer radius (m)
/// * `ri` - Inner radius (m)
///
/// # Example
/// ```rust
/// use clutch_core::equations::clutch::uniform_wear_torque;
///
/// // 1000 N on a single surface with a 0.1 m mean radius
/// let t = uniform_wear_torque(0.4, 1000.0, 1, 0.12, 0.08);
/// assert!((t - 40.0).abs() < 1e-9);
/// ```
#[inline]
pub fn uniform_wear_torque(mu: f64, w: f64, n: u32, ro: f64, ri: f64) -> f64 {
    mu * w * f64::from(n) * uniform_wear_mean_radius(ro, ri)
}

/// Torque capacity under the uniform-pressure theory.
///
/// # Formula
/// T = (2/3)·μ·W·n·(Ro³ - Ri³) / (Ro² - Ri²)
#[inline]
pub fn uniform_pressure_torque(mu: f64, w: f64, n: u32, ro: f64, ri: f64) -> f64 {
    mu * w * f64::from(n) * uniform_pressure_mean_radius(ro, ri)
}
