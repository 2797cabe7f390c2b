//! # Torque Model
//!
//! Torque capacity of a multi-plate clutch under one of two design theories,
//! plus the torque-vs-axial-force curve used for charts.
//!
//! Both theories give `T = μ·W·n·r_m` and differ only in the mean friction
//! radius `r_m`, so [`Theory`] is a plain enum dispatched by `match`.
//!
//! ## Example
//!
//! ```rust
//! use clutch_core::calculations::torque::{compute_torque, Theory};
//!
//! let wear = compute_torque(0.35, 6785.84, 2, 0.12, 0.06, Theory::UniformWear);
//! let pressure = compute_torque(0.35, 6785.84, 2, 0.12, 0.06, Theory::UniformPressure);
//! assert!((wear - 427.5).abs() < 0.1);
//! assert!((pressure - 443.3).abs() < 0.1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::clutch::ClutchInput;
use crate::equations::clutch::{
    uniform_pressure_mean_radius, uniform_pressure_torque, uniform_wear_mean_radius,
    uniform_wear_torque,
};
use crate::equations::registry::Equation;
use crate::errors::CalcError;
use crate::settings::CurveSettings;
use crate::units::Newtons;

/// Clutch design theory.
///
/// - `UniformWear`: worn-in lining, `p·r = constant`. The conservative choice
///   for most service calculations.
/// - `UniformPressure`: new lining with constant pressure over the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theory {
    #[default]
    UniformWear,
    UniformPressure,
}

impl Theory {
    /// Both theories, in display order
    pub const ALL: [Theory; 2] = [Theory::UniformWear, Theory::UniformPressure];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Theory::UniformWear => "Uniform Wear",
            Theory::UniformPressure => "Uniform Pressure",
        }
    }

    /// Mean friction radius r_m (m) for this theory
    pub fn mean_radius(&self, outer_radius_m: f64, inner_radius_m: f64) -> f64 {
        match self {
            Theory::UniformWear => uniform_wear_mean_radius(outer_radius_m, inner_radius_m),
            Theory::UniformPressure => uniform_pressure_mean_radius(outer_radius_m, inner_radius_m),
        }
    }

    /// Registry entries for the radius and torque formulas of this theory
    pub fn equations(&self) -> [Equation; 2] {
        match self {
            Theory::UniformWear => [Equation::UniformWearMeanRadius, Equation::UniformWearTorque],
            Theory::UniformPressure => {
                [Equation::UniformPressureMeanRadius, Equation::UniformPressureTorque]
            }
        }
    }
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Theory {
    type Err = CalcError;

    /// Accepts `UniformWear`, `uniform-wear`, `Uniform Wear`, `wear` and the
    /// pressure equivalents, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "uniformwear" | "wear" => Ok(Theory::UniformWear),
            "uniformpressure" | "pressure" => Ok(Theory::UniformPressure),
            _ => Err(CalcError::invalid_parameter(
                "theory",
                s,
                "Expected 'uniform-wear' or 'uniform-pressure'",
            )),
        }
    }
}

/// One point of the torque-vs-axial-force curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueCurvePoint {
    /// Axial force (N)
    pub axial_force_n: f64,
    /// Torque capacity at that force (N·m)
    pub torque_nm: f64,
}

/// Torque capacity (N·m) for the selected theory.
///
/// Inputs are expected to be validated: with `Ro == Ri` the uniform-pressure
/// formula divides by zero. [`crate::calculations::force::compute_force`]
/// rejects such geometry first.
pub fn compute_torque(
    friction_coefficient: f64,
    axial_force_n: f64,
    surface_count: u32,
    outer_radius_m: f64,
    inner_radius_m: f64,
    theory: Theory,
) -> f64 {
    let (mu, w, n) = (friction_coefficient, axial_force_n, surface_count);
    match theory {
        Theory::UniformWear => uniform_wear_torque(mu, w, n, outer_radius_m, inner_radius_m),
        Theory::UniformPressure => {
            uniform_pressure_torque(mu, w, n, outer_radius_m, inner_radius_m)
        }
    }
}

/// Sample the torque-vs-axial-force line for a clutch.
///
/// Axial force is spaced linearly over `[start_factor·W, end_factor·W]`,
/// both ends included, where `W = design_axial_force_n`. μ, n, Ro and Ri are
/// held at their input values. The same inputs always give the same points.
///
/// `curve` is expected to be validated (at least 2 samples). With one sample
/// only the start point is returned; with zero the curve is empty.
///
/// # Example
///
/// ```rust
/// use clutch_core::calculations::clutch::ClutchInput;
/// use clutch_core::calculations::torque::compute_torque_curve;
/// use clutch_core::settings::CurveSettings;
///
/// let input = ClutchInput::default();
/// let curve = compute_torque_curve(&input, 1000.0, &CurveSettings::default());
/// assert_eq!(curve.len(), 50);
/// assert_eq!(curve[0].axial_force_n, 100.0);
/// assert_eq!(curve[49].axial_force_n, 2000.0);
/// ```
pub fn compute_torque_curve(
    input: &ClutchInput,
    design_axial_force_n: f64,
    curve: &CurveSettings,
) -> Vec<TorqueCurvePoint> {
    let start = Newtons(design_axial_force_n) * curve.start_factor;
    let end = Newtons(design_axial_force_n) * curve.end_factor;
    let last = curve.samples.saturating_sub(1);
    let step = if last > 0 { (end - start) / last as f64 } else { Newtons(0.0) };

    (0..curve.samples)
        .map(|i| {
            let force = if i == last { end } else { start + step * i as f64 };
            TorqueCurvePoint {
                axial_force_n: force.value(),
                torque_nm: compute_torque(
                    input.friction_coefficient,
                    force.value(),
                    input.surface_count,
                    input.outer_radius_m,
                    input.inner_radius_m,
                    input.theory,
                ),
            }
        })
        .collect()
}
