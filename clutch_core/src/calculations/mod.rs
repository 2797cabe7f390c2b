//! # Clutch Calculations
//!
//! This module contains the clutch calculation pipeline. Each stage is a pure
//! function; the full design follows the pattern:
//!
//! - `ClutchInput` - Input parameters (JSON-serializable)
//! - `ClutchDesign` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<ClutchDesign, CalcError>` - Pure calculation function
//!
//! ## Stages
//!
//! - [`force`] - Contact area and axial force from radii and pressure
//! - [`torque`] - Torque capacity per design theory, torque-vs-force curve
//! - [`clutch`] - Validation and the full design (force, torque, curve, advisories)

pub mod clutch;
pub mod force;
pub mod torque;

// Re-export commonly used types
pub use clutch::{
    calculate, calculate_with_settings, derive, ClutchDesign, ClutchInput, DerivedResult,
    InputWarning,
};
pub use force::{compute_force, ForceResult};
pub use torque::{compute_torque, compute_torque_curve, Theory, TorqueCurvePoint};
