//! # Friction Clutch Equations
//!
//! This module contains the closed-form clutch equations used in calculations.
//! Having equations in one place enables:
//! - Easy verification against machine design references
//! - Documentation of assumptions
//! - Consistent implementation across the force and torque stages
//!
//! ## Modules
//!
//! - [`clutch`] - Annular face geometry, axial force, mean radius and torque formulas
//! - [`registry`] - Equation metadata for audit trails and the markdown reference
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 10th Edition, Chapter 16
//! - Juvinall & Marshek, Fundamentals of Machine Component Design, Chapter 18

pub mod clutch;
pub mod registry;

// Re-export commonly used items
pub use clutch::{
    annular_contact_area,
    axial_force,
    uniform_pressure_mean_radius,
    uniform_pressure_torque,
    uniform_wear_mean_radius,
    uniform_wear_torque,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
