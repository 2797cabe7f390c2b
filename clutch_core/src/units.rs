//! # Unit Types
//!
//! Type-safe wrappers for the SI quantities a friction clutch calculation
//! moves between stages. They are plain `f64` newtypes that serialize as bare
//! numbers, so JSON stays clean while the pipeline cannot multiply a pressure
//! by a radius by accident.
//!
//! ## SI Units Only
//!
//! - Length: meters (m)
//! - Area: square meters (m²)
//! - Pressure: pascals (Pa)
//! - Force: newtons (N)
//! - Torque: newton-meters (N·m)
//!
//! ## Example
//!
//! ```rust
//! use clutch_core::units::{Meters, Newtons, NewtonMeters, Pascals, SquareMeters};
//!
//! let area = SquareMeters(0.01);
//! let force: Newtons = Pascals(200_000.0) * area;
//! assert_eq!(force.0, 2000.0);
//!
//! let torque: NewtonMeters = force * Meters(0.1);
//! assert!((torque.0 - 200.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Self) -> Self::Output {
        SquareMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Pressure, Force and Torque
// ============================================================================

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Torque in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

impl Mul<SquareMeters> for Pascals {
    type Output = Newtons;
    fn mul(self, rhs: SquareMeters) -> Self::Output {
        Newtons(self.0 * rhs.0)
    }
}

impl Mul<Meters> for Newtons {
    type Output = NewtonMeters;
    fn mul(self, rhs: Meters) -> Self::Output {
        NewtonMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonMeters);
