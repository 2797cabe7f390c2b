//! # clutch_core - Friction Clutch Calculation Engine
//!
//! `clutch_core` is the computational heart of Clutchcalc, sizing multi-plate
//! friction clutches with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with AI assistants via
//! MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **All-or-nothing**: Invalid input yields an error and no partial result
//!
//! ## Quick Start
//!
//! ```rust
//! use clutch_core::{calculate, ClutchInput, Theory};
//!
//! let input = ClutchInput {
//!     theory: Theory::UniformPressure,
//!     ..ClutchInput::default()
//! };
//! let design = calculate(&input).unwrap();
//!
//! // Serialize to JSON for display or transmission
//! let json = serde_json::to_string_pretty(&design).unwrap();
//! assert!(json.contains("\"torque_nm\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Force, torque and full-design calculations
//! - [`advisories`] - Rule-based design recommendations
//! - [`equations`] - Closed-form clutch formulas and their registry
//! - [`settings`] - Thresholds and curve sampling configuration
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types

pub mod advisories;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use advisories::{Advisory, AdvisoryRule};
pub use calculations::{
    calculate, calculate_with_settings, ClutchDesign, ClutchInput, DerivedResult, Theory,
};
pub use errors::{CalcError, CalcResult};
pub use settings::DesignSettings;
