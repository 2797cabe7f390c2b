//! # Equation Registry
//!
//! Central registry of every clutch equation used in calculations.
//! Each equation has metadata including its reference, formula, and variable
//! definitions, so a result can name exactly which formulas produced it.
//!
//! ## Usage
//!
//! ```rust
//! use clutch_core::equations::registry::Equation;
//!
//! let meta = Equation::UniformWearTorque.metadata();
//! assert_eq!(meta.formula_plain, "T = mu * W * n * (Ro + Ri) / 2");
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a machine design text or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Shigley's Mechanical Engineering Design
    Shigley {
        edition: u8,
        section: &'static str,
    },
    /// Juvinall & Marshek, Fundamentals of Machine Component Design
    Juvinall {
        edition: u8,
        chapter: u8,
    },
    /// Plane geometry or statics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Shigley { edition, section } => {
                format!("Shigley's {}ed, Section {}", edition, section)
            }
            CodeReference::Juvinall { edition, chapter } => {
                format!("Juvinall & Marshek {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Shigley { .. } => "Shigley",
            CodeReference::Juvinall { .. } => "Juvinall",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Friction face geometry (contact area)
    Geometry,
    /// Axial clamping force
    Forces,
    /// Mean friction radius per design theory
    MeanRadius,
    /// Torque capacity per design theory
    Torque,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Geometry => "Geometry",
            EquationCategory::Forces => "Forces",
            EquationCategory::MeanRadius => "Mean Friction Radius",
            EquationCategory::Torque => "Torque Capacity",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Geometry => 1,
            EquationCategory::Forces => 2,
            EquationCategory::MeanRadius => 3,
            EquationCategory::Torque => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "W", "Ro", "mu")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units (e.g., "N", "m", "Pa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a clutch equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Uniform Wear Torque Capacity")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text for markdown (human-readable)
    pub formula_plain: &'static str,
    /// Reference text
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All clutch equations used by the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// A = π(Ro² - Ri²)
    ContactArea,
    /// W = p·A
    AxialForce,
    /// r_m = (Ro + Ri)/2
    UniformWearMeanRadius,
    /// r_m = (2/3)(Ro³ - Ri³)/(Ro² - Ri²)
    UniformPressureMeanRadius,
    /// T = μ·W·n·(Ro + Ri)/2
    UniformWearTorque,
    /// T = (2/3)·μ·W·n·(Ro³ - Ri³)/(Ro² - Ri²)
    UniformPressureTorque,
}

const SHIGLEY_AXIAL_CLUTCH: CodeReference = CodeReference::Shigley { edition: 10, section: "16-5" };

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ContactArea => EquationMetadata {
                name: "Annular Contact Area",
                description: "Area of one annular friction face between the inner and outer radii",
                formula_plain: "A = pi * (Ro^2 - Ri^2)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A", "Contact area of one face", "m^2"),
                    Variable::new("Ro", "Outer radius", "m"),
                    Variable::new("Ri", "Inner radius", "m"),
                ],
                assumptions: vec!["Flat annular face", "Ro > Ri > 0"],
                category: EquationCategory::Geometry,
                source_module: "equations/clutch.rs",
                source_function: "annular_contact_area",
            },

            Equation::AxialForce => EquationMetadata {
                name: "Axial Clamping Force",
                description: "Axial force that loads the whole face to the allowable pressure",
                formula_plain: "W = p * A",
                reference: SHIGLEY_AXIAL_CLUTCH,
                variables: vec![
                    Variable::new("W", "Axial clamping force", "N"),
                    Variable::new("p", "Allowable contact pressure", "Pa"),
                    Variable::new("A", "Contact area of one face", "m^2"),
                ],
                assumptions: vec!["Allowable pressure acts over the full face"],
                category: EquationCategory::Forces,
                source_module: "equations/clutch.rs",
                source_function: "axial_force",
            },

            Equation::UniformWearMeanRadius => EquationMetadata {
                name: "Uniform Wear Mean Radius",
                description: "Effective friction radius for a uniform wear rate over the lining",
                formula_plain: "r_m = (Ro + Ri) / 2",
                reference: SHIGLEY_AXIAL_CLUTCH,
                variables: vec![
                    Variable::new("r_m", "Mean friction radius", "m"),
                    Variable::new("Ro", "Outer radius", "m"),
                    Variable::new("Ri", "Inner radius", "m"),
                ],
                assumptions: vec!["Pressure inversely proportional to radius (p*r = constant)"],
                category: EquationCategory::MeanRadius,
                source_module: "equations/clutch.rs",
                source_function: "uniform_wear_mean_radius",
            },

            Equation::UniformPressureMeanRadius => EquationMetadata {
                name: "Uniform Pressure Mean Radius",
                description: "Effective friction radius when pressure is constant over the face",
                formula_plain: "r_m = (2/3) * (Ro^3 - Ri^3) / (Ro^2 - Ri^2)",
                reference: SHIGLEY_AXIAL_CLUTCH,
                variables: vec![
                    Variable::new("r_m", "Mean friction radius", "m"),
                    Variable::new("Ro", "Outer radius", "m"),
                    Variable::new("Ri", "Inner radius", "m"),
                ],
                assumptions: vec!["Constant pressure across the face", "Undefined for Ro = Ri"],
                category: EquationCategory::MeanRadius,
                source_module: "equations/clutch.rs",
                source_function: "uniform_pressure_mean_radius",
            },

            Equation::UniformWearTorque => EquationMetadata {
                name: "Uniform Wear Torque Capacity",
                description: "Torque transmissible before slip, worn-in clutch",
                formula_plain: "T = mu * W * n * (Ro + Ri) / 2",
                reference: SHIGLEY_AXIAL_CLUTCH,
                variables: vec![
                    Variable::new("T", "Torque capacity", "N*m"),
                    Variable::new("mu", "Coefficient of friction", "-"),
                    Variable::new("W", "Axial clamping force", "N"),
                    Variable::new("n", "Number of friction surfaces", "-"),
                ],
                assumptions: vec![
                    "Uniform wear across the lining",
                    "Same friction coefficient on every surface",
                ],
                category: EquationCategory::Torque,
                source_module: "equations/clutch.rs",
                source_function: "uniform_wear_torque",
            },

            Equation::UniformPressureTorque => EquationMetadata {
                name: "Uniform Pressure Torque Capacity",
                description: "Torque transmissible before slip, new (unworn) clutch",
                formula_plain: "T = (2/3) * mu * W * n * (Ro^3 - Ri^3) / (Ro^2 - Ri^2)",
                reference: SHIGLEY_AXIAL_CLUTCH,
                variables: vec![
                    Variable::new("T", "Torque capacity", "N*m"),
                    Variable::new("mu", "Coefficient of friction", "-"),
                    Variable::new("W", "Axial clamping force", "N"),
                    Variable::new("n", "Number of friction surfaces", "-"),
                ],
                assumptions: vec![
                    "Uniform pressure across the face",
                    "Same friction coefficient on every surface",
                ],
                category: EquationCategory::Torque,
                source_module: "equations/clutch.rs",
                source_function: "uniform_pressure_torque",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Geometry, Forces, MeanRadius, Torque];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::ContactArea,
    Equation::AxialForce,
    Equation::UniformWearMeanRadius,
    Equation::UniformPressureMeanRadius,
    Equation::UniformWearTorque,
    Equation::UniformPressureTorque,
];

/// Generate the markdown equation reference from the registry.
///
/// Written to `clutch_core/src/equations/EQUATIONS.md` by the `gen-equations`
/// binary and printed by `clutch_cli equations`.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Clutchcalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used in Clutchcalc friction clutch calculations.
Each equation includes its formula, reference, source location, and assumptions.

All quantities are SI: meters, pascals, newtons and newton-meters.

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 6);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(SHIGLEY_AXIAL_CLUTCH.citation(), "Shigley's 10ed, Section 16-5");
        let juvinall = CodeReference::Juvinall { edition: 6, chapter: 18 };
        assert_eq!(juvinall.citation(), "Juvinall & Marshek 6ed, Ch. 18");
        assert_eq!(CodeReference::Mechanics.short_form(), "Mechanics");
    }

    #[test]
    fn test_every_category_is_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
        assert_eq!(Equation::in_category(EquationCategory::Torque).len(), 2);
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_generate_markdown() {
        let md = generate_equations_markdown();
        assert!(md.starts_with("# Clutchcalc Equations Reference"));
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name), "missing {:?}", eq);
        }
        assert!(md.contains("**Total Equations:** 6"));
    }
}
