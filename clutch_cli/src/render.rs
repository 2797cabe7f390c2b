//! Plain-text report for a clutch design.

use clutch_core::calculations::TorqueCurvePoint;
use clutch_core::{ClutchDesign, ClutchInput};

const RULE: &str = "═══════════════════════════════════";

/// Render inputs, results, warnings and advisories; optionally the curve table.
pub fn report(input: &ClutchInput, design: &ClutchDesign, include_curve: bool) -> String {
    let mut out = String::new();
    let d = &design.derived;

    out.push_str(&format!("{}\n", RULE));
    out.push_str("  CLUTCH PLATE DESIGN RESULTS\n");
    out.push_str(&format!("{}\n", RULE));
    out.push('\n');
    out.push_str("Input:\n");
    out.push_str(&format!("  Friction:  μ = {:.2}\n", input.friction_coefficient));
    out.push_str(&format!("  Surfaces:  n = {}\n", input.surface_count));
    out.push_str(&format!(
        "  Radii:     Ro = {:.3} m, Ri = {:.3} m\n",
        input.outer_radius_m, input.inner_radius_m
    ));
    out.push_str(&format!("  Pressure:  p = {:.0} Pa\n", input.allowable_pressure_pa));
    out.push_str(&format!("  Theory:    {}\n", d.theory));
    out.push('\n');
    out.push_str("Results:\n");
    out.push_str(&format!("  Contact Area = {:.4} m²\n", d.contact_area_m2));
    out.push_str(&format!("  Axial Force (W) = {:.1} N\n", d.axial_force_n));
    out.push_str(&format!("  Mean Radius = {:.4} m\n", d.effective_radius_m));
    out.push_str(&format!("  Torque Capacity (T) = {:.1} N·m\n", d.torque_nm));

    if !design.warnings.is_empty() {
        out.push('\n');
        out.push_str("Warnings:\n");
        for warning in &design.warnings {
            out.push_str(&format!("  [WARN] {}\n", warning.message));
        }
    }

    out.push('\n');
    out.push_str("Design Recommendations:\n");
    for advisory in &design.advisories {
        out.push_str(&format!("  [OK] {}\n", advisory.message));
    }

    if include_curve {
        out.push('\n');
        out.push_str(&curve_table(&design.curve));
    }

    out.push_str(&format!("{}\n", RULE));
    out
}

/// Torque vs axial force as a two-column table.
pub fn curve_table(curve: &[TorqueCurvePoint]) -> String {
    let mut out = String::new();
    out.push_str("Torque vs Axial Force:\n");
    out.push_str(&format!("  {:>12}  {:>12}\n", "W (N)", "T (N·m)"));
    for point in curve {
        out.push_str(&format!("  {:>12.1}  {:>12.1}\n", point.axial_force_n, point.torque_nm));
    }
    out
}
