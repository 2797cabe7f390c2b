//! # Design Advisories
//!
//! Threshold rules that turn a computed clutch design into short textual
//! recommendations.
//!
//! Rules are an ordered table of independent predicates. Every rule is
//! checked, several may fire together, and output keeps table order. When
//! none fire, a single [`AdvisoryRule::Balanced`] advisory is returned, so the
//! result is never empty and never mixes the fallback with other advice.
//!
//! | Rule | Fires when |
//! |------|------------|
//! | `LowFriction` | μ < 0.3 |
//! | `SmallOuterRadius` | Ro < 0.1 m |
//! | `NarrowFrictionWidth` | Ro - Ri < 0.03 m |
//! | `HighPressure` | p > 300 kPa |
//! | `LowTorque` | T < 200 N·m |
//!
//! Thresholds come from [`AdvisoryThresholds`]; the table shows the defaults.

use serde::{Deserialize, Serialize};

use crate::calculations::clutch::{ClutchInput, DerivedResult};
use crate::settings::AdvisoryThresholds;

/// Identifier of the rule that produced an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvisoryRule {
    LowFriction,
    SmallOuterRadius,
    NarrowFrictionWidth,
    HighPressure,
    LowTorque,
    /// Fallback when no other rule fires
    Balanced,
}

impl AdvisoryRule {
    /// Recommendation text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            AdvisoryRule::LowFriction => {
                "Increase friction material quality to improve torque capacity."
            }
            AdvisoryRule::SmallOuterRadius => {
                "Consider increasing outer radius to enhance torque transmission."
            }
            AdvisoryRule::NarrowFrictionWidth => {
                "Increase friction width for better heat dissipation and life."
            }
            AdvisoryRule::HighPressure => {
                "Pressure is high — check lining wear and thermal limits."
            }
            AdvisoryRule::LowTorque => {
                "Torque capacity is low — increase axial load or number of friction surfaces."
            }
            AdvisoryRule::Balanced => "Design parameters are balanced and suitable for operation.",
        }
    }
}

/// A single design recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub rule: AdvisoryRule,
    pub message: String,
}

impl From<AdvisoryRule> for Advisory {
    fn from(rule: AdvisoryRule) -> Self {
        Advisory {
            rule,
            message: rule.message().to_string(),
        }
    }
}

type Predicate = fn(&ClutchInput, &DerivedResult, &AdvisoryThresholds) -> bool;

fn low_friction(input: &ClutchInput, _: &DerivedResult, t: &AdvisoryThresholds) -> bool {
    input.friction_coefficient < t.min_friction_coefficient
}

fn small_outer_radius(input: &ClutchInput, _: &DerivedResult, t: &AdvisoryThresholds) -> bool {
    input.outer_radius_m < t.min_outer_radius_m
}

fn narrow_friction_width(input: &ClutchInput, _: &DerivedResult, t: &AdvisoryThresholds) -> bool {
    input.friction_width_m() < t.min_friction_width_m
}

fn high_pressure(input: &ClutchInput, _: &DerivedResult, t: &AdvisoryThresholds) -> bool {
    input.allowable_pressure_pa > t.max_pressure_pa
}

fn low_torque(_: &ClutchInput, derived: &DerivedResult, t: &AdvisoryThresholds) -> bool {
    derived.torque_nm < t.min_torque_nm
}

/// Rule table, in output order.
const RULES: [(AdvisoryRule, Predicate); 5] = [
    (AdvisoryRule::LowFriction, low_friction),
    (AdvisoryRule::SmallOuterRadius, small_outer_radius),
    (AdvisoryRule::NarrowFrictionWidth, narrow_friction_width),
    (AdvisoryRule::HighPressure, high_pressure),
    (AdvisoryRule::LowTorque, low_torque),
];

/// Evaluate every advisory rule against a design.
///
/// # Example
///
/// ```rust
/// use clutch_core::advisories::{evaluate_advisories, AdvisoryRule};
/// use clutch_core::calculations::clutch::{derive, ClutchInput};
/// use clutch_core::settings::AdvisoryThresholds;
///
/// let input = ClutchInput { friction_coefficient: 0.25, ..ClutchInput::default() };
/// let derived = derive(&input).unwrap();
/// let advice = evaluate_advisories(&input, &derived, &AdvisoryThresholds::default());
/// assert_eq!(advice[0].rule, AdvisoryRule::LowFriction);
/// ```
pub fn evaluate_advisories(
    input: &ClutchInput,
    derived: &DerivedResult,
    thresholds: &AdvisoryThresholds,
) -> Vec<Advisory> {
    let fired: Vec<Advisory> = RULES
        .iter()
        .filter(|(_, applies)| applies(input, derived, thresholds))
        .map(|(rule, _)| Advisory::from(*rule))
        .collect();

    if fired.is_empty() {
        vec![Advisory::from(AdvisoryRule::Balanced)]
    } else {
        fired
    }
}
