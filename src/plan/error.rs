//! Dispatch failure signals.

use thiserror::Error;

use super::types::UnitKind;

/// Advice shown to operators when the greedy plan cannot be completed.
pub const MANUAL_INTERVENTION_ADVICE: &str = "Failed to calculate production plan automatically. \
     Remaining load exceeds next powerplant min power. \
     Some cheaper plants might need to be switched off.";

/// Terminal failure of a planning request. No partial plan accompanies either variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// A unit carries a technology tag outside the supported set.
    #[error(
        "unit \"{unit}\" has unsupported type \"{tag}\", expected one of: {}",
        UnitKind::TAGS.join(", ")
    )]
    InvalidUnitKind {
        /// Offending unit name.
        unit: String,
        /// The tag as supplied.
        tag: String,
    },

    /// The next unit in merit order cannot run as low as the remaining load.
    #[error(
        "remaining load {remaining_load:.1} MW is below the minimum output {pmin:.1} MW of unit \"{unit}\""
    )]
    ManualInterventionRequired {
        /// Unit whose floor blocks the plan.
        unit: String,
        /// That unit's minimum stable output (MW).
        pmin: f64,
        /// Load still uncovered when the unit was reached (MW).
        remaining_load: f64,
    },
}

impl DispatchError {
    /// Returns `true` for infeasible schedules, as opposed to malformed input.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::ManualInterventionRequired { .. })
    }
}
