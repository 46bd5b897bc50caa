use std::fmt;

use serde::Serialize;

use super::types::ProductionPlan;

/// Aggregate figures for a finished plan.
///
/// Computed post-hoc from the plan so the reported numbers always agree with
/// the per-unit outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Load requested by the caller (MW).
    pub requested_load: f64,
    /// Sum of assigned outputs (MW).
    pub total_output: f64,
    /// `total_output - requested_load`; negative when the fleet falls short.
    pub residual: f64,
    /// Hourly fuel cost of the plan (€/h, sum of output times marginal cost).
    pub total_cost: f64,
    /// Units assigned a non-zero output.
    pub committed_units: usize,
    /// Units in the plan.
    pub unit_count: usize,
}

impl PlanSummary {
    /// Computes the summary of `plan` against the requested load.
    pub fn from_plan(plan: &ProductionPlan, requested_load: f64) -> Self {
        let mut total_output = 0.0;
        let mut total_cost = 0.0;
        let mut committed_units = 0;

        for a in plan {
            total_output += a.p;
            total_cost += a.p * a.marginal_cost;
            if a.p > 0.0 {
                committed_units += 1;
            }
        }

        Self {
            requested_load,
            total_output,
            residual: total_output - requested_load,
            total_cost,
            committed_units,
            unit_count: plan.len(),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Plan Summary ---")?;
        writeln!(f, "Requested load:   {:.1} MW", self.requested_load)?;
        writeln!(f, "Total output:     {:.1} MW", self.total_output)?;
        writeln!(f, "Residual:         {:.1} MW", self.residual)?;
        writeln!(f, "Fuel cost:        {:.2} €/h", self.total_cost)?;
        write!(
            f,
            "Committed units:  {} of {}",
            self.committed_units, self.unit_count
        )
    }
}
