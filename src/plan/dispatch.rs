use tracing::{debug, instrument, warn};

use super::error::DispatchError;
use super::merit::rank_units;
use super::types::{Allocation, PlanRequest, ProductionPlan, RankedUnit};

/// Resolution of assigned outputs (MW).
pub const OUTPUT_STEP: f64 = 0.1;

/// Remaining load below this is treated as covered. Subtracting rounded
/// outputs leaves floating-point residue that must not trip a unit floor.
const COVERED_BELOW: f64 = OUTPUT_STEP / 2.0;

/// Rounds an output to one decimal place, ties to even.
pub fn round_output(p: f64) -> f64 {
    (p * 10.0).round_ties_even() / 10.0
}

/// Greedily fills `load` across units already sorted by marginal cost.
///
/// Each unit takes as much of the remaining load as its effective capacity
/// allows. Once the load is covered, later units are listed at zero output.
///
/// # Errors
///
/// Returns [`DispatchError::ManualInterventionRequired`] when the remaining
/// load is positive but below the next unit's minimum stable output. No
/// partial plan is returned.
pub fn allocate(load: f64, ranked: &[RankedUnit<'_>]) -> Result<ProductionPlan, DispatchError> {
    let mut remaining = load;
    let mut allocations = Vec::with_capacity(ranked.len());

    for r in ranked {
        let unit = r.unit;
        let p = if remaining < COVERED_BELOW {
            0.0
        } else if remaining < unit.pmin {
            warn!(
                unit = %unit.name,
                pmin = unit.pmin,
                remaining_load = remaining,
                "remaining load below unit floor"
            );
            return Err(DispatchError::ManualInterventionRequired {
                unit: unit.name.clone(),
                pmin: unit.pmin,
                remaining_load: remaining,
            });
        } else if remaining >= r.capacity {
            round_output(r.capacity)
        } else {
            round_output(remaining)
        };
        remaining -= p;

        debug!(
            unit = %unit.name,
            kind = %unit.kind,
            cost = r.marginal_cost,
            capacity = r.capacity,
            p,
            remaining_load = remaining,
            "unit dispatched"
        );
        allocations.push(Allocation {
            name: unit.name.clone(),
            p,
            marginal_cost: r.marginal_cost,
            capacity: r.capacity,
        });
    }

    Ok(ProductionPlan::new(allocations))
}

/// Computes the production plan for a request: rank, then allocate.
///
/// # Errors
///
/// Propagates [`DispatchError::ManualInterventionRequired`] from [`allocate`].
#[instrument(skip_all, fields(load = request.load, units = request.units.len()))]
pub fn compute_plan(request: &PlanRequest) -> Result<ProductionPlan, DispatchError> {
    let ranked = rank_units(&request.units, &request.fuels);
    allocate(request.load, &ranked)
}
