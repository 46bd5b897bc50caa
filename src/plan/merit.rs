use super::types::{FuelPrices, GenerationUnit, RankedUnit, UnitKind};

/// Computes the effective marginal cost of a unit (€/MWh).
///
/// Fuel-burning units pay their fuel price divided by efficiency; wind is free.
/// Efficiency is guaranteed positive by payload validation.
pub fn marginal_cost(unit: &GenerationUnit, fuels: &FuelPrices) -> f64 {
    match unit.kind {
        UnitKind::Gas => fuels.gas / unit.efficiency,
        UnitKind::Distillate => fuels.distillate / unit.efficiency,
        UnitKind::Wind => 0.0,
    }
}

/// Computes the effective maximum output of a unit (MW).
///
/// Wind nameplate is scaled by current availability. The fractional result
/// is kept as is; rounding happens only when output is assigned.
pub fn effective_capacity(unit: &GenerationUnit, fuels: &FuelPrices) -> f64 {
    match unit.kind {
        UnitKind::Wind => unit.pmax * fuels.wind_percent / 100.0,
        UnitKind::Gas | UnitKind::Distillate => unit.pmax,
    }
}

impl<'a> RankedUnit<'a> {
    /// Derives cost and capacity for `unit` under the given prices.
    pub fn derive(unit: &'a GenerationUnit, fuels: &FuelPrices) -> Self {
        Self {
            unit,
            marginal_cost: marginal_cost(unit, fuels),
            capacity: effective_capacity(unit, fuels),
        }
    }
}

/// Orders units cheapest first.
///
/// The sort is stable: units with equal cost keep their input order.
pub fn rank_units<'a>(units: &'a [GenerationUnit], fuels: &FuelPrices) -> Vec<RankedUnit<'a>> {
    let mut ranked: Vec<RankedUnit<'a>> = units
        .iter()
        .map(|unit| RankedUnit::derive(unit, fuels))
        .collect();
    ranked.sort_by(|a, b| a.marginal_cost.total_cmp(&b.marginal_cost));
    ranked
}
