//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use powerplan::plan::{FuelPrices, GenerationUnit, PlanRequest, UnitKind};

/// Tolerance on a single assigned output from one-decimal rounding.
pub const ROUNDING_TOLERANCE: f64 = 0.05;

/// Fuel prices used by the worked scenarios (gas 10, 60 % wind).
pub fn scenario_fuels() -> FuelPrices {
    FuelPrices {
        gas: 10.0,
        distillate: 50.0,
        carbon: 20.0,
        wind_percent: 60.0,
    }
}

/// Wind 200 MW, gas A (pmin 100, pmax 400, eff 0.5), gas B (pmin 50, pmax 200, eff 0.4).
pub fn scenario_units() -> Vec<GenerationUnit> {
    vec![
        GenerationUnit::new("wind", UnitKind::Wind, 1.0, 0.0, 200.0),
        GenerationUnit::new("gasA", UnitKind::Gas, 0.5, 100.0, 400.0),
        GenerationUnit::new("gasB", UnitKind::Gas, 0.4, 50.0, 200.0),
    ]
}

pub fn scenario_request(load: f64) -> PlanRequest {
    PlanRequest {
        load,
        fuels: scenario_fuels(),
        units: scenario_units(),
    }
}

/// Random fleet with zero floors, so every request is feasible.
///
/// Capacities and wind availability are whole numbers; loads stay below the
/// total effective capacity.
pub fn random_floorless_request(rng: &mut StdRng) -> PlanRequest {
    let n_units = rng.random_range(1..=12);
    let units: Vec<GenerationUnit> = (0..n_units)
        .map(|i| {
            let kind = match rng.random_range(0..3) {
                0 => UnitKind::Gas,
                1 => UnitKind::Distillate,
                _ => UnitKind::Wind,
            };
            let efficiency = if kind == UnitKind::Wind {
                1.0
            } else {
                f64::from(rng.random_range(20_u32..=60)) / 100.0
            };
            let pmax = f64::from(rng.random_range(0_u32..=500));
            GenerationUnit::new(format!("unit{i}"), kind, efficiency, 0.0, pmax)
        })
        .collect();

    let fuels = FuelPrices {
        gas: f64::from(rng.random_range(5_u32..=40)),
        distillate: f64::from(rng.random_range(30_u32..=90)),
        carbon: f64::from(rng.random_range(0_u32..=50)),
        wind_percent: f64::from(rng.random_range(0_u32..=100)),
    };

    let capacity: f64 = units
        .iter()
        .map(|u| match u.kind {
            UnitKind::Wind => u.pmax * fuels.wind_percent / 100.0,
            _ => u.pmax,
        })
        .sum();
    let load = (capacity * rng.random_range(0.0..1.0)).floor();

    PlanRequest { load, fuels, units }
}

/// Seeded RNG for reproducible randomized tests.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
