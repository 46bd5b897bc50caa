//! Merit-order dispatch engine.
//!
//! Everything in this module is a pure function of the request it is given:
//! no state survives between calls and the caller's units are never mutated.

/// Greedy allocation of load across ranked units.
pub mod dispatch;
pub mod error;
/// Marginal cost, effective capacity and merit-order ranking.
pub mod merit;
/// Aggregate figures derived from a finished plan.
pub mod summary;
pub mod types;

pub use dispatch::{allocate, compute_plan};
pub use error::DispatchError;
pub use summary::PlanSummary;
pub use types::{Allocation, FuelPrices, GenerationUnit, PlanRequest, ProductionPlan, UnitKind};
