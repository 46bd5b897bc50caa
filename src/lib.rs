//! Merit-order production planning for a fleet of generating units.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
pub mod logging;
pub mod payload;
/// Dispatch engine: cost ranking and greedy allocation.
pub mod plan;
