//! Core dispatch types: fuel prices, generation units, and the resulting plan.

use std::fmt;

use serde::Serialize;

/// Generation technology of a unit.
///
/// Each variant carries its own cost and capacity rule, see
/// [`merit::marginal_cost`](super::merit::marginal_cost) and
/// [`merit::effective_capacity`](super::merit::effective_capacity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Gas-fired thermal unit, priced on the gas price.
    Gas,
    /// Distillate-fired turbojet, priced on the kerosine price.
    Distillate,
    /// Wind turbine, zero fuel cost, capacity scaled by wind availability.
    Wind,
}

impl UnitKind {
    /// Accepted kind tags, in declaration order.
    pub const TAGS: &[&str] = &["gasfired", "turbojet", "windturbine"];

    /// Parses a kind tag as used in request payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use powerplan::plan::UnitKind;
    ///
    /// assert_eq!(UnitKind::from_tag("turbojet"), Some(UnitKind::Distillate));
    /// assert_eq!(UnitKind::from_tag("solarfired"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gasfired" => Some(Self::Gas),
            "turbojet" => Some(Self::Distillate),
            "windturbine" => Some(Self::Wind),
            _ => None,
        }
    }

    /// Returns the payload tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Gas => "gasfired",
            Self::Distillate => "turbojet",
            Self::Wind => "windturbine",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fuel and weather snapshot for one planning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelPrices {
    /// Gas price (€/MWh, > 0).
    pub gas: f64,
    /// Distillate (kerosine) price (€/MWh, > 0).
    pub distillate: f64,
    /// Carbon price (€/ton, >= 0). Not used by the allocation.
    pub carbon: f64,
    /// Wind availability (percent, 0–100).
    pub wind_percent: f64,
}

/// One dispatchable resource as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationUnit {
    /// Unique name within a request.
    pub name: String,
    /// Generation technology.
    pub kind: UnitKind,
    /// Fuel-to-power efficiency (fraction, > 0).
    pub efficiency: f64,
    /// Minimum stable output (MW, >= 0).
    pub pmin: f64,
    /// Nameplate maximum output (MW, >= 0).
    pub pmax: f64,
}

impl GenerationUnit {
    /// Creates a new unit.
    pub fn new(
        name: impl Into<String>,
        kind: UnitKind,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            efficiency,
            pmin,
            pmax,
        }
    }
}

/// A freestanding planning request: load, prices, and the unit fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Total load to cover (MW, >= 0).
    pub load: f64,
    /// Fuel price snapshot.
    pub fuels: FuelPrices,
    /// Available units in caller order.
    pub units: Vec<GenerationUnit>,
}

/// Request-scoped derived values for one unit.
///
/// Borrows the caller's unit so the input stays untouched.
#[derive(Debug, Clone, Copy)]
pub struct RankedUnit<'a> {
    /// The caller-supplied unit.
    pub unit: &'a GenerationUnit,
    /// Effective marginal cost (€/MWh).
    pub marginal_cost: f64,
    /// Effective maximum output (MW).
    pub capacity: f64,
}

/// Output assigned to one unit.
///
/// Serializes to the `{"name": ..., "p": ...}` response shape; the derived
/// cost and capacity figures stay internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    /// Unit name.
    pub name: String,
    /// Assigned output (MW, one decimal place).
    pub p: f64,
    /// Effective marginal cost used for ranking (€/MWh).
    #[serde(skip)]
    pub marginal_cost: f64,
    /// Effective maximum output at planning time (MW).
    #[serde(skip)]
    pub capacity: f64,
}

/// Ordered production plan, cheapest unit first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductionPlan {
    allocations: Vec<Allocation>,
}

impl ProductionPlan {
    pub(crate) fn new(allocations: Vec<Allocation>) -> Self {
        Self { allocations }
    }

    /// Returns the allocations in merit order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Returns the allocation for the named unit, if present.
    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.name == name)
    }

    /// Sum of all assigned outputs (MW).
    pub fn total_output(&self) -> f64 {
        self.allocations.iter().map(|a| a.p).sum()
    }

    /// Number of entries, one per input unit.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Iterates over the allocations in merit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.allocations.iter()
    }
}

impl<'a> IntoIterator for &'a ProductionPlan {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.allocations.iter()
    }
}

impl fmt::Display for ProductionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24} {:>10} {:>12} {:>10}", "unit", "p (MW)", "cost (€/MWh)", "cap (MW)")?;
        for a in &self.allocations {
            writeln!(
                f,
                "{:<24} {:>10.1} {:>12.2} {:>10.2}",
                a.name, a.p, a.marginal_cost, a.capacity
            )?;
        }
        write!(f, "{:<24} {:>10.1}", "total", self.total_output())
    }
}
