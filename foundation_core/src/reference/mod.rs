//! # Reference Data
//!
//! Soil bearing capacities and dead/live load tables, plus the resolution
//! rules that turn stored rows into the numbers the calculation pipeline
//! consumes.
//!
//! The engine never owns or mutates reference rows. It reads them through
//! the [`ReferenceData`] port, so any backing store (database, HTTP service,
//! fixture data) can supply them. [`InMemoryReference`] is the bundled
//! adapter used by tests and the CLI; [`tables::builtin`] carries a seeded
//! default dataset.
//!
//! ## Unit normalization
//!
//! Soil rows are stored in an ambiguous unit (legacy data mixes MPa and
//! kN/m²). Resolution applies a heuristic: an average capacity at or below
//! 10 is treated as MPa and scaled by 1000 into kN/m². The conversion is
//! surfaced on [`BearingCapacity::converted_from_mpa`] so callers can show
//! the original range.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::reference::{InMemoryReference, resolve_loads};
//!
//! let refdata = InMemoryReference::new()
//!     .with_live_load("office", Some(3.0), Some(2.5), Some(4.0))
//!     .with_dead_load("office", "total dead load", Some(7.0), None, None);
//!
//! let loads = resolve_loads(&refdata, "office").unwrap();
//! assert_eq!(loads.total_kn_m2, 10.0);
//! ```

pub mod tables;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{KnPerSqM, Megapascals};

/// Stored averages at or below this value are assumed to be megapascals
const MPA_DETECTION_THRESHOLD: f64 = 10.0;

/// A soil row from the bearing-capacity table.
///
/// Min/max are stored in an ambiguous unit (MPa or kN/m² depending on how
/// the row was seeded); see [`resolve_bearing_capacity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilReference {
    /// Unique human-readable soil name (e.g., "stiff clay")
    pub name: String,

    /// Lower bound of the allowable bearing capacity range
    pub bearing_capacity_min: f64,

    /// Upper bound of the allowable bearing capacity range
    pub bearing_capacity_max: f64,
}

/// A live-load row, one per building type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveLoadReference {
    /// Building type key (e.g., "residential", "office")
    pub building_type: String,

    /// Typical design value (kN/m²), preferred when present
    pub common_value: Option<f64>,

    /// Lower bound (kN/m²), used when no common value is stored
    pub min_value: Option<f64>,

    /// Upper bound (kN/m²), informational
    pub max_value: Option<f64>,
}

/// A dead-load row. Several rows exist per building type, one per element
/// category; the aggregate "total dead load" row is preferred when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadLoadReference {
    /// Building type key
    pub building_type: String,

    /// Element category (e.g., "total dead load", "concrete slab")
    pub element_type: String,

    /// Typical design value (kN/m²), preferred when present
    pub common_value: Option<f64>,

    /// Lower bound (kN/m²), used when no common value is stored
    pub min_value: Option<f64>,

    /// Upper bound (kN/m²), informational
    pub max_value: Option<f64>,
}

impl DeadLoadReference {
    /// Whether this row is the aggregate for its building type.
    ///
    /// Seed data spells the aggregate row inconsistently ("total dead load",
    /// "Total", "TOTAL DEAD LOAD"), so matching is by case-insensitive
    /// "total" containment.
    pub fn is_aggregate(&self) -> bool {
        self.element_type.to_ascii_lowercase().contains("total")
    }
}

/// Read-only port to the reference tables.
///
/// The only external collaborator of the engine. Implementations must be
/// snapshot-consistent for the duration of one calculation; the engine
/// performs no retries and no writes.
pub trait ReferenceData {
    /// Look up a soil row by name
    fn soil(&self, name: &str) -> Option<SoilReference>;

    /// Look up the live-load row for a building type
    fn live_load(&self, building_type: &str) -> Option<LiveLoadReference>;

    /// All dead-load rows for a building type (may be empty)
    fn dead_loads(&self, building_type: &str) -> Vec<DeadLoadReference>;
}

/// A soil bearing capacity resolved to kN/m².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacity {
    /// Soil name the capacity was resolved from
    pub soil_name: String,

    /// Resolved capacity, (min + max) / 2, in kN/m²
    pub value_kn_m2: f64,

    /// Range lower bound in kN/m² (converted if the row was in MPa)
    pub min_kn_m2: f64,

    /// Range upper bound in kN/m² (converted if the row was in MPa)
    pub max_kn_m2: f64,

    /// True when the stored row was detected as MPa and scaled by 1000
    pub converted_from_mpa: bool,
}

/// Dead, live, and total loads resolved for a building type, in kN/m².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLoads {
    /// Building type the loads were resolved from
    pub building_type: String,

    /// Resolved dead load (kN/m²)
    pub dead_kn_m2: f64,

    /// Resolved live load (kN/m²)
    pub live_kn_m2: f64,

    /// dead + live (kN/m²)
    pub total_kn_m2: f64,
}

/// Common-then-min preference used by both load tables; absent values
/// resolve to 0.
fn preferred_value(common: Option<f64>, min: Option<f64>) -> f64 {
    common.or(min).unwrap_or(0.0)
}

/// Resolve a soil row into a bearing capacity in kN/m².
///
/// Applies the MPa detection heuristic: if the stored average is at or
/// below 10 the row is treated as megapascals and scaled by 1000
/// (1 MPa = 1000 kN/m²); otherwise the values pass through unchanged.
pub fn resolve_bearing_capacity(soil: &SoilReference) -> BearingCapacity {
    let avg = (soil.bearing_capacity_min + soil.bearing_capacity_max) / 2.0;

    if avg <= MPA_DETECTION_THRESHOLD {
        BearingCapacity {
            soil_name: soil.name.clone(),
            value_kn_m2: KnPerSqM::from(Megapascals(avg)).value(),
            min_kn_m2: KnPerSqM::from(Megapascals(soil.bearing_capacity_min)).value(),
            max_kn_m2: KnPerSqM::from(Megapascals(soil.bearing_capacity_max)).value(),
            converted_from_mpa: true,
        }
    } else {
        BearingCapacity {
            soil_name: soil.name.clone(),
            value_kn_m2: avg,
            min_kn_m2: soil.bearing_capacity_min,
            max_kn_m2: soil.bearing_capacity_max,
            converted_from_mpa: false,
        }
    }
}

/// Look up a soil by name and resolve its bearing capacity.
pub fn resolve_soil(refdata: &dyn ReferenceData, name: &str) -> CalcResult<BearingCapacity> {
    let soil = refdata
        .soil(name)
        .ok_or_else(|| CalcError::reference_not_found("soils", name))?;
    Ok(resolve_bearing_capacity(&soil))
}

/// Resolve dead + live loads for a building type.
///
/// Live load: the row's common value, falling back to its min value.
/// Dead load: the aggregate row's preferred value when an aggregate row
/// exists, otherwise the sum of preferred values across all rows.
/// A missing live-load row or an empty dead-load table is a hard failure
/// naming the building type.
pub fn resolve_loads(refdata: &dyn ReferenceData, building_type: &str) -> CalcResult<ResolvedLoads> {
    let live_row = refdata
        .live_load(building_type)
        .ok_or_else(|| CalcError::reference_not_found("live_loads", building_type))?;
    let live = preferred_value(live_row.common_value, live_row.min_value);

    let dead_rows = refdata.dead_loads(building_type);
    if dead_rows.is_empty() {
        return Err(CalcError::reference_not_found("dead_loads", building_type));
    }

    let dead = match dead_rows.iter().find(|row| row.is_aggregate()) {
        Some(aggregate) => preferred_value(aggregate.common_value, aggregate.min_value),
        None => dead_rows
            .iter()
            .map(|row| preferred_value(row.common_value, row.min_value))
            .sum(),
    };

    Ok(ResolvedLoads {
        building_type: building_type.to_string(),
        dead_kn_m2: dead,
        live_kn_m2: live,
        total_kn_m2: dead + live,
    })
}

/// In-memory [`ReferenceData`] adapter.
///
/// Builder-style fixture store used by tests and the CLI. Lookups are
/// case-insensitive on the key, matching how the seeded tables are queried
/// by the consuming application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryReference {
    soils: Vec<SoilReference>,
    live_loads: Vec<LiveLoadReference>,
    dead_loads: Vec<DeadLoadReference>,
}

impl InMemoryReference {
    /// Create an empty reference store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a soil row (builder pattern)
    pub fn with_soil(mut self, name: impl Into<String>, min: f64, max: f64) -> Self {
        self.soils.push(SoilReference {
            name: name.into(),
            bearing_capacity_min: min,
            bearing_capacity_max: max,
        });
        self
    }

    /// Add a live-load row (builder pattern)
    pub fn with_live_load(
        mut self,
        building_type: impl Into<String>,
        common: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        self.live_loads.push(LiveLoadReference {
            building_type: building_type.into(),
            common_value: common,
            min_value: min,
            max_value: max,
        });
        self
    }

    /// Add a dead-load row (builder pattern)
    pub fn with_dead_load(
        mut self,
        building_type: impl Into<String>,
        element_type: impl Into<String>,
        common: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        self.dead_loads.push(DeadLoadReference {
            building_type: building_type.into(),
            element_type: element_type.into(),
            common_value: common,
            min_value: min,
            max_value: max,
        });
        self
    }

    /// All soil names, for UI selection
    pub fn soil_names(&self) -> Vec<&str> {
        self.soils.iter().map(|s| s.name.as_str()).collect()
    }

    /// All building types with a live-load row, for UI selection
    pub fn building_types(&self) -> Vec<&str> {
        self.live_loads
            .iter()
            .map(|l| l.building_type.as_str())
            .collect()
    }
}

impl ReferenceData for InMemoryReference {
    fn soil(&self, name: &str) -> Option<SoilReference> {
        self.soils
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn live_load(&self, building_type: &str) -> Option<LiveLoadReference> {
        self.live_loads
            .iter()
            .find(|l| l.building_type.eq_ignore_ascii_case(building_type))
            .cloned()
    }

    fn dead_loads(&self, building_type: &str) -> Vec<DeadLoadReference> {
        self.dead_loads
            .iter()
            .filter(|d| d.building_type.eq_ignore_ascii_case(building_type))
            .cloned()
            .collect()
    }
}
