//! Built-in reference dataset.
//!
//! The consuming application normally seeds soil and load tables into its
//! own store; this module carries the same seed data so the engine can be
//! exercised without a database (CLI, tests, quick integrations).
//!
//! Soil rows mirror the seeded legacy data, which mixes units: most rows
//! are stored as MPa ranges, a few as kN/m² — exactly the ambiguity the
//! resolver's detection heuristic exists for. Load values are kN/m².

use once_cell::sync::Lazy;

use super::InMemoryReference;

static BUILTIN: Lazy<InMemoryReference> = Lazy::new(|| {
    InMemoryReference::new()
        // Soils — MPa ranges (average <= 10 triggers conversion)
        .with_soil("soft clay", 0.05, 0.1)
        .with_soil("stiff clay", 0.15, 0.3)
        .with_soil("loose sand", 0.1, 0.2)
        .with_soil("dense sand", 0.3, 0.5)
        .with_soil("gravel", 0.3, 0.6)
        .with_soil("weathered rock", 1.0, 3.0)
        // Soils — already in kN/m² (average > 10 passes through)
        .with_soil("compacted fill", 100.0, 200.0)
        .with_soil("engineered fill", 150.0, 250.0)
        // Live loads per building type
        .with_live_load("residential", Some(2.0), Some(1.5), Some(2.0))
        .with_live_load("office", Some(3.0), Some(2.5), Some(4.0))
        .with_live_load("retail", Some(5.0), Some(4.0), Some(5.0))
        .with_live_load("school", Some(3.0), Some(3.0), Some(4.0))
        .with_live_load("warehouse", None, Some(6.0), Some(7.5))
        // Dead loads — aggregate row plus element breakdowns
        .with_dead_load("residential", "total dead load", Some(6.0), Some(5.0), Some(7.0))
        .with_dead_load("residential", "concrete slab", Some(3.5), Some(3.0), Some(4.0))
        .with_dead_load("residential", "partitions", Some(1.2), Some(1.0), Some(1.5))
        .with_dead_load("residential", "finishes", Some(1.3), Some(1.0), Some(1.5))
        .with_dead_load("office", "total dead load", Some(7.0), Some(6.0), Some(8.0))
        .with_dead_load("office", "concrete slab", Some(4.0), Some(3.5), Some(4.5))
        .with_dead_load("office", "partitions", Some(1.5), Some(1.2), Some(2.0))
        .with_dead_load("office", "finishes", Some(1.5), Some(1.2), Some(1.8))
        .with_dead_load("school", "total dead load", Some(7.0), Some(6.0), Some(8.0))
        .with_dead_load("school", "concrete slab", Some(4.0), Some(3.5), Some(4.5))
        // Retail has no aggregate row seeded; resolution sums the elements
        .with_dead_load("retail", "concrete slab", Some(4.5), Some(4.0), Some(5.0))
        .with_dead_load("retail", "partitions", Some(1.5), Some(1.2), Some(2.0))
        .with_dead_load("retail", "finishes", None, Some(1.0), Some(1.5))
        .with_dead_load("warehouse", "total dead load", Some(8.0), Some(7.0), Some(9.0))
        .with_dead_load("warehouse", "concrete slab", Some(5.0), Some(4.5), Some(5.5))
});

/// The seeded default reference dataset.
pub fn builtin() -> &'static InMemoryReference {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{resolve_loads, resolve_soil};

    #[test]
    fn test_builtin_soils_resolve() {
        for name in builtin().soil_names() {
            let capacity = resolve_soil(builtin(), name).unwrap();
            assert!(capacity.value_kn_m2 > 0.0, "soil {name} resolved to zero");
        }
    }

    #[test]
    fn test_builtin_building_types_resolve() {
        for building_type in builtin().building_types() {
            let loads = resolve_loads(builtin(), building_type).unwrap();
            assert!(loads.total_kn_m2 > 0.0);
            assert!(loads.dead_kn_m2 > 0.0);
        }
    }

    #[test]
    fn test_mixed_units_in_seed_data() {
        let clay = resolve_soil(builtin(), "stiff clay").unwrap();
        assert!(clay.converted_from_mpa);
        assert!((clay.value_kn_m2 - 225.0).abs() < 1e-9);

        let fill = resolve_soil(builtin(), "compacted fill").unwrap();
        assert!(!fill.converted_from_mpa);
        assert!((fill.value_kn_m2 - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_retail_sums_elements() {
        let loads = resolve_loads(builtin(), "retail").unwrap();
        // 4.5 + 1.5 + 1.0 (min fallback for finishes)
        assert!((loads.dead_kn_m2 - 7.0).abs() < 1e-9);
    }
}
