//! # Concrete Volumes
//!
//! Cleaning/blinding-pour volume and footing concrete volumes.
//!
//! The footing plan for every footing is derived from the cleaning-pour
//! footprint with a fixed 0.20 m setback on each axis, not from the
//! load-derived footing dimensions. In the "individually specified" mode
//! only the height varies between footings; all share the single plan.
//!
//! Reported volumes are rounded to 3 decimal places; sums run at full
//! precision before rounding.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::round3;

/// Setback from the cleaning-pour footprint to the footing plan, per axis (m)
pub const PLAN_SETBACK_M: f64 = 0.20;

/// Cleaning-pour volume, L × W × H (m³), unrounded.
pub fn cleaning_volume(length_m: f64, width_m: f64, height_m: f64) -> f64 {
    length_m * width_m * height_m
}

/// Footing plan dimensions shared by all footings (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootingPlan {
    /// Plan length, cleaning length minus the setback (m)
    pub length_m: f64,

    /// Plan width, cleaning width minus the setback (m)
    pub width_m: f64,
}

impl FootingPlan {
    /// Plan area (m²)
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// Derive the footing plan from the cleaning-pour footprint.
///
/// Fails when either dimension is consumed by the 0.20 m setback.
pub fn footing_plan(cleaning_length_m: f64, cleaning_width_m: f64) -> CalcResult<FootingPlan> {
    let length_m = cleaning_length_m - PLAN_SETBACK_M;
    let width_m = cleaning_width_m - PLAN_SETBACK_M;

    if length_m <= 0.0 {
        return Err(CalcError::geometry(
            "footing_plan_length_m",
            format!(
                "Cleaning length {cleaning_length_m} m leaves no footing plan after the \
                 {PLAN_SETBACK_M} m setback"
            ),
        ));
    }
    if width_m <= 0.0 {
        return Err(CalcError::geometry(
            "footing_plan_width_m",
            format!(
                "Cleaning width {cleaning_width_m} m leaves no footing plan after the \
                 {PLAN_SETBACK_M} m setback"
            ),
        ));
    }

    Ok(FootingPlan { length_m, width_m })
}

/// One line of the footing volume breakdown.
///
/// Similar footings collapse into a single entry with the repeated count;
/// individually specified footings produce one entry each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingVolumeEntry {
    /// Number of footings this entry covers
    pub footing_count: usize,

    /// Resolved footing height (m)
    pub height_m: f64,

    /// Concrete volume of one footing at this height (m³, rounded 3 dp)
    pub volume_m3: f64,
}

/// Footing concrete volumes with per-footing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingVolumes {
    /// Shared plan length (m)
    pub plan_length_m: f64,

    /// Shared plan width (m)
    pub plan_width_m: f64,

    /// Volume of one footing when all are similar (m³, rounded 3 dp)
    pub single_footing_volume_m3: Option<f64>,

    /// Total concrete volume over all footings (m³, rounded 3 dp)
    pub total_volume_m3: f64,

    /// Per-height breakdown
    pub breakdown: Vec<FootingVolumeEntry>,
}

/// Volumes for `footing_count` similar footings at one height.
pub fn similar_footing_volumes(
    plan: &FootingPlan,
    footing_height_m: f64,
    footing_count: usize,
) -> FootingVolumes {
    let single = plan.area_m2() * footing_height_m;
    FootingVolumes {
        plan_length_m: plan.length_m,
        plan_width_m: plan.width_m,
        single_footing_volume_m3: Some(round3(single)),
        total_volume_m3: round3(single * footing_count as f64),
        breakdown: vec![FootingVolumeEntry {
            footing_count,
            height_m: footing_height_m,
            volume_m3: round3(single),
        }],
    }
}

/// Volumes for individually specified footings.
///
/// `heights_m` carries one already-normalized effective height per footing
/// (override height when given, the global footing height otherwise).
pub fn individual_footing_volumes(plan: &FootingPlan, heights_m: &[f64]) -> FootingVolumes {
    let area = plan.area_m2();
    let mut total = 0.0;
    let mut breakdown = Vec::with_capacity(heights_m.len());

    for &height_m in heights_m {
        let volume = area * height_m;
        total += volume;
        breakdown.push(FootingVolumeEntry {
            footing_count: 1,
            height_m,
            volume_m3: round3(volume),
        });
    }

    FootingVolumes {
        plan_length_m: plan.length_m,
        plan_width_m: plan.width_m,
        single_footing_volume_m3: None,
        total_volume_m3: round3(total),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaning_volume_is_exact_product() {
        let volume = cleaning_volume(6.2, 6.2, 0.1);
        assert!((volume - 6.2 * 6.2 * 0.1).abs() < 1e-9);
        assert_eq!(round3(volume), 3.844);
    }

    #[test]
    fn test_plan_setback() {
        let plan = footing_plan(6.2, 6.2).unwrap();
        assert!((plan.length_m - 6.0).abs() < 1e-9);
        assert!((plan.width_m - 6.0).abs() < 1e-9);
        assert!((plan.area_m2() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_consumed_by_setback_fails() {
        let err = footing_plan(0.2, 6.2).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_ERROR");
        assert!(footing_plan(6.2, 0.15).is_err());
    }

    #[test]
    fn test_similar_total_is_count_times_single() {
        let plan = footing_plan(6.2, 6.2).unwrap();
        let volumes = similar_footing_volumes(&plan, 0.5, 4);
        assert_eq!(volumes.single_footing_volume_m3, Some(18.0));
        assert_eq!(volumes.total_volume_m3, 72.0);
        assert_eq!(volumes.breakdown.len(), 1);
        assert_eq!(volumes.breakdown[0].footing_count, 4);
    }

    #[test]
    fn test_individual_sums_over_heights() {
        let plan = footing_plan(6.2, 6.2).unwrap();
        let volumes = individual_footing_volumes(&plan, &[0.4, 0.5, 0.6, 0.7]);
        assert_eq!(volumes.breakdown.len(), 4);
        assert_eq!(volumes.total_volume_m3, 79.2);
        assert_eq!(volumes.breakdown[0].volume_m3, 14.4);
        assert_eq!(volumes.breakdown[3].height_m, 0.7);
        assert!(volumes.single_footing_volume_m3.is_none());
    }

    #[test]
    fn test_individual_full_precision_sum() {
        // each term rounds oddly on its own; the sum is rounded once
        let plan = FootingPlan {
            length_m: 1.1,
            width_m: 1.1,
        };
        let heights = [0.4111, 0.4111, 0.4111];
        let volumes = individual_footing_volumes(&plan, &heights);
        let expected: f64 = heights.iter().map(|h| plan.area_m2() * h).sum();
        assert_eq!(volumes.total_volume_m3, round3(expected));
    }
}
