//! # Foundation Calculation
//!
//! Sizes footings and quantifies concrete for a building foundation:
//! cleaning/blinding-pour volume, required footing area and dimensions,
//! and footing concrete volumes under "similar" or "individually
//! specified" footing modes.
//!
//! The pipeline is a single synchronous pure function: validate, resolve
//! reference data through the injected [`ReferenceData`] port, then derive
//! geometry and volumes. No state is retained between calls, so repeated
//! invocations against an unchanged reference snapshot are idempotent.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::calculations::foundation::{calculate, FoundationInput};
//! use foundation_core::calculations::geometry::FootingShape;
//! use foundation_core::reference::tables;
//!
//! let input = FoundationInput {
//!     label: "F-1".to_string(),
//!     cleaning_length_m: 6.2,
//!     cleaning_width_m: 6.2,
//!     cleaning_height_m: 0.1,
//!     floors: 2,
//!     slab_area_m2: 100.0,
//!     soil_type: "stiff clay".to_string(),
//!     building_type: "residential".to_string(),
//!     footing_height_m: 0.5,
//!     footing_count: 4,
//!     footing_shape: FootingShape::Square,
//!     similar_footings: true,
//!     footing_overrides: vec![],
//! };
//!
//! let result = calculate(&input, tables::builtin()).unwrap();
//! assert_eq!(result.cleaning_volume_m3, 3.844);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcFailure, CalcResult};
use crate::reference::{self, BearingCapacity, ReferenceData, ResolvedLoads};
use crate::units::{round2, round3, Centimeters, Meters};

use super::geometry::{self, FootingShape};
use super::volume::{self, FootingVolumes};

/// Footing heights above this value are assumed to be centimeters
const CM_DETECTION_THRESHOLD: f64 = 5.0;

/// Allowed footing height range after normalization (m)
pub const MIN_FOOTING_HEIGHT_M: f64 = 0.40;
/// Allowed footing height range after normalization (m)
pub const MAX_FOOTING_HEIGHT_M: f64 = 0.80;

/// Per-footing override, used only when footings are not similar.
///
/// Only the height can vary between footings; plan dimensions are shared
/// by all footings (derived from the one cleaning-pour footprint).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootingOverride {
    /// Height override (m, or cm when > 5); falls back to the global
    /// footing height when absent
    pub height: Option<f64>,
}

/// Input parameters for a foundation calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "cleaning_length_m": 6.2,
///   "cleaning_width_m": 6.2,
///   "cleaning_height_m": 0.1,
///   "floors": 2,
///   "slab_area_m2": 100.0,
///   "soil_type": "stiff clay",
///   "building_type": "residential",
///   "footing_height_m": 0.5,
///   "footing_count": 4,
///   "footing_shape": "square",
///   "similar_footings": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationInput {
    /// User label for this calculation (e.g., "F-1", "Block A foundation")
    pub label: String,

    /// Cleaning/blinding pour length (m)
    pub cleaning_length_m: f64,

    /// Cleaning/blinding pour width (m)
    pub cleaning_width_m: f64,

    /// Cleaning/blinding pour height (m)
    pub cleaning_height_m: f64,

    /// Number of floors
    pub floors: u32,

    /// Slab area per floor (m²)
    pub slab_area_m2: f64,

    /// Soil name, resolved against the bearing-capacity table
    pub soil_type: String,

    /// Building type, resolved against the dead/live load tables
    pub building_type: String,

    /// Footing height (m; values above 5 are read as cm). Must normalize
    /// into [0.40, 0.80]
    pub footing_height_m: f64,

    /// Number of footings (≥ 1)
    pub footing_count: usize,

    /// Footing plan shape
    pub footing_shape: FootingShape,

    /// True when every footing uses the same height
    pub similar_footings: bool,

    /// One entry per footing when not similar; ignored otherwise
    #[serde(default)]
    pub footing_overrides: Vec<FootingOverride>,
}

/// A fully validated and normalized input.
///
/// Heights are in meters and inside the allowed range;
/// `override_heights_m` carries one resolved effective height per footing
/// when footings are individually specified (empty in similar mode).
/// Produced only when every validation rule passes — validation never
/// partially normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub label: String,
    pub cleaning_length_m: f64,
    pub cleaning_width_m: f64,
    pub cleaning_height_m: f64,
    pub floors: u32,
    pub slab_area_m2: f64,
    pub soil_type: String,
    pub building_type: String,
    pub footing_height_m: f64,
    pub footing_count: usize,
    pub footing_shape: FootingShape,
    pub similar_footings: bool,
    pub override_heights_m: Vec<f64>,
}

/// Normalize a footing height to meters and enforce the allowed range.
///
/// A value above 5 is assumed to be centimeters and divided by 100; the
/// normalized value must lie in [0.40, 0.80] inclusive. The normalization
/// is idempotent: 0.5 and 50 both resolve to 0.5 m.
pub fn normalize_footing_height(value: f64, field: &str) -> CalcResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Footing height must be a positive number",
        ));
    }

    let height_m = if value > CM_DETECTION_THRESHOLD {
        Meters::from(Centimeters(value)).value()
    } else {
        value
    };

    if !(MIN_FOOTING_HEIGHT_M..=MAX_FOOTING_HEIGHT_M).contains(&height_m) {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!(
                "Footing height {height_m} m is outside the allowed range \
                 [{MIN_FOOTING_HEIGHT_M}, {MAX_FOOTING_HEIGHT_M}] m"
            ),
        ));
    }

    Ok(height_m)
}

impl FoundationInput {
    /// Validate and normalize the input.
    ///
    /// Every failure is collected and returned together so a caller can
    /// report all problems in one response.
    pub fn validate(&self) -> Result<NormalizedInput, Vec<CalcError>> {
        let mut errors = Vec::new();

        let mut require_positive = |field: &str, value: f64| {
            if !value.is_finite() || value <= 0.0 {
                errors.push(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a positive number",
                ));
            }
        };

        require_positive("cleaning_length_m", self.cleaning_length_m);
        require_positive("cleaning_width_m", self.cleaning_width_m);
        require_positive("cleaning_height_m", self.cleaning_height_m);
        require_positive("slab_area_m2", self.slab_area_m2);

        if self.floors == 0 {
            errors.push(CalcError::invalid_input(
                "floors",
                "0",
                "At least one floor is required",
            ));
        }

        if self.soil_type.trim().is_empty() {
            errors.push(CalcError::missing_field("soil_type"));
        }
        if self.building_type.trim().is_empty() {
            errors.push(CalcError::missing_field("building_type"));
        }

        let global_height = match normalize_footing_height(self.footing_height_m, "footing_height_m")
        {
            Ok(height) => Some(height),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        if self.footing_count == 0 {
            errors.push(CalcError::invalid_input(
                "footing_count",
                "0",
                "At least one footing is required",
            ));
        }

        let mut override_heights = Vec::new();
        if !self.similar_footings {
            if self.footing_overrides.is_empty() {
                errors.push(CalcError::missing_field("footing_overrides"));
            } else if self.footing_overrides.len() != self.footing_count {
                errors.push(CalcError::invalid_input(
                    "footing_overrides",
                    self.footing_overrides.len().to_string(),
                    format!(
                        "Override list length must equal footing_count ({})",
                        self.footing_count
                    ),
                ));
            }

            for (index, entry) in self.footing_overrides.iter().enumerate() {
                match entry.height {
                    Some(height) => {
                        let field = format!("footing_overrides[{index}].height");
                        match normalize_footing_height(height, &field) {
                            Ok(height) => override_heights.push(height),
                            Err(error) => errors.push(error),
                        }
                    }
                    None => {
                        if let Some(height) = global_height {
                            override_heights.push(height);
                        }
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NormalizedInput {
            label: self.label.clone(),
            cleaning_length_m: self.cleaning_length_m,
            cleaning_width_m: self.cleaning_width_m,
            cleaning_height_m: self.cleaning_height_m,
            floors: self.floors,
            slab_area_m2: self.slab_area_m2,
            soil_type: self.soil_type.trim().to_string(),
            building_type: self.building_type.trim().to_string(),
            footing_height_m: global_height.unwrap_or(self.footing_height_m),
            footing_count: self.footing_count,
            footing_shape: self.footing_shape,
            similar_footings: self.similar_footings,
            override_heights_m: override_heights,
        })
    }
}

/// Results from a foundation calculation.
///
/// Dimensions are rounded to 2 decimal places and volumes to 3 for
/// display; every value was derived at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationResult {
    /// Echo of the validated, normalized input
    pub input: NormalizedInput,

    /// Cleaning/blinding pour volume (m³)
    pub cleaning_volume_m3: f64,

    /// Resolved soil bearing capacity (kN/m²)
    pub bearing_capacity: BearingCapacity,

    /// Resolved dead/live/total loads (kN/m²)
    pub loads: ResolvedLoads,

    /// slab area × floors × total load (kN)
    pub total_building_load_kn: f64,

    /// Required total footing area (m²)
    pub total_footing_area_m2: f64,

    /// Required area of one footing (m²)
    pub area_per_footing_m2: f64,

    /// Footing length (m)
    pub footing_length_m: f64,

    /// Footing width (m)
    pub footing_width_m: f64,

    /// Footing concrete volumes with breakdown
    pub footing_volumes: FootingVolumes,

    /// One-line display summary of the two concrete quantities
    pub summary: String,
}

/// Run the full foundation calculation pipeline.
///
/// Sequences validation, cleaning-pour volume, reference resolution
/// (soil + loads, the only external reads), building load, footing
/// geometry, and footing volumes, then assembles the result. Any failure
/// aborts the pipeline and returns a [`CalcFailure`]; no partial result
/// is ever produced.
pub fn calculate(
    input: &FoundationInput,
    refdata: &dyn ReferenceData,
) -> Result<FoundationResult, CalcFailure> {
    let normalized = input.validate().map_err(CalcFailure::from_errors)?;

    let cleaning_volume_m3 = volume::cleaning_volume(
        normalized.cleaning_length_m,
        normalized.cleaning_width_m,
        normalized.cleaning_height_m,
    );

    let bearing_capacity = reference::resolve_soil(refdata, &normalized.soil_type)?;
    let loads = reference::resolve_loads(refdata, &normalized.building_type)?;

    let total_building_load_kn =
        normalized.slab_area_m2 * normalized.floors as f64 * loads.total_kn_m2;

    let footing_geometry = geometry::footing_dimensions(
        total_building_load_kn,
        bearing_capacity.value_kn_m2,
        normalized.footing_count,
        normalized.footing_shape,
    )?;

    let plan = volume::footing_plan(normalized.cleaning_length_m, normalized.cleaning_width_m)?;
    let footing_volumes = if normalized.similar_footings {
        volume::similar_footing_volumes(&plan, normalized.footing_height_m, normalized.footing_count)
    } else {
        volume::individual_footing_volumes(&plan, &normalized.override_heights_m)
    };

    let summary = format!(
        "Cleaning pour: {:.3} m³ | Footings: {:.3} m³ over {} footing(s)",
        round3(cleaning_volume_m3),
        footing_volumes.total_volume_m3,
        normalized.footing_count,
    );

    Ok(FoundationResult {
        input: normalized,
        cleaning_volume_m3: round3(cleaning_volume_m3),
        bearing_capacity,
        loads,
        total_building_load_kn,
        total_footing_area_m2: round2(footing_geometry.total_area_m2),
        area_per_footing_m2: round2(footing_geometry.area_per_footing_m2),
        footing_length_m: round2(footing_geometry.length_m),
        footing_width_m: round2(footing_geometry.width_m),
        footing_volumes,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::InMemoryReference;

    /// Soil averages 0.15 MPa (→ 150 kN/m²); residential loads total
    /// 8.0 kN/m² through the aggregate dead row plus the live row.
    fn fixture_refdata() -> InMemoryReference {
        InMemoryReference::new()
            .with_soil("medium clay", 0.1, 0.2)
            .with_live_load("residential", Some(2.0), Some(1.5), Some(2.0))
            .with_dead_load("residential", "total dead load", Some(6.0), None, None)
            .with_dead_load("residential", "concrete slab", Some(3.5), None, None)
    }

    fn scenario_input() -> FoundationInput {
        FoundationInput {
            label: "F-1".to_string(),
            cleaning_length_m: 6.2,
            cleaning_width_m: 6.2,
            cleaning_height_m: 0.1,
            floors: 2,
            slab_area_m2: 100.0,
            soil_type: "medium clay".to_string(),
            building_type: "residential".to_string(),
            footing_height_m: 0.5,
            footing_count: 4,
            footing_shape: FootingShape::Square,
            similar_footings: true,
            footing_overrides: vec![],
        }
    }

    #[test]
    fn test_scenario_similar_square_footings() {
        let result = calculate(&scenario_input(), &fixture_refdata()).unwrap();

        assert_eq!(result.cleaning_volume_m3, 3.844);
        assert!((result.bearing_capacity.value_kn_m2 - 150.0).abs() < 1e-9);
        assert!(result.bearing_capacity.converted_from_mpa);
        assert!((result.loads.total_kn_m2 - 8.0).abs() < 1e-9);
        assert!((result.total_building_load_kn - 1600.0).abs() < 1e-9);

        // plan = (6.2 - 0.2) × (6.2 - 0.2)
        assert!((result.footing_volumes.plan_length_m - 6.0).abs() < 1e-9);
        assert!((result.footing_volumes.plan_width_m - 6.0).abs() < 1e-9);
        assert_eq!(result.footing_volumes.single_footing_volume_m3, Some(18.0));
        assert_eq!(result.footing_volumes.total_volume_m3, 72.0);

        // square footing: length == width
        assert_eq!(result.footing_length_m, result.footing_width_m);
    }

    #[test]
    fn test_scenario_individual_heights() {
        let mut input = scenario_input();
        input.similar_footings = false;
        input.footing_overrides = [0.4, 0.5, 0.6, 0.7]
            .iter()
            .map(|&h| FootingOverride { height: Some(h) })
            .collect();

        let result = calculate(&input, &fixture_refdata()).unwrap();
        // 36 × (0.4 + 0.5 + 0.6 + 0.7)
        assert_eq!(result.footing_volumes.total_volume_m3, 79.2);
        assert_eq!(result.footing_volumes.breakdown.len(), 4);
        assert_eq!(result.footing_volumes.breakdown[2].height_m, 0.6);
        assert_eq!(result.footing_volumes.breakdown[2].volume_m3, 21.6);
    }

    #[test]
    fn test_scenario_missing_live_load_row() {
        let refdata = InMemoryReference::new().with_soil("medium clay", 0.1, 0.2).with_dead_load(
            "residential",
            "total dead load",
            Some(6.0),
            None,
            None,
        );

        let failure = calculate(&scenario_input(), &refdata).unwrap_err();
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].error_code(), "REFERENCE_NOT_FOUND");
        assert!(failure.message.contains("residential"));
    }

    #[test]
    fn test_scenario_height_in_centimeters() {
        let mut input = scenario_input();
        input.footing_height_m = 45.0;
        let result = calculate(&input, &fixture_refdata()).unwrap();
        assert_eq!(result.input.footing_height_m, 0.45);

        input.footing_height_m = 35.0;
        let failure = calculate(&input, &fixture_refdata()).unwrap_err();
        assert_eq!(failure.errors[0].error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_height_normalization_idempotent() {
        let a = normalize_footing_height(0.5, "footing_height_m").unwrap();
        let b = normalize_footing_height(50.0, "footing_height_m").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 0.5);

        assert!(normalize_footing_height(0.39, "footing_height_m").is_err());
        assert!(normalize_footing_height(0.81, "footing_height_m").is_err());
        assert!(normalize_footing_height(81.0, "footing_height_m").is_err());
        // boundaries are inclusive
        assert_eq!(normalize_footing_height(0.4, "h").unwrap(), 0.4);
        assert_eq!(normalize_footing_height(80.0, "h").unwrap(), 0.8);
    }

    #[test]
    fn test_validator_collects_all_failures() {
        let input = FoundationInput {
            label: "bad".to_string(),
            cleaning_length_m: 0.0,
            cleaning_width_m: -1.0,
            cleaning_height_m: 0.1,
            floors: 0,
            slab_area_m2: 100.0,
            soil_type: "  ".to_string(),
            building_type: "residential".to_string(),
            footing_height_m: 0.2,
            footing_count: 4,
            footing_shape: FootingShape::Square,
            similar_footings: true,
            footing_overrides: vec![],
        };

        let errors = input.validate().unwrap_err();
        // length, width, floors, soil_type, footing height range
        assert_eq!(errors.len(), 5);
        assert!(errors
            .iter()
            .any(|e| e.error_code() == "MISSING_FIELD"));
    }

    #[test]
    fn test_override_count_mismatch() {
        let mut input = scenario_input();
        input.similar_footings = false;
        input.footing_overrides = vec![FootingOverride { height: Some(0.5) }; 3];

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("footing_overrides"));
    }

    #[test]
    fn test_override_empty_list() {
        let mut input = scenario_input();
        input.similar_footings = false;

        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0], CalcError::missing_field("footing_overrides"));
    }

    #[test]
    fn test_override_height_falls_back_to_global() {
        let mut input = scenario_input();
        input.similar_footings = false;
        input.footing_overrides = vec![
            FootingOverride { height: Some(0.4) },
            FootingOverride { height: None },
            FootingOverride { height: Some(60.0) }, // cm
            FootingOverride { height: None },
        ];

        let normalized = input.validate().unwrap();
        assert_eq!(normalized.override_heights_m, vec![0.4, 0.5, 0.6, 0.5]);
    }

    #[test]
    fn test_override_height_out_of_range() {
        let mut input = scenario_input();
        input.similar_footings = false;
        input.footing_overrides = vec![
            FootingOverride { height: Some(0.5) },
            FootingOverride { height: Some(0.9) },
            FootingOverride { height: Some(0.5) },
            FootingOverride { height: Some(0.5) },
        ];

        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("footing_overrides[1]"));
    }

    #[test]
    fn test_rectangular_footing_result() {
        let mut input = scenario_input();
        input.footing_shape = FootingShape::Rectangular;

        let result = calculate(&input, &fixture_refdata()).unwrap();
        // 1.2 aspect ratio survives the 2 dp display rounding within a cent
        assert!((result.footing_length_m - result.footing_width_m * 1.2).abs() < 0.01);
    }

    #[test]
    fn test_no_partial_result_on_geometry_failure() {
        let mut input = scenario_input();
        input.cleaning_length_m = 0.15; // consumed by the 0.20 m setback

        let failure = calculate(&input, &fixture_refdata()).unwrap_err();
        assert_eq!(failure.errors[0].error_code(), "GEOMETRY_ERROR");
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&scenario_input(), &fixture_refdata()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: FoundationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_input_deserializes_without_overrides_field() {
        let json = r#"{
            "label": "F-2",
            "cleaning_length_m": 6.2,
            "cleaning_width_m": 6.2,
            "cleaning_height_m": 0.1,
            "floors": 2,
            "slab_area_m2": 100.0,
            "soil_type": "medium clay",
            "building_type": "residential",
            "footing_height_m": 0.5,
            "footing_count": 4,
            "footing_shape": "rectangle",
            "similar_footings": true
        }"#;
        let input: FoundationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.footing_shape, FootingShape::Rectangular);
        assert!(input.footing_overrides.is_empty());
    }
}
