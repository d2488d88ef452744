//! # Footing Geometry
//!
//! Converts a required footing area into per-footing plan dimensions.
//!
//! The required total area follows directly from soil mechanics: the
//! building load divided by the soil's allowable bearing capacity. Square
//! footings take the square root of the per-footing share; rectangular
//! footings assume a fixed 1.2 length-to-width aspect ratio.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::calculations::geometry::{footing_dimensions, FootingShape};
//!
//! let geometry = footing_dimensions(1600.0, 150.0, 4, FootingShape::Square).unwrap();
//! assert!((geometry.length_m - geometry.width_m).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Fixed length-to-width ratio assumed for rectangular footings.
/// A design constant, not user-configurable.
pub const RECTANGULAR_ASPECT_RATIO: f64 = 1.2;

/// Footing plan shape.
///
/// `rectangle` is accepted as a synonym of `rectangular` in JSON input;
/// both spellings canonicalize to [`FootingShape::Rectangular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootingShape {
    /// Equal length and width
    Square,
    /// Length = 1.2 × width
    #[serde(alias = "rectangle")]
    Rectangular,
}

impl FootingShape {
    /// All shape variants for UI selection
    pub const ALL: [FootingShape; 2] = [FootingShape::Square, FootingShape::Rectangular];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(FootingShape::Square),
            "rectangular" | "rectangle" => Ok(FootingShape::Rectangular),
            _ => Err(CalcError::invalid_input(
                "footing_shape",
                s,
                "Expected 'square' or 'rectangular'",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FootingShape::Square => "Square",
            FootingShape::Rectangular => "Rectangular",
        }
    }
}

impl std::fmt::Display for FootingShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Footing areas and dimensions, full precision.
///
/// Display rounding is applied only when the final result is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingGeometry {
    /// Required total footing area (m²)
    pub total_area_m2: f64,

    /// Area share of one footing (m²)
    pub area_per_footing_m2: f64,

    /// Footing length (m)
    pub length_m: f64,

    /// Footing width (m)
    pub width_m: f64,
}

/// Size footings for a building load on a given soil.
///
/// `total_building_load_kn` is slab area × floors × total load intensity.
/// Fails with a geometry error when the per-footing area comes out
/// non-finite or non-positive (zero or negative bearing capacity).
pub fn footing_dimensions(
    total_building_load_kn: f64,
    bearing_capacity_kn_m2: f64,
    footing_count: usize,
    shape: FootingShape,
) -> CalcResult<FootingGeometry> {
    let total_area_m2 = total_building_load_kn / bearing_capacity_kn_m2;
    let area_per_footing_m2 = total_area_m2 / footing_count as f64;

    if !area_per_footing_m2.is_finite() || area_per_footing_m2 <= 0.0 {
        return Err(CalcError::geometry(
            "area_per_footing_m2",
            format!(
                "Per-footing area {area_per_footing_m2} is not a positive finite number \
                 (building load {total_building_load_kn} kN over bearing capacity \
                 {bearing_capacity_kn_m2} kN/m²)"
            ),
        ));
    }

    let (length_m, width_m) = match shape {
        FootingShape::Square => {
            let side = area_per_footing_m2.sqrt();
            (side, side)
        }
        FootingShape::Rectangular => {
            let width = (area_per_footing_m2 / RECTANGULAR_ASPECT_RATIO).sqrt();
            (width * RECTANGULAR_ASPECT_RATIO, width)
        }
    };

    Ok(FootingGeometry {
        total_area_m2,
        area_per_footing_m2,
        length_m,
        width_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_footing() {
        let geometry = footing_dimensions(1600.0, 150.0, 4, FootingShape::Square).unwrap();
        assert!((geometry.total_area_m2 - 10.666666666666666).abs() < 1e-9);
        assert!((geometry.area_per_footing_m2 - 2.6666666666666665).abs() < 1e-9);
        assert_eq!(geometry.length_m, geometry.width_m);
        assert!((geometry.length_m * geometry.width_m - geometry.area_per_footing_m2).abs() < 1e-9);
    }

    #[test]
    fn test_rectangular_footing_aspect_ratio() {
        let geometry = footing_dimensions(1600.0, 150.0, 4, FootingShape::Rectangular).unwrap();
        assert!((geometry.length_m - geometry.width_m * RECTANGULAR_ASPECT_RATIO).abs() < 1e-9);
        assert!((geometry.length_m * geometry.width_m - geometry.area_per_footing_m2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_bearing_capacity_fails() {
        let err = footing_dimensions(1600.0, 0.0, 4, FootingShape::Square).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_ERROR");
    }

    #[test]
    fn test_negative_load_fails() {
        assert!(footing_dimensions(-100.0, 150.0, 4, FootingShape::Square).is_err());
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!(
            FootingShape::from_str_flexible("square").unwrap(),
            FootingShape::Square
        );
        assert_eq!(
            FootingShape::from_str_flexible("Rectangular").unwrap(),
            FootingShape::Rectangular
        );
        // legacy synonym
        assert_eq!(
            FootingShape::from_str_flexible("rectangle").unwrap(),
            FootingShape::Rectangular
        );
        assert!(FootingShape::from_str_flexible("circular").is_err());
    }

    #[test]
    fn test_shape_serde_alias() {
        let shape: FootingShape = serde_json::from_str("\"rectangle\"").unwrap();
        assert_eq!(shape, FootingShape::Rectangular);

        let json = serde_json::to_string(&FootingShape::Rectangular).unwrap();
        assert_eq!(json, "\"rectangular\"");
    }
}
