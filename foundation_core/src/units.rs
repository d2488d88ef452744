//! # Unit Types
//!
//! Type-safe wrappers for the metric units the engine works in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Foundation sizing uses a small, consistent set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! - Length: meters (m), centimeters (cm)
//! - Area: square meters (m²)
//! - Volume: cubic meters (m³)
//! - Force: kilonewtons (kN)
//! - Pressure / load intensity: kilonewtons per square meter (kN/m²),
//!   megapascals (MPa); 1 MPa = 1000 kN/m²
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::units::{Meters, Centimeters, Megapascals, KnPerSqM};
//!
//! let height = Centimeters(50.0);
//! let height_m: Meters = height.into();
//! assert_eq!(height_m.0, 0.5);
//!
//! let capacity = Megapascals(0.15);
//! let capacity_kn: KnPerSqM = capacity.into();
//! assert_eq!(capacity_kn.0, 150.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

// ============================================================================
// Force and Pressure Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Pressure / load intensity in kilonewtons per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSqM(pub f64);

/// Pressure in megapascals (1 MPa = 1000 kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Megapascals> for KnPerSqM {
    fn from(mpa: Megapascals) -> Self {
        KnPerSqM(mpa.0 * 1000.0)
    }
}

impl From<KnPerSqM> for Megapascals {
    fn from(kn: KnPerSqM) -> Self {
        Megapascals(kn.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(KnPerSqM);
impl_arithmetic!(Megapascals);

// ============================================================================
// Display Rounding
// ============================================================================

/// Round to 2 decimal places (footing dimensions for display)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (reported concrete volumes)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
