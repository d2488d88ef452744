//! # Foundation Calculations
//!
//! The calculation family follows one pattern throughout:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, refdata) -> Result<*Result, CalcFailure>` - Pure pipeline
//!
//! ## Modules
//!
//! - [`foundation`] - Input validation and the full calculation pipeline
//! - [`geometry`] - Footing area and plan dimensions from load and soil capacity
//! - [`volume`] - Cleaning-pour and footing concrete volumes

pub mod foundation;
pub mod geometry;
pub mod volume;

// Re-export commonly used types
pub use foundation::{calculate, FootingOverride, FoundationInput, FoundationResult, NormalizedInput};
pub use geometry::{footing_dimensions, FootingGeometry, FootingShape};
pub use volume::{FootingPlan, FootingVolumeEntry, FootingVolumes};
