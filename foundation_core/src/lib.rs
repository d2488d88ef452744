//! # foundation_core - Foundation Quantity Calculation Engine
//!
//! `foundation_core` computes footing dimensions and concrete quantities for
//! building construction: given soil, load, and geometric inputs plus a
//! reference dataset of soil bearing capacities and dead/live load tables,
//! it derives the required footing area, footing length/width, and the
//! concrete volumes for the cleaning/blinding pour and the footings.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure pipeline that takes input and returns a result
//! - **JSON-First**: All inputs, results, and errors implement Serialize/Deserialize
//! - **Ports over tables**: Reference data is read through an injected
//!   read-only port, never a live database handle
//! - **Errors as values**: Failures are structured and field-addressed, and
//!   validation reports every problem in one pass
//!
//! ## Quick Start
//!
//! ```rust
//! use foundation_core::{calculate, FoundationInput, FootingShape};
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
//! println!("{}", result.summary);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Validation, geometry, volumes, and the pipeline
//! - [`reference`] - Reference-data rows, resolution rules, and the port trait
//! - [`units`] - Type-safe metric unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod reference;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, FootingOverride, FootingShape, FoundationInput, FoundationResult};
pub use errors::{CalcError, CalcFailure, CalcResult};
pub use reference::{InMemoryReference, ReferenceData};
