//! # soapgen model
//!
//! Abstract type model consumed by the code generator.
//!
//! This crate provides:
//! - Type references with optional and array wrappers
//! - Record and raw-value enumeration types with nested types
//! - Name-sorted views over the model's unordered collections
//! - Opt-in model validation

pub mod error;
pub mod types;
pub mod validation;

pub use error::ModelError;
pub use types::{EnumType, MetaType, Property, RecordType, TypeRef, sorted_by_name};
pub use validation::{DEFAULT_MAX_DEPTH, Validator, validate_types};
