//! # soapgen codegen
//!
//! Source emission from the abstract type model.
//!
//! This crate provides:
//! - An indentation engine threaded through rendering
//! - Record and raw-value enumeration rendering with name-sorted output
//! - Document assembly with a configurable preamble
//!
//! Output is a pure function of the model: the same set of types always
//! produces byte-identical text, whatever order the collections were filled in.

pub mod error;
pub mod generator;
pub mod indentation;
pub mod swift;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorBuilder, GeneratorConfig};
pub use indentation::Indentation;
pub use swift::ToLinesOfCode;

use soapgen_model::MetaType;

/// Renders a complete document with the default configuration.
///
/// The model is not validated; duplicate names are rendered as given.
#[must_use]
pub fn generate(types: &[MetaType]) -> String {
    Generator::default().generate(types)
}

/// Validates the model, then renders a complete document with the default
/// configuration.
///
/// # Errors
/// Returns `CodegenError::Model` if model validation fails.
pub fn generate_validated(types: &[MetaType]) -> Result<String, CodegenError> {
    Generator::default().generate_validated(types)
}
