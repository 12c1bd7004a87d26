//! # soapgen
//!
//! Code generation for SOAP web-service clients, with the XML marshaling
//! runtime the generated code links against.
//!
//! ## Features
//!
//! - **Deterministic output** - the same type model always renders the same text
//! - **Nested types** - records carry their own nested records and enumerations
//! - **Primitive marshaling** - text conversions for the XML Schema built-in types
//! - **Element tree** - parse, query and write XML elements for generated code
//!
//! ## Quick Start
//!
//! ```
//! use soapgen::prelude::*;
//!
//! let status: MetaType = EnumType::new("Status", PrimitiveKind::String)
//!     .with_case("active", "A")
//!     .with_case("inactive", "I")
//!     .into();
//!
//! let source = generate(&[status]);
//! assert!(source.contains("enum Status: String {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`runtime`] - Primitive conversions, registry, element tree, errors
//! - [`model`] - Abstract type model and validation
//! - [`codegen`] - Indentation, rendering and document assembly

pub mod prelude;

/// XML marshaling runtime.
pub mod runtime {
    pub use soapgen_runtime::*;
}

/// Abstract type model.
pub mod model {
    pub use soapgen_model::*;
}

/// Source emission.
pub mod codegen {
    pub use soapgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use soapgen_codegen::{Generator, GeneratorBuilder, generate, generate_validated};
pub use soapgen_model::{EnumType, MetaType, RecordType, TypeRef};
pub use soapgen_runtime::{MarshalingRegistry, PrimitiveKind, XmlElement};
