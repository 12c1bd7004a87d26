//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use soapgen::prelude::*;
//! ```

// Runtime types
pub use soapgen_runtime::{
    Conversion, MarshalingRegistry, PrimitiveKind, PrimitiveValue, XmlDecimal,
    XmlDeserializable, XmlDeserializationError, XmlElement, XmlError, XmlSerializable,
    XmlSerializationError, XmlText,
};

// Model types
pub use soapgen_model::{
    EnumType, MetaType, ModelError, Property, RecordType, TypeRef, Validator, validate_types,
};

// Codegen types
pub use soapgen_codegen::{
    CodegenError, Generator, GeneratorBuilder, GeneratorConfig, Indentation, ToLinesOfCode,
    generate, generate_validated,
};
