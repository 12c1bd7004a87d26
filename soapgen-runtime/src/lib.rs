//! # soapgen runtime
//!
//! XML marshaling support linked by code generated with soapgen.
//!
//! This crate provides:
//! - Text conversions for the primitive XML Schema kinds
//! - A name-based registry of those conversions
//! - A small XML element tree with child lookup by name
//! - Deserialization and serialization traits for generated types
//! - Error types shared by generated object-graph code

pub mod decimal;
pub mod decoder;
pub mod element;
pub mod encoder;
pub mod error;
pub mod primitives;
pub mod registry;
pub mod types;

pub use decimal::XmlDecimal;
pub use decoder::XmlDeserializable;
pub use element::XmlElement;
pub use encoder::XmlSerializable;
pub use error::{Result, XmlDeserializationError, XmlError, XmlSerializationError};
pub use primitives::XmlText;
pub use registry::{Conversion, MarshalingRegistry};
pub use types::{PrimitiveKind, PrimitiveValue};
