//! Deserialization traits for XML values.
//!
//! This module provides the [`XmlDeserializable`] trait implemented by every
//! type that generated client code reads from an [`XmlElement`].

use crate::element::XmlElement;
use crate::error::XmlDeserializationError;
use crate::primitives::XmlText;

/// Trait for values that can be read from an XML element.
///
/// Primitive kinds get an implementation through [`XmlText`]; generated
/// record types implement it by looking up their children.
///
/// # Example
/// ```ignore
/// // Generated record deserializer
/// impl XmlDeserializable for Quote {
///     fn deserialize(element: &XmlElement) -> Result<Self, XmlDeserializationError> {
///         Ok(Self {
///             symbol: element.deserialize_child("symbol")?,
///             price: element.deserialize_optional_child("price")?,
///         })
///     }
/// }
/// ```
pub trait XmlDeserializable: Sized {
    /// Reads a value from `element`.
    ///
    /// # Errors
    /// Returns `CannotDeserialize` for malformed or absent text and
    /// `NoElementWithName` for missing required children.
    fn deserialize(element: &XmlElement) -> Result<Self, XmlDeserializationError>;
}

impl<T: XmlText> XmlDeserializable for T {
    fn deserialize(element: &XmlElement) -> Result<Self, XmlDeserializationError> {
        T::from_xml_text(element.text())
    }
}
