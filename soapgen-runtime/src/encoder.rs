//! Serialization traits for XML values.
//!
//! This module provides the [`XmlSerializable`] trait implemented by every
//! type that generated client code writes into an [`XmlElement`].

use crate::element::XmlElement;
use crate::error::XmlSerializationError;
use crate::primitives::XmlText;

/// Trait for values that can be written into an XML element.
///
/// # Example
/// ```ignore
/// // Generated record serializer
/// impl XmlSerializable for Quote {
///     fn serialize(&self, element: &mut XmlElement) -> Result<(), XmlSerializationError> {
///         element.append_child_value("symbol", &self.symbol)?;
///         Ok(())
///     }
/// }
/// ```
pub trait XmlSerializable {
    /// Writes `self` into `element`.
    ///
    /// Primitive kinds never fail; composite values may reject namespaces.
    ///
    /// # Errors
    /// Returns `XmlSerializationError` if the element cannot be written.
    fn serialize(&self, element: &mut XmlElement) -> Result<(), XmlSerializationError>;
}

impl<T: XmlText> XmlSerializable for T {
    fn serialize(&self, element: &mut XmlElement) -> Result<(), XmlSerializationError> {
        element.set_text(self.to_xml_text());
        Ok(())
    }
}

impl XmlSerializable for str {
    fn serialize(&self, element: &mut XmlElement) -> Result<(), XmlSerializationError> {
        element.set_text(self);
        Ok(())
    }
}
