//! Error types for XML marshaling.

use thiserror::Error;

/// Error raised while turning XML nodes into values.
///
/// Deserialization is all-or-nothing: a failure carries no partial value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlDeserializationError {
    /// A required child element is missing from a composite structure.
    #[error("no element with name '{0}'")]
    NoElementWithName(String),

    /// The node text is absent or does not match the expected grammar.
    #[error("cannot deserialize value")]
    CannotDeserialize,
}

/// Error raised while writing values into XML nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlSerializationError {
    /// A namespace declaration has an unusable prefix or URI.
    #[error("invalid namespace '{0}'")]
    InvalidNamespace(String),
}

/// Error type for reading and writing whole XML documents.
#[derive(Debug, Error)]
pub enum XmlError {
    /// XML syntax error reported by the reader or writer.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute in a start tag.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Malformed escape sequence in an attribute value.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// IO error while writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Writer produced bytes that are not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    /// Document structure cannot be represented as an element tree.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// Namespace error.
    #[error("serialization error: {0}")]
    Serialization(#[from] XmlSerializationError),
}

impl XmlError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// Result type alias for value deserialization.
pub type Result<T> = std::result::Result<T, XmlDeserializationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            XmlDeserializationError::NoElementWithName("Body".to_string()).to_string(),
            "no element with name 'Body'"
        );
        assert_eq!(
            XmlDeserializationError::CannotDeserialize.to_string(),
            "cannot deserialize value"
        );
        assert_eq!(
            XmlSerializationError::InvalidNamespace("soap:env".to_string()).to_string(),
            "invalid namespace 'soap:env'"
        );
    }

    #[test]
    fn test_invalid_structure_helper() {
        let err = XmlError::invalid_structure("no root element");
        assert!(err.to_string().contains("no root element"));
    }
}
