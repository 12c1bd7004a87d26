//! Error types for model validation.

use thiserror::Error;

/// Error type for type-model validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two properties of one record share a name.
    #[error("duplicate property '{property}' in record '{record}'")]
    DuplicateProperty {
        /// Record name.
        record: String,
        /// Property name.
        property: String,
    },

    /// Two types in one scope share a name.
    #[error("duplicate type '{name}' in {scope}")]
    DuplicateType {
        /// Scope description (`top level` or `record 'X'`).
        scope: String,
        /// Type name.
        name: String,
    },

    /// A type, property, case or type reference has an empty name.
    #[error("empty {kind} name in {context}")]
    EmptyName {
        /// Kind of name (type, property, case, etc.).
        kind: String,
        /// Where the empty name was found.
        context: String,
    },

    /// Nested types exceed the configured depth.
    #[error("type '{name}' is nested deeper than {max_depth} levels")]
    NestingTooDeep {
        /// Name of the first type past the limit.
        name: String,
        /// Configured maximum depth.
        max_depth: usize,
    },
}

impl ModelError {
    /// Creates a duplicate property error.
    pub fn duplicate_property(record: impl Into<String>, property: impl Into<String>) -> Self {
        Self::DuplicateProperty {
            record: record.into(),
            property: property.into(),
        }
    }

    /// Creates a duplicate type error.
    pub fn duplicate_type(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateType {
            scope: scope.into(),
            name: name.into(),
        }
    }

    /// Creates an empty name error.
    pub fn empty_name(kind: impl Into<String>, context: impl Into<String>) -> Self {
        Self::EmptyName {
            kind: kind.into(),
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ModelError::duplicate_property("Quote", "price").to_string(),
            "duplicate property 'price' in record 'Quote'"
        );
        assert_eq!(
            ModelError::duplicate_type("top level", "Quote").to_string(),
            "duplicate type 'Quote' in top level"
        );
        assert_eq!(
            ModelError::empty_name("case", "enum 'Status'").to_string(),
            "empty case name in enum 'Status'"
        );
        assert_eq!(
            ModelError::NestingTooDeep {
                name: "Inner".to_string(),
                max_depth: 2
            }
            .to_string(),
            "type 'Inner' is nested deeper than 2 levels"
        );
    }
}
