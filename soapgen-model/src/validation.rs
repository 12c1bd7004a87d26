//! Type-model validation utilities.
//!
//! Rendering accepts any model. These checks are opt-in and catch models
//! that would produce code the target compiler rejects: duplicate names,
//! empty names and runaway nesting.

use crate::error::ModelError;
use crate::types::{EnumType, MetaType, RecordType, TypeRef};
use std::collections::HashSet;

/// Default maximum nesting depth. Top-level types are at depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Validates a list of top-level types with the default depth limit.
///
/// # Errors
/// Returns `ModelError` describing the first problem found.
pub fn validate_types(types: &[MetaType]) -> Result<(), ModelError> {
    Validator::new().validate(types)
}

/// Configurable model validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_depth: usize,
}

impl Validator {
    /// Creates a validator with [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validates a list of top-level types.
    ///
    /// # Errors
    /// Returns `ModelError` describing the first problem found.
    pub fn validate(&self, types: &[MetaType]) -> Result<(), ModelError> {
        tracing::debug!(
            "validating {} top-level types (max depth {})",
            types.len(),
            self.max_depth
        );
        check_unique_types("top level", types)?;
        for meta in types {
            self.validate_meta_type(meta, 1, "top level")?;
        }
        Ok(())
    }

    fn validate_meta_type(
        &self,
        meta: &MetaType,
        depth: usize,
        context: &str,
    ) -> Result<(), ModelError> {
        if meta.name().is_empty() {
            return Err(ModelError::empty_name("type", context));
        }
        if depth > self.max_depth {
            return Err(ModelError::NestingTooDeep {
                name: meta.name().to_string(),
                max_depth: self.max_depth,
            });
        }

        match meta {
            MetaType::Record(record) => self.validate_record(record, depth),
            MetaType::Enum(enum_type) => validate_enum(enum_type),
        }
    }

    fn validate_record(&self, record: &RecordType, depth: usize) -> Result<(), ModelError> {
        let context = format!("record '{}'", record.name);

        let mut seen = HashSet::new();
        for property in &record.properties {
            if property.name.is_empty() {
                return Err(ModelError::empty_name("property", &context));
            }
            if !seen.insert(property.name.as_str()) {
                return Err(ModelError::duplicate_property(
                    &record.name,
                    &property.name,
                ));
            }
            validate_type_ref(&property.type_ref, &context)?;
        }

        check_unique_types(&context, &record.nested_types)?;
        for nested in &record.nested_types {
            self.validate_meta_type(nested, depth + 1, &context)?;
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_enum(enum_type: &EnumType) -> Result<(), ModelError> {
    let context = format!("enum '{}'", enum_type.name);
    if enum_type.cases.keys().any(String::is_empty) {
        return Err(ModelError::empty_name("case", &context));
    }
    validate_type_ref(&enum_type.raw_type, &context)
}

fn validate_type_ref(type_ref: &TypeRef, context: &str) -> Result<(), ModelError> {
    if type_ref.base_name().is_empty() {
        return Err(ModelError::empty_name("type reference", context));
    }
    Ok(())
}

fn check_unique_types(scope: &str, types: &[MetaType]) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for meta in types {
        if !seen.insert(meta.name()) {
            return Err(ModelError::duplicate_type(scope, meta.name()));
        }
    }
    Ok(())
}
