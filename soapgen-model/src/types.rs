//! Abstract type model definitions.
//!
//! This module contains the data structures describing generated types:
//! records with typed properties and nested types, and raw-value
//! enumerations. Collections are unordered; consumers that need a stable
//! order go through the `sorted_*` accessors.

use soapgen_runtime::PrimitiveKind;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Reference to a type from a property or an enumeration's raw type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeRef {
    /// Nominal reference by name.
    Identifier(String),
    /// The inner value may be absent.
    Optional(Box<TypeRef>),
    /// Zero or more inner values.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a nominal reference.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Wraps this reference as optional.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Wraps this reference as an array.
    #[must_use]
    pub fn array(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Returns the innermost identifier.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Identifier(name) => name,
            Self::Optional(inner) | Self::Array(inner) => inner.base_name(),
        }
    }

    /// Returns true if the outermost wrapper is optional.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Returns true if the outermost wrapper is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl From<PrimitiveKind> for TypeRef {
    fn from(kind: PrimitiveKind) -> Self {
        Self::identifier(kind.type_name())
    }
}

/// Typed property of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Property {
    /// Property name, unique within its record.
    pub name: String,
    /// Property type.
    pub type_ref: TypeRef,
}

impl Property {
    /// Creates a new property.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
        }
    }
}

/// Record type with properties and nested types.
///
/// The order of `properties` and `nested_types` carries no meaning. Property
/// names are expected to be unique; this is not enforced here (see
/// [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordType {
    /// Type name.
    pub name: String,
    /// Properties, unordered.
    pub properties: Vec<Property>,
    /// Nested types, unordered.
    pub nested_types: Vec<MetaType>,
}

impl RecordType {
    /// Creates an empty record type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    /// Adds a property and returns the record.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        self.add_property(Property::new(name, type_ref));
        self
    }

    /// Adds a nested type and returns the record.
    #[must_use]
    pub fn with_nested_type(mut self, nested: impl Into<MetaType>) -> Self {
        self.add_nested_type(nested);
        self
    }

    /// Adds a property.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Adds a nested type.
    pub fn add_nested_type(&mut self, nested: impl Into<MetaType>) {
        self.nested_types.push(nested.into());
    }

    /// Returns the properties in ascending name order.
    ///
    /// Names compare byte-wise; equal names fall back to the type so the
    /// order never depends on storage order.
    #[must_use]
    pub fn sorted_properties(&self) -> Vec<&Property> {
        let mut properties: Vec<&Property> = self.properties.iter().collect();
        properties.sort();
        properties
    }

    /// Returns the nested types in ascending name order.
    ///
    /// Types sharing a name are ordered by [`MetaType::canonical_cmp`].
    #[must_use]
    pub fn sorted_nested_types(&self) -> Vec<&MetaType> {
        sorted_by_name(&self.nested_types)
    }

    fn content_cmp(&self, other: &Self) -> Ordering {
        self.sorted_properties()
            .cmp(&other.sorted_properties())
            .then_with(|| {
                cmp_type_lists(&self.sorted_nested_types(), &other.sorted_nested_types())
            })
    }
}

/// Enumeration whose cases are backed by raw literal values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Declared type of the raw values.
    pub raw_type: TypeRef,
    /// Case name to raw literal, unordered.
    pub cases: HashMap<String, String>,
}

impl EnumType {
    /// Creates an enumeration without cases.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            cases: HashMap::new(),
        }
    }

    /// Adds a case and returns the enumeration.
    #[must_use]
    pub fn with_case(mut self, name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        self.add_case(name, raw_value);
        self
    }

    /// Adds a case, replacing any case with the same name.
    pub fn add_case(&mut self, name: impl Into<String>, raw_value: impl Into<String>) {
        self.cases.insert(name.into(), raw_value.into());
    }

    /// Returns `(name, raw value)` pairs in ascending name order.
    #[must_use]
    pub fn sorted_cases(&self) -> Vec<(&str, &str)> {
        let mut cases: Vec<(&str, &str)> = self
            .cases
            .iter()
            .map(|(name, raw)| (name.as_str(), raw.as_str()))
            .collect();
        cases.sort_unstable_by(|lhs, rhs| lhs.0.cmp(rhs.0));
        cases
    }

    fn content_cmp(&self, other: &Self) -> Ordering {
        self.raw_type
            .cmp(&other.raw_type)
            .then_with(|| self.sorted_cases().cmp(&other.sorted_cases()))
    }
}

/// A generated type: record or enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaType {
    /// Record type.
    Record(RecordType),
    /// Raw-value enumeration.
    Enum(EnumType),
}

impl MetaType {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Record(r) => &r.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// Returns the nested types (always empty for enumerations).
    #[must_use]
    pub fn nested_types(&self) -> &[MetaType] {
        match self {
            Self::Record(r) => &r.nested_types,
            Self::Enum(_) => &[],
        }
    }

    /// Returns true if this is a record type.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns true if this is an enumeration.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns the record, if this is one.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            Self::Record(r) => Some(r),
            Self::Enum(_) => None,
        }
    }

    /// Returns the enumeration, if this is one.
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Record(_) => None,
        }
    }

    /// Orders by name, then enumerations before records, then by content.
    ///
    /// Content compares the name-sorted views, so two types that render
    /// differently never compare equal and storage order never matters.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| match (self, other) {
                (Self::Enum(lhs), Self::Enum(rhs)) => lhs.content_cmp(rhs),
                (Self::Record(lhs), Self::Record(rhs)) => lhs.content_cmp(rhs),
                (Self::Enum(_), Self::Record(_)) => Ordering::Less,
                (Self::Record(_), Self::Enum(_)) => Ordering::Greater,
            })
    }
}

fn cmp_type_lists(lhs: &[&MetaType], rhs: &[&MetaType]) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .map(|(l, r)| l.canonical_cmp(r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| lhs.len().cmp(&rhs.len()))
}

impl From<RecordType> for MetaType {
    fn from(record: RecordType) -> Self {
        Self::Record(record)
    }
}

impl From<EnumType> for MetaType {
    fn from(enum_type: EnumType) -> Self {
        Self::Enum(enum_type)
    }
}

/// Returns `types` in ascending name order.
///
/// Types sharing a name are ordered by [`MetaType::canonical_cmp`].
#[must_use]
pub fn sorted_by_name(types: &[MetaType]) -> Vec<&MetaType> {
    let mut sorted: Vec<&MetaType> = types.iter().collect();
    sorted.sort_by(|lhs, rhs| lhs.canonical_cmp(rhs));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_builders() {
        let t = TypeRef::identifier("Int32").optional().array();
        assert_eq!(
            t,
            TypeRef::Array(Box::new(TypeRef::Optional(Box::new(TypeRef::Identifier(
                "Int32".to_string()
            )))))
        );
        assert_eq!(t.base_name(), "Int32");
        assert!(t.is_array());
        assert!(!t.is_optional());
    }

    #[test]
    fn test_type_ref_from_primitive() {
        assert_eq!(TypeRef::from(PrimitiveKind::Date), TypeRef::identifier("Date"));
        assert_eq!(TypeRef::from(PrimitiveKind::Url).base_name(), "URL");
    }

    #[test]
    fn test_sorted_properties() {
        let record = RecordType::new("Quote")
            .with_property("z", PrimitiveKind::Int32)
            .with_property("a", PrimitiveKind::String)
            .with_property("m", PrimitiveKind::Bool);

        let names: Vec<&str> = record
            .sorted_properties()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["a", "m", "z"]);
    }

    #[test]
    fn test_sorted_properties_is_byte_ordinal() {
        let record = RecordType::new("R")
            .with_property("b", PrimitiveKind::Int8)
            .with_property("B", PrimitiveKind::Int8)
            .with_property("_a", PrimitiveKind::Int8);

        let names: Vec<&str> = record
            .sorted_properties()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["B", "_a", "b"]);
    }

    #[test]
    fn test_sorted_nested_types() {
        let record = RecordType::new("Outer")
            .with_nested_type(RecordType::new("Zeta"))
            .with_nested_type(EnumType::new("Alpha", PrimitiveKind::String));

        let names: Vec<&str> = record
            .sorted_nested_types()
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(names, ["Alpha", "Zeta"]);
    }

    #[test]
    fn test_sorted_cases() {
        let status = EnumType::new("Status", PrimitiveKind::String)
            .with_case("inactive", "I")
            .with_case("active", "A")
            .with_case("pending", "P");

        assert_eq!(
            status.sorted_cases(),
            vec![("active", "A"), ("inactive", "I"), ("pending", "P")]
        );
    }

    #[test]
    fn test_add_case_replaces() {
        let mut status = EnumType::new("Status", PrimitiveKind::String);
        status.add_case("active", "A");
        status.add_case("active", "Y");
        assert_eq!(status.sorted_cases(), vec![("active", "Y")]);
    }

    #[test]
    fn test_meta_type_accessors() {
        let record: MetaType = RecordType::new("Outer")
            .with_nested_type(RecordType::new("Inner"))
            .into();
        assert!(record.is_record());
        assert_eq!(record.name(), "Outer");
        assert_eq!(record.nested_types().len(), 1);
        assert!(record.as_enum().is_none());

        let enumeration: MetaType = EnumType::new("Kind", PrimitiveKind::Int32).into();
        assert!(enumeration.is_enum());
        assert!(enumeration.nested_types().is_empty());
        assert_eq!(enumeration.as_enum().map(|e| e.name.as_str()), Some("Kind"));
    }

    #[test]
    fn test_same_name_types_sort_by_content() {
        let int_record: MetaType = RecordType::new("Dup")
            .with_property("a", PrimitiveKind::Int32)
            .into();
        let string_record: MetaType = RecordType::new("Dup")
            .with_property("b", PrimitiveKind::String)
            .into();
        let enumeration: MetaType = EnumType::new("Dup", PrimitiveKind::String).into();

        let forward = vec![int_record.clone(), string_record.clone(), enumeration.clone()];
        let backward = vec![enumeration, string_record, int_record];
        assert_eq!(sorted_by_name(&forward), sorted_by_name(&backward));
        assert!(sorted_by_name(&forward)[0].is_enum());
        assert_eq!(
            sorted_by_name(&forward)[1]
                .as_record()
                .map(|r| r.properties[0].name.as_str()),
            Some("a")
        );

        let outer_forward = RecordType {
            name: "Outer".to_string(),
            properties: Vec::new(),
            nested_types: forward.clone(),
        };
        let outer_backward = RecordType {
            name: "Outer".to_string(),
            properties: Vec::new(),
            nested_types: forward.into_iter().rev().collect(),
        };
        assert_eq!(
            outer_forward.sorted_nested_types(),
            outer_backward.sorted_nested_types()
        );
    }

    #[test]
    fn test_canonical_cmp_ignores_storage_order() {
        let lhs: MetaType = EnumType::new("E", PrimitiveKind::String)
            .with_case("x", "1")
            .with_case("y", "2")
            .into();
        let rhs: MetaType = EnumType::new("E", PrimitiveKind::String)
            .with_case("y", "2")
            .with_case("x", "1")
            .into();
        assert_eq!(lhs.canonical_cmp(&rhs), Ordering::Equal);

        let other: MetaType = EnumType::new("E", PrimitiveKind::String)
            .with_case("x", "9")
            .into();
        assert_ne!(lhs.canonical_cmp(&other), Ordering::Equal);
        assert_eq!(lhs.canonical_cmp(&other), other.canonical_cmp(&lhs).reverse());
    }

    #[test]
    fn test_sorted_by_name() {
        let types: Vec<MetaType> = vec![
            RecordType::new("b").into(),
            EnumType::new("a", PrimitiveKind::String).into(),
            RecordType::new("c").into(),
        ];
        let names: Vec<&str> = sorted_by_name(&types).iter().map(|t| t.name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
