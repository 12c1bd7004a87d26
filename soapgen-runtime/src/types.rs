//! Primitive kinds and dynamically typed primitive values.
//!
//! This module maps XML Schema built-in types to the type names used in
//! generated code and to the Rust types that carry their values.

use crate::decimal::XmlDecimal;
use crate::error::Result;
use crate::primitives::XmlText;
use crate::registry::Conversion;
use chrono::{DateTime, FixedOffset};
use url::Url;

/// Primitive kinds supported by the marshaling runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Boolean.
    Bool,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Text.
    String,
    /// Absolute URI.
    Url,
    /// Binary blob (base64 on the wire).
    Data,
    /// Timestamp with a UTC offset.
    Date,
}

impl PrimitiveKind {
    /// Every supported kind.
    pub const ALL: [Self; 16] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Bool,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::String,
        Self::Url,
        Self::Data,
        Self::Date,
    ];

    /// Returns the type name emitted in generated code.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Url => "URL",
            Self::Data => "Data",
            Self::Date => "Date",
        }
    }

    /// Returns the XML Schema built-in type name (without prefix).
    #[must_use]
    pub const fn xsd_name(&self) -> &'static str {
        match self {
            Self::Int8 => "byte",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::UInt8 => "unsignedByte",
            Self::UInt16 => "unsignedShort",
            Self::UInt32 => "unsignedInt",
            Self::UInt64 => "unsignedLong",
            Self::Bool => "boolean",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Url => "anyURI",
            Self::Data => "base64Binary",
            Self::Date => "dateTime",
        }
    }

    /// Parses a kind from its XML Schema name (without prefix).
    #[must_use]
    pub fn from_xsd_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.xsd_name() == name)
    }

    /// Parses a kind from its generated-code type name.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// Returns true if this is a signed integer kind.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true if this is an unsigned integer kind.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64
        )
    }

    /// Returns true if this is a floating point kind.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A value of any primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Boolean.
    Bool(bool),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Arbitrary-precision decimal.
    Decimal(XmlDecimal),
    /// Text.
    String(String),
    /// Absolute URI.
    Url(Url),
    /// Binary blob.
    Data(Vec<u8>),
    /// Timestamp with a UTC offset.
    Date(DateTime<FixedOffset>),
}

impl PrimitiveValue {
    /// Parses node text as a value of `kind`.
    ///
    /// # Errors
    /// Returns `CannotDeserialize` if the text is absent or malformed.
    pub fn from_xml_text(kind: PrimitiveKind, text: Option<&str>) -> Result<Self> {
        Conversion::for_kind(kind).deserialize(text)
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Int8(_) => PrimitiveKind::Int8,
            Self::Int16(_) => PrimitiveKind::Int16,
            Self::Int32(_) => PrimitiveKind::Int32,
            Self::Int64(_) => PrimitiveKind::Int64,
            Self::UInt8(_) => PrimitiveKind::UInt8,
            Self::UInt16(_) => PrimitiveKind::UInt16,
            Self::UInt32(_) => PrimitiveKind::UInt32,
            Self::UInt64(_) => PrimitiveKind::UInt64,
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Float(_) => PrimitiveKind::Float,
            Self::Double(_) => PrimitiveKind::Double,
            Self::Decimal(_) => PrimitiveKind::Decimal,
            Self::String(_) => PrimitiveKind::String,
            Self::Url(_) => PrimitiveKind::Url,
            Self::Data(_) => PrimitiveKind::Data,
            Self::Date(_) => PrimitiveKind::Date,
        }
    }

    /// Formats the value as node text.
    #[must_use]
    pub fn to_xml_text(&self) -> String {
        match self {
            Self::Int8(v) => v.to_xml_text(),
            Self::Int16(v) => v.to_xml_text(),
            Self::Int32(v) => v.to_xml_text(),
            Self::Int64(v) => v.to_xml_text(),
            Self::UInt8(v) => v.to_xml_text(),
            Self::UInt16(v) => v.to_xml_text(),
            Self::UInt32(v) => v.to_xml_text(),
            Self::UInt64(v) => v.to_xml_text(),
            Self::Bool(v) => v.to_xml_text(),
            Self::Float(v) => v.to_xml_text(),
            Self::Double(v) => v.to_xml_text(),
            Self::Decimal(v) => v.to_xml_text(),
            Self::String(v) => v.to_xml_text(),
            Self::Url(v) => v.to_xml_text(),
            Self::Data(v) => v.to_xml_text(),
            Self::Date(v) => v.to_xml_text(),
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PrimitiveValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_value!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    bool => Bool,
    f32 => Float,
    f64 => Double,
    XmlDecimal => Decimal,
    String => String,
    Url => Url,
    Vec<u8> => Data,
    DateTime<FixedOffset> => Date,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_unique() {
        let mut type_names: Vec<_> = PrimitiveKind::ALL.iter().map(|k| k.type_name()).collect();
        type_names.sort_unstable();
        type_names.dedup();
        assert_eq!(type_names.len(), PrimitiveKind::ALL.len());

        let mut xsd_names: Vec<_> = PrimitiveKind::ALL.iter().map(|k| k.xsd_name()).collect();
        xsd_names.sort_unstable();
        xsd_names.dedup();
        assert_eq!(xsd_names.len(), PrimitiveKind::ALL.len());
    }

    #[test]
    fn test_kind_from_names() {
        assert_eq!(
            PrimitiveKind::from_xsd_name("unsignedShort"),
            Some(PrimitiveKind::UInt16)
        );
        assert_eq!(
            PrimitiveKind::from_type_name("Date"),
            Some(PrimitiveKind::Date)
        );
        assert_eq!(PrimitiveKind::from_xsd_name("anyType"), None);
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_xsd_name(kind.xsd_name()), Some(kind));
            assert_eq!(PrimitiveKind::from_type_name(kind.type_name()), Some(kind));
        }
    }

    #[test]
    fn test_kind_classification() {
        assert!(PrimitiveKind::Int64.is_signed());
        assert!(!PrimitiveKind::UInt64.is_signed());
        assert!(PrimitiveKind::UInt8.is_unsigned());
        assert!(PrimitiveKind::Double.is_float());
        assert!(!PrimitiveKind::Decimal.is_float());
        assert_eq!(PrimitiveKind::Url.to_string(), "URL");
    }

    #[test]
    fn test_value_kind_matches_conversion() {
        let values: Vec<PrimitiveValue> = vec![
            i8::MIN.into(),
            i16::MAX.into(),
            (-7i32).into(),
            i64::MAX.into(),
            u8::MAX.into(),
            u16::MAX.into(),
            u32::MAX.into(),
            u64::MAX.into(),
            true.into(),
            1.25f32.into(),
            (-2.5f64).into(),
            "3.14159".parse::<XmlDecimal>().unwrap().into(),
            "text".to_string().into(),
            Url::parse("urn:example:service").unwrap().into(),
            vec![1u8, 2, 3].into(),
            DateTime::parse_from_rfc3339("2021-06-01T12:00:00+09:00")
                .unwrap()
                .into(),
        ];

        assert_eq!(values.len(), PrimitiveKind::ALL.len());
        for value in values {
            let text = value.to_xml_text();
            let parsed = PrimitiveValue::from_xml_text(value.kind(), Some(&text)).unwrap();
            assert_eq!(parsed, value, "kind {}", value.kind());
        }
    }
}
