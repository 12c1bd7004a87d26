//! Name-based lookup of primitive conversions.
//!
//! Generated code resolves schema type names (`xsd:int`, `dateTime`, ...) or
//! generated type names (`Int32`, `Date`, ...) to a [`Conversion`] pair.

use crate::error::Result;
use crate::primitives::XmlText;
use crate::types::{PrimitiveKind, PrimitiveValue};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Parses node text into a dynamically typed value.
pub type DeserializeFn = fn(Option<&str>) -> Result<PrimitiveValue>;

/// Formats a dynamically typed value as node text.
pub type SerializeFn = fn(&PrimitiveValue) -> String;

/// Deserialize/serialize pair for one primitive kind.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    kind: PrimitiveKind,
    deserialize: DeserializeFn,
    serialize: SerializeFn,
}

fn decode<T>(text: Option<&str>) -> Result<PrimitiveValue>
where
    T: XmlText + Into<PrimitiveValue>,
{
    T::from_xml_text(text).map(Into::into)
}

impl Conversion {
    /// Returns the conversion for `kind`.
    #[must_use]
    pub fn for_kind(kind: PrimitiveKind) -> Self {
        let deserialize: DeserializeFn = match kind {
            PrimitiveKind::Int8 => decode::<i8>,
            PrimitiveKind::Int16 => decode::<i16>,
            PrimitiveKind::Int32 => decode::<i32>,
            PrimitiveKind::Int64 => decode::<i64>,
            PrimitiveKind::UInt8 => decode::<u8>,
            PrimitiveKind::UInt16 => decode::<u16>,
            PrimitiveKind::UInt32 => decode::<u32>,
            PrimitiveKind::UInt64 => decode::<u64>,
            PrimitiveKind::Bool => decode::<bool>,
            PrimitiveKind::Float => decode::<f32>,
            PrimitiveKind::Double => decode::<f64>,
            PrimitiveKind::Decimal => decode::<crate::decimal::XmlDecimal>,
            PrimitiveKind::String => decode::<String>,
            PrimitiveKind::Url => decode::<url::Url>,
            PrimitiveKind::Data => decode::<Vec<u8>>,
            PrimitiveKind::Date => decode::<chrono::DateTime<chrono::FixedOffset>>,
        };

        Self {
            kind,
            deserialize,
            serialize: PrimitiveValue::to_xml_text,
        }
    }

    /// Returns the kind handled by this conversion.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Parses node text into a value of this conversion's kind.
    ///
    /// # Errors
    /// Returns `CannotDeserialize` if the text is absent or malformed.
    pub fn deserialize(&self, text: Option<&str>) -> Result<PrimitiveValue> {
        (self.deserialize)(text)
    }

    /// Formats a value as node text.
    #[must_use]
    pub fn serialize(&self, value: &PrimitiveValue) -> String {
        (self.serialize)(value)
    }
}

/// Lookup table from type names to conversions.
///
/// Every kind is registered under its XML Schema name and its generated type
/// name. Lookups ignore a namespace prefix such as `xsd:`.
#[derive(Debug, Clone)]
pub struct MarshalingRegistry {
    conversions: HashMap<String, Conversion>,
}

impl MarshalingRegistry {
    /// Creates a registry holding every built-in kind.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            conversions: HashMap::with_capacity(PrimitiveKind::ALL.len() * 2),
        };
        for kind in PrimitiveKind::ALL {
            let conversion = Conversion::for_kind(kind);
            registry.register(kind.xsd_name(), conversion);
            registry.register(kind.type_name(), conversion);
        }
        registry
    }

    /// Returns a process-wide registry with the built-in kinds.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<MarshalingRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Registers `conversion` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, conversion: Conversion) {
        self.conversions.insert(name.into(), conversion);
    }

    /// Looks up the conversion registered for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Conversion> {
        let found = self
            .conversions
            .get(name)
            .or_else(|| {
                name.split_once(':')
                    .and_then(|(_, local)| self.conversions.get(local))
            })
            .copied();
        if found.is_none() {
            tracing::debug!("no primitive conversion registered for '{}'", name);
        }
        found
    }

    /// Returns the kind registered for `name`.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<PrimitiveKind> {
        self.lookup(name).map(|conversion| conversion.kind())
    }

    /// Returns all registered names in ascending order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.conversions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    /// Returns true if no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}

impl Default for MarshalingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
