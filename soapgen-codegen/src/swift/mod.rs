//! Swift source emission for the type model.

pub mod enums;
pub mod records;
pub mod types;

pub use types::render_type_ref;

use crate::indentation::Indentation;
use soapgen_model::MetaType;

/// Keyword opening a record declaration.
pub const RECORD_KEYWORD: &str = "class";
/// Keyword opening a stored property.
pub const FIELD_KEYWORD: &str = "let";
/// Keyword opening an enumeration declaration.
pub const ENUM_KEYWORD: &str = "enum";
/// Keyword opening an enumeration case.
pub const CASE_KEYWORD: &str = "case";

/// Renders a model element as lines of source code.
pub trait ToLinesOfCode {
    /// Returns the element's lines, each already indented.
    fn to_lines_of_code(&self, indentation: &Indentation) -> Vec<String>;

    /// Renders at level 0 with `unit` and joins the lines with `\n`.
    fn to_code(&self, unit: &str) -> String {
        self.to_lines_of_code(&Indentation::new(unit)).join("\n")
    }
}

impl ToLinesOfCode for MetaType {
    fn to_lines_of_code(&self, indentation: &Indentation) -> Vec<String> {
        match self {
            Self::Record(record) => record.to_lines_of_code(indentation),
            Self::Enum(enum_type) => enum_type.to_lines_of_code(indentation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soapgen_model::{EnumType, RecordType};
    use soapgen_runtime::PrimitiveKind;

    #[test]
    fn test_meta_type_dispatch() {
        let record: MetaType = RecordType::new("Empty").into();
        assert_eq!(record.to_code("    "), "class Empty {\n}");

        let enumeration: MetaType = EnumType::new("Flag", PrimitiveKind::Bool)
            .with_case("on", "true")
            .into();
        assert_eq!(
            enumeration.to_code("  "),
            "enum Flag: Bool {\n  case on: \"true\"\n}"
        );
    }
}
