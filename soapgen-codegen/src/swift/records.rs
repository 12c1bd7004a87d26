//! Record rendering.

use super::types::render_type_ref;
use super::{FIELD_KEYWORD, RECORD_KEYWORD, ToLinesOfCode};
use crate::indentation::Indentation;
use soapgen_model::{Property, RecordType};

impl ToLinesOfCode for RecordType {
    /// Properties come first, then nested types, each sorted by name.
    fn to_lines_of_code(&self, indentation: &Indentation) -> Vec<String> {
        tracing::trace!(
            "rendering record '{}' at level {}",
            self.name,
            indentation.level()
        );

        let header = format!("{} {} {{", RECORD_KEYWORD, self.name);
        indentation.wrap_block(
            &header,
            |inner| {
                let mut lines: Vec<String> = self
                    .sorted_properties()
                    .into_iter()
                    .map(|property| inner.apply(&render_property(property)))
                    .collect();
                for nested in self.sorted_nested_types() {
                    lines.extend(nested.to_lines_of_code(inner));
                }
                lines
            },
            "}",
        )
    }
}

fn render_property(property: &Property) -> String {
    format!(
        "{} {}: {}",
        FIELD_KEYWORD,
        property.name,
        render_type_ref(&property.type_ref)
    )
}
