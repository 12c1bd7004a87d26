//! Raw-value enumeration rendering.

use super::types::render_type_ref;
use super::{CASE_KEYWORD, ENUM_KEYWORD, ToLinesOfCode};
use crate::indentation::Indentation;
use soapgen_model::EnumType;

impl ToLinesOfCode for EnumType {
    /// Cases are sorted by name. Raw literals are quoted but not escaped.
    fn to_lines_of_code(&self, indentation: &Indentation) -> Vec<String> {
        tracing::trace!(
            "rendering enum '{}' with {} cases",
            self.name,
            self.cases.len()
        );

        let header = format!(
            "{} {}: {} {{",
            ENUM_KEYWORD,
            self.name,
            render_type_ref(&self.raw_type)
        );
        indentation.wrap_block(
            &header,
            |inner| {
                self.sorted_cases()
                    .into_iter()
                    .map(|(name, raw)| inner.apply(&format!("{CASE_KEYWORD} {name}: \"{raw}\"")))
                    .collect()
            },
            "}",
        )
    }
}
