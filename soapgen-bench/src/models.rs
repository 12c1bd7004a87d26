//! Synthetic type models of configurable shape.

use soapgen_model::{EnumType, MetaType, RecordType, TypeRef};
use soapgen_runtime::PrimitiveKind;

/// Returns a record with `properties` fields cycling through every kind.
///
/// Fields are added in descending name order so rendering has to sort.
#[must_use]
pub fn wide_record(name: &str, properties: usize) -> RecordType {
    let kinds = PrimitiveKind::ALL;
    (0..properties).rev().fold(RecordType::new(name), |record, i| {
        let base = TypeRef::from(kinds[i % kinds.len()]);
        let type_ref = match i % 3 {
            0 => base,
            1 => base.optional(),
            _ => base.optional().array(),
        };
        record.with_property(format!("field{i:05}"), type_ref)
    })
}

/// Returns an enumeration with `cases` string cases.
#[must_use]
pub fn enum_with_cases(name: &str, cases: usize) -> EnumType {
    (0..cases).rev().fold(
        EnumType::new(name, PrimitiveKind::String),
        |enum_type, i| enum_type.with_case(format!("case{i:05}"), format!("C{i}")),
    )
}

/// Returns a chain of records nested `depth` levels deep.
#[must_use]
pub fn deep_record(depth: usize) -> RecordType {
    let mut current = wide_record(&format!("Level{depth}"), 2);
    for level in (1..depth).rev() {
        current = wide_record(&format!("Level{level}"), 2).with_nested_type(current);
    }
    current
}

/// Returns `count` top-level types, alternating records and enumerations.
#[must_use]
pub fn service_model(count: usize) -> Vec<MetaType> {
    (0..count)
        .rev()
        .map(|i| {
            if i % 2 == 0 {
                wide_record(&format!("Message{i:04}"), 8)
                    .with_nested_type(enum_with_cases(&format!("Code{i:04}"), 4))
                    .into()
            } else {
                enum_with_cases(&format!("Kind{i:04}"), 6).into()
            }
        })
        .collect()
}
