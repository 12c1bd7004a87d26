//! Type reference rendering.

use soapgen_model::TypeRef;

/// Renders a type reference: `T`, `T?` or `[T]`, recursively.
#[must_use]
pub fn render_type_ref(type_ref: &TypeRef) -> String {
    let mut output = String::new();
    write_type_ref(&mut output, type_ref);
    output
}

fn write_type_ref(output: &mut String, type_ref: &TypeRef) {
    match type_ref {
        TypeRef::Identifier(name) => output.push_str(name),
        TypeRef::Optional(inner) => {
            write_type_ref(output, inner);
            output.push('?');
        }
        TypeRef::Array(inner) => {
            output.push('[');
            write_type_ref(output, inner);
            output.push(']');
        }
    }
}
