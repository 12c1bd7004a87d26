//! Example that renders a small stock-quote service model and reads a
//! response body with the marshaling runtime.
//!
//! Run with: `RUST_LOG=debug cargo run --example generate`

use soapgen::prelude::*;

/// Response body the generated client would receive.
const RESPONSE: &str = r#"<ns:GetQuoteResponse xmlns:ns="urn:example:stocks">
    <symbol>ACME</symbol>
    <price>101.250</price>
    <volume>48200</volume>
    <updated>2024-05-17T16:00:00-04:00</updated>
    <status>A</status>
</ns:GetQuoteResponse>"#;

fn quote_model() -> Vec<MetaType> {
    let quote = RecordType::new("GetQuoteResponse")
        .with_property("symbol", PrimitiveKind::String)
        .with_property("price", PrimitiveKind::Decimal)
        .with_property("volume", TypeRef::from(PrimitiveKind::UInt64).optional())
        .with_property("updated", PrimitiveKind::Date)
        .with_property("status", TypeRef::identifier("Status"))
        .with_property("history", TypeRef::from(PrimitiveKind::Double).array());

    let request = RecordType::new("GetQuoteRequest")
        .with_property("symbols", TypeRef::from(PrimitiveKind::String).array())
        .with_nested_type(
            EnumType::new("Exchange", PrimitiveKind::String)
                .with_case("nasdaq", "XNAS")
                .with_case("nyse", "XNYS"),
        );

    let status = EnumType::new("Status", PrimitiveKind::String)
        .with_case("active", "A")
        .with_case("halted", "H");

    vec![quote.into(), status.into(), request.into()]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let types = quote_model();
    let generator = Generator::builder().indent_unit("    ").build();
    let source = generator.generate_validated(&types)?;
    tracing::info!("rendered {} types into {} bytes", types.len(), source.len());
    println!("{source}");

    let response = XmlElement::parse(RESPONSE)?;
    let registry = MarshalingRegistry::global();
    for (field, schema_type) in [
        ("symbol", "xsd:string"),
        ("price", "xsd:decimal"),
        ("volume", "xsd:unsignedLong"),
        ("updated", "xsd:dateTime"),
    ] {
        let Some(conversion) = registry.lookup(schema_type) else {
            println!("[Runtime] no conversion for {schema_type}");
            continue;
        };
        let value = conversion.deserialize(response.child(field)?.text())?;
        println!(
            "[Runtime] {field} ({}) = {}",
            value.kind(),
            conversion.serialize(&value)
        );
    }

    let price: XmlDecimal = response.deserialize_child("price")?;
    println!("[Runtime] price as f64: {}", price.to_f64());

    let mut request = XmlElement::new("ns:GetQuoteRequest");
    request.declare_namespace("ns", "urn:example:stocks")?;
    request.append_child_value("symbols", "ACME")?;
    request.append_child_value("symbols", "INIT")?;
    println!("[Runtime] request: {}", request.to_xml()?);

    Ok(())
}
