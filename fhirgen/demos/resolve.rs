//! Resolves a small inline FHIR schema and prints the classified graph.
//!
//! Run with: `cargo run --example resolve`

use fhirgen::prelude::*;

const SAMPLE_XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:xhtml="http://www.w3.org/1999/xhtml">
    <xs:simpleType name="string-primitive">
        <xs:restriction base="xs:string"/>
    </xs:simpleType>
    <xs:simpleType name="code-primitive">
        <xs:restriction base="string-primitive"/>
    </xs:simpleType>
    <xs:complexType name="string">
        <xs:attribute name="value" type="string-primitive"/>
    </xs:complexType>
    <xs:complexType name="Element">
        <xs:attribute name="id" type="string-primitive"/>
    </xs:complexType>
    <xs:complexType name="Narrative">
        <xs:complexContent>
            <xs:extension base="Element">
                <xs:sequence>
                    <xs:element ref="xhtml:div" minOccurs="1"/>
                </xs:sequence>
            </xs:extension>
        </xs:complexContent>
    </xs:complexType>
    <xs:complexType name="Patient">
        <xs:complexContent>
            <xs:extension base="Element">
                <xs:sequence>
                    <xs:element name="contact" type="Patient.contact" minOccurs="0"/>
                </xs:sequence>
            </xs:extension>
        </xs:complexContent>
    </xs:complexType>
    <xs:complexType name="Patient.contact">
        <xs:sequence>
            <xs:element name="name" type="string"/>
        </xs:sequence>
    </xs:complexType>
</xs:schema>"#;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GenConfig::new().with_namespace(["HL7", "FHIR"]);
    let types = resolve_from_xml(SAMPLE_XSD, &config)?;

    println!("resolved {} types:", types.len());
    for ty in types.iter() {
        let kind = ty
            .kind()
            .map_or_else(|| "?".to_string(), |k| k.to_string());
        let category = ty
            .primitive_category
            .map_or_else(String::new, |c| format!(" ({c})"));
        println!("  {:<20} {}{}", ty.name, kind, category);
    }

    Ok(())
}
