//! FHIR XSD type extraction.
//!
//! Pull-parses FHIR XML Schema documents into an unresolved [`Types`]
//! registry: every `xs:simpleType`/`xs:complexType` becomes a [`Type`] with
//! textual (unresolved) parent, restriction-base and property value-type
//! references. Extraction only; the documents are not validated for
//! well-formedness beyond what parsing itself requires.

use crate::config::GenConfig;
use crate::error::ParseError;
use crate::property::{Property, PropertyRef};
use crate::types::{Type, Types};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses FHIR XSD content into an unresolved type registry.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, a declaration is missing a
/// required attribute, or a type/property name is declared twice.
pub fn parse_definitions(xml: &str, config: &GenConfig) -> Result<Types, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut types = Types::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local = e.local_name();
                let name = std::str::from_utf8(local.as_ref())?;
                match name {
                    "simpleType" => {
                        let ty = parse_simple_type(&mut reader, e, config)?;
                        types.add_type(ty)?;
                    }
                    "complexType" => {
                        let ty = parse_complex_type(&mut reader, e, config)?;
                        types.add_type(ty)?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!("extracted {} type definitions", types.len());
    Ok(types)
}

/// Parses FHIR XSD content from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_definitions_file(
    path: &std::path::Path,
    config: &GenConfig,
) -> Result<Types, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_definitions(&xml, config)
}

/// Returns the value of a named attribute, if present.
fn attr_value(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == name {
            return Ok(Some(std::str::from_utf8(&attr.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Returns the value of a required attribute.
fn required_attr(e: &BytesStart<'_>, element: &str, name: &str) -> Result<String, ParseError> {
    attr_value(e, name)?.ok_or_else(|| ParseError::missing_attr(element, name))
}

/// Parses an `xs:simpleType` declaration.
///
/// Captures the `xs:restriction` base as the unresolved restriction-base
/// name; enumeration facets carry no structural information and are skipped.
fn parse_simple_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    config: &GenConfig,
) -> Result<Type, ParseError> {
    let name = required_attr(e, "simpleType", "name")?;
    let mut ty = Type::new(name);
    ty.namespace = config.namespace.clone();

    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                simple_type_child(e, &mut ty)?;
            }
            Ok(Event::Empty(ref e)) => {
                simple_type_child(e, &mut ty)?;
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(ty)
}

/// Handles one child declaration inside an `xs:simpleType`.
fn simple_type_child(e: &BytesStart<'_>, ty: &mut Type) -> Result<(), ParseError> {
    let local = e.local_name();
    let tag = std::str::from_utf8(local.as_ref())?;
    if tag == "restriction"
        && let Some(base) = attr_value(e, "base")?
    {
        ty.raw_restriction_base_name = Some(base);
    }
    Ok(())
}

/// Parses an `xs:complexType` declaration.
///
/// `xs:extension` bases become the unresolved parent name, `xs:restriction`
/// bases the unresolved restriction-base name, and `xs:element` /
/// `xs:attribute` children become unresolved properties.
fn parse_complex_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    config: &GenConfig,
) -> Result<Type, ParseError> {
    let name = required_attr(e, "complexType", "name")?;
    let mut ty = Type::new(name);
    ty.namespace = config.namespace.clone();

    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                complex_type_child(e, &mut ty)?;
            }
            Ok(Event::Empty(ref e)) => {
                complex_type_child(e, &mut ty)?;
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(ty)
}

/// Handles one child declaration inside an `xs:complexType`.
fn complex_type_child(e: &BytesStart<'_>, ty: &mut Type) -> Result<(), ParseError> {
    let local = e.local_name();
    let tag = std::str::from_utf8(local.as_ref())?;
    match tag {
        "extension" => {
            if let Some(base) = attr_value(e, "base")? {
                ty.raw_parent_name = Some(base);
            }
        }
        "restriction" => {
            if let Some(base) = attr_value(e, "base")? {
                ty.raw_restriction_base_name = Some(base);
            }
        }
        "element" | "attribute" => {
            if let Some(property) = parse_property(e)? {
                ty.add_property(property)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Parses an `xs:element` or `xs:attribute` into an unresolved property.
///
/// Declarations carrying neither a `name`/`type` pair nor a `ref` are
/// skipped (group references, wildcards).
fn parse_property(e: &BytesStart<'_>) -> Result<Option<Property>, ParseError> {
    if let Some(reference) = attr_value(e, "ref")? {
        // xhtml:div style references name the property by the local part.
        let local = reference.rsplit(':').next().unwrap_or(&reference).to_string();
        let mut property = Property::new(local, reference.clone());
        if let Some(marker) = PropertyRef::from_ref(&reference) {
            property = property.with_ref_marker(marker);
        }
        return Ok(Some(property));
    }

    let Some(name) = attr_value(e, "name")? else {
        return Ok(None);
    };
    let Some(type_name) = attr_value(e, "type")? else {
        return Ok(None);
    };

    Ok(Some(Property::new(name, type_name)))
}
