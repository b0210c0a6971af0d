//! Reference-resolution passes.
//!
//! The four passes that convert textual name references captured at parse
//! time into [`TypeId`] references: component-of, restriction-base, parent,
//! and property-value resolution. Each pass does one full traversal of the
//! registry and fails fast on the first unresolvable reference.

use crate::error::ResolveError;
use fhirgen_schema::{PRIMITIVE_SUFFIX, PropertyRef, Types, XML_SCHEMA_PREFIX};

/// Canonical primitive type that carries opaque markup content.
pub const STRING_PRIMITIVE: &str = "string-primitive";

/// Legacy field names inheriting from `decimal` (dstu1/dstu2 compatibility).
pub const KNOWN_DECIMAL_TYPES: &[&str] = &["score"];

/// Legacy field names inheriting from `integer` (dstu1/dstu2 compatibility).
pub const KNOWN_INTEGER_TYPES: &[&str] = &["totalResults"];

/// Resolves the owning type of every dotted component name.
///
/// `Patient.contact` is a component of `Patient`; the prefix before the
/// first dot must name a registered type. Types without a dot are untouched.
///
/// # Errors
/// Returns `ResolveError::ComponentParentNotFound` if the prefix does not
/// resolve.
pub fn resolve_component_types(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        let name = types.ty(id).name.clone();
        let Some((prefix, _)) = name.split_once('.') else {
            continue;
        };
        match types.get_id(prefix) {
            Some(owner) => {
                tracing::debug!(
                    "found parent component type \"{}\" for component \"{}\"",
                    prefix,
                    name
                );
                types.ty_mut(id).component_of = Some(owner);
            }
            None => {
                return Err(ResolveError::ComponentParentNotFound { type_name: name });
            }
        }
    }
    Ok(())
}

/// Resolves declared restriction bases for non-primitive types.
///
/// An `xs:`-prefixed base whose local name starts uppercase denotes an
/// unmodeled built-in XML type and is skipped with a warning; a lowercase
/// local name retries the lookup with the primitive suffix appended.
///
/// # Errors
/// Returns `ResolveError::RestrictionBaseNotFound` if the base still does
/// not resolve.
pub fn resolve_restriction_bases(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        let name = types.ty(id).name.clone();
        if name.contains(PRIMITIVE_SUFFIX) {
            continue;
        }
        let Some(raw_base) = types.ty(id).raw_restriction_base_name.clone() else {
            continue;
        };

        let mut base = types.get_id(&raw_base);
        if base.is_none()
            && let Some(local) = raw_base.strip_prefix(XML_SCHEMA_PREFIX)
        {
            // Uppercase locals are base xml machinery we do not model.
            if local.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
                tracing::warn!(
                    "type \"{}\" has restriction base \"{}\", skipping lookup",
                    name,
                    raw_base
                );
                continue;
            }
            base = types.get_id(&format!("{local}{PRIMITIVE_SUFFIX}"));
        }

        match base {
            Some(base_id) => {
                tracing::info!(
                    "type \"{}\" has restriction base type \"{}\"",
                    name,
                    types.ty(base_id).name
                );
                types.ty_mut(id).restriction_base = Some(base_id);
            }
            None => {
                return Err(ResolveError::RestrictionBaseNotFound {
                    type_name: name,
                    base_name: raw_base,
                });
            }
        }
    }
    Ok(())
}

/// Resolves the inheritance parent of every type.
///
/// The candidate name is taken, in order, from the explicit declaration, the
/// legacy decimal/integer overrides, or the resolved restriction base; types
/// with none of these stay parentless. `xs:`-prefixed candidates are
/// unresolvable by design and skipped with a warning.
///
/// # Errors
/// Returns `ResolveError::ParentTypeNotFound` if a candidate does not
/// resolve.
pub fn resolve_parent_types(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        let name = types.ty(id).name.clone();

        let parent_name = if let Some(declared) = types.ty(id).raw_parent_name.clone() {
            declared
        } else if KNOWN_DECIMAL_TYPES.contains(&name.as_str()) {
            "decimal".to_string()
        } else if KNOWN_INTEGER_TYPES.contains(&name.as_str()) {
            "integer".to_string()
        } else if let Some(base_id) = types.ty(id).restriction_base {
            types.ty(base_id).name.clone()
        } else {
            continue;
        };

        if parent_name.starts_with(XML_SCHEMA_PREFIX) {
            tracing::warn!(
                "type \"{}\" has un-resolvable parent \"{}\"",
                name,
                parent_name
            );
            continue;
        }

        match types.get_id(&parent_name) {
            Some(parent_id) => {
                tracing::info!("type \"{}\" has parent \"{}\"", name, parent_name);
                types.ty_mut(id).parent = Some(parent_id);
            }
            None => {
                return Err(ResolveError::ParentTypeNotFound {
                    type_name: name,
                    parent_name,
                });
            }
        }
    }
    Ok(())
}

/// Resolves the value type of every property on every type.
///
/// Direct lookup first; the `xhtml:div` marker falls back to the canonical
/// string primitive (markup content is carried as opaque string data);
/// `xs:`-prefixed names retry with the primitive suffix appended.
///
/// # Errors
/// Returns `ResolveError::UnknownPropertyType` naming the declaring type and
/// property if resolution fails.
pub fn resolve_property_types(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        let type_name = types.ty(id).name.clone();
        for idx in 0..types.ty(id).properties.len() {
            let (property_name, raw_type_name, ref_marker) = {
                let property = &types.ty(id).properties[idx];
                (
                    property.name.clone(),
                    property.raw_type_name.clone(),
                    property.ref_marker,
                )
            };

            let mut value = types.get_id(&raw_type_name);
            if value.is_none() {
                if ref_marker == Some(PropertyRef::XhtmlDiv) {
                    let Some(string_primitive) = types.get_id(STRING_PRIMITIVE) else {
                        return Err(ResolveError::UnknownPropertyType {
                            type_name,
                            property_name,
                            value_type_name: raw_type_name,
                        });
                    };
                    tracing::warn!(
                        "type \"{}\" property \"{}\" has ref \"{}\", setting type to \"{}\"",
                        type_name,
                        property_name,
                        raw_type_name,
                        STRING_PRIMITIVE
                    );
                    types.ty_mut(id).properties[idx].value_type = Some(string_primitive);
                    continue;
                }
                if let Some(local) = raw_type_name.strip_prefix(XML_SCHEMA_PREFIX) {
                    value = types.get_id(&format!("{local}{PRIMITIVE_SUFFIX}"));
                }
            }

            match value {
                Some(value_id) => {
                    tracing::info!(
                        "type \"{}\" property \"{}\" has value type \"{}\"",
                        type_name,
                        property_name,
                        types.ty(value_id).name
                    );
                    types.ty_mut(id).properties[idx].value_type = Some(value_id);
                }
                None => {
                    return Err(ResolveError::UnknownPropertyType {
                        type_name,
                        property_name,
                        value_type_name: raw_type_name,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhirgen_schema::{Property, Type};

    fn registry(names: &[&str]) -> Types {
        let mut types = Types::new();
        for name in names {
            types.add_type(Type::new(*name)).expect("add type");
        }
        types
    }

    #[test]
    fn test_component_of_resolves_dotted_name() {
        let mut types = registry(&["Patient", "Patient.contact"]);
        resolve_component_types(&mut types).expect("resolve");

        let patient = types.get_id("Patient").expect("Patient");
        let contact = types.get_id("Patient.contact").expect("contact");
        assert_eq!(types.ty(contact).component_of, Some(patient));
        assert!(types.ty(patient).component_of.is_none());
    }

    #[test]
    fn test_component_of_missing_prefix_fails() {
        let mut types = registry(&["Patient.contact"]);
        let result = resolve_component_types(&mut types);
        assert!(matches!(
            result,
            Err(ResolveError::ComponentParentNotFound { type_name }) if type_name == "Patient.contact"
        ));
    }

    #[test]
    fn test_restriction_base_direct_lookup() {
        let mut types = Types::new();
        types.add_type(Type::new("Quantity")).expect("add");
        types
            .add_type(Type::new("Age").with_restriction_base_name("Quantity"))
            .expect("add");
        resolve_restriction_bases(&mut types).expect("resolve");

        let age = types.get("Age").expect("Age");
        assert_eq!(age.restriction_base, types.get_id("Quantity"));
    }

    #[test]
    fn test_restriction_base_xs_lowercase_retries_primitive() {
        let mut types = Types::new();
        types.add_type(Type::new("string-primitive")).expect("add");
        types
            .add_type(Type::new("code").with_restriction_base_name("xs:string"))
            .expect("add");
        resolve_restriction_bases(&mut types).expect("resolve");

        let code = types.get("code").expect("code");
        assert_eq!(code.restriction_base, types.get_id("string-primitive"));
    }

    #[test]
    fn test_restriction_base_xs_uppercase_is_skipped() {
        let mut types = Types::new();
        types
            .add_type(Type::new("Narrative").with_restriction_base_name("xs:Name"))
            .expect("add");
        resolve_restriction_bases(&mut types).expect("resolve");
        assert!(types.get("Narrative").expect("Narrative").restriction_base.is_none());
    }

    #[test]
    fn test_restriction_base_on_primitive_is_skipped() {
        let mut types = Types::new();
        types
            .add_type(Type::new("id-primitive").with_restriction_base_name("nowhere"))
            .expect("add");
        // Primitive-suffixed names are exempt from restriction-base lookup.
        resolve_restriction_bases(&mut types).expect("resolve");
        assert!(types.get("id-primitive").expect("id-primitive").restriction_base.is_none());
    }

    #[test]
    fn test_restriction_base_not_found_fails() {
        let mut types = Types::new();
        types
            .add_type(Type::new("Age").with_restriction_base_name("Quantity"))
            .expect("add");
        let result = resolve_restriction_bases(&mut types);
        assert!(matches!(
            result,
            Err(ResolveError::RestrictionBaseNotFound { type_name, .. }) if type_name == "Age"
        ));
    }

    #[test]
    fn test_parent_from_declaration() {
        let mut types = Types::new();
        types.add_type(Type::new("DomainResource")).expect("add");
        types
            .add_type(Type::new("Patient").with_parent_name("DomainResource"))
            .expect("add");
        resolve_parent_types(&mut types).expect("resolve");

        assert_eq!(
            types.get("Patient").expect("Patient").parent,
            types.get_id("DomainResource")
        );
    }

    #[test]
    fn test_parent_legacy_decimal_override() {
        let mut types = registry(&["decimal", "score"]);
        resolve_parent_types(&mut types).expect("resolve");
        assert_eq!(types.get("score").expect("score").parent, types.get_id("decimal"));
    }

    #[test]
    fn test_parent_legacy_integer_override() {
        let mut types = registry(&["integer", "totalResults"]);
        resolve_parent_types(&mut types).expect("resolve");
        assert_eq!(
            types.get("totalResults").expect("totalResults").parent,
            types.get_id("integer")
        );
    }

    #[test]
    fn test_parent_falls_back_to_restriction_base() {
        let mut types = Types::new();
        types.add_type(Type::new("Quantity")).expect("add");
        types
            .add_type(Type::new("Age").with_restriction_base_name("Quantity"))
            .expect("add");
        resolve_restriction_bases(&mut types).expect("bases");
        resolve_parent_types(&mut types).expect("parents");

        assert_eq!(types.get("Age").expect("Age").parent, types.get_id("Quantity"));
    }

    #[test]
    fn test_parent_xs_prefix_left_parentless() {
        let mut types = Types::new();
        types
            .add_type(Type::new("boolean-primitive").with_parent_name("xs:boolean"))
            .expect("add");
        resolve_parent_types(&mut types).expect("resolve");
        assert!(types.get("boolean-primitive").expect("t").parent.is_none());
    }

    #[test]
    fn test_parent_not_found_fails() {
        let mut types = Types::new();
        types
            .add_type(Type::new("Patient").with_parent_name("DomainResource"))
            .expect("add");
        let result = resolve_parent_types(&mut types);
        assert!(matches!(
            result,
            Err(ResolveError::ParentTypeNotFound { parent_name, .. }) if parent_name == "DomainResource"
        ));
    }

    #[test]
    fn test_property_direct_resolution() {
        let mut types = registry(&["HumanName", "Patient"]);
        let patient = types.get_id("Patient").expect("Patient");
        types
            .ty_mut(patient)
            .add_property(Property::new("name", "HumanName"))
            .expect("property");
        resolve_property_types(&mut types).expect("resolve");

        assert_eq!(
            types.ty(patient).properties[0].value_type,
            types.get_id("HumanName")
        );
    }

    #[test]
    fn test_property_xs_prefix_resolves_primitive() {
        let mut types = registry(&["string-primitive", "Extension"]);
        let extension = types.get_id("Extension").expect("Extension");
        types
            .ty_mut(extension)
            .add_property(Property::new("url", "xs:string"))
            .expect("property");
        resolve_property_types(&mut types).expect("resolve");

        assert_eq!(
            types.ty(extension).properties[0].value_type,
            types.get_id("string-primitive")
        );
    }

    #[test]
    fn test_property_xhtml_div_falls_back_to_string_primitive() {
        let mut types = registry(&["string-primitive", "Narrative"]);
        let narrative = types.get_id("Narrative").expect("Narrative");
        types
            .ty_mut(narrative)
            .add_property(
                Property::new("div", "xhtml:div").with_ref_marker(PropertyRef::XhtmlDiv),
            )
            .expect("property");
        resolve_property_types(&mut types).expect("resolve");

        assert_eq!(
            types.ty(narrative).properties[0].value_type,
            types.get_id("string-primitive")
        );
    }

    #[test]
    fn test_property_unknown_type_fails_with_both_names() {
        let mut types = registry(&["Patient"]);
        let patient = types.get_id("Patient").expect("Patient");
        types
            .ty_mut(patient)
            .add_property(Property::new("link", "Foo"))
            .expect("property");
        let result = resolve_property_types(&mut types);
        match result {
            Err(ResolveError::UnknownPropertyType {
                type_name,
                property_name,
                value_type_name,
            }) => {
                assert_eq!(type_name, "Patient");
                assert_eq!(property_name, "link");
                assert_eq!(value_type_name, "Foo");
            }
            other => panic!("expected UnknownPropertyType, got {other:?}"),
        }
    }
}
