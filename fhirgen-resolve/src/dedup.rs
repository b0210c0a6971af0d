//! Removal of properties shadowed by an ancestor.

use crate::error::ResolveError;
use fhirgen_schema::Types;

/// Removes every property that an ancestor already declares.
///
/// For each type with a resolved parent, the ancestor chain is walked
/// upward; at each ancestor, the child drops any property whose name the
/// ancestor also declares (the ancestor's copy is authoritative). Runs after
/// parent and property-value resolution.
///
/// # Errors
/// Infallible today; returns `Result` to match the pass contract.
pub fn remove_duplicate_properties(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        if !types.ty(id).has_parent() {
            continue;
        }
        let type_name = types.ty(id).name.clone();

        let mut ancestor = types.ty(id).parent;
        while let Some(ancestor_id) = ancestor {
            let ancestor_name = types.ty(ancestor_id).name.clone();
            let ancestor_properties: Vec<String> = types
                .ty(ancestor_id)
                .properties
                .iter()
                .map(|p| p.name.clone())
                .collect();

            types.ty_mut(id).properties.retain(|p| {
                let shadowed = ancestor_properties.contains(&p.name);
                if shadowed {
                    tracing::warn!(
                        "removing property \"{}\" from type \"{}\" as parent \"{}\" already has it",
                        p.name,
                        type_name,
                        ancestor_name
                    );
                }
                !shadowed
            });

            ancestor = types.ty(ancestor_id).parent;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhirgen_schema::{Property, Type};

    fn type_with_properties(name: &str, properties: &[&str]) -> Type {
        let mut ty = Type::new(name);
        for prop in properties {
            ty.add_property(Property::new(*prop, "string"))
                .expect("add property");
        }
        ty
    }

    fn property_names(types: &Types, name: &str) -> Vec<String> {
        types
            .get(name)
            .expect("type registered")
            .properties
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn test_shadowed_property_removed_from_child() {
        let mut types = Types::new();
        let parent = types
            .add_type(type_with_properties("Element", &["id", "extension"]))
            .expect("add");
        let child = types
            .add_type(type_with_properties("Quantity", &["id", "value"]))
            .expect("add");
        types.ty_mut(child).parent = Some(parent);

        remove_duplicate_properties(&mut types).expect("dedup");
        assert_eq!(property_names(&types, "Quantity"), ["value"]);
        assert_eq!(property_names(&types, "Element"), ["id", "extension"]);
    }

    #[test]
    fn test_transitive_ancestors_are_checked() {
        let mut types = Types::new();
        let root = types
            .add_type(type_with_properties("Element", &["id"]))
            .expect("add");
        let mid = types
            .add_type(type_with_properties("Quantity", &["value"]))
            .expect("add");
        let leaf = types
            .add_type(type_with_properties("Age", &["id", "value", "unit"]))
            .expect("add");
        types.ty_mut(mid).parent = Some(root);
        types.ty_mut(leaf).parent = Some(mid);

        remove_duplicate_properties(&mut types).expect("dedup");
        assert_eq!(property_names(&types, "Age"), ["unit"]);
    }

    #[test]
    fn test_parentless_types_untouched() {
        let mut types = Types::new();
        types
            .add_type(type_with_properties("Patient", &["name", "name2"]))
            .expect("add");
        remove_duplicate_properties(&mut types).expect("dedup");
        assert_eq!(property_names(&types, "Patient"), ["name", "name2"]);
    }

    #[test]
    fn test_no_shared_names_after_dedup() {
        let mut types = Types::new();
        let parent = types
            .add_type(type_with_properties("Element", &["id", "extension"]))
            .expect("add");
        let child = types
            .add_type(type_with_properties("Coding", &["id", "extension", "code"]))
            .expect("add");
        types.ty_mut(child).parent = Some(parent);

        remove_duplicate_properties(&mut types).expect("dedup");
        let child_names = property_names(&types, "Coding");
        let parent_names = property_names(&types, "Element");
        assert!(child_names.iter().all(|n| !parent_names.contains(n)));
    }
}
