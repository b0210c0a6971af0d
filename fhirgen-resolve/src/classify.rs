//! Kind classification and primitive-category derivation.

use crate::error::ResolveError;
use fhirgen_schema::{
    LIST_SUFFIX, PRIMITIVE_SUFFIX, PrimitiveCategory, TypeId, TypeKind, Types,
};

/// Legacy type names classified as lists (dstu1/dstu2 compatibility).
pub const KNOWN_LIST_TYPES: &[&str] = &["ResourceType"];

/// Classifies the kind of every type in the registry.
///
/// Naming-convention rules take precedence over inheritance-based rules;
/// see [`TypeKind`] for the categories. Kinds pre-assigned during parsing
/// are left untouched (a re-visit is a logged no-op), and re-running the
/// pass leaves every kind unchanged.
///
/// # Errors
/// Infallible today; returns `Result` to match the pass contract.
pub fn classify_kinds(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        classify_type(types, id);
    }
    Ok(())
}

/// Classifies a single type, recursing up the ancestor chain as needed.
///
/// Recursion terminates because the parent forest is finite and acyclic and
/// every visited ancestor is classified before the caller reads its kind.
fn classify_type(types: &mut Types, id: TypeId) {
    if let Some(kind) = types.ty(id).kind() {
        tracing::warn!(
            "type \"{}\" already has kind \"{}\", will not set again",
            types.ty(id).name,
            kind
        );
        return;
    }

    let name = types.ty(id).name.clone();
    let root = types.root_of(id);

    if name.contains(PRIMITIVE_SUFFIX) {
        set_type_kind(types, id, TypeKind::Primitive);
    } else if name.contains(LIST_SUFFIX) || KNOWN_LIST_TYPES.contains(&name.as_str()) {
        set_type_kind(types, id, TypeKind::List);
    } else if name.contains('.') {
        set_type_kind(types, id, TypeKind::ResourceComponent);
    } else if types.get_id(&format!("{name}{PRIMITIVE_SUFFIX}")).is_some() {
        // This type is the container boxing a same-named primitive.
        set_type_kind(types, id, TypeKind::PrimitiveContainer);
    } else if root != id {
        if types.ty(root).kind().is_none() {
            classify_type(types, root);
        }
        let root_kind = types.ty(root).kind().unwrap_or(TypeKind::Generic);
        if root_kind.is_primitive() {
            set_type_kind(types, id, TypeKind::Generic);
        } else {
            set_type_kind(types, id, root_kind);
        }
    } else if let Some(kind) = TypeKind::from_known_root(&name) {
        set_type_kind(types, id, kind);
    } else {
        set_type_kind(types, id, TypeKind::Generic);
    }
}

/// Sets a type's kind with an info trace.
fn set_type_kind(types: &mut Types, id: TypeId, kind: TypeKind) {
    tracing::info!("setting type \"{}\" to kind \"{}\"", types.ty(id).name, kind);
    types.ty_mut(id).set_kind(kind);
}

/// Derives the canonical primitive category for every primitive-kind type.
///
/// The source name is the topmost ancestor's FHIR name when the type has a
/// parent, otherwise its own; the primitive suffix is stripped and the
/// remainder mapped through [`PrimitiveCategory::from_fhir_name`].
///
/// # Errors
/// Returns `ResolveError::UnknownPrimitiveCategory` if the canonical name
/// maps to no known category.
pub fn derive_primitive_categories(types: &mut Types) -> Result<(), ResolveError> {
    for id in types.ids() {
        if types.ty(id).kind() != Some(TypeKind::Primitive) {
            continue;
        }

        let source_name = if types.ty(id).has_parent() {
            types.ty(types.root_of(id)).name.clone()
        } else {
            types.ty(id).name.clone()
        };
        let canonical = source_name.replace(PRIMITIVE_SUFFIX, "");

        let Some(category) = PrimitiveCategory::from_fhir_name(&canonical) else {
            return Err(ResolveError::UnknownPrimitiveCategory {
                type_name: types.ty(id).name.clone(),
                category_name: canonical,
            });
        };
        tracing::info!(
            "type \"{}\" is a primitive of category \"{}\"",
            types.ty(id).name,
            category
        );
        types.ty_mut(id).primitive_category = Some(category);
    }
    Ok(())
}
