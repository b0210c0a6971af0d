//! Final consistency gate before emission.

use crate::error::ResolveError;
use fhirgen_schema::{Types, naming};

/// Validates the fully resolved registry.
///
/// Checks, for every type: the derived namespace is a valid identifier
/// sequence, the derived class name is a valid identifier, a kind has been
/// assigned, and primitive-kind types carry a primitive category. The first
/// violation aborts; there is no partial recovery.
///
/// # Errors
/// Returns the `ResolveError` variant describing the violated rule and the
/// offending type.
pub fn validate_types(types: &Types) -> Result<(), ResolveError> {
    for ty in types.iter() {
        if !naming::is_valid_namespace(&ty.namespace) {
            return Err(ResolveError::InvalidNamespace {
                type_name: ty.name.clone(),
                namespace: ty.namespace.join("."),
            });
        }

        if !naming::is_valid_class_name(&ty.class_name) {
            return Err(ResolveError::InvalidClassName {
                type_name: ty.name.clone(),
                class_name: ty.class_name.clone(),
            });
        }

        let Some(kind) = ty.kind() else {
            return Err(ResolveError::MissingKind {
                type_name: ty.name.clone(),
            });
        };

        if kind.is_primitive() && ty.primitive_category.is_none() {
            return Err(ResolveError::MissingPrimitiveCategory {
                type_name: ty.name.clone(),
            });
        }
    }
    Ok(())
}
