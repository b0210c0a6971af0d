//! The type registry and type declarations.
//!
//! [`Types`] owns every [`Type`] extracted from the schema documents and is
//! the single backing store for the resolution engine. Cross-type references
//! (parent, restriction base, component-of, property value types) are
//! [`TypeId`] indices into the registry rather than owned handles, so the
//! inheritance forest can be wired up incrementally.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::kind::TypeKind;
use crate::naming;
use crate::primitive::PrimitiveCategory;
use crate::property::Property;

/// Opaque index of a type within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(usize);

/// Registry owning all types extracted from one schema set.
///
/// Lookup by FHIR name is O(1); iteration order equals declaration order.
/// Types are never removed once added.
#[derive(Debug, Clone, Default)]
pub struct Types {
    list: Vec<Type>,
    by_name: HashMap<String, TypeId>,
}

impl Types {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type to the registry.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateType` if a type with the same FHIR name
    /// is already registered.
    pub fn add_type(&mut self, ty: Type) -> Result<TypeId, ParseError> {
        if self.by_name.contains_key(&ty.name) {
            return Err(ParseError::DuplicateType {
                name: ty.name.clone(),
            });
        }
        let id = TypeId(self.list.len());
        self.by_name.insert(ty.name.clone(), id);
        self.list.push(ty);
        Ok(id)
    }

    /// Looks up a type id by FHIR name.
    #[must_use]
    pub fn get_id(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Looks up a type by FHIR name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.get_id(name).map(|id| self.ty(id))
    }

    /// Returns the type for an id.
    #[must_use]
    pub fn ty(&self, id: TypeId) -> &Type {
        &self.list[id.0]
    }

    /// Returns the type for an id, mutably.
    pub fn ty_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.list[id.0]
    }

    /// Iterates type ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = TypeId> + use<> {
        (0..self.list.len()).map(TypeId)
    }

    /// Iterates types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.list.iter()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Walks parent links from `id` to the topmost ancestor.
    ///
    /// Returns `id` itself when the type has no parent. The parent forest is
    /// acyclic by construction, so the walk terminates.
    #[must_use]
    pub fn root_of(&self, id: TypeId) -> TypeId {
        let mut current = id;
        while let Some(parent) = self.ty(current).parent {
            current = parent;
        }
        current
    }
}

/// A declared schema type.
///
/// Constructed during parsing with all reference fields unset and `kind`
/// unclassified; the resolution engine fills in references, classification
/// and category, and prunes inherited properties. It never discards types.
#[derive(Debug, Clone)]
pub struct Type {
    /// Raw FHIR schema identifier; unique key in the registry.
    pub name: String,
    /// Unresolved textual parent name, if the declaration carried one.
    pub raw_parent_name: Option<String>,
    /// Unresolved textual restriction-base name, if declared.
    pub raw_restriction_base_name: Option<String>,
    /// Resolved inheritance parent.
    pub parent: Option<TypeId>,
    /// Resolved restriction base; may differ from `parent`.
    pub restriction_base: Option<TypeId>,
    /// Resolved owner of this dotted component type.
    pub component_of: Option<TypeId>,
    /// Declared properties, unique by name within this type.
    pub properties: Vec<Property>,
    /// Target namespace segments for the generated class.
    pub namespace: Vec<String>,
    /// Generated class name.
    pub class_name: String,
    /// Canonical category, set only for primitive-kind types.
    pub primitive_category: Option<PrimitiveCategory>,
    kind: Option<TypeKind>,
}

impl Type {
    /// Creates a new unresolved type with a class name derived from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let class_name = naming::class_name_for(&name);
        Self {
            name,
            raw_parent_name: None,
            raw_restriction_base_name: None,
            parent: None,
            restriction_base: None,
            component_of: None,
            properties: Vec::new(),
            namespace: Vec::new(),
            class_name,
            primitive_category: None,
            kind: None,
        }
    }

    /// Sets the unresolved textual parent name.
    #[must_use]
    pub fn with_parent_name(mut self, name: impl Into<String>) -> Self {
        self.raw_parent_name = Some(name.into());
        self
    }

    /// Sets the unresolved textual restriction-base name.
    #[must_use]
    pub fn with_restriction_base_name(mut self, name: impl Into<String>) -> Self {
        self.raw_restriction_base_name = Some(name.into());
        self
    }

    /// Adds a declared property.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateProperty` if a property with the same
    /// name is already declared on this type.
    pub fn add_property(&mut self, property: Property) -> Result<(), ParseError> {
        if self.properties.iter().any(|p| p.name == property.name) {
            return Err(ParseError::DuplicateProperty {
                type_name: self.name.clone(),
                property_name: property.name,
            });
        }
        self.properties.push(property);
        Ok(())
    }

    /// Returns the classified kind, if set.
    #[must_use]
    pub fn kind(&self) -> Option<TypeKind> {
        self.kind
    }

    /// Classifies the type.
    ///
    /// The kind is set exactly once; a second attempt is a logged no-op so
    /// that kinds pre-assigned during parsing survive the classification pass.
    pub fn set_kind(&mut self, kind: TypeKind) {
        if let Some(existing) = self.kind {
            tracing::warn!(
                "type \"{}\" already has kind \"{}\", will not set again",
                self.name,
                existing
            );
            return;
        }
        self.kind = Some(kind);
    }

    /// Returns true if the type has a resolved parent.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut types = Types::new();
        let patient = types.add_type(Type::new("Patient")).expect("add Patient");
        let contact = types
            .add_type(Type::new("Patient.contact"))
            .expect("add Patient.contact");

        assert_eq!(types.len(), 2);
        assert_eq!(types.get_id("Patient"), Some(patient));
        assert_eq!(types.get_id("Patient.contact"), Some(contact));
        assert!(types.get_id("Observation").is_none());
        assert_eq!(types.ty(patient).name, "Patient");
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut types = Types::new();
        types.add_type(Type::new("Patient")).expect("first add");
        let result = types.add_type(Type::new("Patient"));
        assert!(matches!(result, Err(ParseError::DuplicateType { .. })));
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let mut types = Types::new();
        for name in ["c", "a", "b"] {
            types.add_type(Type::new(name)).expect("add");
        }
        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_root_of_walks_parent_chain() {
        let mut types = Types::new();
        let root = types.add_type(Type::new("Element")).expect("add");
        let mid = types.add_type(Type::new("Quantity")).expect("add");
        let leaf = types.add_type(Type::new("Age")).expect("add");
        types.ty_mut(mid).parent = Some(root);
        types.ty_mut(leaf).parent = Some(mid);

        assert_eq!(types.root_of(leaf), root);
        assert_eq!(types.root_of(mid), root);
        assert_eq!(types.root_of(root), root);
    }

    #[test]
    fn test_set_kind_is_set_once() {
        let mut ty = Type::new("string-primitive");
        ty.set_kind(TypeKind::Primitive);
        ty.set_kind(TypeKind::Generic);
        assert_eq!(ty.kind(), Some(TypeKind::Primitive));
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let mut ty = Type::new("Patient");
        ty.add_property(Property::new("name", "HumanName"))
            .expect("first property");
        let result = ty.add_property(Property::new("name", "string"));
        assert!(matches!(result, Err(ParseError::DuplicateProperty { .. })));
    }

    #[test]
    fn test_derived_class_name() {
        assert_eq!(Type::new("Patient").class_name, "FHIRPatient");
        assert_eq!(Type::new("Patient.contact").class_name, "FHIRPatientContact");
    }
}
