//! Integration tests for builder dispatch
//!
//! Drives the default registry end to end: enum extraction, scalar and
//! array handling, the declared fallback, and no-match reporting.

use typelens_engine::builder::{default_registry, BuilderRegistry, DispatchError};
use typelens_engine::builders::{EnumTypeBuilder, GeneralDeclaredTypeBuilder};
use typelens_engine::definition::TypeDefinition;
use typelens_engine::model::{
    Member, Modifiers, PrimitiveKind, TypeDecl, TypeRef, TypeRegistry,
};

fn dispatch(env: &TypeRegistry, ty: &TypeRef) -> Result<TypeDefinition, DispatchError> {
    let mut definition = TypeDefinition::default();
    default_registry().dispatch(env, ty, &mut definition)?;
    Ok(definition)
}

// ============================================================================
// Enum extraction
// ============================================================================

mod enum_extraction {
    use super::*;

    fn color_env() -> TypeRegistry {
        let constant = Modifiers::public_static_final;
        let mut registry = TypeRegistry::new();
        registry.register(
            TypeDecl::enumeration("palette.Color")
                .member(Member::with_modifiers(
                    "RED",
                    TypeRef::named("palette.Color"),
                    constant(),
                ))
                .member(Member::with_modifiers(
                    "GREEN",
                    TypeRef::named("palette.Color"),
                    constant(),
                ))
                .member(Member::with_modifiers(
                    "BLUE",
                    TypeRef::named("palette.Color"),
                    constant(),
                ))
                .member(Member::with_modifiers(
                    "name",
                    TypeRef::named("string"),
                    Modifiers::private(),
                )),
        );
        registry
    }

    #[test]
    fn test_enum_constants_in_declaration_order() {
        let env = color_env();
        let definition = dispatch(&env, &TypeRef::named("palette.Color")).unwrap();
        assert_eq!(definition.name, "palette.Color");
        assert_eq!(definition.enums, vec!["RED", "GREEN", "BLUE"]);
        // the private helper member is not a constant
        assert!(!definition.enums.contains(&"name".to_string()));
    }

    #[test]
    fn test_definition_serializes_for_exchange() {
        let env = color_env();
        let definition = dispatch(&env, &TypeRef::named("palette.Color")).unwrap();
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["name"], "palette.Color");
        assert_eq!(json["enums"][0], "RED");
        assert_eq!(json["enums"][2], "BLUE");
    }
}

// ============================================================================
// Standard builder coverage per reference kind
// ============================================================================

mod standard_builders {
    use super::*;

    #[test]
    fn test_primitive_reference() {
        let env = TypeRegistry::new();
        let definition = dispatch(&env, &TypeRef::Primitive(PrimitiveKind::Int32)).unwrap();
        assert_eq!(definition.name, "int32");
    }

    #[test]
    fn test_scalar_reference_needs_no_declaration() {
        let env = TypeRegistry::new();
        let definition = dispatch(&env, &TypeRef::named("string")).unwrap();
        assert_eq!(definition.name, "string");
        assert!(definition.properties.is_empty());
    }

    #[test]
    fn test_array_reference() {
        let env = TypeRegistry::new();
        let definition = dispatch(
            &env,
            &TypeRef::array(TypeRef::Primitive(PrimitiveKind::Float64)),
        )
        .unwrap();
        assert_eq!(definition.name, "float64[]");
        assert_eq!(definition.items, vec!["float64"]);
    }

    #[test]
    fn test_declared_class_falls_through_to_general_builder() {
        let mut env = TypeRegistry::new();
        env.register(TypeDecl::class("geo.Shape").member(Member::new(
            "id",
            TypeRef::Primitive(PrimitiveKind::Int64),
        )));
        env.register(
            TypeDecl::class("geo.Circle")
                .extends("geo.Shape")
                .member(Member::new(
                    "radius",
                    TypeRef::Primitive(PrimitiveKind::Float64),
                )),
        );

        let definition = dispatch(&env, &TypeRef::named("geo.Circle")).unwrap();
        assert_eq!(definition.name, "geo.Circle");
        let props: Vec<&str> = definition
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(props, vec!["radius", "id"]);
    }

    #[test]
    fn test_enum_claimed_by_enum_builder_not_fallback() {
        let mut env = TypeRegistry::new();
        env.register(
            TypeDecl::enumeration("s.State").member(Member::with_modifiers(
                "ON",
                TypeRef::named("s.State"),
                Modifiers::public_static_final(),
            )),
        );
        let definition = dispatch(&env, &TypeRef::named("s.State")).unwrap();
        assert_eq!(definition.enums, vec!["ON"]);
        // the general builder never ran: constants are not properties
        assert!(definition.properties.is_empty());
    }
}

// ============================================================================
// No-match reporting
// ============================================================================

mod no_match {
    use super::*;

    #[test]
    fn test_unresolvable_named_reference_reports_no_applicable_builder() {
        let env = TypeRegistry::new();
        let err = dispatch(&env, &TypeRef::named("x.Unknown")).unwrap_err();
        assert_eq!(
            err,
            DispatchError::NoApplicableBuilder {
                type_name: "x.Unknown".to_string()
            }
        );
    }

    #[test]
    fn test_caller_composed_registry_without_fallback() {
        let mut registry = BuilderRegistry::new();
        registry.register(Box::new(EnumTypeBuilder));

        let mut env = TypeRegistry::new();
        env.register(TypeDecl::class("geo.Point"));

        let mut definition = TypeDefinition::default();
        let err = registry
            .dispatch(&env, &TypeRef::named("geo.Point"), &mut definition)
            .unwrap_err();
        assert!(matches!(err, DispatchError::NoApplicableBuilder { .. }));

        // registering the declared fallback restores the invariant
        registry.register(Box::new(GeneralDeclaredTypeBuilder::new()));
        registry
            .dispatch(&env, &TypeRef::named("geo.Point"), &mut definition)
            .unwrap();
        assert_eq!(definition.name, "geo.Point");
    }
}
