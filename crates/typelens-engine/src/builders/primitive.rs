//! Builder for primitive types

use crate::builder::DefinitionBuilder;
use crate::definition::TypeDefinition;
use crate::predicates::is_primitive_type;
use typelens_model::{TypeEnv, TypeRef};

/// Records the canonical name of a primitive type
///
/// Primitives have no structure; the definition carries the name only.
pub struct PrimitiveTypeBuilder;

impl DefinitionBuilder for PrimitiveTypeBuilder {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn accept(&self, _env: &dyn TypeEnv, ty: &TypeRef) -> bool {
        is_primitive_type(Some(ty))
    }

    fn build(&self, _env: &dyn TypeEnv, ty: &TypeRef, definition: &mut TypeDefinition) {
        definition.name = ty.canonical_name();
    }

    fn priority(&self) -> i32 {
        0
    }
}
