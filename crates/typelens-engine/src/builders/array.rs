//! Builder for array types

use crate::builder::DefinitionBuilder;
use crate::definition::TypeDefinition;
use crate::predicates::is_array_type;
use typelens_model::{TypeEnv, TypeRef};

/// Records an array type and its element type
pub struct ArrayTypeBuilder;

impl DefinitionBuilder for ArrayTypeBuilder {
    fn name(&self) -> &'static str {
        "array"
    }

    fn accept(&self, _env: &dyn TypeEnv, ty: &TypeRef) -> bool {
        is_array_type(Some(ty))
    }

    fn build(&self, _env: &dyn TypeEnv, ty: &TypeRef, definition: &mut TypeDefinition) {
        definition.name = ty.canonical_name();
        if let Some(element) = ty.element() {
            definition.items.push(element.canonical_name());
        }
    }

    fn priority(&self) -> i32 {
        20
    }
}
