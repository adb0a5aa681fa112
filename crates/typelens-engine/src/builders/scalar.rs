//! Builder for scalar (simple) types

use crate::builder::DefinitionBuilder;
use crate::definition::TypeDefinition;
use crate::predicates::{is_simple_type, ScalarTypes};
use typelens_model::{TypeEnv, TypeRef};

/// Records the canonical name of a type on the scalar allow-list
///
/// Scalars (strings, decimals, dates and the like) are exchanged by
/// name; they carry no structure worth expanding.
#[derive(Default)]
pub struct ScalarTypeBuilder {
    scalars: ScalarTypes,
}

impl ScalarTypeBuilder {
    /// Builder over an explicit allow-list
    pub fn with_scalars(scalars: ScalarTypes) -> Self {
        Self { scalars }
    }
}

impl DefinitionBuilder for ScalarTypeBuilder {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn accept(&self, _env: &dyn TypeEnv, ty: &TypeRef) -> bool {
        is_simple_type(&self.scalars, Some(ty))
    }

    fn build(&self, _env: &dyn TypeEnv, ty: &TypeRef, definition: &mut TypeDefinition) {
        definition.name = ty.canonical_name();
    }

    fn priority(&self) -> i32 {
        10
    }
}
