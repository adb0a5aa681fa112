//! Builder for enum types

use crate::builder::DeclaredDefinitionBuilder;
use crate::definition::TypeDefinition;
use crate::fields::fields;
use typelens_model::{DeclKind, Member, TypeDecl, TypeEnv};

/// Extracts enum constants from an enum declaration
///
/// Enum constants are the members carrying the public+static+final
/// modifier triple; helper members with any other shape are excluded.
/// Constant order in the definition preserves declaration order.
pub struct EnumTypeBuilder;

impl EnumTypeBuilder {
    fn is_enum_member(member: &Member) -> bool {
        let m = member.modifiers;
        m.is_public && m.is_static && m.is_final
    }
}

impl DeclaredDefinitionBuilder for EnumTypeBuilder {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn accept_decl(&self, _env: &dyn TypeEnv, decl: &TypeDecl) -> bool {
        decl.kind == DeclKind::Enum
    }

    fn build_decl(&self, env: &dyn TypeEnv, decl: &TypeDecl, definition: &mut TypeDefinition) {
        definition.name = decl.canonical_name.clone();
        for constant in fields(env, Some(&decl.type_ref()), Self::is_enum_member) {
            definition.enums.push(constant.name.clone());
        }
    }

    // late in the chain: more specific builders get the first look
    fn priority(&self) -> i32 {
        100
    }
}
