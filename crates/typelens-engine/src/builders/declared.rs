//! Fallback builder for declared types

use crate::builder::DeclaredDefinitionBuilder;
use crate::definition::{PropertyDefinition, TypeDefinition};
use crate::hierarchy::{excluding, hierarchical_types};
use typelens_model::{TypeDecl, TypeEnv};

/// Populates properties for a declared type nothing more specific claimed
///
/// Walks the type and its superclass chain (own fields before inherited
/// ones, declaration order within each type) and records every instance
/// field as a property. Interfaces carry no instance fields and are left
/// out of the walk. Universal roots the deployment wants dropped from
/// every definition are configured as excluded names.
#[derive(Default)]
pub struct GeneralDeclaredTypeBuilder {
    excluded_roots: Vec<String>,
}

impl GeneralDeclaredTypeBuilder {
    /// Fallback builder with no excluded roots
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback builder excluding the given canonical names from the walk
    pub fn excluding_roots<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_roots: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl DeclaredDefinitionBuilder for GeneralDeclaredTypeBuilder {
    fn name(&self) -> &'static str {
        "general-declared"
    }

    fn accept_decl(&self, _env: &dyn TypeEnv, _decl: &TypeDecl) -> bool {
        true
    }

    fn build_decl(&self, env: &dyn TypeEnv, decl: &TypeDecl, definition: &mut TypeDefinition) {
        definition.name = decl.canonical_name.clone();
        let excluded: Vec<&str> = self.excluded_roots.iter().map(String::as_str).collect();
        let keep = excluding(&excluded);
        for owner in hierarchical_types(env, Some(decl), true, true, false, &[&keep]) {
            for member in owner.members.iter().filter(|m| !m.modifiers.is_static) {
                definition.properties.push(PropertyDefinition::new(
                    member.name.as_str(),
                    member.ty.canonical_name(),
                ));
            }
        }
    }

    // the declared fallback: runs after every specific builder
    fn priority(&self) -> i32 {
        110
    }
}
