//! Member filter
//!
//! Selects qualifying members of a type through a caller-supplied
//! predicate over member modifiers. Resolution failure yields an empty
//! list: absence of a type from the model is a normal, frequent
//! condition during partial processing, not a fault.

use typelens_model::{Member, TypeEnv, TypeRef};

/// Qualifying members of the referenced type, in declaration order
///
/// The target is resolved by canonical name through the environment; an
/// unresolvable (or non-declared) reference yields an empty list.
pub fn fields<'e, P>(env: &'e dyn TypeEnv, ty: Option<&TypeRef>, predicate: P) -> Vec<&'e Member>
where
    P: Fn(&Member) -> bool,
{
    let Some(decl) = ty.and_then(|t| env.resolve_ref(t)) else {
        return Vec::new();
    };
    decl.members
        .iter()
        .filter(|member| predicate(member))
        .collect()
}
