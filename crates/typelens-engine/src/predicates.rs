//! Type predicates
//!
//! Pure, total tests over type references. Every predicate treats an
//! absent handle as `false` and never fails; absence of a declaration
//! from the environment is a normal condition, not a fault.

use rustc_hash::FxHashSet;
use typelens_model::{DeclKind, TypeEnv, TypeRef};

/// Frozen allow-list of scalar type names
///
/// Constructed once and passed by reference, so deployments and tests
/// can override the list without touching process-wide state. The
/// default list is closed and hardcoded; it is not extensible at
/// runtime.
#[derive(Debug, Clone)]
pub struct ScalarTypes {
    names: FxHashSet<String>,
}

/// Canonical names in the default scalar allow-list
pub const DEFAULT_SCALAR_NAMES: [&str; 12] = [
    "boolean", "char", "int8", "int16", "int32", "int64", "float32", "float64", "decimal",
    "bigint", "string", "date",
];

impl ScalarTypes {
    /// Allow-list over an explicit set of canonical names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a canonical name is on the allow-list
    pub fn contains(&self, canonical_name: &str) -> bool {
        self.names.contains(canonical_name)
    }
}

impl Default for ScalarTypes {
    fn default() -> Self {
        Self::new(DEFAULT_SCALAR_NAMES)
    }
}

/// Whether the reference is a primitive type
pub fn is_primitive_type(ty: Option<&TypeRef>) -> bool {
    matches!(ty, Some(TypeRef::Primitive(_)))
}

/// Whether the reference is an array type
pub fn is_array_type(ty: Option<&TypeRef>) -> bool {
    matches!(ty, Some(TypeRef::Array { .. }))
}

/// Whether the reference is a declared (named) type
pub fn is_declared_type(ty: Option<&TypeRef>) -> bool {
    matches!(ty, Some(TypeRef::Named(_)))
}

/// Whether the reference resolves to a class declaration
pub fn is_class_type(env: &dyn TypeEnv, ty: Option<&TypeRef>) -> bool {
    decl_kind(env, ty) == Some(DeclKind::Class)
}

/// Whether the reference resolves to an interface declaration
pub fn is_interface_type(env: &dyn TypeEnv, ty: Option<&TypeRef>) -> bool {
    decl_kind(env, ty) == Some(DeclKind::Interface)
}

/// Whether the reference resolves to an enum declaration
pub fn is_enum_type(env: &dyn TypeEnv, ty: Option<&TypeRef>) -> bool {
    decl_kind(env, ty) == Some(DeclKind::Enum)
}

/// Whether the reference resolves to an annotation declaration
pub fn is_annotation_type(env: &dyn TypeEnv, ty: Option<&TypeRef>) -> bool {
    decl_kind(env, ty) == Some(DeclKind::Annotation)
}

/// Whether two references name the same type
///
/// Comparison is by canonical string form, not identity, so references
/// produced by different environments compare equal when they describe
/// the same declaration.
pub fn is_same_type(a: Option<&TypeRef>, b: Option<&TypeRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.canonical_name() == b.canonical_name(),
        _ => false,
    }
}

/// Whether the reference names the given canonical type
pub fn is_same_type_name(ty: Option<&TypeRef>, canonical_name: &str) -> bool {
    ty.is_some_and(|t| t.canonical_name() == canonical_name)
}

/// Whether the reference is on the scalar allow-list
pub fn is_simple_type(scalars: &ScalarTypes, ty: Option<&TypeRef>) -> bool {
    ty.is_some_and(|t| scalars.contains(t.canonical_name().as_str()))
}

fn decl_kind(env: &dyn TypeEnv, ty: Option<&TypeRef>) -> Option<DeclKind> {
    ty.and_then(|t| env.resolve_ref(t)).map(|d| d.kind)
}
