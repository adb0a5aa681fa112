//! Type references: the use of a type at a member, superclass, or
//! interface position

use crate::kind::{PrimitiveKind, TypeKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A use of a type
///
/// References are compared by their canonical string form, never by
/// identity, so two environments describing the same declaration produce
/// interchangeable references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// A primitive type
    Primitive(PrimitiveKind),
    /// An array of some element type
    Array {
        /// Element type
        element: Box<TypeRef>,
    },
    /// A declared type, by canonical name
    Named(String),
}

impl TypeRef {
    /// Reference to a declared type by canonical name
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Array of the given element type
    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
        }
    }

    /// Primary kind of this reference
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeRef::Primitive(_) => TypeKind::Primitive,
            TypeRef::Array { .. } => TypeKind::Array,
            TypeRef::Named(_) => TypeKind::Declared,
        }
    }

    /// Canonical string form of this reference
    ///
    /// Arrays render as `element[]`, nested arrays as `element[][]`.
    pub fn canonical_name(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.canonical_name().to_string(),
            TypeRef::Array { element } => format!("{}[]", element.canonical_name()),
            TypeRef::Named(name) => name.clone(),
        }
    }

    /// Canonical name of the declared type, if this is a declared reference
    pub fn as_named(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Element type, if this is an array reference
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array { element } => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(kind) => write!(f, "{kind}"),
            TypeRef::Array { element } => write!(f, "{element}[]"),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}
