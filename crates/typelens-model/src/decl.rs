//! Type declarations and their members

use crate::kind::DeclKind;
use crate::modifiers::Modifiers;
use crate::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

/// A member (field) of a declared type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Simple name
    pub name: String,
    /// Declared type of the member
    pub ty: TypeRef,
    /// Modifier flags
    pub modifiers: Modifiers,
}

impl Member {
    /// Public instance member
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::public(),
        }
    }

    /// Member with explicit modifiers
    pub fn with_modifiers(name: impl Into<String>, ty: TypeRef, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers,
        }
    }
}

/// A type declaration in the host type system
///
/// Immutable once registered. Member order is declaration order and is
/// semantically meaningful to consumers of the produced definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Simple (unqualified) name
    pub name: String,
    /// Canonical (fully qualified) name
    pub canonical_name: String,
    /// Kind of the declared element
    pub kind: DeclKind,
    /// Direct superclass, absent for interfaces and root types
    pub super_class: Option<TypeRef>,
    /// Directly declared interfaces, in syntactic order
    pub interfaces: Vec<TypeRef>,
    /// Declared members, in declaration order
    pub members: Vec<Member>,
}

impl TypeDecl {
    /// New declaration of the given kind
    ///
    /// The simple name is the last dot-separated segment of the
    /// canonical name.
    pub fn new(kind: DeclKind, canonical_name: impl Into<String>) -> Self {
        let canonical_name = canonical_name.into();
        let name = canonical_name
            .rsplit('.')
            .next()
            .unwrap_or(canonical_name.as_str())
            .to_string();
        Self {
            name,
            canonical_name,
            kind,
            super_class: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    /// New class declaration
    pub fn class(canonical_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, canonical_name)
    }

    /// New interface declaration
    pub fn interface(canonical_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Interface, canonical_name)
    }

    /// New enum declaration
    pub fn enumeration(canonical_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Enum, canonical_name)
    }

    /// New annotation declaration
    pub fn annotation(canonical_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Annotation, canonical_name)
    }

    /// Set the direct superclass
    pub fn extends(mut self, canonical_name: impl Into<String>) -> Self {
        self.super_class = Some(TypeRef::named(canonical_name));
        self
    }

    /// Append a directly declared interface
    pub fn implements(mut self, canonical_name: impl Into<String>) -> Self {
        self.interfaces.push(TypeRef::named(canonical_name));
        self
    }

    /// Append a member
    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Reference to this declaration
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::Named(self.canonical_name.clone())
    }
}
