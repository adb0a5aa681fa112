//! Structural definition record
//!
//! The caller-owned accumulator a dispatched builder populates. Created
//! once per top-level resolution request, passed by mutable reference
//! into the dispatch, and serialized by the outer pipeline afterwards.
//! Collections are append-only and preserve insertion order; enum
//! constant order reflects declaration order and is semantically
//! meaningful to consumers.

use serde::{Deserialize, Serialize};

/// A named property of a declared type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Property name
    pub name: String,
    /// Canonical name of the property's declared type
    pub type_name: String,
}

impl PropertyDefinition {
    /// New property definition
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Structural definition of a type, for cross-system metadata exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Canonical name of the described type
    pub name: String,
    /// Enum constant names, in declaration order
    pub enums: Vec<String>,
    /// Properties, in declaration order (own before inherited)
    pub properties: Vec<PropertyDefinition>,
    /// Element type names, for array types
    pub items: Vec<String>,
}

impl TypeDefinition {
    /// New empty definition for the named type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
