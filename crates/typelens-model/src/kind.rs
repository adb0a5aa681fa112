//! Kind taxonomy for type references and declared elements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary kind of a type reference
///
/// Every reference has exactly one primary kind; the kinds are
/// independent axes, not a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// Built-in primitive types (see [`PrimitiveKind`])
    Primitive,
    /// Array of some element type
    Array,
    /// Reference to a declared (named) type
    Declared,
}

/// Kind of a declared element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    /// Concrete or abstract class
    Class,
    /// Interface
    Interface,
    /// Enumeration
    Enum,
    /// Annotation/attribute type
    Annotation,
}

/// Primitive width family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Boolean
    Boolean,
    /// Single character
    Char,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit IEEE 754 float
    Float32,
    /// 64-bit IEEE 754 float
    Float64,
}

impl PrimitiveKind {
    /// Canonical name of the primitive, as it appears in type references
    pub const fn canonical_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_canonical_names() {
        assert_eq!(PrimitiveKind::Boolean.canonical_name(), "boolean");
        assert_eq!(PrimitiveKind::Int32.canonical_name(), "int32");
        assert_eq!(PrimitiveKind::Float64.canonical_name(), "float64");
        assert_eq!(PrimitiveKind::Char.to_string(), "char");
    }
}
