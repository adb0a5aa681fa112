//! Modifier flags for members of declared types

use serde::{Deserialize, Serialize};

/// Modifier flags for a member
///
/// A plain flag record over the semantic modifiers the engine cares
/// about. Hosts with richer modifier sets map the extras away in their
/// binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Public visibility
    pub is_public: bool,
    /// Private visibility
    pub is_private: bool,
    /// Protected visibility
    pub is_protected: bool,
    /// Static (type-level) member
    pub is_static: bool,
    /// Final/readonly member
    pub is_final: bool,
    /// Abstract member
    pub is_abstract: bool,
}

impl Modifiers {
    /// Public instance member
    pub fn public() -> Self {
        Self {
            is_public: true,
            ..Default::default()
        }
    }

    /// Private instance member
    pub fn private() -> Self {
        Self {
            is_private: true,
            ..Default::default()
        }
    }

    /// The public+static+final triple carried by enum constants
    pub fn public_static_final() -> Self {
        Self {
            is_public: true,
            is_static: true,
            is_final: true,
            ..Default::default()
        }
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as final
    pub fn as_final(mut self) -> Self {
        self.is_final = true;
        self
    }
}
