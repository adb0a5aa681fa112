//! Typelens Introspection Engine
//!
//! Extracts a language-agnostic structural type definition (field
//! names/types, enum constants, super/interface relationships) from a
//! type in a statically-typed object language, for use as RPC/service
//! metadata exchanged between heterogeneous clients.
//!
//! The engine is split into four layers, leaves first:
//! - **Predicates** (`predicates` module): total "is this type X?" tests
//! - **Hierarchy resolver** (`hierarchy` module): deduplicated,
//!   insertion-ordered closure of superclasses and interfaces
//! - **Member filter** (`fields` module): qualifying members of a type
//! - **Builder dispatch** (`builder`, `builders` modules): priority-ordered
//!   selection of the single applicable definition builder
//!
//! # Example
//!
//! ```
//! use typelens_engine::builder::default_registry;
//! use typelens_engine::definition::TypeDefinition;
//! use typelens_engine::model::{Member, Modifiers, TypeDecl, TypeRef, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(
//!     TypeDecl::enumeration("palette.Color")
//!         .member(Member::with_modifiers(
//!             "RED",
//!             TypeRef::named("palette.Color"),
//!             Modifiers::public_static_final(),
//!         )),
//! );
//!
//! let mut definition = TypeDefinition::default();
//! default_registry()
//!     .dispatch(&registry, &TypeRef::named("palette.Color"), &mut definition)
//!     .unwrap();
//! assert_eq!(definition.enums, vec!["RED"]);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod builder;
pub mod builders;
pub mod definition;
pub mod fields;
pub mod hierarchy;
pub mod predicates;

/// The host type-model abstraction, re-exported for downstream users
pub use typelens_model as model;

pub use builder::{
    default_registry, BuilderRegistry, DeclaredDefinitionBuilder, DefinitionBuilder, DispatchError,
};
pub use definition::{PropertyDefinition, TypeDefinition};
pub use fields::fields;
pub use hierarchy::{
    all_interfaces, all_super_types, all_super_types_excluding, excluding, hierarchical_types,
    hierarchical_types_excluding, hierarchical_types_excluding_refs, interfaces, super_type,
    TypeFilter,
};
pub use predicates::ScalarTypes;
