//! Builder dispatch protocol
//!
//! A registry of polymorphic definition builders, each declaring an
//! acceptance test and a priority. Dispatch has exactly two states per
//! request: *selecting* (scan builders in ascending-priority order until
//! one accepts) and *built* (the winner has populated the definition;
//! control returns to the caller, no retry).
//!
//! Priority convention: **smaller integer = tried first**; ties are
//! broken by registration order, first-registered wins. The registry is
//! intended to be populated once at startup and treated as read-only
//! thereafter; concurrent dispatch over a frozen registry needs no
//! locking.

use crate::builders::{
    ArrayTypeBuilder, EnumTypeBuilder, GeneralDeclaredTypeBuilder, PrimitiveTypeBuilder,
    ScalarTypeBuilder,
};
use crate::definition::TypeDefinition;
use log::debug;
use once_cell::sync::Lazy;
use thiserror::Error;
use typelens_model::{TypeDecl, TypeEnv, TypeRef};

/// Priority assumed by builders that do not declare one
pub const DEFAULT_PRIORITY: i32 = 0;

/// A strategy that knows how to populate a structural definition for one
/// category of type
///
/// Builders are stateless: identity is the acceptance predicate plus the
/// priority integer. The dispatch layer offers every type to every
/// builder; rejecting a reference kind the builder does not handle is
/// the builder's own responsibility.
pub trait DefinitionBuilder: Send + Sync {
    /// Short name, for logging and diagnostics
    fn name(&self) -> &'static str;

    /// Whether this builder handles the given type
    fn accept(&self, env: &dyn TypeEnv, ty: &TypeRef) -> bool;

    /// Populate the definition for an accepted type
    fn build(&self, env: &dyn TypeEnv, ty: &TypeRef, definition: &mut TypeDefinition);

    /// Scan priority; smaller runs earlier
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }
}

/// A [`DefinitionBuilder`] that only handles declared types
///
/// The blanket impl supplies the kind guard: non-declared references and
/// declared references the environment cannot resolve are rejected
/// before the semantic predicate runs, composing "is this a declared
/// type" with the builder's own test.
pub trait DeclaredDefinitionBuilder: Send + Sync {
    /// Short name, for logging and diagnostics
    fn name(&self) -> &'static str;

    /// Whether this builder handles the given declaration
    fn accept_decl(&self, env: &dyn TypeEnv, decl: &TypeDecl) -> bool;

    /// Populate the definition for an accepted declaration
    fn build_decl(&self, env: &dyn TypeEnv, decl: &TypeDecl, definition: &mut TypeDefinition);

    /// Scan priority; smaller runs earlier
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }
}

impl<B: DeclaredDefinitionBuilder> DefinitionBuilder for B {
    fn name(&self) -> &'static str {
        DeclaredDefinitionBuilder::name(self)
    }

    fn accept(&self, env: &dyn TypeEnv, ty: &TypeRef) -> bool {
        match env.resolve_ref(ty) {
            Some(decl) => self.accept_decl(env, decl),
            None => false,
        }
    }

    fn build(&self, env: &dyn TypeEnv, ty: &TypeRef, definition: &mut TypeDefinition) {
        if let Some(decl) = env.resolve_ref(ty) {
            self.build_decl(env, decl, definition);
        }
    }

    fn priority(&self) -> i32 {
        DeclaredDefinitionBuilder::priority(self)
    }
}

/// Dispatch failure
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// The scan exhausted the registry without a match
    ///
    /// Surfaced immediately and never retried: retrying with the same
    /// registry and type cannot change the outcome. Whether this aborts
    /// the overall metadata build or is tolerated per type is the
    /// caller's decision.
    #[error("no applicable builder for type: {type_name}")]
    NoApplicableBuilder {
        /// Canonical name of the unmatched type
        type_name: String,
    },
}

/// Ordered collection of definition builders
///
/// Populate at startup, then treat as read-only. The caller composing a
/// registry is responsible for the "some builder always matches"
/// invariant, usually by registering a catch-all at the largest
/// priority.
#[derive(Default)]
pub struct BuilderRegistry {
    builders: Vec<Box<dyn DefinitionBuilder>>,
}

impl BuilderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Register a builder
    ///
    /// The scan order stays sorted by ascending priority; the sort is
    /// stable, so equal priorities keep registration order.
    pub fn register(&mut self, builder: Box<dyn DefinitionBuilder>) {
        self.builders.push(builder);
        self.builders.sort_by_key(|b| b.priority());
    }

    /// Number of registered builders
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Select and invoke the single applicable builder for the type
    ///
    /// The first acceptor in ascending-priority order wins and mutates
    /// `definition` in place; at most one builder mutates a given
    /// definition per dispatch.
    pub fn dispatch(
        &self,
        env: &dyn TypeEnv,
        ty: &TypeRef,
        definition: &mut TypeDefinition,
    ) -> Result<(), DispatchError> {
        for builder in &self.builders {
            if builder.accept(env, ty) {
                debug!("building definition of {} via {}", ty, builder.name());
                builder.build(env, ty, definition);
                return Ok(());
            }
        }
        Err(DispatchError::NoApplicableBuilder {
            type_name: ty.canonical_name(),
        })
    }
}

static DEFAULT_REGISTRY: Lazy<BuilderRegistry> = Lazy::new(|| {
    let mut registry = BuilderRegistry::new();
    registry.register(Box::new(PrimitiveTypeBuilder));
    registry.register(Box::new(ScalarTypeBuilder::default()));
    registry.register(Box::new(ArrayTypeBuilder));
    registry.register(Box::new(EnumTypeBuilder));
    registry.register(Box::new(GeneralDeclaredTypeBuilder::default()));
    registry
});

/// Process-wide registry carrying the standard builder set
///
/// Built once on first use and read-only thereafter, so concurrent
/// dispatch from multiple threads is safe without coordination.
pub fn default_registry() -> &'static BuilderRegistry {
    &DEFAULT_REGISTRY
}
