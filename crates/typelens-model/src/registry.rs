//! In-memory type registry, the reference [`TypeEnv`] binding

use crate::decl::TypeDecl;
use crate::env::TypeEnv;
use rustc_hash::FxHashMap;

/// In-memory store of type declarations
///
/// Declarations are indexed by registration order and by canonical name.
/// Re-registering a canonical name replaces the index entry (last
/// registration wins for lookup); earlier declarations stay addressable
/// by id.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Declarations in registration order
    decls: Vec<TypeDecl>,
    /// Canonical name to id mapping
    name_to_id: FxHashMap<String, usize>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            decls: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }

    /// Register a declaration, returning its id
    pub fn register(&mut self, decl: TypeDecl) -> usize {
        let id = self.decls.len();
        self.name_to_id.insert(decl.canonical_name.clone(), id);
        self.decls.push(decl);
        id
    }

    /// Get a declaration by id
    pub fn get(&self, id: usize) -> Option<&TypeDecl> {
        self.decls.get(id)
    }

    /// Get a declaration by canonical name
    pub fn get_by_name(&self, canonical_name: &str) -> Option<&TypeDecl> {
        self.name_to_id
            .get(canonical_name)
            .and_then(|id| self.decls.get(*id))
    }

    /// Number of registered declarations
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterate over declarations with their ids, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TypeDecl)> {
        self.decls.iter().enumerate()
    }
}

impl TypeEnv for TypeRegistry {
    fn resolve(&self, canonical_name: &str) -> Option<&TypeDecl> {
        self.get_by_name(canonical_name)
    }
}
