//! Hierarchy closure resolver
//!
//! Walks superclass chains and interface graphs into deduplicated,
//! insertion-ordered collections. Every operation is total: absent input
//! or an unresolvable ancestor yields an empty (or truncated) result,
//! never an error. Although well-formed hosts guarantee acyclic
//! hierarchies, every walk carries an explicit visited set so the
//! resolver stays total under malformed input.
//!
//! Ordering is discovery order: self, then direct supertypes depth-first,
//! then direct interfaces depth-first. Repeated calls on the same
//! declaration yield the same sequence; downstream builders rely on this
//! to assign stable member ordering in the produced definitions.

use log::trace;
use rustc_hash::FxHashSet;
use typelens_model::{DeclKind, TypeDecl, TypeEnv, TypeRef};

/// Filter predicate over declarations
///
/// Multiple filters compose with AND semantics: a declaration must pass
/// every filter to remain in a result.
pub type TypeFilter<'f> = &'f dyn Fn(&TypeDecl) -> bool;

/// Deduplicated, insertion-ordered set of declarations
///
/// Keyed by canonical name, so a declaration reachable via multiple
/// paths (diamond interface inheritance) appears once, at its first
/// discovery position.
#[derive(Default)]
struct DeclSet<'e> {
    entries: Vec<&'e TypeDecl>,
    seen: FxHashSet<&'e str>,
}

impl<'e> DeclSet<'e> {
    /// Insert a declaration; returns false if already present
    fn insert(&mut self, decl: &'e TypeDecl) -> bool {
        if self.seen.insert(decl.canonical_name.as_str()) {
            self.entries.push(decl);
            true
        } else {
            false
        }
    }

    /// Apply filters (AND semantics) and unwrap to a vector
    fn into_filtered(self, filters: &[TypeFilter<'_>]) -> Vec<&'e TypeDecl> {
        self.entries
            .into_iter()
            .filter(|decl| filters.iter().all(|keep| keep(decl)))
            .collect()
    }
}

/// Immediate superclass of a declaration
///
/// Absent when the declaration is absent, is an interface, is a root
/// type, or names a superclass the environment cannot resolve.
pub fn super_type<'e>(env: &'e dyn TypeEnv, decl: Option<&TypeDecl>) -> Option<&'e TypeDecl> {
    let decl = decl?;
    if decl.kind == DeclKind::Interface {
        return None;
    }
    env.resolve_ref(decl.super_class.as_ref()?)
}

/// Transitive superclass chain of a declaration, nearest first
///
/// Each ancestor appears once. The chain is linear by construction, but
/// a visited set still guards the walk so malformed input terminates.
pub fn all_super_types<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&'e TypeDecl>,
    filters: &[TypeFilter<'_>],
) -> Vec<&'e TypeDecl> {
    let Some(decl) = decl else {
        return Vec::new();
    };
    let mut set = DeclSet::default();
    let mut current = super_type(env, Some(decl));
    while let Some(ancestor) = current {
        if !set.insert(ancestor) {
            break;
        }
        trace!(
            "ancestor {} of {}",
            ancestor.canonical_name,
            decl.canonical_name
        );
        current = super_type(env, Some(ancestor));
    }
    set.into_filtered(filters)
}

/// Directly declared interfaces of a declaration, in syntactic order
///
/// Interfaces the environment cannot resolve are skipped.
pub fn interfaces<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&TypeDecl>,
    filters: &[TypeFilter<'_>],
) -> Vec<&'e TypeDecl> {
    let Some(decl) = decl else {
        return Vec::new();
    };
    decl.interfaces
        .iter()
        .filter_map(|ifc| env.resolve_ref(ifc))
        .filter(|resolved| filters.iter().all(|keep| keep(resolved)))
        .collect()
}

/// Transitively implemented interfaces of a declaration
///
/// For each direct interface: the interface itself, then its own
/// transitive interfaces, depth-first. Interfaces implemented via the
/// superclass chain count and are unioned in afterwards. Diamonds
/// collapse to a single entry at first discovery position.
pub fn all_interfaces<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&'e TypeDecl>,
    filters: &[TypeFilter<'_>],
) -> Vec<&'e TypeDecl> {
    let Some(decl) = decl else {
        return Vec::new();
    };
    let mut set = DeclSet::default();
    collect_interfaces(env, decl, &mut set);
    for ancestor in all_super_types(env, Some(decl), &[]) {
        collect_interfaces(env, ancestor, &mut set);
    }
    set.into_filtered(filters)
}

fn collect_interfaces<'e>(env: &'e dyn TypeEnv, decl: &TypeDecl, set: &mut DeclSet<'e>) {
    for ifc in &decl.interfaces {
        let Some(resolved) = env.resolve_ref(ifc) else {
            continue;
        };
        // first discovery wins; an already-seen interface brought its
        // own closure with it
        if set.insert(resolved) {
            collect_interfaces(env, resolved, set);
        }
    }
}

/// Hierarchical closure of a declaration
///
/// Composes self, the superclass chain, and the transitive interfaces,
/// each behind its own toggle; self always precedes ancestors, ancestors
/// always precede interfaces. Filters apply to the composed result.
pub fn hierarchical_types<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&'e TypeDecl>,
    include_self: bool,
    include_super_types: bool,
    include_super_interfaces: bool,
    filters: &[TypeFilter<'_>],
) -> Vec<&'e TypeDecl> {
    let Some(decl) = decl else {
        return Vec::new();
    };
    let mut set = DeclSet::default();
    if include_self {
        set.insert(decl);
    }
    if include_super_types {
        for ancestor in all_super_types(env, Some(decl), &[]) {
            set.insert(ancestor);
        }
    }
    if include_super_interfaces {
        for ifc in all_interfaces(env, Some(decl), &[]) {
            set.insert(ifc);
        }
    }
    set.into_filtered(filters)
}

/// Filter rejecting exactly the given canonical names
///
/// Sugar for the exclusion-list overloads: used to drop uninteresting
/// roots (a universal object base, a framework marker interface) before
/// member extraction proceeds.
pub fn excluding<'n>(canonical_names: &'n [&'n str]) -> impl Fn(&TypeDecl) -> bool + 'n {
    move |decl| !canonical_names.contains(&decl.canonical_name.as_str())
}

/// [`all_super_types`] minus the given canonical names
pub fn all_super_types_excluding<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&'e TypeDecl>,
    excluded_names: &[&str],
) -> Vec<&'e TypeDecl> {
    let keep = excluding(excluded_names);
    all_super_types(env, decl, &[&keep])
}

/// Full hierarchical closure (self, supertypes, interfaces) minus the
/// given canonical names
pub fn hierarchical_types_excluding<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&'e TypeDecl>,
    excluded_names: &[&str],
) -> Vec<&'e TypeDecl> {
    let keep = excluding(excluded_names);
    hierarchical_types(env, decl, true, true, true, &[&keep])
}

/// Full hierarchical closure minus the given type references
///
/// References are excluded by canonical name, so a reference from any
/// environment excludes the matching declaration.
pub fn hierarchical_types_excluding_refs<'e>(
    env: &'e dyn TypeEnv,
    decl: Option<&'e TypeDecl>,
    excluded: &[TypeRef],
) -> Vec<&'e TypeDecl> {
    let names: Vec<String> = excluded.iter().map(TypeRef::canonical_name).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    hierarchical_types_excluding(env, decl, &name_refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typelens_model::{TypeDecl, TypeRegistry};

    /// Shape -> Figure -> core.Object, Shape implements Drawable,
    /// Drawable extends Renderable
    fn env() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::class("core.Object"));
        registry.register(TypeDecl::interface("gfx.Renderable"));
        registry.register(TypeDecl::interface("gfx.Drawable").implements("gfx.Renderable"));
        registry.register(TypeDecl::class("geo.Figure").extends("core.Object"));
        registry.register(
            TypeDecl::class("geo.Shape")
                .extends("geo.Figure")
                .implements("gfx.Drawable"),
        );
        registry
    }

    fn names(decls: &[&TypeDecl]) -> Vec<String> {
        decls.iter().map(|d| d.canonical_name.clone()).collect()
    }

    #[test]
    fn test_super_type() {
        let env = env();
        let shape = env.get_by_name("geo.Shape");
        let sup = super_type(&env, shape).unwrap();
        assert_eq!(sup.canonical_name, "geo.Figure");

        // interfaces and roots have no superclass
        assert!(super_type(&env, env.get_by_name("gfx.Drawable")).is_none());
        assert!(super_type(&env, env.get_by_name("core.Object")).is_none());
        assert!(super_type(&env, None).is_none());
    }

    #[test]
    fn test_super_type_unresolvable_parent_is_absent() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::class("a.Orphan").extends("a.Missing"));
        assert!(super_type(&registry, registry.get_by_name("a.Orphan")).is_none());
    }

    #[test]
    fn test_all_super_types_nearest_first() {
        let env = env();
        let chain = all_super_types(&env, env.get_by_name("geo.Shape"), &[]);
        assert_eq!(names(&chain), vec!["geo.Figure", "core.Object"]);
    }

    #[test]
    fn test_all_super_types_with_filters_anded() {
        let env = env();
        let not_object = |d: &TypeDecl| d.canonical_name != "core.Object";
        let not_figure = |d: &TypeDecl| d.canonical_name != "geo.Figure";
        let chain = all_super_types(
            &env,
            env.get_by_name("geo.Shape"),
            &[&not_object, &not_figure],
        );
        assert!(chain.is_empty());
    }

    #[test]
    fn test_all_super_types_total_under_cycle() {
        // malformed input: A extends B extends A
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::class("x.A").extends("x.B"));
        registry.register(TypeDecl::class("x.B").extends("x.A"));

        let chain = all_super_types(&registry, registry.get_by_name("x.A"), &[]);
        assert_eq!(names(&chain), vec!["x.B", "x.A"]);
    }

    #[test]
    fn test_direct_interfaces_in_syntactic_order() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::interface("i.B"));
        registry.register(TypeDecl::interface("i.A"));
        registry.register(TypeDecl::class("x.C").implements("i.B").implements("i.A"));

        let direct = interfaces(&registry, registry.get_by_name("x.C"), &[]);
        assert_eq!(names(&direct), vec!["i.B", "i.A"]);
    }

    #[test]
    fn test_all_interfaces_includes_transitive_and_inherited() {
        let env = env();
        let all = all_interfaces(&env, env.get_by_name("geo.Shape"), &[]);
        assert_eq!(names(&all), vec!["gfx.Drawable", "gfx.Renderable"]);
    }

    #[test]
    fn test_all_interfaces_diamond_deduplicated() {
        // Sub implements A and B; both extend Base
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::interface("d.Base"));
        registry.register(TypeDecl::interface("d.A").implements("d.Base"));
        registry.register(TypeDecl::interface("d.B").implements("d.Base"));
        registry.register(TypeDecl::class("d.Sub").implements("d.A").implements("d.B"));

        let all = all_interfaces(&registry, registry.get_by_name("d.Sub"), &[]);
        assert_eq!(names(&all), vec!["d.A", "d.Base", "d.B"]);
    }

    #[test]
    fn test_hierarchical_types_ordering_and_toggles() {
        let env = env();
        let shape = env.get_by_name("geo.Shape");

        let full = hierarchical_types(&env, shape, true, true, true, &[]);
        assert_eq!(
            names(&full),
            vec![
                "geo.Shape",
                "geo.Figure",
                "core.Object",
                "gfx.Drawable",
                "gfx.Renderable"
            ]
        );

        let without_self = hierarchical_types(&env, shape, false, true, true, &[]);
        assert!(!names(&without_self).contains(&"geo.Shape".to_string()));

        let supers_only = hierarchical_types(&env, shape, false, true, false, &[]);
        assert_eq!(names(&supers_only), vec!["geo.Figure", "core.Object"]);
    }

    #[test]
    fn test_exclusion_removes_exactly_the_named_entries() {
        let env = env();
        let chain =
            all_super_types_excluding(&env, env.get_by_name("geo.Shape"), &["core.Object"]);
        assert_eq!(names(&chain), vec!["geo.Figure"]);

        let full =
            hierarchical_types_excluding(&env, env.get_by_name("geo.Shape"), &["core.Object"]);
        assert_eq!(
            names(&full),
            vec!["geo.Shape", "geo.Figure", "gfx.Drawable", "gfx.Renderable"]
        );
    }

    #[test]
    fn test_exclusion_by_type_reference() {
        let env = env();
        let full = hierarchical_types_excluding_refs(
            &env,
            env.get_by_name("geo.Shape"),
            &[TypeRef::named("core.Object")],
        );
        assert!(!names(&full).contains(&"core.Object".to_string()));
        assert!(names(&full).contains(&"geo.Figure".to_string()));
    }

    #[test]
    fn test_repeated_calls_are_order_stable() {
        let env = env();
        let shape = env.get_by_name("geo.Shape");
        let first = names(&hierarchical_types(&env, shape, true, true, true, &[]));
        let second = names(&hierarchical_types(&env, shape, true, true, true, &[]));
        assert_eq!(first, second);
    }
}
