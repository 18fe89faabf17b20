//! Method sets of the exported structs of a package.
//!
//! The method set of a struct is the set of methods callable through a pointer to it: every
//! method declared on the type, regardless of its receiver, plus the methods promoted from
//! embedded fields. Promotion follows the selector rules of Go:
//!
//! * a name found at a shallower embedding depth shadows the same name further down,
//! * a name found more than once at the shallowest depth it occurs at is ambiguous and
//!   not part of the method set. A type reached through several paths at the same depth
//!   makes every name it introduces ambiguous.
//!
//! Embedded types declared in other packages are resolved through the loaded [`Program`].

use std::iter;
use std::sync::LazyLock;

use fxhash::{FxHashMap, FxHashSet};

use moldable_lang_model::subst::{Subst, Substitutable};
use moldable_lang_model::*;

/// An exported struct type together with its exported method set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDescriptor {
    pub pkg: PackageRef,
    pub name: String,
    /// Type parameters in declaration order
    pub type_params: Vec<TypeParam>,
    /// Exported methods, sorted by name
    pub methods: Vec<Method>,
}

impl StructDescriptor {
    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }
}

/// Computes struct descriptors, caching the result per package path for the whole run.
#[derive(Debug, Default)]
pub struct MethodSetCollector {
    cache: FxHashMap<String, Vec<StructDescriptor>>,
}

impl MethodSetCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptors of the exported structs of `package`. Embedded types from other packages
    /// are looked up in `program`.
    pub fn collect(&mut self, package: &Package, program: &Program) -> &[StructDescriptor] {
        if self.cache.contains_key(&package.path) {
            log::debug!("Method sets of {} served from cache", package.path);
        } else {
            log::debug!("Collecting method sets of {}", package.path);
            let scope = Scope { package, program };
            self.cache.insert(package.path.clone(), scope.collect_package());
        }
        self.cache.get(&package.path).map(Vec::as_slice).unwrap_or_default()
    }
}

/// The predeclared `error` interface.
static ERROR: LazyLock<TypeDecl> = LazyLock::new(|| TypeDecl {
    name: "error".to_owned(),
    type_params: vec![],
    underlying: Type::Interface(Interface {
        embeddeds: vec![],
        methods: vec![MethodSig {
            name: "Error".to_owned(),
            signature: Signature::new(vec![], vec![Var::unnamed(Type::basic("string"))]),
        }],
    }),
    methods: vec![],
});

/// Where named types are resolved while computing the method sets of one package.
struct Scope<'a> {
    package: &'a Package,
    program: &'a Program,
}

/// A type reached through a chain of embedded fields, with the substitution of its type
/// parameters by the type arguments it was embedded with.
struct Embedding<'a> {
    pkg: &'a str,
    decl: &'a TypeDecl,
    subst: Subst,
    /// Reached through more than one path at the same depth.
    multiple: bool,
}

impl<'a> Embedding<'a> {
    fn key(&self) -> (&'a str, &'a str) {
        (self.pkg, self.decl.name.as_str())
    }
}

/// A name introduced at one embedding depth.
#[derive(Clone)]
enum Entry {
    Method(Method),
    Field,
}

impl<'a> Scope<'a> {
    fn collect_package(&self) -> Vec<StructDescriptor> {
        let mut decls: Vec<&TypeDecl> = self
            .package
            .types
            .iter()
            .filter(|decl| decl.is_exported() && decl.as_struct().is_some())
            .collect();
        decls.sort_by(|a, b| a.name.cmp(&b.name));

        decls
            .into_iter()
            .map(|decl| StructDescriptor {
                pkg: self.package.pkg_ref(),
                name: decl.name.clone(),
                type_params: decl.type_params.clone(),
                methods: self.method_set(decl),
            })
            .collect()
    }

    fn method_set(&self, decl: &'a TypeDecl) -> Vec<Method> {
        let mut methods = Vec::new();
        let mut decided: FxHashSet<String> = FxHashSet::default();
        let mut seen: FxHashSet<(&'a str, &'a str)> = FxHashSet::default();
        let root = Embedding {
            pkg: self.package.path.as_str(),
            decl,
            subst: Subst::default(),
            multiple: false,
        };
        let mut current = vec![root];

        while !current.is_empty() {
            let embeddings = consolidate(current, &seen);
            seen.extend(embeddings.iter().map(Embedding::key));

            let mut level: FxHashMap<String, Vec<Entry>> = FxHashMap::default();
            let mut next = Vec::new();

            for Embedding { decl, subst, multiple, .. } in embeddings {
                let count = if multiple { 2 } else { 1 };
                let mut introduce = |name: &str, entry: Entry| {
                    let entries = level.entry(name.to_owned()).or_default();
                    entries.extend(iter::repeat_n(entry, count));
                };

                for method in &decl.methods {
                    let method = Method::new(method.name.clone(), method.signature.subst(&subst));
                    introduce(&method.name, Entry::Method(method.clone()));
                }

                match &decl.underlying {
                    Type::Struct(Struct { fields }) => {
                        for field in fields {
                            introduce(&field.name, Entry::Field);
                            if !field.embedded {
                                continue;
                            }
                            let embedded = self.resolve_embedded(&field.typ.subst(&subst));
                            if let Some(mut embedding) = embedded {
                                embedding.multiple = multiple;
                                next.push(embedding);
                            }
                        }
                    }
                    Type::Interface(interface) => {
                        let mut expanded = FxHashSet::default();
                        for method in self.interface_methods(interface, &subst, &mut expanded) {
                            introduce(&method.name, Entry::Method(method.clone()));
                        }
                    }
                    _ => {}
                }
            }

            for (name, mut entries) in level {
                if !decided.insert(name) {
                    continue;
                }
                if let (1, Some(Entry::Method(method))) = (entries.len(), entries.pop()) {
                    methods.push(method);
                }
            }

            current = next;
        }

        methods.retain(Method::is_exported);
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods
    }

    /// The methods of an interface type, including those of the interfaces it embeds.
    fn interface_methods(
        &self,
        interface: &Interface,
        subst: &Subst,
        expanded: &mut FxHashSet<(&'a str, &'a str)>,
    ) -> Vec<Method> {
        let mut methods: Vec<Method> = interface
            .methods
            .iter()
            .map(|method| Method::new(method.name.clone(), method.signature.subst(subst)))
            .collect();

        for embedded in &interface.embeddeds {
            let Some(embedding) = self.resolve_embedded(&embedded.subst(subst)) else {
                continue;
            };
            if !expanded.insert(embedding.key()) {
                continue;
            }
            if let Type::Interface(inner) = &embedding.decl.underlying {
                for method in self.interface_methods(inner, &embedding.subst, expanded) {
                    if !methods.iter().any(|known| known.name == method.name) {
                        methods.push(method);
                    }
                }
            }
        }

        methods
    }

    fn resolve_embedded(&self, typ: &Type) -> Option<Embedding<'a>> {
        let named = match typ {
            Type::Named(named) | Type::Alias(named) => named,
            Type::Pointer(Pointer { elem }) => match &**elem {
                Type::Named(named) | Type::Alias(named) => named,
                _ => return None,
            },
            _ => return None,
        };

        let Some(pkg) = &named.pkg else {
            if named.name == ERROR.name {
                let subst = Subst::default();
                return Some(Embedding { pkg: "", decl: &ERROR, subst, multiple: false });
            }
            log::debug!("Embedded predeclared type {} has no methods", named.name);
            return None;
        };

        let package =
            if self.package.owns(pkg) { Some(self.package) } else { self.program.get(&pkg.path) };
        let Some(package) = package else {
            log::warn!(
                "Methods promoted from {}.{} are not included: package {} was not loaded",
                pkg.name,
                named.name,
                pkg.path
            );
            return None;
        };

        let Some(decl) = package.lookup(&named.name) else {
            log::warn!("Embedded type {}.{} is not declared in {}", pkg.name, named.name, pkg.path);
            return None;
        };

        let subst = decl
            .type_params
            .iter()
            .map(|param| param.name.clone())
            .zip(named.type_args.iter().cloned())
            .collect();
        Some(Embedding { pkg: package.path.as_str(), decl, subst, multiple: false })
    }
}

/// Drop the types expanded at a shallower depth and merge the ones reached more than once.
fn consolidate<'a>(
    embeddings: Vec<Embedding<'a>>,
    seen: &FxHashSet<(&'a str, &'a str)>,
) -> Vec<Embedding<'a>> {
    let mut level: Vec<Embedding<'a>> = Vec::new();
    for embedding in embeddings {
        if seen.contains(&embedding.key()) {
            continue;
        }
        match level.iter_mut().find(|known| known.key() == embedding.key()) {
            Some(known) => known.multiple = true,
            None => level.push(embedding),
        }
    }
    level
}
