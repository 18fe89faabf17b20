//! Substitution of type parameters by type arguments.
//!
//! Used when the methods of a generic embedded type are promoted to the embedding struct:
//! `Base[T]` embedded as `Base[string]` contributes its methods with `T := string`.

use fxhash::FxHashMap;

use crate::types::*;

pub type Subst = FxHashMap<String, Type>;

pub trait Substitutable {
    fn subst(&self, subst: &Subst) -> Self;
}

impl<T: Substitutable> Substitutable for Vec<T> {
    fn subst(&self, subst: &Subst) -> Self {
        self.iter().map(|x| x.subst(subst)).collect()
    }
}

impl<T: Substitutable> Substitutable for Box<T> {
    fn subst(&self, subst: &Subst) -> Self {
        Box::new((**self).subst(subst))
    }
}

impl Substitutable for Type {
    fn subst(&self, subst: &Subst) -> Self {
        if subst.is_empty() {
            return self.clone();
        }

        match self {
            Type::TypeParam(TypeParamRef { name }) => {
                subst.get(name).cloned().unwrap_or_else(|| self.clone())
            }
            Type::Basic(_) | Type::Unknown => self.clone(),
            Type::Array(Array { len, elem }) => {
                Type::Array(Array { len: *len, elem: elem.subst(subst) })
            }
            Type::Slice(Slice { elem }) => Type::Slice(Slice { elem: elem.subst(subst) }),
            Type::Map(Map { key, elem }) => {
                Type::Map(Map { key: key.subst(subst), elem: elem.subst(subst) })
            }
            Type::Chan(Chan { dir, elem }) => Type::Chan(Chan { dir: *dir, elem: elem.subst(subst) }),
            Type::Pointer(Pointer { elem }) => Type::Pointer(Pointer { elem: elem.subst(subst) }),
            Type::Interface(Interface { embeddeds, methods }) => Type::Interface(Interface {
                embeddeds: embeddeds.subst(subst),
                methods: methods
                    .iter()
                    .map(|m| MethodSig { name: m.name.clone(), signature: m.signature.subst(subst) })
                    .collect(),
            }),
            Type::Signature(sig) => Type::Signature(sig.subst(subst)),
            Type::Named(named) => Type::Named(named.subst(subst)),
            Type::Alias(named) => Type::Alias(named.subst(subst)),
            Type::Union(Union { terms }) => Type::Union(Union {
                terms: terms
                    .iter()
                    .map(|term| Term { tilde: term.tilde, typ: term.typ.subst(subst) })
                    .collect(),
            }),
            Type::Struct(Struct { fields }) => Type::Struct(Struct {
                fields: fields
                    .iter()
                    .map(|field| Field {
                        name: field.name.clone(),
                        typ: field.typ.subst(subst),
                        embedded: field.embedded,
                    })
                    .collect(),
            }),
        }
    }
}

impl Substitutable for Named {
    fn subst(&self, subst: &Subst) -> Self {
        let Named { pkg, name, type_args } = self;
        Named { pkg: pkg.clone(), name: name.clone(), type_args: type_args.subst(subst) }
    }
}

impl Substitutable for Var {
    fn subst(&self, subst: &Subst) -> Self {
        Var { name: self.name.clone(), typ: self.typ.subst(subst) }
    }
}

impl Substitutable for Signature {
    fn subst(&self, subst: &Subst) -> Self {
        let Signature { params, results, variadic } = self;
        Signature { params: params.subst(subst), results: results.subst(subst), variadic: *variadic }
    }
}
