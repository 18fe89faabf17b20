//! Semantic types as reported by the type-checker.
//!
//! The grammar is closed: every kind the translator can encounter is a variant of [`Type`].
//! Kinds the exporter knows about but this model does not deserialize into [`Type::Unknown`].

use std::fmt;
use std::ops::BitOr;

use serde_derive::{Deserialize, Serialize};

/// The package that owns a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRef {
    /// Full import path, e.g. `example.com/project/ctx`.
    pub path: String,
    /// Name from the package clause, e.g. `ctx`.
    pub name: String,
}

impl PackageRef {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into() }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Basic(Basic),
    Array(Array),
    Slice(Slice),
    Map(Map),
    Chan(Chan),
    Pointer(Pointer),
    Interface(Interface),
    Signature(Signature),
    Named(Named),
    Alias(Named),
    TypeParam(TypeParamRef),
    Union(Union),
    Struct(Struct),
    #[serde(other)]
    Unknown,
}

/// A predeclared type such as `int` or `string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basic {
    pub name: String,
}

/// `[len]elem`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Array {
    pub len: u64,
    pub elem: Box<Type>,
}

/// `[]elem`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub elem: Box<Type>,
}

/// `map[key]elem`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub key: Box<Type>,
    pub elem: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chan {
    #[serde(default)]
    pub dir: ChanDir,
    pub elem: Box<Type>,
}

/// Capabilities of a channel.
///
/// Directions combine like capability bits: `Send | Recv` is `Both`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    Send,
    Recv,
    #[default]
    Both,
}

impl BitOr for ChanDir {
    type Output = ChanDir;

    fn bitor(self, rhs: ChanDir) -> ChanDir {
        if self == rhs { self } else { ChanDir::Both }
    }
}

/// `*elem`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    pub elem: Box<Type>,
}

/// An interface type literal.
///
/// Only the empty interface can be expressed by the generator, but the
/// members are kept so that their package references can still be walked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub embeddeds: Vec<Type>,
    #[serde(default)]
    pub methods: Vec<MethodSig>,
}

impl Interface {
    pub fn is_empty(&self) -> bool {
        self.embeddeds.is_empty() && self.methods.is_empty()
    }
}

/// A method declared inside an interface type literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSig {
    pub name: String,
    pub signature: Signature,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Var>,
    #[serde(default)]
    pub results: Vec<Var>,
    /// Whether the last parameter is `...T`. Its type is then reported as `[]T`.
    #[serde(default)]
    pub variadic: bool,
}

/// A parameter or result. Unnamed variables have an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub typ: Type,
}

impl Var {
    pub fn new(name: impl Into<String>, typ: Type) -> Self {
        Self { name: name.into(), typ }
    }

    pub fn unnamed(typ: Type) -> Self {
        Self { name: String::new(), typ }
    }
}

/// A defined or aliased type, possibly instantiated with type arguments.
///
/// Predeclared named types such as `error` or `comparable` have no package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub pkg: Option<PackageRef>,
    pub name: String,
    #[serde(default)]
    pub type_args: Vec<Type>,
}

/// A reference to a type parameter of the enclosing declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParamRef {
    pub name: String,
}

/// `~int | string | ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub tilde: bool,
    #[serde(rename = "type")]
    pub typ: Type,
}

/// An anonymous struct type literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: Type,
    #[serde(default)]
    pub embedded: bool,
}

// Constructors
//
//

impl Type {
    pub fn basic(name: impl Into<String>) -> Self {
        Type::Basic(Basic { name: name.into() })
    }

    pub fn array(len: u64, elem: Type) -> Self {
        Type::Array(Array { len, elem: Box::new(elem) })
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice(Slice { elem: Box::new(elem) })
    }

    pub fn map(key: Type, elem: Type) -> Self {
        Type::Map(Map { key: Box::new(key), elem: Box::new(elem) })
    }

    pub fn chan(dir: ChanDir, elem: Type) -> Self {
        Type::Chan(Chan { dir, elem: Box::new(elem) })
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer(Pointer { elem: Box::new(elem) })
    }

    pub fn any() -> Self {
        Type::Interface(Interface::default())
    }

    pub fn named(pkg: Option<PackageRef>, name: impl Into<String>) -> Self {
        Type::Named(Named { pkg, name: name.into(), type_args: vec![] })
    }

    pub fn instance(pkg: Option<PackageRef>, name: impl Into<String>, type_args: Vec<Type>) -> Self {
        Type::Named(Named { pkg, name: name.into(), type_args })
    }

    pub fn type_param(name: impl Into<String>) -> Self {
        Type::TypeParam(TypeParamRef { name: name.into() })
    }

    /// Short human readable name of the kind of this type, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Basic(_) => "basic type",
            Type::Array(_) => "array",
            Type::Slice(_) => "slice",
            Type::Map(_) => "map",
            Type::Chan(_) => "channel",
            Type::Pointer(_) => "pointer",
            Type::Interface(i) if i.is_empty() => "empty interface",
            Type::Interface(_) => "non-empty interface",
            Type::Signature(_) => "function signature",
            Type::Named(_) => "named type",
            Type::Alias(_) => "type alias",
            Type::TypeParam(_) => "type parameter",
            Type::Union(_) => "union",
            Type::Struct(_) => "anonymous struct",
            Type::Unknown => "unrecognized type kind",
        }
    }
}

impl Signature {
    pub fn new(params: Vec<Var>, results: Vec<Var>) -> Self {
        Self { params, results, variadic: false }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chan_dir_union_collapses_to_both() {
        assert_eq!(ChanDir::Send | ChanDir::Recv, ChanDir::Both);
        assert_eq!(ChanDir::Recv | ChanDir::Send, ChanDir::Both);
        assert_eq!(ChanDir::Send | ChanDir::Send, ChanDir::Send);
        assert_eq!(ChanDir::Both | ChanDir::Recv, ChanDir::Both);
    }

    #[test]
    fn deserialize_nested_type() {
        let json = r#"{
            "kind": "map",
            "key": { "kind": "basic", "name": "string" },
            "elem": {
                "kind": "slice",
                "elem": {
                    "kind": "named",
                    "pkg": { "path": "example.com/ctx", "name": "ctx" },
                    "name": "Context"
                }
            }
        }"#;
        let typ: Type = serde_json::from_str(json).unwrap();
        let ctx = PackageRef::new("example.com/ctx", "ctx");
        assert_eq!(typ, Type::map(Type::basic("string"), Type::slice(Type::named(Some(ctx), "Context"))));
    }

    #[test]
    fn deserialize_unrecognized_kind() {
        let typ: Type = serde_json::from_str(r#"{ "kind": "tuple" }"#).unwrap();
        assert_eq!(typ, Type::Unknown);
    }

    #[test]
    fn deserialize_chan_defaults_to_both() {
        let typ: Type =
            serde_json::from_str(r#"{ "kind": "chan", "elem": { "kind": "basic", "name": "int" } }"#)
                .unwrap();
        assert_eq!(typ, Type::chan(ChanDir::Both, Type::basic("int")));
    }
}
