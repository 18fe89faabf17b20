use fxhash::FxHashMap;
use serde_derive::{Deserialize, Serialize};

use crate::types::{PackageRef, Signature, Struct, Type};

/// A type-checked package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Import path
    pub path: String,
    /// Name from the package clause
    pub name: String,
    /// Package-level type declarations
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    /// Errors the type-checker reported for this package
    #[serde(default)]
    pub errors: Vec<String>,
}

impl Package {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), types: vec![], errors: vec![] }
    }

    pub fn pkg_ref(&self) -> PackageRef {
        PackageRef::new(self.path.clone(), self.name.clone())
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|decl| decl.name == name)
    }

    /// Whether `pkg` refers to this package.
    pub fn owns(&self, pkg: &PackageRef) -> bool {
        pkg.path == self.path
    }
}

/// `type Name[TypeParams] Underlying` together with the methods declared on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
    pub underlying: Type,
    /// Methods declared with `Name` or `*Name` as receiver.
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl TypeDecl {
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match &self.underlying {
            Type::Struct(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Type,
}

impl TypeParam {
    pub fn new(name: impl Into<String>, constraint: Type) -> Self {
        Self { name: name.into(), constraint }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub signature: Signature,
}

impl Method {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self { name: name.into(), signature }
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Identifiers starting with an upper-case letter are visible outside their package.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase() && !c.is_numeric())
}

/// The packages returned by a loader, indexed by import path.
#[derive(Debug, Clone, Default)]
pub struct Program {
    packages: FxHashMap<String, Package>,
}

impl Program {
    pub fn insert(&mut self, package: Package) {
        self.packages.insert(package.path.clone(), package);
    }

    pub fn get(&self, path: &str) -> Option<&Package> {
        self.packages.get(path)
    }

}

impl FromIterator<Package> for Program {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut program = Program::default();
        for package in iter {
            program.insert(package);
        }
        program
    }
}
