use fxhash::{FxHashMap, FxHashSet};

use moldable_lang_model::PackageRef;

use crate::to_syntax::Qualifier;

/// An imported package together with the local name it is referred to by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    /// Name from the package clause of the imported package
    pub name: String,
    pub alias: String,
}

/// The imports of one generated file.
///
/// Every package gets a unique alias on first registration: its own name if that is still
/// free, otherwise the name followed by the smallest free positive number. Aliases are
/// never reassigned.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    imports: Vec<Import>,
    by_path: FxHashMap<String, usize>,
    aliases: FxHashSet<String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pkg` and return its alias.
    pub fn register(&mut self, pkg: &PackageRef) -> &str {
        let idx = match self.by_path.get(&pkg.path) {
            Some(idx) => *idx,
            None => {
                let alias = self.fresh_alias(&pkg.name);
                self.aliases.insert(alias.clone());
                self.imports.push(Import { path: pkg.path.clone(), name: pkg.name.clone(), alias });
                self.by_path.insert(pkg.path.clone(), self.imports.len() - 1);
                self.imports.len() - 1
            }
        };
        &self.imports[idx].alias
    }

    pub fn alias(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(|idx| self.imports[*idx].alias.as_str())
    }

    /// All registered imports in registration order.
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    fn fresh_alias(&self, name: &str) -> String {
        if !self.aliases.contains(name) {
            return name.to_owned();
        }
        (1..)
            .map(|k| format!("{name}{k}"))
            .find(|alias| !self.aliases.contains(alias))
            .unwrap_or_else(|| name.to_owned())
    }
}

impl Qualifier for ImportTable {
    fn qualify(&self, pkg: &PackageRef) -> Option<String> {
        self.alias(&pkg.path).map(ToOwned::to_owned)
    }
}
