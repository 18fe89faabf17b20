use fxhash::FxHashSet;

use moldable_lang_printer::theme::ThemeExt;
use moldable_lang_printer::tokens::*;
use moldable_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

use crate::exprs::{FieldList, FuncType};
use crate::ident::{Ident, is_identifier};

/// A generated Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub package: Ident,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<InterfaceDecl>,
}

/// `name "path"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Explicit local name, absent when the package is referred to by the last path segment.
    pub name: Option<Ident>,
    pub path: String,
}

/// `type Name[TypeParams] interface { methods }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: Ident,
    pub type_params: FieldList,
    pub methods: Vec<MethodSpec>,
}

/// `Name(params) results`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: Ident,
    pub signature: FuncType,
}

impl ImportSpec {
    /// The name by which declarations in this file refer to the imported package.
    pub fn local_name(&self) -> &str {
        match &self.name {
            Some(name) => name.as_str(),
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }
}

impl InterfaceDecl {
    pub fn walk_qualifiers<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        self.type_params.walk_qualifiers(f);
        self.methods.iter().for_each(|method| method.signature.walk_qualifiers(f));
    }
}

impl File {
    /// Removes imports no declaration refers to and sorts the remaining ones by path.
    pub fn organize_imports(&mut self) {
        let mut used = FxHashSet::default();
        for decl in &self.decls {
            decl.walk_qualifiers(&mut |qualifier| {
                used.insert(qualifier.to_owned());
            });
        }

        self.imports.retain(|import| used.contains(import.local_name()));
        self.imports.sort_by(|a, b| a.path.cmp(&b.path));
    }

    /// Returns the first declared name that is not a valid Go identifier.
    pub fn invalid_identifier(&self) -> Option<&str> {
        let import_names = self.imports.iter().filter_map(|import| import.name.as_ref());
        let decl_names = self.decls.iter().flat_map(|decl| {
            let type_params = decl.type_params.list.iter().filter_map(|field| field.name.as_ref());
            let methods = decl.methods.iter().map(|method| &method.name);
            std::iter::once(&decl.name).chain(type_params).chain(methods)
        });

        std::iter::once(&self.package)
            .chain(import_names)
            .chain(decl_names)
            .map(Ident::as_str)
            .find(|name| !is_identifier(name))
    }
}

// Printing
//
//

impl Print for File {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let File { package, imports, decls } = self;

        let mut doc =
            alloc.keyword(PACKAGE).append(alloc.space()).append(package.print(cfg, alloc));

        if !imports.is_empty() {
            let imports = print_imports(imports, cfg, alloc);
            doc = doc.append(alloc.hardline()).append(alloc.hardline()).append(imports);
        }

        for decl in decls {
            let decl = decl.print(cfg, alloc);
            doc = doc.append(alloc.hardline()).append(alloc.hardline()).append(decl);
        }

        doc.append(alloc.hardline())
    }
}

fn print_imports<'a>(
    imports: &'a [ImportSpec],
    cfg: &PrintCfg,
    alloc: &'a Alloc<'a>,
) -> Builder<'a> {
    let head = alloc.keyword(IMPORT).append(alloc.space());

    match imports {
        [import] => head.append(import.print(cfg, alloc)),
        _ => {
            let specs = imports.iter().map(|import| {
                alloc.hardline().append(cfg.indent).append(import.print(cfg, alloc))
            });
            head.append("(").append(alloc.concat(specs)).append(alloc.hardline()).append(")")
        }
    }
}

impl Print for ImportSpec {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let ImportSpec { name, path } = self;
        let path = alloc.literal(format!("{path:?}"));

        match name {
            Some(name) => alloc.qualifier(name.as_str()).append(alloc.space()).append(path),
            None => path,
        }
    }
}

impl Print for InterfaceDecl {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let InterfaceDecl { name, type_params, methods } = self;

        let type_params = if type_params.is_empty() {
            alloc.nil()
        } else {
            type_params.print(cfg, alloc).enclose("[", "]")
        };

        let head = alloc
            .keyword(TYPE)
            .append(alloc.space())
            .append(alloc.typ(name.as_str()))
            .append(type_params)
            .append(alloc.space())
            .append(alloc.keyword(INTERFACE));

        if methods.is_empty() {
            return head.append("{}");
        }

        let methods = methods
            .iter()
            .map(|method| alloc.hardline().append(cfg.indent).append(method.print(cfg, alloc)));

        head.append(alloc.space())
            .append("{")
            .append(alloc.concat(methods))
            .append(alloc.hardline())
            .append("}")
    }
}

impl Print for MethodSpec {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let MethodSpec { name, signature } = self;
        name.print(cfg, alloc).append(signature.print(cfg, alloc))
    }
}
