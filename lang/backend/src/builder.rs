use std::fmt;

use moldable_lang_syntax::{Field, FieldList, File, Ident, ImportSpec, InterfaceDecl, MethodSpec};

use crate::collect::StructDescriptor;
use crate::imports::Import;
use crate::result::{BuildError, BuildResult, Position};
use crate::to_syntax::{Qualifier, ToSyntax, translate_constraint};

/// Outcome of offering a struct to the [`FileBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Added {
    Interface { name: String, method_count: usize },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoMethods,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMethods => write!(f, "no methods"),
        }
    }
}

/// Collects the interfaces and imports of one generated file.
#[derive(Debug, Clone)]
pub struct FileBuilder {
    package: String,
    suffix: String,
    structs: Vec<StructDescriptor>,
    imports: Vec<Import>,
}

impl FileBuilder {
    /// `package` is the package clause of the generated file, `suffix` is appended to every
    /// struct name to form the interface name.
    pub fn new(package: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self { package: package.into(), suffix: suffix.into(), structs: vec![], imports: vec![] }
    }

    pub fn add_struct(&mut self, descriptor: &StructDescriptor) -> Added {
        if !descriptor.has_methods() {
            return Added::Skipped(SkipReason::NoMethods);
        }
        self.structs.push(descriptor.clone());
        Added::Interface {
            name: self.interface_name(descriptor),
            method_count: descriptor.methods.len(),
        }
    }

    pub fn add_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn has_interfaces(&self) -> bool {
        !self.structs.is_empty()
    }

    pub fn build(&self, qualifier: &dyn Qualifier) -> BuildResult<File> {
        let decls = self
            .structs
            .iter()
            .map(|descriptor| self.build_interface(descriptor, qualifier))
            .collect::<BuildResult<Vec<_>>>()?;

        let imports = self.imports.iter().map(import_spec).collect();

        Ok(File { package: Ident::new(self.package.clone()), imports, decls })
    }

    fn build_interface(
        &self,
        descriptor: &StructDescriptor,
        qualifier: &dyn Qualifier,
    ) -> BuildResult<InterfaceDecl> {
        let interface = self.interface_name(descriptor);

        let type_params = descriptor
            .type_params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let constraint = translate_constraint(&param.constraint, qualifier).map_err(
                    |err| BuildError::TypeParam {
                        interface: interface.clone(),
                        param: param.name.clone(),
                        source: err.at(Position::TypeParam(i)),
                    },
                )?;
                Ok(Field::new(param.name.clone(), constraint))
            })
            .collect::<BuildResult<Vec<_>>>()?;

        let methods = descriptor
            .methods
            .iter()
            .map(|method| {
                let signature =
                    method.signature.to_syntax(qualifier).map_err(|source| BuildError::Method {
                        interface: interface.clone(),
                        method: method.name.clone(),
                        source,
                    })?;
                Ok(MethodSpec { name: Ident::new(method.name.clone()), signature })
            })
            .collect::<BuildResult<Vec<_>>>()?;

        Ok(InterfaceDecl {
            name: Ident::new(interface),
            type_params: FieldList { list: type_params },
            methods,
        })
    }

    fn interface_name(&self, descriptor: &StructDescriptor) -> String {
        format!("{}{}", descriptor.name, self.suffix)
    }
}

/// The alias is spelled out unless the package's own name already binds it and matches
/// the last path segment.
fn import_spec(import: &Import) -> ImportSpec {
    let Import { path, name, alias } = import;
    let mut spec = ImportSpec { name: None, path: path.clone() };
    if name != alias || spec.local_name() != alias {
        spec.name = Some(Ident::new(alias.clone()));
    }
    spec
}

#[cfg(test)]
mod tests {
    use moldable_lang_model::*;
    use moldable_lang_printer::PrintToString;

    use super::*;
    use crate::imports::ImportTable;
    use crate::result::TranslateError;

    fn widget(methods: Vec<Method>) -> StructDescriptor {
        StructDescriptor {
            pkg: PackageRef::new("example.com/sample", "sample"),
            name: "Widget".to_owned(),
            type_params: vec![],
            methods,
        }
    }

    fn unqualified(_: &PackageRef) -> Option<String> {
        None
    }

    #[test]
    fn structs_without_methods_are_skipped() {
        let mut builder = FileBuilder::new("mocks", "Iface");
        assert_eq!(builder.add_struct(&widget(vec![])), Added::Skipped(SkipReason::NoMethods));
        assert_eq!(SkipReason::NoMethods.to_string(), "no methods");
        assert!(!builder.has_interfaces());

        let file = builder.build(&unqualified).unwrap();
        assert!(file.decls.is_empty());
    }

    #[test]
    fn interface_name_gets_suffix() {
        let mut builder = FileBuilder::new("mocks", "Iface");
        let added = builder.add_struct(&widget(vec![
            Method::new("Do", Signature::default()),
            Method::new("Reset", Signature::default()),
        ]));
        assert_eq!(added, Added::Interface { name: "WidgetIface".to_owned(), method_count: 2 });
        assert!(builder.has_interfaces());
    }

    #[test]
    fn generic_structs_keep_their_type_params() {
        let mut descriptor = widget(vec![Method::new(
            "Get",
            Signature::new(vec![Var::new("key", Type::type_param("K"))], vec![Var::unnamed(
                Type::type_param("T"),
            )]),
        )]);
        descriptor.type_params = vec![
            TypeParam::new("T", Type::any()),
            TypeParam::new("K", Type::named(None, "comparable")),
        ];

        let mut builder = FileBuilder::new("mocks", "Iface");
        builder.add_struct(&descriptor);
        let file = builder.build(&unqualified).unwrap();

        let expected = "package mocks

type WidgetIface[T any, K comparable] interface {
\tGet(key K) T
}
";
        assert_eq!(file.print_to_string(None), expected);
    }

    fn import(path: &str, name: &str, alias: &str) -> Import {
        Import { path: path.to_owned(), name: name.to_owned(), alias: alias.to_owned() }
    }

    #[test]
    fn import_alias_only_when_needed() {
        let mut builder = FileBuilder::new("mocks", "Iface");
        builder.add_import(import("example.com/a/util", "util", "util"));
        builder.add_import(import("example.com/b/util", "util", "util1"));

        let file = builder.build(&unqualified).unwrap();
        assert_eq!(file.imports[0].name, None);
        assert_eq!(file.imports[1].name, Some(Ident::new("util1")));
    }

    #[test]
    fn alias_matching_path_but_not_package_name_is_spelled_out() {
        let mut builder = FileBuilder::new("mocks", "Iface");
        builder.add_import(import("example.com/a/util", "util", "util"));
        builder.add_import(import("example.com/b/util1", "util", "util1"));
        builder.add_import(import("gopkg.in/yaml.v3", "yaml", "yaml"));

        let file = builder.build(&unqualified).unwrap();
        assert_eq!(file.imports[1].name, Some(Ident::new("util1")));
        assert_eq!(file.imports[2].name, Some(Ident::new("yaml")));
        assert_eq!(file.imports[2].local_name(), "yaml");
    }

    #[test]
    fn widget_scenario() {
        let ctx = PackageRef::new("example.com/project/ctx", "ctx");
        let descriptor = widget(vec![Method::new(
            "Do",
            Signature::new(
                vec![Var::new("ctx", Type::named(Some(ctx.clone()), "Context"))],
                vec![Var::unnamed(Type::named(None, "error"))],
            ),
        )]);

        let mut table = ImportTable::new();
        crate::refs::collect_struct(&descriptor, &mut |pkg| {
            table.register(pkg);
        });
        assert_eq!(table.imports(), &[import(&ctx.path, "ctx", "ctx")]);

        let mut builder = FileBuilder::new("mocks", "Iface");
        builder.add_struct(&descriptor);
        table.imports().iter().cloned().for_each(|import| builder.add_import(import));
        let file = builder.build(&table).unwrap();

        let expected = "package mocks

import \"example.com/project/ctx\"

type WidgetIface interface {
\tDo(ctx ctx.Context) error
}
";
        assert_eq!(file.print_to_string(None), expected);
    }

    #[test]
    fn anonymous_struct_names_the_method() {
        let descriptor = widget(vec![Method::new(
            "Configure",
            Signature::new(vec![Var::new("opts", Type::Struct(Struct::default()))], vec![]),
        )]);

        let mut builder = FileBuilder::new("mocks", "Iface");
        builder.add_struct(&descriptor);
        let err = builder.build(&unqualified).unwrap_err();

        assert_eq!(err.to_string(), "translating method WidgetIface.Configure");
        assert_eq!(
            err.translate_error().root(),
            &TranslateError::UnsupportedType("anonymous struct".to_owned())
        );
    }

    #[test]
    fn failing_constraint_names_the_type_param() {
        let mut descriptor = widget(vec![Method::new("Do", Signature::default())]);
        descriptor.type_params = vec![TypeParam::new("T", Type::Union(Union { terms: vec![] }))];

        let mut builder = FileBuilder::new("mocks", "Iface");
        builder.add_struct(&descriptor);
        let err = builder.build(&unqualified).unwrap_err();

        assert_eq!(err.to_string(), "translating type parameter T of WidgetIface");
        assert_eq!(err.translate_error().root(), &TranslateError::EmptyUnion);
    }
}
