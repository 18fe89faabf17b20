use moldable_lang_model::*;
use moldable_lang_syntax as syntax;
use moldable_lang_syntax::TypeExpr;

use crate::result::{Position, TranslateError, TranslateResult};

use super::traits::{Qualifier, ToSyntax};

impl ToSyntax for Type {
    type Target = TypeExpr;

    fn to_syntax(&self, qualifier: &dyn Qualifier) -> TranslateResult<TypeExpr> {
        match self {
            Type::Basic(Basic { name }) => Ok(TypeExpr::ident(name.clone())),
            Type::Array(Array { len, elem }) => {
                Ok(TypeExpr::array(*len, nested(elem, Position::ArrayElem, qualifier)?))
            }
            Type::Slice(Slice { elem }) => {
                Ok(TypeExpr::slice(nested(elem, Position::SliceElem, qualifier)?))
            }
            Type::Map(Map { key, elem }) => Ok(TypeExpr::map(
                nested(key, Position::MapKey, qualifier)?,
                nested(elem, Position::MapValue, qualifier)?,
            )),
            Type::Chan(Chan { dir, elem }) => {
                Ok(TypeExpr::chan(chan_dir(*dir), nested(elem, Position::ChanElem, qualifier)?))
            }
            Type::Pointer(Pointer { elem }) => {
                Ok(TypeExpr::star(nested(elem, Position::PointerElem, qualifier)?))
            }
            Type::Interface(interface) if interface.is_empty() => Ok(TypeExpr::ident("any")),
            Type::Signature(signature) => Ok(TypeExpr::Func(signature.to_syntax(qualifier)?)),
            Type::Named(named) | Type::Alias(named) => named.to_syntax(qualifier),
            Type::TypeParam(TypeParamRef { name }) => Ok(TypeExpr::ident(name.clone())),
            Type::Union(union) => union.to_syntax(qualifier),
            Type::Interface(_) | Type::Struct(_) | Type::Unknown => {
                Err(TranslateError::UnsupportedType(self.kind_name().to_owned()))
            }
        }
    }
}

/// Input:
///
/// ```text
/// Named { pkg: "example.com/b/util", name: "Pair", type_args: [K, V] }
/// ```
///
/// Output:
///
/// ```go
/// util1.Pair[K, V]
/// ```
impl ToSyntax for Named {
    type Target = TypeExpr;

    fn to_syntax(&self, qualifier: &dyn Qualifier) -> TranslateResult<TypeExpr> {
        let Named { pkg, name, type_args } = self;

        let base = match pkg.as_ref().and_then(|pkg| qualifier.qualify(pkg)) {
            Some(alias) => TypeExpr::selector(alias, name.clone()),
            None => TypeExpr::ident(name.clone()),
        };

        let mut args = type_args
            .iter()
            .enumerate()
            .map(|(i, arg)| arg.to_syntax(qualifier).map_err(|err| err.at(Position::TypeArg(i))))
            .collect::<Result<Vec<_>, _>>()?;

        let expr = match args.len() {
            0 => base,
            1 => TypeExpr::Index(syntax::IndexExpr {
                x: Box::new(base),
                index: Box::new(args.remove(0)),
            }),
            _ => TypeExpr::IndexList(syntax::IndexListExpr { x: Box::new(base), indices: args }),
        };
        Ok(expr)
    }
}

/// Terms are chained left-associatively: `A | B | C` is `(A | B) | C`.
impl ToSyntax for Union {
    type Target = TypeExpr;

    fn to_syntax(&self, qualifier: &dyn Qualifier) -> TranslateResult<TypeExpr> {
        let mut terms = self.terms.iter().enumerate().map(|(i, Term { tilde, typ })| -> TranslateResult<_> {
            let expr = typ.to_syntax(qualifier).map_err(|err| err.at(Position::UnionTerm(i)))?;
            Ok(if *tilde { TypeExpr::tilde(expr) } else { expr })
        });

        let first = terms.next().ok_or(TranslateError::EmptyUnion)??;
        terms.try_fold(first, |lhs, rhs| Ok(TypeExpr::or(lhs, rhs?)))
    }
}

/// Translate the constraint of a type parameter.
///
/// The type-checker reports a constraint written as `~int | ~string` as an implicit
/// interface embedding that union; such interfaces are translated as their single element.
pub fn translate_constraint(constraint: &Type, qualifier: &dyn Qualifier) -> TranslateResult<TypeExpr> {
    match constraint {
        Type::Interface(Interface { embeddeds, methods }) if methods.is_empty() => {
            match embeddeds.as_slice() {
                [] => Ok(TypeExpr::ident("any")),
                [embedded] => embedded.to_syntax(qualifier),
                _ => constraint.to_syntax(qualifier),
            }
        }
        _ => constraint.to_syntax(qualifier),
    }
}

fn nested(typ: &Type, position: Position, qualifier: &dyn Qualifier) -> TranslateResult<TypeExpr> {
    typ.to_syntax(qualifier).map_err(|err| err.at(position))
}

fn chan_dir(dir: ChanDir) -> syntax::ChanDir {
    match dir {
        ChanDir::Send => syntax::ChanDir::Send,
        ChanDir::Recv => syntax::ChanDir::Recv,
        ChanDir::Both => syntax::ChanDir::Both,
    }
}

#[cfg(test)]
mod tests {
    use moldable_lang_printer::PrintToString;

    use super::*;
    use crate::to_syntax::translate;

    fn unqualified(_: &PackageRef) -> Option<String> {
        None
    }

    fn by_name(pkg: &PackageRef) -> Option<String> {
        Some(pkg.name.clone())
    }

    fn print(typ: &Type) -> String {
        translate(typ, &by_name).unwrap().print_to_string(None)
    }

    #[test]
    fn primitives_translate_to_their_name() {
        for name in ["bool", "int", "int64", "uint8", "float64", "complex128", "string", "byte", "rune"]
        {
            assert_eq!(translate(&Type::basic(name), &unqualified), Ok(TypeExpr::ident(name)));
        }
    }

    #[test]
    fn composite_types() {
        let ctx = PackageRef::new("example.com/ctx", "ctx");
        let typ = Type::map(
            Type::basic("string"),
            Type::slice(Type::pointer(Type::named(Some(ctx), "Context"))),
        );
        assert_eq!(print(&typ), "map[string][]*ctx.Context");
        assert_eq!(print(&Type::array(16, Type::basic("byte"))), "[16]byte");
        assert_eq!(print(&Type::any()), "any");
    }

    #[test]
    fn channel_directions_are_preserved() {
        let int = Type::basic("int");
        assert_eq!(print(&Type::chan(ChanDir::Both, int.clone())), "chan int");
        assert_eq!(print(&Type::chan(ChanDir::Send, int.clone())), "chan<- int");
        assert_eq!(print(&Type::chan(ChanDir::Recv, int)), "<-chan int");
    }

    #[test]
    fn named_types_use_the_qualifier() {
        let util = PackageRef::new("example.com/b/util", "util");
        let typ = Type::instance(
            Some(util.clone()),
            "Pair",
            vec![Type::type_param("K"), Type::named(None, "error")],
        );

        let qualifier = |pkg: &PackageRef| (pkg == &util).then(|| "util1".to_owned());
        let expr = translate(&typ, &qualifier).unwrap();
        assert_eq!(expr.print_to_string(None), "util1.Pair[K, error]");

        let expr = translate(&typ, &unqualified).unwrap();
        assert_eq!(expr.print_to_string(None), "Pair[K, error]");

        let single = Type::instance(None, "List", vec![Type::basic("int")]);
        assert!(matches!(translate(&single, &unqualified), Ok(TypeExpr::Index(_))));
    }

    #[test]
    fn aliases_translate_like_named_types() {
        let typ = Type::Alias(Named {
            pkg: Some(PackageRef::new("example.com/ctx", "ctx")),
            name: "Ctx".to_owned(),
            type_args: vec![],
        });
        assert_eq!(print(&typ), "ctx.Ctx");
    }

    #[test]
    fn union_terms() {
        let typ = Type::Union(Union {
            terms: vec![
                Term { tilde: true, typ: Type::basic("int") },
                Term { tilde: false, typ: Type::basic("string") },
                Term { tilde: true, typ: Type::basic("float64") },
            ],
        });
        assert_eq!(print(&typ), "~int | string | ~float64");

        let expected = TypeExpr::or(
            TypeExpr::or(TypeExpr::tilde(TypeExpr::ident("int")), TypeExpr::ident("string")),
            TypeExpr::tilde(TypeExpr::ident("float64")),
        );
        assert_eq!(translate(&typ, &unqualified), Ok(expected));
    }

    #[test]
    fn empty_union_fails() {
        let typ = Type::Union(Union { terms: vec![] });
        assert_eq!(translate(&typ, &unqualified), Err(TranslateError::EmptyUnion));
    }

    #[test]
    fn unsupported_types_fail_with_position() {
        let typ = Type::map(Type::basic("string"), Type::Struct(Struct::default()));
        let err = translate(&typ, &unqualified).unwrap_err();

        assert_eq!(err.to_string(), "converting map value");
        assert_eq!(err.root(), &TranslateError::UnsupportedType("anonymous struct".to_owned()));

        let iface = Type::Interface(Interface {
            embeddeds: vec![],
            methods: vec![MethodSig { name: "Close".to_owned(), signature: Signature::default() }],
        });
        let err = translate(&iface, &unqualified).unwrap_err();
        assert_eq!(err, TranslateError::UnsupportedType("non-empty interface".to_owned()));

        let err = translate(&Type::Unknown, &unqualified).unwrap_err();
        assert_eq!(err, TranslateError::UnsupportedType("unrecognized type kind".to_owned()));
    }

    #[test]
    fn union_term_errors_name_the_term() {
        let typ = Type::Union(Union {
            terms: vec![
                Term { tilde: false, typ: Type::basic("int") },
                Term { tilde: false, typ: Type::basic("string") },
                Term { tilde: false, typ: Type::Unknown },
            ],
        });
        let err = translate(&typ, &unqualified).unwrap_err();
        assert_eq!(err.to_string(), "converting union term 2");
    }

    #[test]
    fn constraints_unwrap_implicit_interfaces() {
        let union = Type::Union(Union {
            terms: vec![
                Term { tilde: true, typ: Type::basic("int") },
                Term { tilde: true, typ: Type::basic("string") },
            ],
        });
        let constraint = Type::Interface(Interface { embeddeds: vec![union], methods: vec![] });
        let expr = translate_constraint(&constraint, &unqualified).unwrap();
        assert_eq!(expr.print_to_string(None), "~int | ~string");

        let expr = translate_constraint(&Type::any(), &unqualified).unwrap();
        assert_eq!(expr, TypeExpr::ident("any"));

        let comparable = Type::named(None, "comparable");
        let expr = translate_constraint(&comparable, &unqualified).unwrap();
        assert_eq!(expr, TypeExpr::ident("comparable"));
    }

    #[test]
    fn translation_is_deterministic() {
        let typ = Type::map(
            Type::named(Some(PackageRef::new("example.com/a", "a")), "Key"),
            Type::chan(ChanDir::Recv, Type::slice(Type::type_param("T"))),
        );
        assert_eq!(translate(&typ, &by_name), translate(&typ, &by_name));
    }
}
