use moldable_lang_printer::theme::ThemeExt;
use moldable_lang_printer::tokens::*;
use moldable_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

use crate::ident::Ident;

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`
    Ident(Ident),
    /// `pkg.T`
    Selector(Selector),
    /// `[N]T` or `[]T`
    Array(ArrayType),
    /// `map[K]V`
    Map(MapType),
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan(ChanType),
    /// `*T`
    Star(StarExpr),
    /// `func(params) results`
    Func(FuncType),
    /// `...T`, only valid as the type of the last parameter
    Ellipsis(Ellipsis),
    /// `T[A]`
    Index(IndexExpr),
    /// `T[A, B]`
    IndexList(IndexListExpr),
    /// `A | B`
    Binary(BinaryExpr),
    /// `~T`
    Unary(UnaryExpr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub x: Ident,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    /// `None` for slices
    pub len: Option<u64>,
    pub elem: Box<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapType {
    pub key: Box<TypeExpr>,
    pub value: Box<TypeExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Send,
    Recv,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChanType {
    pub dir: ChanDir,
    pub value: Box<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarExpr {
    pub x: Box<TypeExpr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    pub params: FieldList,
    pub results: FieldList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ellipsis {
    pub elem: Box<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpr {
    pub x: Box<TypeExpr>,
    pub index: Box<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexListExpr {
    pub x: Box<TypeExpr>,
    pub indices: Vec<TypeExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub lhs: Box<TypeExpr>,
    pub op: BinOp,
    pub rhs: Box<TypeExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Tilde,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub x: Box<TypeExpr>,
}

/// Parameters, results or type parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    pub list: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Option<Ident>,
    pub typ: TypeExpr,
}

// Constructors
//
//

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(Ident::new(name))
    }

    pub fn selector(x: impl Into<String>, sel: impl Into<String>) -> Self {
        TypeExpr::Selector(Selector { x: Ident::new(x), sel: Ident::new(sel) })
    }

    pub fn array(len: u64, elem: TypeExpr) -> Self {
        TypeExpr::Array(ArrayType { len: Some(len), elem: Box::new(elem) })
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Array(ArrayType { len: None, elem: Box::new(elem) })
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map(MapType { key: Box::new(key), value: Box::new(value) })
    }

    pub fn chan(dir: ChanDir, value: TypeExpr) -> Self {
        TypeExpr::Chan(ChanType { dir, value: Box::new(value) })
    }

    pub fn star(x: TypeExpr) -> Self {
        TypeExpr::Star(StarExpr { x: Box::new(x) })
    }

    pub fn ellipsis(elem: TypeExpr) -> Self {
        TypeExpr::Ellipsis(Ellipsis { elem: Box::new(elem) })
    }

    pub fn or(lhs: TypeExpr, rhs: TypeExpr) -> Self {
        TypeExpr::Binary(BinaryExpr { lhs: Box::new(lhs), op: BinOp::Or, rhs: Box::new(rhs) })
    }

    pub fn tilde(x: TypeExpr) -> Self {
        TypeExpr::Unary(UnaryExpr { op: UnaryOp::Tilde, x: Box::new(x) })
    }

    /// Calls `f` with the package qualifier of every selector in this expression.
    pub fn walk_qualifiers<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            TypeExpr::Ident(_) => {}
            TypeExpr::Selector(Selector { x, .. }) => f(x.as_str()),
            TypeExpr::Array(ArrayType { elem, .. }) => elem.walk_qualifiers(f),
            TypeExpr::Map(MapType { key, value }) => {
                key.walk_qualifiers(f);
                value.walk_qualifiers(f);
            }
            TypeExpr::Chan(ChanType { value, .. }) => value.walk_qualifiers(f),
            TypeExpr::Star(StarExpr { x }) => x.walk_qualifiers(f),
            TypeExpr::Func(func) => func.walk_qualifiers(f),
            TypeExpr::Ellipsis(Ellipsis { elem }) => elem.walk_qualifiers(f),
            TypeExpr::Index(IndexExpr { x, index }) => {
                x.walk_qualifiers(f);
                index.walk_qualifiers(f);
            }
            TypeExpr::IndexList(IndexListExpr { x, indices }) => {
                x.walk_qualifiers(f);
                indices.iter().for_each(|index| index.walk_qualifiers(f));
            }
            TypeExpr::Binary(BinaryExpr { lhs, rhs, .. }) => {
                lhs.walk_qualifiers(f);
                rhs.walk_qualifiers(f);
            }
            TypeExpr::Unary(UnaryExpr { x, .. }) => x.walk_qualifiers(f),
        }
    }
}

impl FuncType {
    pub fn walk_qualifiers<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        self.params.walk_qualifiers(f);
        self.results.walk_qualifiers(f);
    }
}

impl FieldList {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn walk_qualifiers<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        self.list.iter().for_each(|field| field.typ.walk_qualifiers(f));
    }
}

impl Field {
    pub fn new(name: impl Into<String>, typ: TypeExpr) -> Self {
        let name = name.into();
        Self { name: (!name.is_empty()).then(|| Ident::new(name)), typ }
    }
}

// Printing
//
//

impl Print for TypeExpr {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            TypeExpr::Ident(ident) => alloc.typ(ident.as_str()),
            TypeExpr::Selector(Selector { x, sel }) => {
                alloc.qualifier(x.as_str()).append(DOT).append(alloc.typ(sel.as_str()))
            }
            TypeExpr::Array(ArrayType { len, elem }) => {
                let len = match len {
                    Some(len) => alloc.literal(len.to_string()),
                    None => alloc.nil(),
                };
                len.enclose("[", "]").append(elem.print(cfg, alloc))
            }
            TypeExpr::Map(MapType { key, value }) => alloc
                .keyword(MAP)
                .append(key.print(cfg, alloc).enclose("[", "]"))
                .append(value.print(cfg, alloc)),
            TypeExpr::Chan(ChanType { dir, value }) => {
                let head = match dir {
                    ChanDir::Both => alloc.keyword(CHAN),
                    ChanDir::Send => alloc.keyword(CHAN).append(ARROW),
                    ChanDir::Recv => alloc.text(ARROW).append(alloc.keyword(CHAN)),
                };
                // `chan <-chan T` would parse as `chan<- chan T`
                let value = match (dir, &**value) {
                    (ChanDir::Both, TypeExpr::Chan(ChanType { dir: ChanDir::Recv, .. })) => {
                        value.print(cfg, alloc).enclose("(", ")")
                    }
                    _ => value.print(cfg, alloc),
                };
                head.append(alloc.space()).append(value)
            }
            TypeExpr::Star(StarExpr { x }) => alloc.text(STAR).append(x.print(cfg, alloc)),
            TypeExpr::Func(func) => alloc.keyword(FUNC).append(func.print(cfg, alloc)),
            TypeExpr::Ellipsis(Ellipsis { elem }) => {
                alloc.text(ELLIPSIS).append(elem.print(cfg, alloc))
            }
            TypeExpr::Index(IndexExpr { x, index }) => {
                x.print(cfg, alloc).append(index.print(cfg, alloc).enclose("[", "]"))
            }
            TypeExpr::IndexList(IndexListExpr { x, indices }) => {
                let indices = alloc.intersperse(
                    indices.iter().map(|index| index.print(cfg, alloc)),
                    ", ",
                );
                x.print(cfg, alloc).append(indices.enclose("[", "]"))
            }
            TypeExpr::Binary(BinaryExpr { lhs, op: BinOp::Or, rhs }) => lhs
                .print(cfg, alloc)
                .append(alloc.space())
                .append(PIPE)
                .append(alloc.space())
                .append(rhs.print(cfg, alloc)),
            TypeExpr::Unary(UnaryExpr { op: UnaryOp::Tilde, x }) => {
                alloc.text(TILDE).append(x.print(cfg, alloc))
            }
        }
    }
}

/// Prints the signature without the leading `func` keyword, as it appears both in function
/// types and in interface method specifications.
impl Print for FuncType {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let FuncType { params, results } = self;
        let params = params.print(cfg, alloc).enclose("(", ")");

        match results.list.as_slice() {
            [] => params,
            [Field { name: None, typ }] => {
                params.append(alloc.space()).append(typ.print(cfg, alloc))
            }
            _ => params.append(alloc.space()).append(results.print(cfg, alloc).enclose("(", ")")),
        }
    }
}

/// Prints the comma separated fields without delimiters.
///
/// Go requires either all or none of the fields in a list to be named, so unnamed fields
/// of a partially named list are printed as `_`.
impl Print for FieldList {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let any_named = self.list.iter().any(|field| field.name.is_some());

        let fields = self.list.iter().map(|Field { name, typ }| match name {
            Some(name) => {
                name.print(cfg, alloc).append(alloc.space()).append(typ.print(cfg, alloc))
            }
            None if any_named => {
                alloc.text("_").append(alloc.space()).append(typ.print(cfg, alloc))
            }
            None => typ.print(cfg, alloc),
        });

        alloc.intersperse(fields, ", ")
    }
}

#[cfg(test)]
mod tests {
    use moldable_lang_printer::PrintToString;

    use super::*;

    fn func(params: Vec<Field>, results: Vec<Field>) -> TypeExpr {
        TypeExpr::Func(FuncType {
            params: FieldList { list: params },
            results: FieldList { list: results },
        })
    }

    #[test]
    fn print_composite_types() {
        let typ = TypeExpr::map(
            TypeExpr::ident("string"),
            TypeExpr::slice(TypeExpr::star(TypeExpr::selector("ctx", "Context"))),
        );
        assert_eq!(typ.print_to_string(None), "map[string][]*ctx.Context");
        assert_eq!(TypeExpr::array(4, TypeExpr::ident("byte")).print_to_string(None), "[4]byte");
    }

    #[test]
    fn print_channels() {
        let int = TypeExpr::ident("int");
        assert_eq!(TypeExpr::chan(ChanDir::Both, int.clone()).print_to_string(None), "chan int");
        assert_eq!(TypeExpr::chan(ChanDir::Send, int.clone()).print_to_string(None), "chan<- int");
        assert_eq!(TypeExpr::chan(ChanDir::Recv, int.clone()).print_to_string(None), "<-chan int");

        let nested = TypeExpr::chan(ChanDir::Both, TypeExpr::chan(ChanDir::Recv, int.clone()));
        assert_eq!(nested.print_to_string(None), "chan (<-chan int)");

        let nested = TypeExpr::chan(ChanDir::Send, TypeExpr::chan(ChanDir::Recv, int));
        assert_eq!(nested.print_to_string(None), "chan<- <-chan int");
    }

    #[test]
    fn print_func_results() {
        let none = func(vec![], vec![]);
        assert_eq!(none.print_to_string(None), "func()");

        let single = func(
            vec![Field::new("ctx", TypeExpr::selector("ctx", "Context"))],
            vec![Field::new("", TypeExpr::ident("error"))],
        );
        assert_eq!(single.print_to_string(None), "func(ctx ctx.Context) error");

        let multiple = func(
            vec![],
            vec![Field::new("", TypeExpr::ident("int")), Field::new("", TypeExpr::ident("error"))],
        );
        assert_eq!(multiple.print_to_string(None), "func() (int, error)");

        let named = func(vec![], vec![Field::new("n", TypeExpr::ident("int"))]);
        assert_eq!(named.print_to_string(None), "func() (n int)");
    }

    #[test]
    fn print_partially_named_params() {
        let typ = func(
            vec![
                Field::new("a", TypeExpr::ident("int")),
                Field::new("", TypeExpr::ident("string")),
            ],
            vec![],
        );
        assert_eq!(typ.print_to_string(None), "func(a int, _ string)");
    }

    #[test]
    fn print_variadic_and_generics() {
        let typ = func(
            vec![
                Field::new("format", TypeExpr::ident("string")),
                Field::new("args", TypeExpr::ellipsis(TypeExpr::ident("any"))),
            ],
            vec![],
        );
        assert_eq!(typ.print_to_string(None), "func(format string, args ...any)");

        let list = TypeExpr::IndexList(IndexListExpr {
            x: Box::new(TypeExpr::selector("sample", "Pair")),
            indices: vec![TypeExpr::ident("K"), TypeExpr::ident("V")],
        });
        assert_eq!(list.print_to_string(None), "sample.Pair[K, V]");
    }

    #[test]
    fn print_union() {
        let typ = TypeExpr::or(
            TypeExpr::or(TypeExpr::tilde(TypeExpr::ident("int")), TypeExpr::ident("string")),
            TypeExpr::tilde(TypeExpr::ident("float64")),
        );
        assert_eq!(typ.print_to_string(None), "~int | string | ~float64");
    }

    #[test]
    fn walk_collects_qualifiers() {
        let typ = TypeExpr::map(
            TypeExpr::selector("a", "Key"),
            TypeExpr::IndexList(IndexListExpr {
                x: Box::new(TypeExpr::selector("b", "Pair")),
                indices: vec![TypeExpr::ident("int"), TypeExpr::selector("c", "Value")],
            }),
        );
        let mut seen = vec![];
        typ.walk_qualifiers(&mut |q| seen.push(q));
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}
