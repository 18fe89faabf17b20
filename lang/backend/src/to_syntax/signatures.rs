use moldable_lang_model::{Signature, Var};
use moldable_lang_syntax::{ArrayType, Ellipsis, Field, FieldList, FuncType, TypeExpr};

use crate::result::{Position, TranslateError, TranslateResult};

use super::traits::{Qualifier, ToSyntax};

/// Input:
///
/// ```go
/// func(format string, args ...any) (n int, err error)
/// ```
///
/// The type-checker reports the variadic parameter as `[]any`; it is turned back into
/// `...any` here. Any array expression is accepted in that position, its length is dropped.
impl ToSyntax for Signature {
    type Target = FuncType;

    fn to_syntax(&self, qualifier: &dyn Qualifier) -> TranslateResult<FuncType> {
        let Signature { params, results, variadic } = self;

        let mut params = fields(params, Position::Param, qualifier)?;
        let results = fields(results, Position::Result, qualifier)?;

        if *variadic {
            let found = |var: Option<&Var>| var.map_or("no parameters", |var| var.typ.kind_name());
            let Some(last) = params.pop() else {
                return Err(TranslateError::InvalidVariadic { found: found(None).to_owned() });
            };
            match last.typ {
                TypeExpr::Array(ArrayType { elem, .. }) => {
                    params.push(Field { name: last.name, typ: TypeExpr::Ellipsis(Ellipsis { elem }) })
                }
                _ => {
                    let found = found(self.params.last());
                    return Err(TranslateError::InvalidVariadic { found: found.to_owned() });
                }
            }
        }

        Ok(FuncType { params: FieldList { list: params }, results: FieldList { list: results } })
    }
}

fn fields(
    vars: &[Var],
    position: fn(usize) -> Position,
    qualifier: &dyn Qualifier,
) -> TranslateResult<Vec<Field>> {
    vars.iter()
        .enumerate()
        .map(|(i, Var { name, typ })| {
            let typ = typ.to_syntax(qualifier).map_err(|err| err.at(position(i)))?;
            Ok(Field::new(name.clone(), typ))
        })
        .collect()
}
