//! Translation of semantic types into Go type expressions.

use moldable_lang_model::Type;
use moldable_lang_syntax::TypeExpr;

use crate::result::TranslateResult;

mod signatures;
mod traits;
mod types;

pub use traits::*;
pub use types::translate_constraint;

/// Translate `typ`, qualifying named types from other packages through `qualifier`.
pub fn translate(typ: &Type, qualifier: &impl Qualifier) -> TranslateResult<TypeExpr> {
    typ.to_syntax(qualifier)
}
