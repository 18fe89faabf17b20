use moldable_lang_model::PackageRef;

use crate::result::TranslateResult;

/// Decides how references to a package are written in the generated file.
pub trait Qualifier {
    /// The local alias under which `pkg` is imported, or `None` if names from `pkg` are
    /// written unqualified.
    fn qualify(&self, pkg: &PackageRef) -> Option<String>;
}

impl<F> Qualifier for F
where
    F: Fn(&PackageRef) -> Option<String>,
{
    fn qualify(&self, pkg: &PackageRef) -> Option<String> {
        self(pkg)
    }
}

pub trait ToSyntax {
    type Target;

    fn to_syntax(&self, qualifier: &dyn Qualifier) -> TranslateResult<Self::Target>;
}
