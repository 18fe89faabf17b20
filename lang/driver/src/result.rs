use miette::Diagnostic;
use thiserror::Error;

use moldable_lang_backend::result::{BuildError, TranslateError};

use crate::config::ConfigLoadError;
use crate::loader::LoadError;
use crate::writer::WriteError;

pub type DriverResult<T = ()> = Result<T, DriverError>;

#[derive(Error, Diagnostic, Debug)]
pub enum DriverError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigLoadError),
    #[error("loading packages")]
    #[diagnostic(code("L-000"))]
    Load(#[from] #[diagnostic_source] LoadError),
    #[error("processing package {path:?}")]
    #[diagnostic(code("G-000"))]
    Package {
        path: String,
        #[source]
        #[diagnostic_source]
        source: PackageError,
    },
}

#[derive(Error, Diagnostic, Debug)]
pub enum PackageError {
    #[error("package was not returned by the loader")]
    #[diagnostic(code("G-001"))]
    NotLoaded,
    #[error("building declarations")]
    #[diagnostic(code("G-002"))]
    Build(#[from] #[diagnostic_source] BuildError),
    #[error("writing file")]
    #[diagnostic(code("G-003"))]
    Write(#[from] #[diagnostic_source] WriteError),
}

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigInvalid,
    PackageLoadFailure,
    UnsupportedType,
    InvalidVariadic,
    EmptyUnion,
    IoFailure,
    FormatFailure,
}

impl DriverError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DriverError::Config(_) => ErrorKind::ConfigInvalid,
            DriverError::Load(_) => ErrorKind::PackageLoadFailure,
            DriverError::Package { source, .. } => source.kind(),
        }
    }
}

impl PackageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackageError::NotLoaded => ErrorKind::PackageLoadFailure,
            PackageError::Build(err) => match err.translate_error().root() {
                TranslateError::InvalidVariadic { .. } => ErrorKind::InvalidVariadic,
                TranslateError::EmptyUnion => ErrorKind::EmptyUnion,
                TranslateError::UnsupportedType(_) | TranslateError::Conversion { .. } => {
                    ErrorKind::UnsupportedType
                }
            },
            PackageError::Write(WriteError::Format { .. }) => ErrorKind::FormatFailure,
            PackageError::Write(_) => ErrorKind::IoFailure,
        }
    }
}
