use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Where inside an enclosing type a nested translation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    ArrayElem,
    SliceElem,
    MapKey,
    MapValue,
    ChanElem,
    PointerElem,
    Param(usize),
    Result(usize),
    TypeArg(usize),
    UnionTerm(usize),
    TypeParam(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::ArrayElem => write!(f, "array element"),
            Position::SliceElem => write!(f, "slice element"),
            Position::MapKey => write!(f, "map key"),
            Position::MapValue => write!(f, "map value"),
            Position::ChanElem => write!(f, "channel element"),
            Position::PointerElem => write!(f, "pointer element"),
            Position::Param(i) => write!(f, "signature param {i}"),
            Position::Result(i) => write!(f, "signature result {i}"),
            Position::TypeArg(i) => write!(f, "type argument {i}"),
            Position::UnionTerm(i) => write!(f, "union term {i}"),
            Position::TypeParam(i) => write!(f, "type parameter {i}"),
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unsupported type: {0}")]
    #[diagnostic(code("T-001"), help("Only types that can be written as a type expression are supported"))]
    UnsupportedType(String),
    #[error("variadic parameter must be a slice, found {found}")]
    #[diagnostic(code("T-002"))]
    InvalidVariadic { found: String },
    #[error("union constraint without terms")]
    #[diagnostic(code("T-003"))]
    EmptyUnion,
    #[error("converting {position}")]
    #[diagnostic(code("T-004"))]
    Conversion {
        position: Position,
        #[source]
        source: Box<TranslateError>,
    },
}

impl TranslateError {
    pub fn at(self, position: Position) -> Self {
        TranslateError::Conversion { position, source: Box::new(self) }
    }

    /// The innermost error, stripped of all positional context.
    pub fn root(&self) -> &TranslateError {
        match self {
            TranslateError::Conversion { source, .. } => source.root(),
            _ => self,
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("translating method {interface}.{method}")]
    #[diagnostic(code("B-001"))]
    Method {
        interface: String,
        method: String,
        #[source]
        source: TranslateError,
    },
    #[error("translating type parameter {param} of {interface}")]
    #[diagnostic(code("B-002"))]
    TypeParam {
        interface: String,
        param: String,
        #[source]
        source: TranslateError,
    },
}

impl BuildError {
    pub fn translate_error(&self) -> &TranslateError {
        match self {
            BuildError::Method { source, .. } | BuildError::TypeParam { source, .. } => source,
        }
    }
}

pub type TranslateResult<T> = Result<T, TranslateError>;
pub type BuildResult<T> = Result<T, BuildError>;
