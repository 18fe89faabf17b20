//! Semantic model of type-checked packages.
//!
//! This is the input side of the generator: packages, their type declarations and the
//! recursive [`Type`] grammar, as produced by an external type-checker and deserialized
//! from its JSON export.

mod package;
pub mod subst;
mod types;

pub use package::*;
pub use types::*;
