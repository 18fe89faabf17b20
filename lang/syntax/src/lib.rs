//! Syntax tree of the generated Go source.
//!
//! Only the subset of Go needed to spell out interface declarations is modelled: type
//! expressions, interface type declarations and the enclosing file with its imports.

pub mod decls;
pub mod exprs;
pub mod ident;

pub use decls::*;
pub use exprs::*;
pub use ident::*;
