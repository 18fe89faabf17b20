//! Generation of Go interface declarations from type-checked packages.
//!
//! A package is processed in three steps: [`collect::MethodSetCollector`] finds the exported
//! structs and their method sets, [`refs`] discovers which packages those methods refer to
//! so that [`imports::ImportTable`] can assign aliases, and [`builder::FileBuilder`] turns
//! everything into a [`moldable_lang_syntax::File`] using the translation in [`to_syntax`].

pub mod builder;
pub mod collect;
pub mod imports;
pub mod refs;
pub mod result;
pub mod to_syntax;

pub use builder::{Added, FileBuilder, SkipReason};
pub use collect::{MethodSetCollector, StructDescriptor};
pub use imports::{Import, ImportTable};
pub use to_syntax::{Qualifier, ToSyntax, translate};
