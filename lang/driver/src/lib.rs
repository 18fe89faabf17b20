//! Driver of a generation run: configuration, package loading, reporting and writing of
//! the generated files.

pub mod config;
mod generator;
pub mod loader;
pub mod reporter;
pub mod result;
pub mod writer;

pub use config::{CONFIG_FILE, Config};
pub use generator::Generator;
pub use loader::{ModelLoader, PackageLoader};
pub use reporter::{LogReporter, Reporter};
pub use result::{DriverError, DriverResult, ErrorKind};
pub use writer::{FsWriter, StdoutWriter, Writer};
