use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum InitError {
    #[error("writing config file {}", path.display())]
    #[diagnostic(code("I-001"))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
