use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use moldable_lang_printer::{ColorChoice, PrintCfg, PrintExt, StandardStream};
use moldable_lang_syntax::File;

/// Persists generated files.
pub trait Writer {
    fn write(&mut self, file: &File, path: &Path) -> Result<(), WriteError>;
}

#[derive(Error, Diagnostic, Debug)]
pub enum WriteError {
    #[error("creating directory {}", path.display())]
    #[diagnostic(code("W-001"))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("formatting {}: {name:?} is not a valid identifier", path.display())]
    #[diagnostic(code("W-002"))]
    Format { path: PathBuf, name: String },
    #[error("writing file to disk {}", path.display())]
    #[diagnostic(code("W-003"))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Organize the imports of `file` and make sure it can be rendered as valid source.
fn prepare(file: &File, path: &Path) -> Result<File, WriteError> {
    let mut file = file.clone();
    file.organize_imports();
    if let Some(name) = file.invalid_identifier() {
        return Err(WriteError::Format { path: path.to_path_buf(), name: name.to_owned() });
    }
    Ok(file)
}

/// Writes files to disk, creating missing parent directories.
#[derive(Debug, Clone, Default)]
pub struct FsWriter {
    cfg: PrintCfg,
}

impl FsWriter {
    pub fn new(cfg: PrintCfg) -> Self {
        Self { cfg }
    }
}

impl Writer for FsWriter {
    fn write(&mut self, file: &File, path: &Path) -> Result<(), WriteError> {
        let file = prepare(file, path)?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|source| WriteError::CreateDir { path: dir.to_path_buf(), source })?;
        }

        let mut buf = Vec::new();
        file.print_io(&self.cfg, &mut buf)
            .and_then(|()| fs::write(path, buf))
            .map_err(|source| WriteError::Write { path: path.to_path_buf(), source })?;

        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Prints files to stdout instead of writing them, each preceded by its destination.
#[derive(Debug, Clone)]
pub struct StdoutWriter {
    cfg: PrintCfg,
    colorize: ColorChoice,
}

impl StdoutWriter {
    pub fn new(cfg: PrintCfg, colorize: ColorChoice) -> Self {
        Self { cfg, colorize }
    }
}

impl Writer for StdoutWriter {
    fn write(&mut self, file: &File, path: &Path) -> Result<(), WriteError> {
        let file = prepare(file, path)?;

        let mut stream = StandardStream::stdout(self.colorize);
        writeln!(stream, "// {}", path.display())
            .and_then(|()| file.print_colored(&self.cfg, &mut stream))
            .and_then(|()| writeln!(stream))
            .map_err(|source| WriteError::Write { path: path.to_path_buf(), source })
    }
}
