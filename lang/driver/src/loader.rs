use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use walkdir::WalkDir;

use moldable_lang_model::{Package, Program};

/// Resolves import paths to type-checked packages.
pub trait PackageLoader {
    /// Load all of `paths`. Every requested path must be present in the returned program.
    fn load(&mut self, paths: &[String]) -> Result<Program, LoadError>;
}

#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("requested package {0:?} was not loaded")]
    #[diagnostic(code("L-001"), help("Export a model of the package into the models directory"))]
    NotFound(String),
    #[error("errors loading package {path:?}: {}", errors.join("; "))]
    #[diagnostic(code("L-002"))]
    TypeCheckFailure { path: String, errors: Vec<String> },
    #[error("reading {}", path.display())]
    #[diagnostic(code("L-003"))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("decoding package model {}", path.display())]
    #[diagnostic(code("L-004"))]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads package models exported by the type-checker as JSON, one package per `*.json`
/// file anywhere below a directory.
#[derive(Debug, Clone)]
pub struct ModelLoader {
    dir: PathBuf,
}

impl ModelLoader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    fn read_model(path: &Path) -> Result<Package, LoadError> {
        let text = fs::read_to_string(path)
            .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text)
            .map_err(|source| LoadError::Decode { path: path.to_path_buf(), source })
    }
}

impl PackageLoader for ModelLoader {
    fn load(&mut self, paths: &[String]) -> Result<Program, LoadError> {
        let mut program = Program::default();
        if paths.is_empty() {
            return Ok(program);
        }

        for entry in WalkDir::new(&self.dir).sort_by_file_name() {
            let entry = entry.map_err(|err| LoadError::Io {
                path: err.path().map(Path::to_path_buf).unwrap_or_else(|| self.dir.clone()),
                source: err.into(),
            })?;
            if !entry.file_type().is_file() || entry.path().extension() != Some(OsStr::new("json"))
            {
                continue;
            }

            let package = Self::read_model(entry.path())?;
            log::debug!("Loaded model of {} from {}", package.path, entry.path().display());
            program.insert(package);
        }

        check_requested(&program, paths)?;
        Ok(program)
    }
}

impl PackageLoader for Program {
    fn load(&mut self, paths: &[String]) -> Result<Program, LoadError> {
        check_requested(self, paths)?;
        Ok(self.clone())
    }
}

fn check_requested(program: &Program, paths: &[String]) -> Result<(), LoadError> {
    for path in paths {
        match program.get(path) {
            None => return Err(LoadError::NotFound(path.clone())),
            Some(package) if !package.errors.is_empty() => {
                return Err(LoadError::TypeCheckFailure {
                    path: path.clone(),
                    errors: package.errors.clone(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
