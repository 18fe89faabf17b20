use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use moldable_lang_syntax::{is_digit, is_identifier, is_letter};

/// Default name of the configuration file.
pub const CONFIG_FILE: &str = "moldable.toml";

/// Placeholder in [`Output::filename`] replaced by the name of the source package.
pub const PACKAGE_PLACEHOLDER: &str = "{package}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the exported package models
    #[serde(default = "default_models")]
    pub models: PathBuf,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub dir: String,
    /// Package clause of the generated files
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub naming: Naming,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Naming {
    /// Appended to a struct name to form the interface name
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub path: String,
}

fn default_models() -> PathBuf {
    PathBuf::from("models")
}

impl Config {
    /// Read, parse and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Config, ConfigLoadError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigLoadError::Read { path: path.to_path_buf(), source })?;
        let config: Config = toml::from_str(&text)
            .map_err(|source| ConfigLoadError::Parse { path: path.to_path_buf(), source })?;
        config.check()?;
        Ok(config)
    }

    /// Validate the configuration, reporting every violation at once.
    pub fn check(&self) -> Result<(), ConfigErrors> {
        let mut errors = self.output.check();

        if self.packages.is_empty() {
            errors.push(ConfigError::NoPackages);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.packages.len());
        for package in &self.packages {
            if package.path.trim().is_empty() {
                errors.push(ConfigError::MissingPackagePath);
            } else if seen.contains(&package.path.as_str()) {
                errors.push(ConfigError::DuplicatePackage(package.path.clone()));
            } else {
                seen.push(&package.path);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(ConfigErrors(errors)) }
    }

    /// Import paths of the configured packages, in configured order.
    pub fn paths(&self) -> Vec<String> {
        self.packages.iter().map(|package| package.path.clone()).collect()
    }

    /// Path of the file generated for the source package called `package_name`.
    pub fn destination(&self, package_name: &str) -> PathBuf {
        let filename = self.output.filename.replace(PACKAGE_PLACEHOLDER, package_name);
        Path::new(&self.output.dir).join(filename)
    }
}

impl Output {
    fn check(&self) -> Vec<ConfigError> {
        let mut errors = vec![];

        if self.dir.trim().is_empty() {
            errors.push(ConfigError::MissingDir);
        }

        if self.package.trim().is_empty() {
            errors.push(ConfigError::MissingPackage);
        } else if !is_identifier(&self.package) {
            errors.push(ConfigError::InvalidPackage(self.package.clone()));
        }

        if self.filename.trim().is_empty() {
            errors.push(ConfigError::MissingFilename);
        } else if !self.filename.contains(PACKAGE_PLACEHOLDER) {
            errors.push(ConfigError::MissingPlaceholder(self.filename.clone()));
        }

        errors.extend(self.naming.check());
        errors
    }
}

impl Naming {
    fn check(&self) -> Option<ConfigError> {
        if self.suffix.trim().is_empty() {
            return Some(ConfigError::MissingSuffix);
        }
        self.suffix
            .chars()
            .enumerate()
            .find(|(_, ch)| !is_letter(*ch) && !is_digit(*ch) && *ch != '_')
            .map(|(position, ch)| ConfigError::InvalidSuffix { ch, position })
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("output directory is required")]
    #[diagnostic(code("C-001"))]
    MissingDir,
    #[error("output package is required")]
    #[diagnostic(code("C-002"))]
    MissingPackage,
    #[error("output package name {0:?} must be a valid identifier")]
    #[diagnostic(code("C-003"), help("Go keywords cannot be used as package names"))]
    InvalidPackage(String),
    #[error("output filename is required")]
    #[diagnostic(code("C-004"))]
    MissingFilename,
    #[error("output filename {0:?} must contain the {{package}} placeholder")]
    #[diagnostic(code("C-005"))]
    MissingPlaceholder(String),
    #[error("suffix is required")]
    #[diagnostic(code("C-006"))]
    MissingSuffix,
    #[error("suffix contains invalid character {ch:?} at position {position}")]
    #[diagnostic(code("C-007"), help("Only letters, digits and '_' are allowed"))]
    InvalidSuffix { ch: char, position: usize },
    #[error("at least one package must be specified")]
    #[diagnostic(code("C-008"))]
    NoPackages,
    #[error("package path is required")]
    #[diagnostic(code("C-009"))]
    MissingPackagePath,
    #[error("package {0:?} is specified more than once")]
    #[diagnostic(code("C-010"))]
    DuplicatePackage(String),
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("invalid configuration")]
#[diagnostic(code("C-000"))]
pub struct ConfigErrors(#[related] pub Vec<ConfigError>);

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigLoadError {
    #[error("reading configuration file {}", path.display())]
    #[diagnostic(code("C-011"), help("Run `moldable init` to create a starter configuration"))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing configuration file {}", path.display())]
    #[diagnostic(code("C-012"))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] ConfigErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
models = "exported"

[output]
dir = "mocks"
package = "mocks"
filename = "{package}_iface.go"

[output.naming]
suffix = "Iface"

[[packages]]
path = "example.com/sample"

[[packages]]
path = "example.com/other"
"#;

    #[test]
    fn parse_sample() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.models, PathBuf::from("exported"));
        assert_eq!(config.output.naming.suffix, "Iface");
        assert_eq!(config.paths(), vec!["example.com/sample", "example.com/other"]);
        assert_eq!(config.check(), Ok(()));
    }

    #[test]
    fn models_default() {
        let config: Config = toml::from_str("[[packages]]\npath = \"a\"\n").unwrap();
        assert_eq!(config.models, PathBuf::from("models"));
    }

    #[test]
    fn destination_replaces_placeholder() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.destination("sample"), Path::new("mocks").join("sample_iface.go"));
    }

    #[test]
    fn check_collects_all_violations() {
        let config = Config {
            models: default_models(),
            output: Output {
                dir: " ".to_owned(),
                package: "func".to_owned(),
                filename: "iface.go".to_owned(),
                naming: Naming { suffix: "I-face".to_owned() },
            },
            packages: vec![
                PackageEntry { path: "example.com/a".to_owned() },
                PackageEntry { path: "".to_owned() },
                PackageEntry { path: "example.com/a".to_owned() },
            ],
        };

        let ConfigErrors(errors) = config.check().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigError::MissingDir,
                ConfigError::InvalidPackage("func".to_owned()),
                ConfigError::MissingPlaceholder("iface.go".to_owned()),
                ConfigError::InvalidSuffix { ch: '-', position: 1 },
                ConfigError::MissingPackagePath,
                ConfigError::DuplicatePackage("example.com/a".to_owned()),
            ]
        );
    }

    #[test]
    fn suffix_allows_only_letters_and_decimal_digits() {
        let mut config: Config = toml::from_str(SAMPLE).unwrap();

        config.output.naming.suffix = "Iface²".to_owned();
        let ConfigErrors(errors) = config.check().unwrap_err();
        assert_eq!(errors, vec![ConfigError::InvalidSuffix { ch: '²', position: 5 }]);

        config.output.naming.suffix = "Schnittstelle_2".to_owned();
        assert_eq!(config.check(), Ok(()));
    }

    #[test]
    fn empty_config_is_invalid() {
        let config: Config = toml::from_str("").unwrap();
        let ConfigErrors(errors) = config.check().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigError::MissingDir,
                ConfigError::MissingPackage,
                ConfigError::MissingFilename,
                ConfigError::MissingSuffix,
                ConfigError::NoPackages,
            ]
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Read { .. }));
    }

    #[test]
    fn load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[output]\ndir = \"mocks\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigLoadError::Invalid(_))));

        fs::write(&path, SAMPLE).unwrap();
        assert!(Config::load(&path).is_ok());

        fs::write(&path, "[output\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigLoadError::Parse { .. })));
    }
}
