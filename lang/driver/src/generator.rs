use moldable_lang_backend::{Added, FileBuilder, ImportTable, MethodSetCollector, refs};
use moldable_lang_model::{Package, Program};

use crate::config::Config;
use crate::loader::PackageLoader;
use crate::reporter::Reporter;
use crate::result::{DriverError, DriverResult, PackageError};
use crate::writer::Writer;

/// Generates one file of interfaces per configured package.
///
/// Packages are processed in configured order. The first failure stops the run; files
/// written for earlier packages are kept.
pub struct Generator<L, R, W> {
    config: Config,
    loader: L,
    reporter: R,
    writer: W,
    collector: MethodSetCollector,
}

impl<L: PackageLoader, R: Reporter, W: Writer> Generator<L, R, W> {
    pub fn new(config: Config, loader: L, reporter: R, writer: W) -> Self {
        Self { config, loader, reporter, writer, collector: MethodSetCollector::new() }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn generate(&mut self) -> DriverResult {
        let paths = self.config.paths();
        let program = self.loader.load(&paths)?;

        for path in &paths {
            let package = program.get(path).ok_or_else(|| DriverError::Package {
                path: path.clone(),
                source: PackageError::NotLoaded,
            })?;
            self.process_package(package, &program)
                .map_err(|source| DriverError::Package { path: path.clone(), source })?;
        }

        Ok(())
    }

    fn process_package(
        &mut self,
        package: &Package,
        program: &Program,
    ) -> Result<(), PackageError> {
        self.reporter.package_started(&package.path);

        let output = &self.config.output;
        let mut builder = FileBuilder::new(output.package.clone(), output.naming.suffix.clone());

        let mut imports = ImportTable::new();
        imports.register(&package.pkg_ref());

        let mut generated = 0;
        for descriptor in self.collector.collect(package, program) {
            match builder.add_struct(descriptor) {
                Added::Skipped(reason) => self.reporter.struct_skipped(&descriptor.name, reason),
                Added::Interface { name, method_count } => {
                    refs::collect_struct(descriptor, &mut |pkg| {
                        imports.register(pkg);
                    });
                    self.reporter.interface_generated(&name, &descriptor.name, method_count);
                    generated += 1;
                }
            }
        }

        if !builder.has_interfaces() {
            self.reporter.package_completed(&package.path, 0);
            return Ok(());
        }

        imports.imports().iter().cloned().for_each(|import| builder.add_import(import));

        let file = builder.build(&imports)?;
        let destination = self.config.destination(&package.name);
        self.writer.write(&file, &destination)?;

        self.reporter.package_completed(&package.path, generated);
        Ok(())
    }
}
