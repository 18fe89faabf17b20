use moldable_lang_backend::SkipReason;

/// Observer of the progress of a generation run.
pub trait Reporter {
    fn package_started(&mut self, path: &str);
    fn struct_skipped(&mut self, name: &str, reason: SkipReason);
    fn interface_generated(&mut self, interface: &str, from_struct: &str, method_count: usize);
    /// Called for every processed package; `interface_count` is 0 if no file was written.
    fn package_completed(&mut self, path: &str, interface_count: usize);
}

/// Reports progress through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn package_started(&mut self, path: &str) {
        log::info!("processing package path={path}");
    }

    fn struct_skipped(&mut self, name: &str, reason: SkipReason) {
        log::info!("skipped struct name={name} reason=\"{reason}\"");
    }

    fn interface_generated(&mut self, interface: &str, from_struct: &str, method_count: usize) {
        log::info!(
            "generated interface name={interface} from_struct={from_struct} method_count={method_count}"
        );
    }

    fn package_completed(&mut self, path: &str, interface_count: usize) {
        log::info!("completed package path={path} interface_count={interface_count}");
    }
}
