use std::path::PathBuf;

use moldable_lang_driver::{
    CONFIG_FILE, Config, DriverError, FsWriter, Generator, LogReporter, ModelLoader, StdoutWriter,
};
use moldable_lang_printer::PrintCfg;

use crate::global_settings::GlobalSettings;

#[derive(clap::Args)]
pub struct Args {
    /// Path of the configuration file
    #[clap(short, long, value_name = "FILE", default_value = CONFIG_FILE)]
    config_file: PathBuf,
    /// Print the generated files to stdout instead of writing them
    #[clap(long)]
    dry_run: bool,
}

pub fn exec(cmd: Args, settings: &GlobalSettings) -> miette::Result<()> {
    let config = Config::load(&cmd.config_file).map_err(DriverError::from)?;
    let loader = ModelLoader::new(&config.models);

    if cmd.dry_run {
        let writer = StdoutWriter::new(PrintCfg::default(), settings.colorize);
        Generator::new(config, loader, LogReporter, writer).generate()?;
    } else {
        Generator::new(config, loader, LogReporter, FsWriter::default()).generate()?;
    }

    log::info!("interfaces generated successfully");
    Ok(())
}
