use std::fs;
use std::path::Path;

use moldable_lang_driver::CONFIG_FILE;

use crate::result::InitError;

const TEMPLATE: &str = include_str!("../../templates/moldable.toml");

#[derive(clap::Args)]
pub struct Args {
    /// Overwrite an existing config file
    #[clap(short, long)]
    force: bool,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !cmd.force {
        log::info!("config file already exists, skipping creation filepath={}", path.display());
        return Ok(());
    }

    fs::write(path, TEMPLATE)
        .map_err(|source| InitError::Write { path: path.to_path_buf(), source })?;

    log::info!("config file written filepath={}", path.display());
    Ok(())
}
