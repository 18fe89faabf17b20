use clap::{Parser, Subcommand};

use crate::global_settings::GlobalSettings;

mod generate;
mod init;

pub fn exec() -> miette::Result<()> {
    let settings = GlobalSettings::from_env();
    env_logger::builder()
        .filter_level(settings.log_level)
        .write_style(settings.write_style())
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Init(args)) => init::exec(args),
        None => generate::exec(cli.generate, &settings),
    }
}

/// Generate Go interfaces from the method sets of exported structs
#[derive(Parser)]
#[clap(version, author, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    generate: generate::Args,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a starter configuration file into the current directory
    Init(init::Args),
}
