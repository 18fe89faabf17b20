use std::{env, str::FromStr};

use moldable_lang_printer::ColorChoice;

#[derive(Debug, Clone)]
pub struct GlobalSettings {
    pub colorize: ColorChoice,
    pub log_level: log::LevelFilter,
}

impl GlobalSettings {
    pub fn from_env() -> Self {
        let colorize = env::var("MOLDABLE_COLORIZE")
            .ok()
            .and_then(|var| ColorChoice::from_str(&var).ok())
            .unwrap_or(ColorChoice::Auto);

        let log_level = env::var("MOLDABLE_LOG_LEVEL")
            .ok()
            .and_then(|var| log::LevelFilter::from_str(&var.to_uppercase()).ok())
            .unwrap_or(log::LevelFilter::Info);

        Self { colorize, log_level }
    }

    pub fn write_style(&self) -> env_logger::WriteStyle {
        match self.colorize {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
        }
    }
}
