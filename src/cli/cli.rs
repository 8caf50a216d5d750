use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Creates a predefined directory and file layout, skipping whatever already exists
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// YAML file describing the layout to create (defaults to the built-in project layout)
    #[clap(long, short = 'f')]
    pub layout: Option<PathBuf>,

    /// The directory to create the layout in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
