use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Layout file to read; the built-in layout is used when absent
    pub layout: Option<PathBuf>,
    /// Directory the layout is materialized into
    pub root: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            layout: None,
            root: PathBuf::from("."),
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            layout: cli.layout,
            root: cli.root,
        }
    }
}
