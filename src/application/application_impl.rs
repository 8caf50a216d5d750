use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::ext::PathDisplayExt;
use crate::layout::{Layout, LayoutError};
use crate::materializer::{ConsoleSink, CreationSink, FilesystemError, Materializer, Summary};

pub struct Application;

impl Application {
    /// Loads the configured layout and materializes it, printing every created entry
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<Summary, ApplicationError> {
        Self::run_with_sink(app_config, ConsoleSink::stdout())
    }

    pub fn run_with_sink(
        app_config: impl Into<RuntimeConfig>,
        sink: impl CreationSink,
    ) -> Result<Summary, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let layout = match &app_config.layout {
            Some(path) => Layout::from_path(path),
            None => Layout::builtin(),
        }
        .context(LayoutSnafu)?;
        debug!("Loaded layout: {}", layout.root().counts());

        info!("Materializing layout into {}", app_config.root.absolute_display());
        let mut materializer = Materializer::new(sink);
        materializer
            .materialize(&app_config.root, layout.root())
            .context(MaterializeSnafu)?;

        let summary = materializer.summary();
        info!("Done: {}", summary);
        Ok(summary)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the layout"))]
    LayoutError { source: LayoutError },
    #[snafu(display("Critical failure encountered while creating the layout"))]
    MaterializeError { source: FilesystemError },
}
