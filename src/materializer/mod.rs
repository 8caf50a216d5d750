//! Turns a layout into directories and empty files on disk.

mod materializer;
mod sink;

pub use materializer::{FilesystemError, Materializer, Summary};
pub use sink::{ConsoleSink, CreatedEntry, CreationSink};
