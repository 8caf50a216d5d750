use std::fs::{self, Metadata, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::ext::PathDisplayExt;
use crate::layout::{Directory, LayoutNode};
use crate::materializer::{CreatedEntry, CreationSink};

/// Number of entries created so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("{directories_created} directories and {files_created} files created")]
pub struct Summary {
    pub directories_created: usize,
    pub files_created: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.directories_created + self.files_created
    }
}

/// Creates the directories and empty files of a layout that are missing on disk.
///
/// Existing entries are left untouched, so running the same layout again only
/// fills in what is missing. Traversal stops at the first filesystem failure.
pub struct Materializer<S: CreationSink> {
    sink: S,
    summary: Summary,
}

impl<S: CreationSink> Materializer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Walks `directory` depth-first, creating every described entry below `base`.
    ///
    /// `base` itself is not checked; missing ancestors are created together with
    /// the first directory below them. Directories are always descended into,
    /// even when they already existed.
    pub fn materialize(
        &mut self,
        base: &Path,
        directory: &Directory,
    ) -> Result<(), FilesystemError> {
        for (name, node) in directory.iter() {
            let path = base.join(name);
            match node {
                LayoutNode::Directory(children) => {
                    self.ensure_directory(&path)?;
                    self.materialize(&path, children)?;
                }
                LayoutNode::File => self.ensure_file(&path)?,
            }
        }
        Ok(())
    }

    fn ensure_directory(&mut self, path: &Path) -> Result<(), FilesystemError> {
        match probe(path)? {
            Some(metadata) if metadata.is_dir() => {
                trace!("Directory already exists: {}", path.display());
                Ok(())
            }
            Some(_) => NotADirectorySnafu {
                path: path.to_path_buf(),
            }
            .fail(),
            None => {
                fs::create_dir_all(path).context(CreateDirectorySnafu {
                    path: path.to_path_buf(),
                })?;
                debug!("Created directory {}", path.display());
                self.summary.directories_created += 1;
                self.sink.record(CreatedEntry::directory(path));
                Ok(())
            }
        }
    }

    fn ensure_file(&mut self, path: &Path) -> Result<(), FilesystemError> {
        match probe(path)? {
            Some(metadata) if metadata.is_dir() => NotAFileSnafu {
                path: path.to_path_buf(),
            }
            .fail(),
            Some(_) => {
                trace!("File already exists: {}", path.display());
                Ok(())
            }
            None => {
                // create_new never truncates, even if the file appeared after the probe
                OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(path)
                    .context(CreateFileSnafu {
                        path: path.to_path_buf(),
                    })?;
                debug!("Created file {}", path.display());
                self.summary.files_created += 1;
                self.sink.record(CreatedEntry::file(path));
                Ok(())
            }
        }
    }
}

/// Returns the metadata of `path`, or `None` if nothing exists there
fn probe(path: &Path) -> Result<Option<Metadata>, FilesystemError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).context(ProbeSnafu {
            path: path.to_path_buf(),
        }),
    }
}

#[derive(Debug, Snafu)]
pub enum FilesystemError {
    #[snafu(display("Failed to inspect {}", path.absolute_display()))]
    ProbeError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create directory {}", path.absolute_display()))]
    CreateDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.absolute_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "Expected {} to be a directory, but a file is already there",
        path.absolute_display()
    ))]
    NotADirectoryError { path: PathBuf },
    #[snafu(display(
        "Expected {} to be a file, but a directory is already there",
        path.absolute_display()
    ))]
    NotAFileError { path: PathBuf },
}
