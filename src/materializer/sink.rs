use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use derive_more::Display;
use supports_color::Stream;
use tracing::warn;

use crate::layout::EntryKind;

/// A filesystem entry that was created during materialization
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{kind} created: {}", path.display())]
pub struct CreatedEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
}

impl CreatedEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: EntryKind::Directory,
            path: path.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: EntryKind::File,
            path: path.into(),
        }
    }
}

/// Receives one notification per created entry.
/// Entries that already existed are never reported.
pub trait CreationSink {
    fn record(&mut self, entry: CreatedEntry);
}

impl CreationSink for Vec<CreatedEntry> {
    fn record(&mut self, entry: CreatedEntry) {
        self.push(entry);
    }
}

impl<S: CreationSink + ?Sized> CreationSink for &mut S {
    fn record(&mut self, entry: CreatedEntry) {
        (**self).record(entry);
    }
}

/// Writes one line per created entry
pub struct ConsoleSink<W: Write> {
    writer: W,
    colorize: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        let colorize = supports_color::on(Stream::Stdout).is_some();
        Self::new(io::stdout(), colorize)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, colorize: bool) -> Self {
        Self { writer, colorize }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, entry: &CreatedEntry) -> io::Result<()> {
        if self.colorize {
            let label = format!("{} created:", entry.kind);
            let label = match entry.kind {
                EntryKind::Directory => label.blue().bold(),
                EntryKind::File => label.green(),
            };
            writeln!(self.writer, "{} {}", label, entry.path.display())
        } else {
            writeln!(self.writer, "{entry}")
        }
    }
}

impl<W: Write> CreationSink for ConsoleSink<W> {
    fn record(&mut self, entry: CreatedEntry) {
        if let Err(e) = self.write_entry(&entry) {
            warn!("Failed to report created entry {}: {}", entry.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_entry_display() {
        assert_eq!(
            CreatedEntry::directory("/tmp/x/a").to_string(),
            "Directory created: /tmp/x/a"
        );
        assert_eq!(
            CreatedEntry::file("/tmp/x/a/b.txt").to_string(),
            "File created: /tmp/x/a/b.txt"
        );
    }

    #[test]
    fn test_console_sink_writes_one_line_per_entry() {
        let mut sink = ConsoleSink::new(Vec::new(), false);
        sink.record(CreatedEntry::directory("out/a"));
        sink.record(CreatedEntry::file("out/a/b.txt"));

        let output = String::from_utf8(sink.into_inner()).expect("Output should be UTF-8");
        assert_eq!(output, "Directory created: out/a\nFile created: out/a/b.txt\n");
    }

    #[test]
    fn test_console_sink_keeps_path_when_colorized() {
        let mut sink = ConsoleSink::new(Vec::new(), true);
        sink.record(CreatedEntry::file("out/c.txt"));

        let output = String::from_utf8(sink.into_inner()).expect("Output should be UTF-8");
        assert!(output.ends_with(" out/c.txt\n"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_mutable_reference_forwards_to_sink() {
        fn record_into(mut sink: impl CreationSink) {
            sink.record(CreatedEntry::file("x"));
        }

        let mut entries = Vec::new();
        record_into(&mut entries);
        assert_eq!(entries, vec![CreatedEntry::file("x")]);
    }
}
