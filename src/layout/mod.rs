//! Declarative description of a directory tree.
//!
//! A layout is a nested mapping where every mapping value is a directory
//! and every scalar value is an (empty) file. Layouts are read from YAML
//! or built in code, and are read-only once constructed.

mod layout_file;
mod layout_node;

pub use layout_file::{Layout, LayoutError};
pub use layout_node::{Directory, EntryKind, LayoutCounts, LayoutNode};
