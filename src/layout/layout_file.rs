use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    fs,
    path::{Component, Path},
};
use tracing::{debug, warn};

use crate::{
    ext::PathDisplayExt,
    layout::{Directory, LayoutNode},
};

/// Project skeleton materialized when no layout file is given
const BUILTIN_LAYOUT: &str = include_str!("default_layout.yaml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: Directory,
}

impl Layout {
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        debug!("Reading layout file: {}", path.absolute_display());
        let contents = fs::read_to_string(path).context(ReadSnafu {
            file_path: path.absolute_display(),
        })?;
        debug!("Successfully read layout file: {} bytes", contents.len());
        contents.as_str().try_into()
    }

    pub fn builtin() -> Result<Self, LayoutError> {
        debug!("Using built-in layout");
        BUILTIN_LAYOUT.try_into()
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    fn parse_directory(
        mapping: &LinkedHashMap<Yaml, Yaml>,
        location: &str,
    ) -> Result<Directory, LayoutError> {
        mapping
            .iter()
            .try_fold(Directory::new(), |mut directory, (key, value)| {
                let name = Self::parse_entry_name(key, location)?;
                let entry_location = join_location(location, &name);
                let node = Self::parse_node(value, &entry_location)?;
                directory.insert(name, node);
                Ok(directory)
            })
    }

    fn parse_entry_name(key: &Yaml, location: &str) -> Result<String, LayoutError> {
        let name = match key {
            Yaml::Value(Scalar::String(name)) => name.to_string(),
            Yaml::Value(Scalar::Integer(number)) => number.to_string(),
            _ => {
                return InvalidKeySnafu {
                    location: location.to_string(),
                }
                .fail();
            }
        };

        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(component)), None) if component == name.as_str() => Ok(name),
            _ => InvalidEntryNameSnafu {
                location: location.to_string(),
                name,
            }
            .fail(),
        }
    }

    fn parse_node(value: &Yaml, location: &str) -> Result<LayoutNode, LayoutError> {
        match value {
            Yaml::Mapping(mapping) => Ok(Self::parse_directory(mapping, location)?.into()),
            Yaml::Value(scalar) => {
                if let Scalar::String(content) = scalar {
                    if !content.is_empty() {
                        warn!("Ignoring contents given for file '{}'", location);
                    }
                }
                Ok(LayoutNode::File)
            }
            _ => UnsupportedNodeSnafu {
                location: location.to_string(),
            }
            .fail(),
        }
    }
}

fn join_location(location: &str, name: &str) -> String {
    if location.is_empty() {
        name.to_string()
    } else {
        format!("{location}/{name}")
    }
}

impl TryFrom<&str> for Layout {
    type Error = LayoutError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedLayoutSnafu)?;

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        let root = Self::parse_directory(top_level, "")?;

        Ok(Layout { root })
    }
}

#[derive(Debug, Snafu)]
pub enum LayoutError {
    #[snafu(display("Failed to read the layout file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the layout file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Layout file contains no document"))]
    MalformedLayout,
    #[snafu(display("Top level of the layout should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Entry names under '{}' should be strings", location))]
    InvalidKey { location: String },
    #[snafu(display(
        "Entry name '{}' under '{}' should be a single path component",
        name,
        location
    ))]
    InvalidEntryName { location: String, name: String },
    #[snafu(display("Entry '{}' should be either a map or a scalar", location))]
    UnsupportedNode { location: String },
}
