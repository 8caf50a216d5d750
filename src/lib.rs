//! Materializes a declarative directory/file layout onto disk.
//!
//! A [`layout::Layout`] describes the tree, and a [`materializer::Materializer`]
//! creates whatever part of it is missing, reporting each created entry to a
//! [`materializer::CreationSink`].

#![allow(clippy::module_inception)]

pub mod application;
pub mod cli;
mod ext;
pub mod layout;
pub mod materializer;
