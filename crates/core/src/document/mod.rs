//! Page model of the generated agenda.
//!
//! A [`Document`] is the ordered list of every page of the agenda with the
//! navigation links between them. Rendering is left to the serializer.

mod builder;
mod types;

pub use builder::build;
pub use types::{Document, Links, Page, PageId, PageKind};
