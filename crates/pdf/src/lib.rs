//! agenda_pdf - renders an agenda [`Document`](agenda_core::Document) as a
//! PDF sized for e-paper tablets.
//!
//! Every page is 210 x 280 mm. Navigation links become PDF link annotations
//! jumping to the target page, and each month gets an outline entry.

mod canvas;
mod error;
mod layout;
mod metrics;
mod pages;
mod writer;

pub use error::{RenderError, Result};
pub use layout::{RenderOptions, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
pub use writer::render;
