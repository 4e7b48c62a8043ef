//! Point at a character offset in a source file.
//!
//! [`source`] turns a flat character offset into a line and column and
//! pulls lines back out of the text; [`render`] prints them with a caret
//! marker the way compiler errors do.

pub mod render;
pub mod source;
pub mod utils;

pub use render::core::annotate;
pub use source::core::{Position, Source};
