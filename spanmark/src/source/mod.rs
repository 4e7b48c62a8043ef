pub mod core;
pub mod error;
pub mod span;

pub use self::core::{Position, Source, extract_line, locate};
pub use self::error::{LocateError, SourceError};
pub use self::span::Span;
