pub mod core;
pub mod message;

pub use self::core::{annotate, render, trim_line};
pub use self::message::{Message, Messages, Severity};
