//! figconv - figure record format converter
//!
//! Reads lists of figure records (name, width, height) from line-delimited
//! text, JSON or XML files and writes them back out in any of those formats.

pub mod config;
pub mod converter;
pub mod format;
pub mod model;
pub mod session;

pub use config::AppConfig;
pub use converter::{Converter, LoadOutcome, SaveOutcome};
pub use format::{FormatError, FormatKind};
pub use model::Figure;
pub use session::Session;
