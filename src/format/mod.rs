//! Figure format decode/encode system.
//!
//! Each supported file format implements the [`FigureFormat`] trait. The
//! format of a file is resolved once from its extension into a
//! [`FormatKind`], which hands out the matching codec.
//!
//! ## Supported Formats
//!
//! - **TXT**: three lines per figure (name, width, height), blank lines ignored
//! - **JSON**: a top-level array of `{"Name", "Width", "Height"}` objects
//! - **XML**: an `ArrayOfFigure` root with one `Figure` element per record
//!
//! ## Usage
//!
//! ```rust,ignore
//! use figconv::format::{ExportOptions, FormatKind};
//!
//! let kind = FormatKind::from_path(path)?;
//! let text = kind.codec().encode(&figures, &ExportOptions::default())?;
//! ```

mod error;
pub mod formats;
mod registry;
mod traits;

pub use error::FormatError;
pub use registry::FormatKind;
pub use traits::{Decoded, ExportOptions, FigureFormat, ImportOptions};
