//! Format dispatch: resolving a file path to one of the supported formats.

use std::fmt;
use std::path::Path;

use crate::format::error::FormatError;
use crate::format::formats::{JsonFormat, TxtFormat, XmlFormat};
use crate::format::traits::FigureFormat;

/// The closed set of supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Line-delimited plain text, three lines per figure
    Txt,
    /// JSON array of figure objects
    Json,
    /// XML document with one element per figure
    Xml,
}

impl FormatKind {
    /// Resolve the format from a path's extension.
    ///
    /// Matching is literal and case-sensitive: `data.TXT` is not a TXT file.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&extension).ok_or_else(|| FormatError::unsupported(extension))
    }

    /// Resolve the format from a bare extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.extension() == extension)
    }

    /// The extension selecting this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatKind::Txt => "txt",
            FormatKind::Json => "json",
            FormatKind::Xml => "xml",
        }
    }

    /// All supported formats.
    pub fn all() -> &'static [FormatKind] {
        &[FormatKind::Txt, FormatKind::Json, FormatKind::Xml]
    }

    /// The codec implementing this format.
    pub fn codec(&self) -> &'static dyn FigureFormat {
        match self {
            FormatKind::Txt => &TxtFormat,
            FormatKind::Json => &JsonFormat,
            FormatKind::Xml => &XmlFormat,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatKind::Txt => "TXT",
            FormatKind::Json => "JSON",
            FormatKind::Xml => "XML",
        };
        f.write_str(name)
    }
}
