//! Error types for figure format operations.

use thiserror::Error;

use crate::format::registry::FormatKind;

/// Errors that can occur during figure format operations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// File extension does not name a supported format
    #[error("Unsupported file format: '{extension}'")]
    UnsupportedFormat {
        /// The extension that was encountered (empty when the path has none)
        extension: String,
    },

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing or serialization error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Malformed line in a line-oriented format
    #[error("{format} parse error at line {line}: {message}")]
    Parse {
        /// The format being decoded
        format: FormatKind,
        /// 1-based line number of the offending line
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// Figure dimension that the target format cannot represent
    #[error("Figure '{name}' has a non-finite dimension, which {format} cannot store")]
    NonFinite {
        /// The format being encoded
        format: FormatKind,
        /// Name of the offending figure
        name: String,
    },
}

impl FormatError {
    /// Create an unsupported format error for the given extension.
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a parse error for a specific line.
    pub fn parse(format: FormatKind, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            message: message.into(),
        }
    }

    /// Whether this error means the input document was malformed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Json(_) | Self::Xml(_))
    }

    /// Whether this error came from an unrecognized extension.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Whether this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
