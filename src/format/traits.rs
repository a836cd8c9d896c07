//! Trait definitions for figure format implementations.

use crate::format::error::FormatError;
use crate::model::Figure;

/// Trait for figure format decode/encode implementations.
///
/// Each format (TXT, JSON, XML) implements this trait to provide
/// bidirectional conversion between file content and [`Figure`] records.
/// Implementations work on in-memory text; file access belongs to the
/// [`Converter`](crate::converter::Converter).
pub trait FigureFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "txt", "json", "xml").
    fn id(&self) -> &'static str;

    /// Human-readable name for display.
    fn display_name(&self) -> &'static str;

    /// File extension this format is selected by, without the leading dot.
    fn extension(&self) -> &'static str;

    /// Decode file content into figures.
    ///
    /// Atomic formats return `Err` for any malformed input. Line-oriented
    /// formats may instead return the figures decoded so far together with
    /// the error that stopped them (see [`Decoded::interrupted`]).
    fn decode(&self, content: &str, options: &ImportOptions) -> Result<Decoded, FormatError>;

    /// Encode figures into file content.
    fn encode(&self, figures: &[Figure], options: &ExportOptions) -> Result<String, FormatError>;
}

/// Options for export operations.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Number of spaces per XML nesting level.
    pub xml_indent: usize,

    /// Whether to emit an `<?xml ...?>` declaration.
    pub xml_declaration: bool,

    /// Whether to pretty-print JSON output.
    pub json_pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            xml_indent: 4,
            xml_declaration: true,
            json_pretty: true,
        }
    }
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the XML indentation width.
    pub fn xml_indent(mut self, indent: usize) -> Self {
        self.xml_indent = indent;
        self
    }

    /// Enable or disable the XML declaration.
    pub fn xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Enable or disable pretty-printed JSON.
    pub fn json_pretty(mut self, pretty: bool) -> Self {
        self.json_pretty = pretty;
        self
    }
}

/// Options for import operations.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Strip surrounding whitespace from decoded names.
    pub trim_names: bool,
}

impl ImportOptions {
    /// Create new import options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether decoded names are trimmed.
    pub fn trim_names(mut self, trim: bool) -> Self {
        self.trim_names = trim;
        self
    }

    /// Apply name normalization to a decoded figure list.
    pub(crate) fn normalize(&self, figures: &mut [Figure]) {
        if self.trim_names {
            for figure in figures {
                let trimmed = figure.name.trim();
                if trimmed.len() != figure.name.len() {
                    figure.name = trimmed.to_string();
                }
            }
        }
    }
}

/// Result of a decode operation.
#[derive(Debug, Default)]
pub struct Decoded {
    /// Figures decoded, in input order.
    pub figures: Vec<Figure>,

    /// Error that stopped decoding early, if any. `figures` then holds
    /// everything completed before the failure.
    pub interrupted: Option<FormatError>,

    /// Number of trailing fields discarded because their group was incomplete.
    pub dropped_fields: usize,
}

impl Decoded {
    /// Create a result holding the given figures.
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            figures,
            interrupted: None,
            dropped_fields: 0,
        }
    }

    /// Whether decoding ran to the end of the input.
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }

    /// Whether no figures were decoded.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
