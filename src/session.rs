//! Accumulated figure state across several loads.

use std::path::Path;

use crate::converter::{Converter, LoadOutcome, SaveOutcome};
use crate::model::Figure;

/// A working session: the figures gathered so far plus the converter used
/// to read and write them.
///
/// Every load appends to the collection regardless of format, including the
/// figures recovered from a partially malformed TXT file.
#[derive(Debug, Clone, Default)]
pub struct Session {
    converter: Converter,
    figures: Vec<Figure>,
}

impl Session {
    /// Create an empty session with a default converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session using the given converter.
    pub fn with_converter(converter: Converter) -> Self {
        Self {
            converter,
            figures: Vec::new(),
        }
    }

    /// The converter used by this session.
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Load a file and append its figures to the session.
    ///
    /// The figures are cloned into the session, so the returned outcome
    /// still holds its own copy describing this load only.
    pub fn load(&mut self, path: &Path) -> LoadOutcome {
        let outcome = self.converter.load(path);
        let loaded = outcome.figures();
        if !loaded.is_empty() {
            self.figures.extend_from_slice(loaded);
            log::debug!(
                "Session: +{} figures, {} total",
                loaded.len(),
                self.figures.len()
            );
        }
        outcome
    }

    /// Save every accumulated figure to a file.
    pub fn save(&self, path: &Path) -> SaveOutcome {
        self.converter.save(path, &self.figures)
    }

    /// Figures accumulated so far, in load order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Add a figure directly.
    pub fn push(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Number of accumulated figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Whether no figures have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Drop every accumulated figure.
    pub fn clear(&mut self) {
        self.figures.clear();
    }
}

impl Extend<Figure> for Session {
    fn extend<I: IntoIterator<Item = Figure>>(&mut self, iter: I) {
        self.figures.extend(iter);
    }
}
