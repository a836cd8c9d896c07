//! File-level load/save operations.
//!
//! The [`Converter`] is the operation boundary: every failure is caught here
//! and turned into a [`LoadOutcome`] or [`SaveOutcome`] value for the caller
//! to report. Nothing below this layer touches the filesystem.

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::format::{Decoded, ExportOptions, FormatError, FormatKind, ImportOptions};
use crate::model::Figure;

/// Result of loading one file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// At least one figure was decoded.
    Loaded {
        /// Format the file was read as
        format: FormatKind,
        /// Decoded figures in file order
        figures: Vec<Figure>,
    },

    /// The file was valid but held no figures.
    Empty {
        /// Format the file was read as
        format: FormatKind,
    },

    /// Decoding stopped at a malformed line; earlier figures were kept.
    Partial {
        /// Format the file was read as
        format: FormatKind,
        /// Figures completed before the failure
        figures: Vec<Figure>,
        /// The error that stopped decoding
        error: FormatError,
    },

    /// Nothing could be loaded.
    Failed(FormatError),
}

impl LoadOutcome {
    /// Figures produced by this load (empty unless loaded or partial).
    pub fn figures(&self) -> &[Figure] {
        match self {
            LoadOutcome::Loaded { figures, .. } | LoadOutcome::Partial { figures, .. } => figures,
            LoadOutcome::Empty { .. } | LoadOutcome::Failed(_) => &[],
        }
    }

    /// Take the figures produced by this load.
    pub fn into_figures(self) -> Vec<Figure> {
        match self {
            LoadOutcome::Loaded { figures, .. } | LoadOutcome::Partial { figures, .. } => figures,
            LoadOutcome::Empty { .. } | LoadOutcome::Failed(_) => Vec::new(),
        }
    }

    /// The error attached to this outcome, if any.
    pub fn error(&self) -> Option<&FormatError> {
        match self {
            LoadOutcome::Partial { error, .. } | LoadOutcome::Failed(error) => Some(error),
            LoadOutcome::Loaded { .. } | LoadOutcome::Empty { .. } => None,
        }
    }

    /// The format the file was read as, if it was recognized.
    pub fn format(&self) -> Option<FormatKind> {
        match self {
            LoadOutcome::Loaded { format, .. }
            | LoadOutcome::Empty { format }
            | LoadOutcome::Partial { format, .. } => Some(*format),
            LoadOutcome::Failed(_) => None,
        }
    }

    /// Whether the load finished without any error.
    pub fn is_success(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. } | LoadOutcome::Empty { .. })
    }

    fn from_decoded(format: FormatKind, decoded: Decoded) -> Self {
        match decoded.interrupted {
            Some(error) => LoadOutcome::Partial {
                format,
                figures: decoded.figures,
                error,
            },
            None if decoded.figures.is_empty() => LoadOutcome::Empty { format },
            None => LoadOutcome::Loaded {
                format,
                figures: decoded.figures,
            },
        }
    }
}

/// Result of saving a figure collection.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The file was written.
    Saved {
        /// Format the file was written as
        format: FormatKind,
        /// Number of figures written
        count: usize,
        /// Destination path
        path: PathBuf,
    },

    /// The collection was empty; no file was written.
    NothingToSave,

    /// The save failed.
    Failed(FormatError),
}

impl SaveOutcome {
    /// The error attached to this outcome, if any.
    pub fn error(&self) -> Option<&FormatError> {
        match self {
            SaveOutcome::Failed(error) => Some(error),
            SaveOutcome::Saved { .. } | SaveOutcome::NothingToSave => None,
        }
    }

    /// Whether the save finished without any error.
    pub fn is_success(&self) -> bool {
        !matches!(self, SaveOutcome::Failed(_))
    }
}

/// Loads and saves figure files, dispatching on the file extension.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    import: ImportOptions,
    export: ExportOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit import and export options.
    pub fn with_options(import: ImportOptions, export: ExportOptions) -> Self {
        Self { import, export }
    }

    /// Create a converter using the settings of a loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_options(config.import_options(), config.export_options())
    }

    /// Import options in effect.
    pub fn import_options(&self) -> &ImportOptions {
        &self.import
    }

    /// Export options in effect.
    pub fn export_options(&self) -> &ExportOptions {
        &self.export
    }

    /// Load figures from a file.
    ///
    /// Always returns a fresh collection; accumulating across loads is the
    /// caller's business (see [`Session`](crate::session::Session)).
    pub fn load(&self, path: &Path) -> LoadOutcome {
        log::info!("Loading figures from {:?}", path);

        let format = match FormatKind::from_path(path) {
            Ok(format) => format,
            Err(e) => {
                log::warn!("Cannot load {:?}: {}", path, e);
                return LoadOutcome::Failed(e);
            }
        };

        let outcome = match std::fs::read_to_string(path) {
            Ok(content) => match self.decode_str(format, &content) {
                Ok(decoded) => LoadOutcome::from_decoded(format, decoded),
                Err(e) => LoadOutcome::Failed(e),
            },
            Err(e) => LoadOutcome::Failed(FormatError::Io(e)),
        };

        match &outcome {
            LoadOutcome::Loaded { figures, .. } => {
                log::info!("Loaded {} figures from {:?} ({})", figures.len(), path, format)
            }
            LoadOutcome::Empty { .. } => log::info!("No figures in {:?} ({})", path, format),
            LoadOutcome::Partial { figures, error, .. } => log::warn!(
                "Loaded {} figures from {:?} before error: {}",
                figures.len(),
                path,
                error
            ),
            LoadOutcome::Failed(e) => log::warn!("Failed to load {:?}: {}", path, e),
        }

        outcome
    }

    /// Save figures to a file, overwriting it if it exists.
    ///
    /// An unsupported extension is reported before the empty check; an empty
    /// collection never touches the filesystem.
    pub fn save(&self, path: &Path, figures: &[Figure]) -> SaveOutcome {
        log::info!("Saving {} figures to {:?}", figures.len(), path);

        let format = match FormatKind::from_path(path) {
            Ok(format) => format,
            Err(e) => {
                log::warn!("Cannot save {:?}: {}", path, e);
                return SaveOutcome::Failed(e);
            }
        };

        if figures.is_empty() {
            log::info!("Nothing to save to {:?}", path);
            return SaveOutcome::NothingToSave;
        }

        let written = self
            .encode_string(format, figures)
            .and_then(|content| std::fs::write(path, content).map_err(FormatError::from));

        match written {
            Ok(()) => {
                log::info!("Saved {} figures to {:?} ({})", figures.len(), path, format);
                SaveOutcome::Saved {
                    format,
                    count: figures.len(),
                    path: path.to_path_buf(),
                }
            }
            Err(e) => {
                log::warn!("Failed to save {:?}: {}", path, e);
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Decode in-memory content as the given format.
    pub fn decode_str(&self, format: FormatKind, content: &str) -> Result<Decoded, FormatError> {
        format.codec().decode(content, &self.import)
    }

    /// Encode figures as the given format.
    pub fn encode_string(
        &self,
        format: FormatKind,
        figures: &[Figure],
    ) -> Result<String, FormatError> {
        format.codec().encode(figures, &self.export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_txt_with_zero_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "figs.txt", "Square\n4\n4\n\nCircle\n0\n0\n");

        let outcome = Converter::new().load(&path);

        assert!(outcome.is_success());
        assert_eq!(outcome.format(), Some(FormatKind::Txt));
        assert_eq!(
            outcome.into_figures(),
            vec![
                Figure::new("Square", 4.0, 4.0),
                Figure::new("Circle", 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_load_txt_partial() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "figs.txt", "A\n1\n1\nB\nnope\n2\n");

        let outcome = Converter::new().load(&path);

        assert!(!outcome.is_success());
        assert!(matches!(outcome, LoadOutcome::Partial { .. }));
        assert!(outcome.error().unwrap().is_parse_error());
        assert_eq!(outcome.figures(), &[Figure::new("A", 1.0, 1.0)]);
    }

    #[test]
    fn test_load_json_scenario() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "figs.json",
            r#"[{"Name":"Tri","Width":1.5,"Height":2.5}]"#,
        );

        let outcome = Converter::new().load(&path);

        assert_eq!(outcome.figures(), &[Figure::new("Tri", 1.5, 2.5)]);
    }

    #[test]
    fn test_load_empty_inputs() {
        let dir = TempDir::new().unwrap();
        let converter = Converter::new();

        for (name, content) in [
            ("a.txt", "\n\n"),
            ("b.json", "[]"),
            ("c.json", "null"),
            ("d.xml", "<ArrayOfFigure/>"),
        ] {
            let outcome = converter.load(&write(&dir, name, content));
            assert!(
                matches!(outcome, LoadOutcome::Empty { .. }),
                "{} gave {:?}",
                name,
                outcome
            );
        }
    }

    #[test]
    fn test_load_malformed_json_and_xml_keep_nothing() {
        let dir = TempDir::new().unwrap();
        let converter = Converter::new();

        let json = converter.load(&write(
            &dir,
            "bad.json",
            r#"[{"Name":"A","Width":1,"Height":1},{"Name":"B"}]"#,
        ));
        assert!(matches!(json, LoadOutcome::Failed(FormatError::Json(_))));
        assert!(json.figures().is_empty());

        let xml = converter.load(&write(&dir, "bad.xml", "<ArrayOfFigure><Figure>"));
        assert!(matches!(xml, LoadOutcome::Failed(ref e) if e.is_parse_error()));
        assert!(xml.into_figures().is_empty());
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "figs.csv", "Square,4,4\n");

        let outcome = Converter::new().load(&path);

        assert!(outcome.error().unwrap().is_unsupported());
        assert!(outcome.format().is_none());
        assert!(outcome.into_figures().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();

        let outcome = Converter::new().load(&dir.path().join("missing.txt"));

        assert!(outcome.error().unwrap().is_io());
    }

    #[test]
    fn test_save_empty_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let converter = Converter::new();

        for name in ["out.txt", "out.json", "out.xml"] {
            let path = dir.path().join(name);
            let outcome = converter.save(&path, &[]);
            assert!(matches!(outcome, SaveOutcome::NothingToSave));
            assert!(outcome.is_success());
            assert!(!path.exists(), "{} should not have been created", name);
        }
    }

    #[test]
    fn test_save_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let outcome = Converter::new().save(&path, &[Figure::new("A", 1.0, 1.0)]);

        assert!(outcome.error().unwrap().is_unsupported());
        assert!(!path.exists());

        let outcome = Converter::new().save(&path, &[]);
        assert!(outcome.error().unwrap().is_unsupported());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "out.txt", "Old\n9\n9\nOlder\n8\n8\n");

        let outcome = Converter::new().save(&path, &[Figure::new("New", 1.0, 2.0)]);

        assert!(matches!(outcome, SaveOutcome::Saved { count: 1, .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "New\n1\n2\n");
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");

        let outcome = Converter::new().save(&path, &[Figure::new("A", 1.0, 1.0)]);

        assert!(outcome.error().unwrap().is_io());
    }

    #[test]
    fn test_save_then_load_every_format() {
        let dir = TempDir::new().unwrap();
        let converter = Converter::new();
        let figures = vec![
            Figure::new("Square", 4.0, 4.0),
            Figure::new("Circle", 0.0, 0.0),
            Figure::new("Tri", 1.5, 2.5),
        ];

        for kind in FormatKind::all() {
            let path = dir.path().join(format!("figs.{}", kind.extension()));
            let saved = converter.save(&path, &figures);
            assert!(
                matches!(saved, SaveOutcome::Saved { format, count: 3, .. } if format == *kind)
            );

            let loaded = converter.load(&path);
            assert_eq!(loaded.into_figures(), figures, "format {}", kind);
        }
    }

    #[test]
    fn test_txt_to_json_with_infinite_width_is_refused() {
        let dir = TempDir::new().unwrap();
        let converter = Converter::new();
        let input = write(&dir, "in.txt", "Inf\ninf\n1\nOk\n1\n1\n");

        let loaded = converter.load(&input);
        assert!(matches!(loaded, LoadOutcome::Partial { .. }));
        assert!(loaded.figures().is_empty());

        let out = dir.path().join("out.json");
        let saved = converter.save(&out, &[Figure::new("Inf", f64::INFINITY, 1.0)]);
        assert!(matches!(
            saved,
            SaveOutcome::Failed(FormatError::NonFinite { format: FormatKind::Json, .. })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_xml_indent_from_options() {
        let converter =
            Converter::with_options(ImportOptions::default(), ExportOptions::new().xml_indent(2));

        let xml = converter
            .encode_string(FormatKind::Xml, &[Figure::new("A", 1.0, 1.0)])
            .unwrap();

        assert!(xml.contains("\n  <Figure>"));
        assert!(!xml.contains("\n    <Figure>"));
    }
}
