//! Line-delimited TXT format implementation.
//!
//! Each figure occupies three non-blank lines: name, width, height.
//! Blank lines may appear anywhere and are ignored.

use crate::format::error::FormatError;
use crate::format::formats::{ensure_finite, parse_dimension};
use crate::format::registry::FormatKind;
use crate::format::traits::{Decoded, ExportOptions, FigureFormat, ImportOptions};
use crate::model::Figure;

/// Plain text format, one field per line.
pub struct TxtFormat;

/// Which field of the current group the next non-blank line supplies.
#[derive(Debug)]
enum GroupState {
    AwaitingName,
    AwaitingWidth { name: String },
    AwaitingHeight { name: String, width: f64 },
}

impl GroupState {
    /// Number of fields already collected for the current group.
    fn fields_seen(&self) -> usize {
        match self {
            GroupState::AwaitingName => 0,
            GroupState::AwaitingWidth { .. } => 1,
            GroupState::AwaitingHeight { .. } => 2,
        }
    }
}

impl FigureFormat for TxtFormat {
    fn id(&self) -> &'static str {
        "txt"
    }

    fn display_name(&self) -> &'static str {
        "Plain text (TXT)"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn decode(&self, content: &str, options: &ImportOptions) -> Result<Decoded, FormatError> {
        let mut figures = Vec::new();
        let mut state = GroupState::AwaitingName;

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;

            state = match state {
                GroupState::AwaitingName => GroupState::AwaitingWidth {
                    name: line.to_string(),
                },
                GroupState::AwaitingWidth { name } => {
                    match parse_dimension(line, "width", FormatKind::Txt, line_no) {
                        Ok(width) => GroupState::AwaitingHeight { name, width },
                        Err(e) => return Ok(interrupted(figures, e, options)),
                    }
                }
                GroupState::AwaitingHeight { name, width } => {
                    match parse_dimension(line, "height", FormatKind::Txt, line_no) {
                        Ok(height) => {
                            log::trace!("TXT: figure '{}' complete at line {}", name, line_no);
                            figures.push(Figure::new(name, width, height));
                            GroupState::AwaitingName
                        }
                        Err(e) => return Ok(interrupted(figures, e, options)),
                    }
                }
            };
        }

        let dropped_fields = state.fields_seen();
        if dropped_fields > 0 {
            log::warn!(
                "TXT: discarding incomplete trailing group ({} of 3 fields)",
                dropped_fields
            );
        }

        options.normalize(&mut figures);
        log::debug!("TXT: decoded {} figures", figures.len());

        Ok(Decoded {
            figures,
            interrupted: None,
            dropped_fields,
        })
    }

    fn encode(&self, figures: &[Figure], _options: &ExportOptions) -> Result<String, FormatError> {
        ensure_finite(figures, FormatKind::Txt)?;

        let mut lines = Vec::with_capacity(figures.len() * 3);
        for figure in figures {
            lines.push(figure.name.clone());
            lines.push(figure.width.to_string());
            lines.push(figure.height.to_string());
        }

        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

/// Build the partial result returned when a malformed line stops decoding.
fn interrupted(mut figures: Vec<Figure>, error: FormatError, options: &ImportOptions) -> Decoded {
    log::warn!(
        "TXT: stopped decoding after {} figures: {}",
        figures.len(),
        error
    );
    options.normalize(&mut figures);
    Decoded {
        figures,
        interrupted: Some(error),
        dropped_fields: 0,
    }
}
