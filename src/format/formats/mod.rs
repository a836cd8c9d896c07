//! Figure format implementations.

mod json;
mod txt;
mod xml;

#[cfg(test)]
mod tests;

pub use json::JsonFormat;
pub use txt::TxtFormat;
pub use xml::XmlFormat;

use crate::format::error::FormatError;
use crate::format::registry::FormatKind;
use crate::model::Figure;

/// Parse a width or height field.
///
/// Only finite numbers are accepted: `inf` and `NaN` parse as `f64` but have
/// no JSON representation.
pub(crate) fn parse_dimension(
    text: &str,
    field: &str,
    format: FormatKind,
    line: usize,
) -> Result<f64, FormatError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormatError::parse(
            format,
            line,
            format!("expected {} as a finite number, found '{}'", field, text.trim()),
        )),
    }
}

/// Reject figures whose dimensions could not be read back after encoding.
pub(crate) fn ensure_finite(figures: &[Figure], format: FormatKind) -> Result<(), FormatError> {
    match figures
        .iter()
        .find(|f| !f.width.is_finite() || !f.height.is_finite())
    {
        Some(figure) => Err(FormatError::NonFinite {
            format,
            name: figure.name.clone(),
        }),
        None => Ok(()),
    }
}
