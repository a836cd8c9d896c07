//! JSON format implementation.
//!
//! A file is a single top-level array of `{"Name", "Width", "Height"}`
//! objects. Decoding is atomic: any malformed element rejects the whole file.

use crate::format::error::FormatError;
use crate::format::formats::ensure_finite;
use crate::format::registry::FormatKind;
use crate::format::traits::{Decoded, ExportOptions, FigureFormat, ImportOptions};
use crate::model::Figure;

/// JSON array format.
pub struct JsonFormat;

impl FigureFormat for JsonFormat {
    fn id(&self) -> &'static str {
        "json"
    }

    fn display_name(&self) -> &'static str {
        "JSON array"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn decode(&self, content: &str, options: &ImportOptions) -> Result<Decoded, FormatError> {
        // A literal `null` document carries no figures but is not an error.
        let mut figures: Vec<Figure> =
            serde_json::from_str::<Option<Vec<Figure>>>(content)?.unwrap_or_default();

        options.normalize(&mut figures);
        log::debug!("JSON: decoded {} figures", figures.len());

        Ok(Decoded::new(figures))
    }

    fn encode(&self, figures: &[Figure], options: &ExportOptions) -> Result<String, FormatError> {
        // serde_json writes non-finite floats as `null`, which would not decode.
        ensure_finite(figures, FormatKind::Json)?;

        let json = if options.json_pretty {
            serde_json::to_string_pretty(figures)?
        } else {
            serde_json::to_string(figures)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metadata() {
        let format = JsonFormat;
        assert_eq!(format.id(), "json");
        assert_eq!(format.extension(), "json");
    }
}
