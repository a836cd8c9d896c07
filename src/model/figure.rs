//! Figure record: a named shape with two dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single figure record.
///
/// Field keys are PascalCase (`Name`, `Width`, `Height`) in every structured
/// encoding so that JSON and XML files stay interchangeable with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Figure {
    /// Display name of the figure
    pub name: String,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Figure {
    /// Create a new figure with the given name and dimensions.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} x {})", self.name, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_figure() {
        let fig = Figure::new("Square", 4.0, 4.0);
        assert_eq!(fig.name, "Square");
        assert_eq!(fig.width, 4.0);
        assert_eq!(fig.height, 4.0);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Figure::new("A", 1.0, 2.0), Figure::new("A", 1.0, 2.0));
        assert_ne!(Figure::new("A", 1.0, 2.0), Figure::new("A", 2.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Figure::new("Tri", 1.5, 2.5).to_string(), "Tri (1.5 x 2.5)");
        assert_eq!(Figure::new("Circle", 0.0, 0.0).to_string(), "Circle (0 x 0)");
    }

    #[test]
    fn test_pascal_case_keys() {
        let json = serde_json::to_string(&Figure::new("Tri", 1.5, 2.5)).unwrap();
        assert_eq!(json, r#"{"Name":"Tri","Width":1.5,"Height":2.5}"#);
    }
}
