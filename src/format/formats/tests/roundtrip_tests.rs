//! Round-trip conversion tests between formats.
//!
//! These tests verify that figures survive an encode/decode cycle
//! unchanged, both within one format and across formats.

use crate::format::error::FormatError;
use crate::format::registry::FormatKind;
use crate::format::traits::{ExportOptions, ImportOptions};
use crate::model::Figure;

/// Figures covering fractional, zero, negative and large values.
fn create_figures() -> Vec<Figure> {
    vec![
        Figure::new("Square", 4.0, 4.0),
        Figure::new("Circle", 0.0, 0.0),
        Figure::new("Tri", 1.5, 2.5),
        Figure::new("Sliver", 0.1, 1e-7),
        Figure::new("Mirror", -2.0, 3.25),
        Figure::new("Huge", 1.0e12, 123456.789),
        Figure::new("Name with spaces", 1.0, 2.0),
        Figure::new("  Padded ", 1.0, 2.0),
        Figure::new("Tom & <Jerry>", 5.0, 6.0),
    ]
}

fn roundtrip(kind: FormatKind, figures: &[Figure]) -> Vec<Figure> {
    let codec = kind.codec();
    let content = codec
        .encode(figures, &ExportOptions::default())
        .expect("Failed to encode");
    let decoded = codec
        .decode(&content, &ImportOptions::default())
        .expect("Failed to decode");
    assert!(decoded.is_complete(), "{} decode was interrupted", kind);
    decoded.figures
}

#[test]
fn test_txt_roundtrip() {
    let original = create_figures();
    assert_eq!(roundtrip(FormatKind::Txt, &original), original);
}

#[test]
fn test_json_roundtrip() {
    let original = create_figures();
    assert_eq!(roundtrip(FormatKind::Json, &original), original);
}

#[test]
fn test_xml_roundtrip() {
    let original = create_figures();
    assert_eq!(roundtrip(FormatKind::Xml, &original), original);
}

#[test]
fn test_single_figure_roundtrip_all_formats() {
    let original = vec![Figure::new("Only", 0.0, 7.5)];
    for kind in FormatKind::all() {
        assert_eq!(roundtrip(*kind, &original), original, "format {}", kind);
    }
}

#[test]
fn test_cross_format_chain() {
    // TXT -> JSON -> XML -> TXT
    let original = create_figures();

    let mut figures = original.clone();
    for kind in [FormatKind::Json, FormatKind::Xml, FormatKind::Txt] {
        figures = roundtrip(kind, &figures);
    }

    assert_eq!(figures, original);
}

#[test]
fn test_padded_name_roundtrip_all_formats() {
    let original = vec![Figure::new("  Padded ", 1.0, 2.0), Figure::new("\tTab", 3.0, 4.0)];
    for kind in FormatKind::all() {
        assert_eq!(roundtrip(*kind, &original), original, "format {}", kind);
    }
}

#[test]
fn test_non_finite_dimensions_are_not_encoded() {
    let figures = vec![
        Figure::new("Fine", 1.0, 1.0),
        Figure::new("Wide", f64::INFINITY, 1.0),
    ];

    for kind in FormatKind::all() {
        let err = kind
            .codec()
            .encode(&figures, &ExportOptions::default())
            .unwrap_err();
        assert!(
            matches!(err, FormatError::NonFinite { ref name, .. } if name == "Wide"),
            "format {} gave {:?}",
            kind,
            err
        );
    }

    let nan = vec![Figure::new("Nan", 1.0, f64::NAN)];
    assert!(FormatKind::Json
        .codec()
        .encode(&nan, &ExportOptions::default())
        .is_err());
}
