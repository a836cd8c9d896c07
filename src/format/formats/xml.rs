//! XML format implementation.
//!
//! Documents have an `ArrayOfFigure` root holding one `Figure` element per
//! record, each with `Name`, `Width` and `Height` child elements:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ArrayOfFigure>
//!     <Figure>
//!         <Name>Square</Name>
//!         <Width>4</Width>
//!         <Height>4</Height>
//!     </Figure>
//! </ArrayOfFigure>
//! ```

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Serialize;

use crate::format::error::FormatError;
use crate::format::formats::{ensure_finite, parse_dimension};
use crate::format::registry::FormatKind;
use crate::format::traits::{Decoded, ExportOptions, FigureFormat, ImportOptions};
use crate::model::Figure;

/// Declaration written ahead of the document root.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Element nesting levels of the document layout.
const ROOT_DEPTH: usize = 1;
const FIGURE_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// XML document format.
pub struct XmlFormat;

/// Root element wrapping the figure list, as written.
#[derive(Debug, Serialize)]
#[serde(rename = "ArrayOfFigure")]
struct FigureDocument<'a> {
    #[serde(rename = "Figure")]
    figures: &'a [Figure],
}

impl FigureFormat for XmlFormat {
    fn id(&self) -> &'static str {
        "xml"
    }

    fn display_name(&self) -> &'static str {
        "XML document"
    }

    fn extension(&self) -> &'static str {
        "xml"
    }

    fn decode(&self, content: &str, options: &ImportOptions) -> Result<Decoded, FormatError> {
        let mut figures = parse_document(content)?;

        options.normalize(&mut figures);
        log::debug!("XML: decoded {} figures", figures.len());

        Ok(Decoded::new(figures))
    }

    fn encode(&self, figures: &[Figure], options: &ExportOptions) -> Result<String, FormatError> {
        ensure_finite(figures, FormatKind::Xml)?;

        let document = FigureDocument { figures };

        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        if options.xml_indent > 0 {
            serializer.indent(' ', options.xml_indent);
        }
        document.serialize(serializer)?;

        let mut out = String::with_capacity(body.len() + XML_DECLARATION.len() + 2);
        if options.xml_declaration {
            out.push_str(XML_DECLARATION);
            out.push('\n');
        }
        out.push_str(&body);
        out.push('\n');
        Ok(out)
    }
}

/// Read every `Figure` element of a document.
///
/// Element text is taken verbatim, so names keep their surrounding
/// whitespace. The root element's name and attributes are not checked.
fn parse_document(content: &str) -> Result<Vec<Figure>, FormatError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(false);

    let mut state = DocumentState::new(content);

    loop {
        let event = reader.read_event();
        state.advance_to(reader.buffer_position());

        match event {
            Ok(Event::Start(ref e)) => state.open(e.name().as_ref()),
            Ok(Event::Empty(ref e)) => {
                state.open(e.name().as_ref());
                state.close()?;
            }
            Ok(Event::End(_)) => state.close()?,
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|e| FormatError::Xml(e.into()))?;
                state.text(&text);
            }
            Ok(Event::CData(e)) => state.text(&String::from_utf8_lossy(&e.into_inner())),
            Ok(Event::Eof) => break,
            Err(e) => return Err(FormatError::Xml(e.into())),
            _ => {}
        }
    }

    if !state.root_seen || state.depth != 0 {
        return Err(FormatError::parse(
            FormatKind::Xml,
            state.line,
            "unexpected end of document",
        ));
    }

    Ok(state.figures)
}

/// Child elements of `Figure` that carry record fields.
#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Width,
    Height,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"Name" => Some(Field::Name),
            b"Width" => Some(Field::Width),
            b"Height" => Some(Field::Height),
            _ => None,
        }
    }
}

/// Fields collected so far for the open `Figure` element.
#[derive(Debug, Default)]
struct PendingFigure {
    name: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
}

impl PendingFigure {
    fn set(&mut self, field: Field, text: &str, line: usize) -> Result<(), FormatError> {
        match field {
            Field::Name => self.name = Some(text.to_string()),
            Field::Width => {
                self.width = Some(parse_dimension(text, "width", FormatKind::Xml, line)?)
            }
            Field::Height => {
                self.height = Some(parse_dimension(text, "height", FormatKind::Xml, line)?)
            }
        }
        Ok(())
    }

    fn finish(self, line: usize) -> Result<Figure, FormatError> {
        let missing = match (self.name, self.width, self.height) {
            (Some(name), Some(width), Some(height)) => return Ok(Figure::new(name, width, height)),
            (None, _, _) => "Name",
            (_, None, _) => "Width",
            (_, _, None) => "Height",
        };
        Err(FormatError::parse(
            FormatKind::Xml,
            line,
            format!("<Figure> is missing <{}>", missing),
        ))
    }
}

/// Streaming parse state over one document.
struct DocumentState<'a> {
    content: &'a str,
    /// Byte offset up to which newlines have been counted
    scanned: usize,
    line: usize,
    depth: usize,
    root_seen: bool,
    pending: Option<PendingFigure>,
    field: Option<Field>,
    text: String,
    figures: Vec<Figure>,
}

impl<'a> DocumentState<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            scanned: 0,
            line: 1,
            depth: 0,
            root_seen: false,
            pending: None,
            field: None,
            text: String::new(),
            figures: Vec::new(),
        }
    }

    /// Keep `line` in step with the reader position.
    fn advance_to(&mut self, pos: usize) {
        let pos = pos.min(self.content.len());
        if pos > self.scanned {
            self.line += self.content.as_bytes()[self.scanned..pos]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.scanned = pos;
        }
    }

    fn open(&mut self, tag: &[u8]) {
        self.depth += 1;
        match self.depth {
            ROOT_DEPTH => self.root_seen = true,
            FIGURE_DEPTH if tag == b"Figure" => self.pending = Some(PendingFigure::default()),
            FIELD_DEPTH if self.pending.is_some() => {
                self.field = Field::from_tag(tag);
                self.text.clear();
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.depth == FIELD_DEPTH && self.field.is_some() {
            self.text.push_str(text);
        }
    }

    fn close(&mut self) -> Result<(), FormatError> {
        match self.depth {
            FIELD_DEPTH => {
                if let (Some(field), Some(pending)) = (self.field.take(), self.pending.as_mut()) {
                    pending.set(field, &self.text, self.line)?;
                }
            }
            FIGURE_DEPTH => {
                if let Some(pending) = self.pending.take() {
                    self.figures.push(pending.finish(self.line)?);
                }
            }
            _ => {}
        }
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }
}
