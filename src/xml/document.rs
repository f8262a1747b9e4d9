use quick_xml::events::Event;
use quick_xml::Reader;

use super::malformed;
use crate::store::StoreError;

pub(crate) const ID_TAG: &str = "Id";

const DECLARATION: &str = "<?xml version=\"1.0\"?>";
const DEFAULT_ROOT: &str = "root";

/// A whole XML document: one root element holding record elements as its
/// immediate children.
///
/// The root tag is kept verbatim from the parsed text, so a rewrite
/// preserves whatever root name and attributes a pre-existing file uses.
#[derive(Debug, Clone)]
pub struct Document {
    root_open: String,
    root_name: String,
    elements: Vec<Element>,
}

impl Document {
    /// An empty document with the default `<root>` element.
    pub fn empty() -> Self {
        Document {
            root_open: format!("<{}>", DEFAULT_ROOT),
            root_name: DEFAULT_ROOT.to_string(),
            elements: Vec::new(),
        }
    }

    /// Parses a document, collecting the immediate children of the root
    /// element. Children keep their raw text; nodes between them
    /// (comments, whitespace) are dropped on the next render.
    pub fn parse(xml: &str) -> Result<Self, StoreError> {
        let mut reader = Reader::from_str(xml);
        let mut root: Option<(String, String)> = None;
        let mut elements = Vec::new();

        loop {
            let at = reader.buffer_position() as usize;
            match reader.read_event().map_err(malformed)? {
                Event::Start(start) => {
                    let name = tag_name(start.name().as_ref());
                    if root.is_none() {
                        let open = xml[at..reader.buffer_position() as usize].trim().to_string();
                        root = Some((open, name));
                    } else {
                        reader.read_to_end(start.name()).map_err(malformed)?;
                        let end = reader.buffer_position() as usize;
                        elements.push(Element::parse(&xml[at..end])?);
                    }
                }
                Event::Empty(start) => {
                    if root.is_none() {
                        let name = tag_name(start.name().as_ref());
                        root = Some((format!("<{}>", name), name));
                    } else {
                        let end = reader.buffer_position() as usize;
                        elements.push(Element::parse(&xml[at..end])?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let (root_open, root_name) =
            root.ok_or_else(|| StoreError::Malformed("document has no root element".to_string()))?;

        Ok(Document {
            root_open,
            root_name,
            elements,
        })
    }

    /// Name of the root element.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The record elements, in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Appends a record element at the end of the document.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// First record element whose `Id` child text equals `id`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == Some(id))
    }

    /// Removes and returns the first record element whose `Id` child text
    /// equals `id`.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let at = self
            .elements
            .iter()
            .position(|element| element.id() == Some(id))?;
        Some(self.elements.remove(at))
    }

    /// Renders the document back to text: declaration, root open tag, one
    /// indented line per record, root close tag.
    pub fn render(&self) -> String {
        let mut out = String::from(DECLARATION);
        out.push('\n');
        out.push_str(&self.root_open);
        out.push('\n');

        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element.as_xml());
            out.push('\n');
        }

        out.push_str(&format!("</{}>", self.root_name));
        out
    }
}

/// One record element, kept as raw XML together with its name and the
/// text of its `Id` child, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    id: Option<String>,
    xml: String,
}

impl Element {
    /// Parses a single element from its raw text. Only a direct `Id`
    /// child counts as the record's identity; an `Id` nested deeper does
    /// not.
    pub fn parse(xml: &str) -> Result<Self, StoreError> {
        let mut reader = Reader::from_str(xml);
        let mut name: Option<String> = None;
        let mut id: Option<String> = None;
        let mut depth = 0usize;
        let mut in_id = false;

        loop {
            match reader.read_event().map_err(malformed)? {
                Event::Start(start) => {
                    depth += 1;
                    let tag = tag_name(start.name().as_ref());
                    if depth == 1 {
                        name = Some(tag);
                    } else if depth == 2 && tag == ID_TAG {
                        in_id = true;
                    }
                }
                Event::Empty(start) => {
                    if depth == 0 {
                        name = Some(tag_name(start.name().as_ref()));
                    }
                }
                Event::Text(text) if in_id && id.is_none() => {
                    let value = text.unescape().map_err(malformed)?;
                    id = Some(value.trim().to_string());
                }
                Event::End(_) => {
                    if depth == 2 {
                        in_id = false;
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let name =
            name.ok_or_else(|| StoreError::Malformed("element text holds no element".to_string()))?;

        Ok(Element {
            name,
            id,
            xml: xml.trim().to_string(),
        })
    }

    /// Name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of the element's direct `Id` child, if it has one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The element's raw XML.
    pub fn as_xml(&self) -> &str {
        &self.xml
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
