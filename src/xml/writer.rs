//! Request document writer.
//!
//! [`XmlWriter`] wraps a `quick_xml::Writer` with the handful of patterns
//! FedEx request documents need: nested elements, text leaves and the
//! generic [`Bag`] renderer. Text content is entity-escaped by quick-xml.

use std::fmt::{self, Display};

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::xml::error::XmlError;
use crate::xml::keys::to_external;
use crate::xml::tree::{Bag, Node};

/// Builder for a single request document.
///
/// # Example
///
/// ```rust
/// use fedex_api::xml::XmlWriter;
///
/// let xml = XmlWriter::document("TrackRequest", Some("http://fedex.com/ws/track/v5"), |w| {
///     w.element("PackageIdentifier", |w| {
///         w.text("Value", "123456789012")?;
///         w.text("Type", "TRACKING_NUMBER_OR_DOORTAG")
///     })
/// })
/// .unwrap();
///
/// assert!(xml.starts_with(r#"<TrackRequest xmlns="http://fedex.com/ws/track/v5">"#));
/// assert!(xml.contains("<Value>123456789012</Value>"));
/// ```
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl fmt::Debug for XmlWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlWriter")
            .field("written", &self.writer.get_ref().len())
            .finish()
    }
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::with_capacity(2048)),
        }
    }

    /// Writes a complete document rooted at `root` and returns it as a string.
    ///
    /// No XML declaration is emitted; the document is the root element only.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if `body` fails or the writer cannot emit an event.
    pub fn document<F>(root: &str, namespace: Option<&str>, body: F) -> Result<String, XmlError>
    where
        F: FnOnce(&mut Self) -> Result<(), XmlError>,
    {
        let mut doc = Self::new();

        let mut start = BytesStart::new(root);
        if let Some(ns) = namespace {
            start.push_attribute(("xmlns", ns));
        }
        doc.writer.write_event(Event::Start(start))?;
        body(&mut doc)?;
        doc.writer.write_event(Event::End(BytesEnd::new(root)))?;

        String::from_utf8(doc.writer.into_inner())
            .map_err(|e| XmlError::ParseError(format!("request document is not UTF-8: {e}")))
    }

    /// Writes `<name>...</name>` with children produced by `body`.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if `body` fails or the writer cannot emit an event.
    pub fn element<F>(&mut self, name: &str, body: F) -> Result<(), XmlError>
    where
        F: FnOnce(&mut Self) -> Result<(), XmlError>,
    {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))?;
        body(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes `<name>value</name>`.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the writer cannot emit an event.
    pub fn text(&mut self, name: &str, value: impl Display) -> Result<(), XmlError> {
        let value = value.to_string();
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))?;
        self.writer
            .write_event(Event::Text(BytesText::new(&value)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes `<name>value</name>` only if the value is `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the writer cannot emit an event.
    pub fn optional_text<T: Display>(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Result<(), XmlError> {
        match value {
            Some(v) => self.text(name, v),
            None => Ok(()),
        }
    }

    /// Renders every entry of `bag` in insertion order.
    ///
    /// Keys are converted with [`to_external`]. A mapping opens an element
    /// and recurses; a sequence repeats the element once per item; a scalar
    /// becomes a text leaf.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the writer cannot emit an event.
    pub fn bag(&mut self, bag: &Bag) -> Result<(), XmlError> {
        for (key, node) in bag.iter() {
            self.node(&to_external(key), node)?;
        }
        Ok(())
    }

    fn node(&mut self, name: &str, node: &Node) -> Result<(), XmlError> {
        match node {
            Node::Scalar(value) => self.text(name, value),
            Node::Mapping(inner) => self.element(name, |w| w.bag(inner)),
            Node::Sequence(items) => {
                for item in items {
                    self.node(name, item)?;
                }
                Ok(())
            }
        }
    }
}
