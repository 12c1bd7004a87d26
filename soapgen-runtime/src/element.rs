//! Minimal XML element tree used by generated object-graph code.
//!
//! Generated deserializers walk an [`XmlElement`] looking up children by
//! name; leaf values are read from element text through the primitive
//! conversions in [`crate::primitives`].

use crate::decoder::XmlDeserializable;
use crate::encoder::XmlSerializable;
use crate::error::{XmlDeserializationError, XmlError, XmlSerializationError};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// An XML element with attributes, optional text and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates an element without text or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an element holding the given text.
    #[must_use]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Returns the qualified name (including any prefix).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name without its namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Returns the namespace prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Returns the element text, or `None` when the element has none.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the element text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Removes the element text.
    pub fn clear_text(&mut self) {
        self.text = None;
    }

    /// Returns the attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Looks up an attribute value by its qualified name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Declares `xmlns:<prefix>` on this element.
    ///
    /// # Errors
    /// Returns `InvalidNamespace` if the prefix is empty or contains `:`, or
    /// if the URI is empty.
    pub fn declare_namespace(&mut self, prefix: &str, uri: &str) -> Result<(), XmlSerializationError> {
        if prefix.is_empty() || prefix.contains(':') || uri.is_empty() {
            return Err(XmlSerializationError::InvalidNamespace(format!(
                "xmlns:{prefix}=\"{uri}\""
            )));
        }
        self.set_attribute(format!("xmlns:{prefix}"), uri);
        Ok(())
    }

    /// Returns the URI declared on this element for `prefix`.
    #[must_use]
    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.strip_prefix("xmlns:") == Some(prefix))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Appends a child element and returns a reference to it.
    pub fn add_child(&mut self, child: XmlElement) -> &mut XmlElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the first child matching `name` by qualified or local name.
    ///
    /// # Errors
    /// Returns `NoElementWithName` if no child matches.
    pub fn child(&self, name: &str) -> Result<&XmlElement, XmlDeserializationError> {
        self.children
            .iter()
            .find(|child| child.matches_name(name))
            .ok_or_else(|| XmlDeserializationError::NoElementWithName(name.to_string()))
    }

    /// Iterates over all children matching `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children
            .iter()
            .filter(move |child| child.matches_name(name))
    }

    /// Deserializes the first child named `name`.
    ///
    /// # Errors
    /// Returns `NoElementWithName` if the child is missing, or the child's
    /// own deserialization error.
    pub fn deserialize_child<T: XmlDeserializable>(&self, name: &str) -> Result<T, XmlDeserializationError> {
        T::deserialize(self.child(name)?)
    }

    /// Deserializes the first child named `name`, or `None` if it is missing.
    ///
    /// # Errors
    /// Returns the child's deserialization error if it is present but invalid.
    pub fn deserialize_optional_child<T: XmlDeserializable>(
        &self,
        name: &str,
    ) -> Result<Option<T>, XmlDeserializationError> {
        match self.children_named(name).next() {
            Some(child) => T::deserialize(child).map(Some),
            None => Ok(None),
        }
    }

    /// Deserializes every child named `name`.
    ///
    /// # Errors
    /// Returns the first failing child's error; no partial result is kept.
    pub fn deserialize_children<T: XmlDeserializable>(&self, name: &str) -> Result<Vec<T>, XmlDeserializationError> {
        self.children_named(name).map(T::deserialize).collect()
    }

    /// Serializes `value` into a new child element named `name`.
    ///
    /// # Errors
    /// Returns the value's serialization error.
    pub fn append_child_value<T: XmlSerializable + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<&mut XmlElement, XmlSerializationError> {
        let mut child = XmlElement::new(name);
        value.serialize(&mut child)?;
        Ok(self.add_child(child))
    }

    fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.local_name() == name
    }

    /// Parses the root element of an XML document.
    ///
    /// Character data and CDATA sections are concatenated. Leaf elements
    /// always carry text (possibly empty); whitespace around child elements
    /// is dropped.
    ///
    /// # Errors
    /// Returns `XmlError` if the document is malformed or has no root element.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let mut element = Self::from_start(e)?;
                    element.finish_text();
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| XmlError::invalid_structure("unexpected end tag"))?;
                    element.finish_text();
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(std::str::from_utf8(t)?);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(std::str::from_utf8(c)?);
                    }
                }
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some(current) = stack.last_mut() {
                        let resolved = resolve_reference(std::str::from_utf8(r)?)?;
                        current.push_text(&resolved);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(XmlError::invalid_structure("unclosed element at end of input"));
        }
        root.ok_or_else(|| XmlError::invalid_structure("no root element found"))
    }

    /// Writes the element and its descendants as XML.
    ///
    /// # Errors
    /// Returns `XmlError` if writing fails.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), XmlError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self, XmlError> {
        let qname = e.name();
        let name = std::str::from_utf8(qname.as_ref())?;
        let mut element = Self::new(name);

        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let raw = std::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)?;
            element
                .attributes
                .push((key.to_string(), value.into_owned()));
        }

        Ok(element)
    }

    fn push_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    fn finish_text(&mut self) {
        if self.children.is_empty() {
            self.text.get_or_insert_with(String::new);
        } else if self.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.text = None;
        }
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<(), XmlError> {
        match stack.last_mut() {
            Some(parent) => {
                parent.children.push(element);
                Ok(())
            }
            None if root.is_none() => {
                *root = Some(element);
                Ok(())
            }
            None => Err(XmlError::invalid_structure("multiple root elements")),
        }
    }
}

/// Resolves a general entity or character reference (without `&` and `;`).
fn resolve_reference(name: &str) -> Result<String, XmlError> {
    if let Some(code) = name.strip_prefix('#') {
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        return parsed
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| XmlError::invalid_structure(format!("invalid character reference '&{name};'")));
    }

    let resolved = match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        _ => {
            return Err(XmlError::invalid_structure(format!(
                "unknown entity '&{name};'"
            )));
        }
    };
    Ok(resolved.to_string())
}
